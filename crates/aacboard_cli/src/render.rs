//! Plain-text rendering of a board snapshot.

use aacboard_core::{BoardSnapshot, UiMode};
use std::fmt::Write;

/// Renders the sentence strip, mode line and category grid.
pub fn render_board(snapshot: &BoardSnapshot) -> String {
    let mut out = String::new();

    out.push_str("Your Message:\n");
    match snapshot.placeholder {
        Some(placeholder) => {
            let _ = writeln!(out, "  {placeholder}");
        }
        None => {
            let strip = snapshot
                .sentence
                .iter()
                .map(|entry| format!("[{}] {} {}", entry.index, entry.emoji, entry.text))
                .collect::<Vec<_>>()
                .join("  ");
            let _ = writeln!(out, "  {strip}");
        }
    }
    let _ = writeln!(
        out,
        "Speak: {}",
        if snapshot.speak_enabled { "ready" } else { "disabled" }
    );

    match snapshot.mode {
        UiMode::Viewing => {}
        UiMode::Admin => out.push_str("Mode: admin\n"),
        UiMode::AddingCategory => {
            out.push_str("Mode: admin (new category form: `category <color> <name...>` or `cancel`)\n");
        }
        UiMode::AddingItem(category_id) => {
            let name = snapshot
                .categories
                .iter()
                .find(|category| category.id == category_id)
                .map(|category| category.name.as_str())
                .unwrap_or("?");
            let _ = writeln!(
                out,
                "Mode: admin (new item for {name}: `item <emoji> <text...>` or `cancel`)"
            );
        }
    }

    for category in &snapshot.categories {
        let _ = writeln!(
            out,
            "\n== {} ({}) #{} ==",
            category.name, category.color, category.id
        );
        if category.items.is_empty() {
            out.push_str("  (no pictures yet)\n");
            continue;
        }
        for tile in &category.items {
            let marker = if tile.symbol.prefix { " …" } else { "" };
            let _ = writeln!(
                out,
                "  #{:<3} {} {}{}",
                tile.symbol.id.raw(), tile.symbol.emoji, tile.symbol.text, marker
            );
        }
    }
    out
}
