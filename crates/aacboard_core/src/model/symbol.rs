//! Symbol record: one selectable pictograph and label.
//!
//! # Invariants
//! - `text` and `emoji` are non-empty after trim.
//! - A symbol is immutable once stored in the catalog.

use crate::model::ids::SymbolId;
use serde::Serialize;

/// One tile on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Symbol {
    pub id: SymbolId,
    /// Display label, also the word spoken aloud.
    pub text: String,
    pub emoji: String,
    /// Marks sentence-starter phrases such as "I want".
    pub prefix: bool,
}

impl Symbol {
    /// Label announced for the tile that appends this symbol.
    pub fn add_label(&self) -> String {
        format!("Add {} to message", self.text)
    }

    /// Label announced for the control that removes this symbol from the sentence.
    pub fn remove_label(&self) -> String {
        format!("Remove {}", self.text)
    }
}

/// Input for creating a symbol, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSymbol {
    pub text: String,
    pub emoji: String,
    pub prefix: bool,
}

impl NewSymbol {
    pub fn new(text: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emoji: emoji.into(),
            prefix: false,
        }
    }

    pub fn prefix(text: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self {
            prefix: true,
            ..Self::new(text, emoji)
        }
    }

    /// Trims both fields and returns `None` when either ends up empty.
    pub(crate) fn normalized(self) -> Option<Self> {
        let text = self.text.trim();
        let emoji = self.emoji.trim();
        if text.is_empty() || emoji.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            emoji: emoji.to_string(),
            prefix: self.prefix,
        })
    }

    pub(crate) fn into_symbol(self, id: SymbolId) -> Symbol {
        Symbol {
            id,
            text: self.text,
            emoji: self.emoji,
            prefix: self.prefix,
        }
    }
}
