//! Render-ready view of a board session.

use crate::composer::Composer;
use crate::model::ids::{CategoryId, SymbolId};
use crate::model::symbol::Symbol;
use crate::session::mode::UiMode;
use crate::store::BoardStore;
use serde::Serialize;

/// Text shown in the sentence strip while it is empty.
pub const EMPTY_SENTENCE_PLACEHOLDER: &str = "Select pictures below...";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardSnapshot {
    pub categories: Vec<CategorySnapshot>,
    pub sentence: Vec<SentenceEntry>,
    pub sentence_text: Option<String>,
    pub speak_enabled: bool,
    pub placeholder: Option<&'static str>,
    pub mode: UiMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySnapshot {
    pub id: CategoryId,
    pub name: String,
    pub color: String,
    pub items: Vec<TileSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileSnapshot {
    #[serde(flatten)]
    pub symbol: Symbol,
    pub label: String,
}

/// One position in the sentence strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceEntry {
    pub index: usize,
    pub symbol_id: SymbolId,
    pub text: String,
    pub emoji: String,
    pub remove_label: String,
}

impl BoardSnapshot {
    pub fn capture(store: &BoardStore, composer: &Composer, mode: UiMode) -> Self {
        let categories = store
            .categories()
            .map(|category| CategorySnapshot {
                id: category.id,
                name: category.name.clone(),
                color: category.color.clone(),
                items: store
                    .items(category.id)
                    .into_iter()
                    .map(|symbol| TileSnapshot {
                        label: symbol.add_label(),
                        symbol: symbol.clone(),
                    })
                    .collect(),
            })
            .collect();

        let sentence = composer
            .entries()
            .iter()
            .enumerate()
            .filter_map(|(index, id)| {
                store.symbol(*id).map(|symbol| SentenceEntry {
                    index,
                    symbol_id: *id,
                    text: symbol.text.clone(),
                    emoji: symbol.emoji.clone(),
                    remove_label: symbol.remove_label(),
                })
            })
            .collect();

        Self {
            categories,
            sentence,
            sentence_text: composer.render_text(store),
            speak_enabled: composer.can_speak(),
            placeholder: composer.is_empty().then_some(EMPTY_SENTENCE_PLACEHOLDER),
            mode,
        }
    }
}
