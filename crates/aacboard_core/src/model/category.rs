//! Category record: a named, colored group of symbols.

use crate::model::ids::{CategoryId, SymbolId};

/// Color tag used when a caregiver leaves the color field blank.
pub const DEFAULT_CATEGORY_COLOR: &str = "gray";

/// Stored category row.
///
/// `items` holds ids into the catalog symbol table, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Abstract display tag (`blue`, `green`, ...); styling is up to the surface.
    pub color: String,
    pub items: Vec<SymbolId>,
}

impl Category {
    pub(crate) fn new(id: CategoryId, name: String, color: String) -> Self {
        Self {
            id,
            name,
            color,
            items: Vec::new(),
        }
    }

    pub fn contains(&self, symbol_id: SymbolId) -> bool {
        self.items.contains(&symbol_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Normalizes a color tag, falling back to `DEFAULT_CATEGORY_COLOR`.
pub(crate) fn normalize_color(color: &str) -> String {
    let trimmed = color.trim();
    if trimmed.is_empty() {
        DEFAULT_CATEGORY_COLOR.to_string()
    } else {
        trimmed.to_ascii_lowercase()
    }
}
