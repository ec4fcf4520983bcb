//! Single UI mode for a board session.
//!
//! # Invariants
//! - At most one form is open, by construction.
//! - Forms open only from `Admin`; leaving admin mode closes any open form.

use crate::model::ids::CategoryId;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "mode", content = "category_id", rename_all = "snake_case")]
pub enum UiMode {
    /// Plain board; no mutation affordances.
    #[default]
    Viewing,
    /// Admin affordances visible, no form open.
    Admin,
    /// Add-item form open for the given category.
    AddingItem(CategoryId),
    /// Add-category form open.
    AddingCategory,
}

impl UiMode {
    /// True for every admin state, including open forms.
    pub fn is_admin(self) -> bool {
        !matches!(self, Self::Viewing)
    }

    /// True when a form covers the board.
    pub fn has_open_form(self) -> bool {
        matches!(self, Self::AddingItem(_) | Self::AddingCategory)
    }

    /// Category targeted by the open add-item form.
    pub fn adding_item_target(self) -> Option<CategoryId> {
        match self {
            Self::AddingItem(id) => Some(id),
            _ => None,
        }
    }

    /// `Viewing -> Admin`; any admin state -> `Viewing`.
    pub fn toggle_admin(&mut self) {
        *self = match self {
            Self::Viewing => Self::Admin,
            _ => Self::Viewing,
        };
    }

    pub fn begin_add_item(&mut self, category_id: CategoryId) -> bool {
        if *self != Self::Admin {
            return false;
        }
        *self = Self::AddingItem(category_id);
        true
    }

    pub fn begin_add_category(&mut self) -> bool {
        if *self != Self::Admin {
            return false;
        }
        *self = Self::AddingCategory;
        true
    }

    /// Closes an open form and returns to `Admin`.
    pub fn close_form(&mut self) -> bool {
        if !self.has_open_form() {
            return false;
        }
        *self = Self::Admin;
        true
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Viewing => "viewing",
            Self::Admin => "admin",
            Self::AddingItem(_) => "adding_item",
            Self::AddingCategory => "adding_category",
        }
    }
}
