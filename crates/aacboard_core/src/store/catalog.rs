//! Arena-indexed catalog tables.
//!
//! Categories and symbols live in flat vectors where the vector index equals
//! the raw id. Deleting an item unlinks it from its category but keeps the
//! symbol row, so sentence references taken before the delete stay valid.

use crate::model::category::{normalize_color, Category};
use crate::model::ids::{CategoryId, IdSequence, SymbolId};
use crate::model::symbol::{NewSymbol, Symbol};
use log::debug;

#[derive(Debug, Clone)]
struct SymbolSlot {
    symbol: Symbol,
    /// `None` once the item was deleted from its category.
    owner: Option<CategoryId>,
}

/// In-memory catalog and symbol table for one board session.
#[derive(Debug, Clone, Default)]
pub struct BoardStore {
    categories: Vec<Category>,
    symbols: Vec<SymbolSlot>,
    category_ids: IdSequence,
    symbol_ids: IdSequence,
}

impl BoardStore {
    /// Creates an empty store with no categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new empty category.
    ///
    /// Returns `None` (and changes nothing) when `name` is blank after trim.
    /// Duplicate names are allowed. A blank `color` falls back to
    /// `DEFAULT_CATEGORY_COLOR`.
    pub fn add_category(&mut self, name: &str, color: &str) -> Option<CategoryId> {
        let name = name.trim();
        if name.is_empty() {
            debug!("event=category_add module=store status=ignored reason=empty_name");
            return None;
        }

        let id = CategoryId::from_raw(self.category_ids.allocate()?);
        self.categories
            .push(Category::new(id, name.to_string(), normalize_color(color)));
        debug!("event=category_add module=store status=ok category_id={id}");
        Some(id)
    }

    /// Appends a plain (non-prefix) symbol to a category.
    ///
    /// Returns `None` when the category is unknown or either field is blank.
    pub fn add_item(&mut self, category_id: CategoryId, text: &str, emoji: &str) -> Option<SymbolId> {
        self.add_symbol(category_id, NewSymbol::new(text, emoji))
    }

    /// Appends a symbol with an explicit prefix flag.
    pub fn add_symbol(&mut self, category_id: CategoryId, new_symbol: NewSymbol) -> Option<SymbolId> {
        if self.category(category_id).is_none() {
            debug!(
                "event=item_add module=store status=ignored reason=unknown_category category_id={category_id}"
            );
            return None;
        }
        let Some(new_symbol) = new_symbol.normalized() else {
            debug!(
                "event=item_add module=store status=ignored reason=empty_field category_id={category_id}"
            );
            return None;
        };

        let id = SymbolId::from_raw(self.symbol_ids.allocate()?);
        self.symbols.push(SymbolSlot {
            symbol: new_symbol.into_symbol(id),
            owner: Some(category_id),
        });
        self.categories[category_id.index()].items.push(id);
        debug!("event=item_add module=store status=ok category_id={category_id} symbol_id={id}");
        Some(id)
    }

    /// Removes a symbol from a category's item sequence.
    ///
    /// Returns `false` when the category is unknown or does not list the symbol.
    pub fn delete_item(&mut self, category_id: CategoryId, symbol_id: SymbolId) -> bool {
        let Some(category) = self.categories.get_mut(category_id.index()) else {
            debug!(
                "event=item_delete module=store status=ignored reason=unknown_category category_id={category_id}"
            );
            return false;
        };
        let Some(position) = category.items.iter().position(|id| *id == symbol_id) else {
            debug!(
                "event=item_delete module=store status=ignored reason=unknown_item category_id={category_id} symbol_id={symbol_id}"
            );
            return false;
        };

        category.items.remove(position);
        if let Some(slot) = self.symbols.get_mut(symbol_id.index()) {
            slot.owner = None;
        }
        debug!(
            "event=item_delete module=store status=ok category_id={category_id} symbol_id={symbol_id}"
        );
        true
    }

    /// Categories in display order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(id.index())
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Resolves any symbol ever created in this store, including deleted ones.
    pub fn symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id.index()).map(|slot| &slot.symbol)
    }

    /// Resolves a symbol only while some category still lists it.
    pub fn listed_symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols
            .get(id.index())
            .filter(|slot| slot.owner.is_some())
            .map(|slot| &slot.symbol)
    }

    /// Category currently listing the symbol.
    pub fn owner_of(&self, id: SymbolId) -> Option<CategoryId> {
        self.symbols.get(id.index()).and_then(|slot| slot.owner)
    }

    /// Symbols of one category in display order; empty for unknown ids.
    pub fn items(&self, category_id: CategoryId) -> Vec<&Symbol> {
        self.category(category_id)
            .map(|category| {
                category
                    .items
                    .iter()
                    .filter_map(|id| self.symbol(*id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Total number of symbols listed across all categories.
    pub fn listed_symbol_count(&self) -> usize {
        self.categories.iter().map(Category::len).sum()
    }
}
