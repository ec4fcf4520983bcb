//! Board data store.
//!
//! # Responsibility
//! - Own the catalog of categories and the symbol table behind them.
//! - Apply caregiver edits (add category, add item, delete item).
//! - Seed the fixed default board at startup.
//!
//! # Invariants
//! - Category and symbol ids come from separate monotonic sequences and are
//!   never reused.
//! - Invalid edits are absorbed as no-ops and reported through return values.
//! - There is no category removal.

mod catalog;
pub mod seed;

pub use catalog::BoardStore;
