//! Board domain model.
//!
//! # Responsibility
//! - Define the symbol and category records shown on the picture board.
//! - Define integer identifiers and the allocator that mints them.
//!
//! # Invariants
//! - Every record is addressed by a stable integer id from an `IdSequence`.
//! - Ids are never reused within the lifetime of one catalog.

pub mod category;
pub mod ids;
pub mod symbol;
