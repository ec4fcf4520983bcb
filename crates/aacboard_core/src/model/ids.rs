//! Integer identifiers for arena-indexed board records.
//!
//! # Invariants
//! - `IdSequence` is monotonic: a value is handed out at most once.
//! - Exhaustion is reported as `None`, never by wrapping around.

use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Identifier of one category in the catalog table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CategoryId(u32);

/// Identifier of one symbol in the catalog symbol table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SymbolId(u32);

macro_rules! impl_raw_id {
    ($name:ident) => {
        impl $name {
            /// Wraps a raw integer received from a display surface.
            pub const fn from_raw(raw: u32) -> Self {
                Self(raw)
            }

            /// Raw integer form used at FFI and CLI boundaries.
            pub const fn raw(self) -> u32 {
                self.0
            }

            pub(crate) fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

impl_raw_id!(CategoryId);
impl_raw_id!(SymbolId);

/// Monotonic id counter.
///
/// Starts at zero so that issued ids double as arena indexes.
#[derive(Debug, Clone, Default)]
pub struct IdSequence {
    next: u32,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next unused raw id, or `None` once `u32` is exhausted.
    pub fn allocate(&mut self) -> Option<u32> {
        let current = self.next;
        self.next = current.checked_add(1)?;
        Some(current)
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> u32 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::{CategoryId, IdSequence, SymbolId};

    #[test]
    fn allocate_is_monotonic_and_starts_at_zero() {
        let mut seq = IdSequence::new();
        assert_eq!(seq.allocate(), Some(0));
        assert_eq!(seq.allocate(), Some(1));
        assert_eq!(seq.allocate(), Some(2));
        assert_eq!(seq.issued(), 3);
    }

    #[test]
    fn allocate_reports_exhaustion_instead_of_wrapping() {
        let mut seq = IdSequence { next: u32::MAX - 1 };
        assert_eq!(seq.allocate(), Some(u32::MAX - 1));
        assert_eq!(seq.allocate(), None);
        assert_eq!(seq.allocate(), None);
    }

    #[test]
    fn ids_display_raw_value() {
        assert_eq!(CategoryId::from_raw(4).to_string(), "4");
        assert_eq!(SymbolId::from_raw(27).raw(), 27);
    }
}
