//! Core state model for the AAC picture board.
//! This crate is the single source of truth for board invariants.

pub mod composer;
pub mod config;
pub mod logging;
pub mod model;
pub mod session;
pub mod speech;
pub mod store;

pub use composer::Composer;
pub use config::{BoardConfig, ConfigError, SpeechBackendKind, SpeechConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::category::{Category, DEFAULT_CATEGORY_COLOR};
pub use model::ids::{CategoryId, SymbolId};
pub use model::symbol::{NewSymbol, Symbol};
pub use session::mode::UiMode;
pub use session::snapshot::{
    BoardSnapshot, CategorySnapshot, SentenceEntry, TileSnapshot, EMPTY_SENTENCE_PLACEHOLDER,
};
pub use session::{BoardEvent, BoardSession, EventOutcome};
pub use speech::{
    CommandSpeech, NullSpeech, RecordingSpeech, SpeechCapability, SpeechError, Utterance,
};
pub use store::BoardStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
