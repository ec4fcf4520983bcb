//! Board session facade.
//!
//! # Responsibility
//! - Route display-surface events into the store, composer and UI mode.
//! - Own the speech backend used by the speak control.
//! - Build serializable snapshots for rendering.
//!
//! # Invariants
//! - Every event is one synchronous mutation; invalid events are ignored and
//!   reported as `EventOutcome::Ignored`.
//! - Catalog edits require admin mode.
//! - While a form is open only submit, cancel and toggle-admin are honored.

pub mod mode;
pub mod snapshot;

use crate::composer::Composer;
use crate::model::ids::{CategoryId, SymbolId};
use crate::speech::{SpeechCapability, Utterance};
use crate::store::BoardStore;
use log::{debug, info};
use mode::UiMode;
use snapshot::BoardSnapshot;

/// Input raised by a display surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    TapSymbol(SymbolId),
    RemoveAt(usize),
    Clear,
    Speak,
    ToggleAdmin,
    BeginAddItem(CategoryId),
    BeginAddCategory,
    SubmitCategory { name: String, color: String },
    SubmitItem { text: String, emoji: String },
    DeleteItem { category: CategoryId, symbol: SymbolId },
    Cancel,
}

impl BoardEvent {
    fn name(&self) -> &'static str {
        match self {
            Self::TapSymbol(_) => "tap_symbol",
            Self::RemoveAt(_) => "remove_at",
            Self::Clear => "clear",
            Self::Speak => "speak",
            Self::ToggleAdmin => "toggle_admin",
            Self::BeginAddItem(_) => "begin_add_item",
            Self::BeginAddCategory => "begin_add_category",
            Self::SubmitCategory { .. } => "submit_category",
            Self::SubmitItem { .. } => "submit_item",
            Self::DeleteItem { .. } => "delete_item",
            Self::Cancel => "cancel",
        }
    }
}

/// Result of handling one event.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    /// State changed; re-render.
    Applied,
    /// Invalid in the current state; nothing changed.
    Ignored,
    CategoryCreated(CategoryId),
    ItemCreated(SymbolId),
    /// Sentence handed to the speech backend.
    Spoken(Utterance),
}

impl EventOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }
}

/// One board: catalog, sentence, mode and speech backend.
pub struct BoardSession<S: SpeechCapability> {
    store: BoardStore,
    composer: Composer,
    mode: UiMode,
    speech: S,
}

impl<S: SpeechCapability> BoardSession<S> {
    pub fn new(store: BoardStore, speech: S) -> Self {
        info!(
            "event=session_open module=session status=ok backend={} categories={}",
            speech.backend_name(),
            store.category_count()
        );
        Self {
            store,
            composer: Composer::new(),
            mode: UiMode::default(),
            speech,
        }
    }

    /// Session over the fixed default board.
    pub fn with_default_catalog(speech: S) -> Self {
        Self::new(BoardStore::with_default_catalog(), speech)
    }

    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn mode(&self) -> UiMode {
        self.mode
    }

    pub fn speech(&self) -> &S {
        &self.speech
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::capture(&self.store, &self.composer, self.mode)
    }

    /// Applies one display-surface event.
    pub fn handle(&mut self, event: BoardEvent) -> EventOutcome {
        let name = event.name();
        let outcome = self.dispatch(event);
        debug!(
            "event=board_event module=session name={} status={} mode={}",
            name,
            if outcome.is_ignored() { "ignored" } else { "ok" },
            self.mode.as_str()
        );
        outcome
    }

    fn dispatch(&mut self, event: BoardEvent) -> EventOutcome {
        match event {
            BoardEvent::ToggleAdmin => {
                self.mode.toggle_admin();
                EventOutcome::Applied
            }
            BoardEvent::Cancel => applied_if(self.mode.close_form()),
            BoardEvent::SubmitCategory { name, color } => self.submit_category(&name, &color),
            BoardEvent::SubmitItem { text, emoji } => self.submit_item(&text, &emoji),
            _ if self.mode.has_open_form() => EventOutcome::Ignored,
            BoardEvent::TapSymbol(symbol_id) => {
                if self.store.listed_symbol(symbol_id).is_none() {
                    return EventOutcome::Ignored;
                }
                self.composer.append(symbol_id);
                EventOutcome::Applied
            }
            BoardEvent::RemoveAt(index) => applied_if(self.composer.remove_at(index)),
            BoardEvent::Clear => {
                self.composer.clear();
                EventOutcome::Applied
            }
            BoardEvent::Speak => match self.composer.speak(&self.store, &self.speech) {
                Some(utterance) => EventOutcome::Spoken(utterance),
                None => EventOutcome::Ignored,
            },
            BoardEvent::BeginAddItem(category_id) => {
                if self.store.category(category_id).is_none() {
                    return EventOutcome::Ignored;
                }
                applied_if(self.mode.begin_add_item(category_id))
            }
            BoardEvent::BeginAddCategory => applied_if(self.mode.begin_add_category()),
            BoardEvent::DeleteItem { category, symbol } => {
                if self.mode != UiMode::Admin {
                    return EventOutcome::Ignored;
                }
                applied_if(self.store.delete_item(category, symbol))
            }
        }
    }

    fn submit_category(&mut self, name: &str, color: &str) -> EventOutcome {
        if self.mode != UiMode::AddingCategory {
            return EventOutcome::Ignored;
        }
        match self.store.add_category(name, color) {
            Some(category_id) => {
                self.mode.close_form();
                EventOutcome::CategoryCreated(category_id)
            }
            None => EventOutcome::Ignored,
        }
    }

    fn submit_item(&mut self, text: &str, emoji: &str) -> EventOutcome {
        let Some(category_id) = self.mode.adding_item_target() else {
            return EventOutcome::Ignored;
        };
        match self.store.add_item(category_id, text, emoji) {
            Some(symbol_id) => {
                self.mode.close_form();
                EventOutcome::ItemCreated(symbol_id)
            }
            None => EventOutcome::Ignored,
        }
    }
}

fn applied_if(changed: bool) -> EventOutcome {
    if changed {
        EventOutcome::Applied
    } else {
        EventOutcome::Ignored
    }
}
