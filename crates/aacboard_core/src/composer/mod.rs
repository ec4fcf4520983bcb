//! Sentence composer.
//!
//! # Responsibility
//! - Hold the ordered symbol selection that makes up the current utterance.
//! - Flatten the selection to text and hand it to a speech backend.
//!
//! # Invariants
//! - Entries are symbol ids; the catalog keeps ownership of symbol records.
//! - Order is append order and equals spoken word order.
//! - The same symbol may appear any number of times.
//! - Composer operations never mutate the catalog.

use crate::model::ids::SymbolId;
use crate::speech::{SpeechCapability, Utterance};
use crate::store::BoardStore;
use log::{debug, warn};

/// In-progress sentence for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
    entries: Vec<SymbolId>,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a symbol to the end of the sentence.
    pub fn append(&mut self, symbol_id: SymbolId) {
        self.entries.push(symbol_id);
    }

    /// Removes the entry at `index`.
    ///
    /// Returns `false` and leaves the sentence unchanged when out of range.
    pub fn remove_at(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            return false;
        }
        self.entries.remove(index);
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[SymbolId] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the speak control should be enabled.
    pub fn can_speak(&self) -> bool {
        !self.is_empty()
    }

    /// Joins symbol texts with single spaces, in sentence order.
    ///
    /// Returns `None` for an empty sentence.
    pub fn render_text(&self, store: &BoardStore) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        let words = self
            .entries
            .iter()
            .filter_map(|id| store.symbol(*id))
            .map(|symbol| symbol.text.as_str())
            .collect::<Vec<_>>();
        if words.is_empty() {
            return None;
        }
        Some(words.join(" "))
    }

    /// Hands the rendered sentence to `speech` and returns the request sent.
    ///
    /// Empty sentences send nothing. Backend errors are logged and dropped.
    pub fn speak<S>(&self, store: &BoardStore, speech: &S) -> Option<Utterance>
    where
        S: SpeechCapability + ?Sized,
    {
        let text = self.render_text(store)?;
        let utterance = Utterance::new(text);
        match speech.speak(&utterance) {
            Ok(()) => debug!(
                "event=sentence_speak module=composer status=ok backend={} words={}",
                speech.backend_name(),
                self.entries.len()
            ),
            Err(err) => warn!(
                "event=sentence_speak module=composer status=error backend={} error={}",
                speech.backend_name(),
                err
            ),
        }
        Some(utterance)
    }
}

#[cfg(test)]
mod tests {
    use super::Composer;
    use crate::model::ids::SymbolId;
    use crate::speech::RecordingSpeech;
    use crate::store::BoardStore;

    #[test]
    fn remove_at_out_of_range_is_noop() {
        let mut composer = Composer::new();
        composer.append(SymbolId::from_raw(1));
        assert!(!composer.remove_at(1));
        assert!(!composer.remove_at(usize::MAX));
        assert_eq!(composer.len(), 1);
    }

    #[test]
    fn render_text_joins_with_single_spaces() {
        let mut store = BoardStore::new();
        let food = store.add_category("Food", "green").unwrap();
        let apple = store.add_item(food, "apple", "🍎").unwrap();
        let milk = store.add_item(food, "milk", "🥛").unwrap();

        let mut composer = Composer::new();
        composer.append(apple);
        composer.append(milk);
        composer.append(apple);
        assert_eq!(composer.render_text(&store).as_deref(), Some("apple milk apple"));
    }

    #[test]
    fn speak_on_empty_sentence_sends_nothing() {
        let store = BoardStore::new();
        let speech = RecordingSpeech::new();
        assert!(Composer::new().speak(&store, &speech).is_none());
        assert!(speech.requests().is_empty());
    }
}
