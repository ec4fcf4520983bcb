//! In-process speech backends.

use crate::speech::{SpeechCapability, SpeechError, Utterance};
use log::info;
use std::sync::{Mutex, PoisonError};

/// Backend that accepts every request and produces no sound.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSpeech;

impl SpeechCapability for NullSpeech {
    fn backend_name(&self) -> &'static str {
        "null"
    }

    fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError> {
        info!(
            "event=speech_discard module=speech status=ok chars={}",
            utterance.text.chars().count()
        );
        Ok(())
    }
}

/// Backend that keeps every request in memory.
///
/// Used by tests and by hosts that forward utterances elsewhere.
#[derive(Debug, Default)]
pub struct RecordingSpeech {
    requests: Mutex<Vec<Utterance>>,
}

impl RecordingSpeech {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded requests, oldest first.
    pub fn requests(&self) -> Vec<Utterance> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Removes and returns recorded requests.
    pub fn take(&self) -> Vec<Utterance> {
        std::mem::take(&mut *self.requests.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl SpeechCapability for RecordingSpeech {
    fn backend_name(&self) -> &'static str {
        "recording"
    }

    fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(utterance.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{NullSpeech, RecordingSpeech};
    use crate::speech::{SpeechCapability, Utterance};

    #[test]
    fn recording_keeps_order_and_take_drains() {
        let speech = RecordingSpeech::new();
        speech.speak(&Utterance::new("one")).unwrap();
        speech.speak(&Utterance::new("two")).unwrap();

        let texts = speech
            .take()
            .into_iter()
            .map(|utterance| utterance.text)
            .collect::<Vec<_>>();
        assert_eq!(texts, vec!["one", "two"]);
        assert!(speech.requests().is_empty());
    }

    #[test]
    fn null_speech_accepts_requests() {
        assert!(NullSpeech.speak(&Utterance::new("hello")).is_ok());
    }
}
