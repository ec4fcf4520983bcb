//! Speech capability seam.
//!
//! # Responsibility
//! - Describe one utterance request (`text`, `rate`, `pitch`, `volume`).
//! - Define the backend contract the board hands sentences to.
//! - Provide system-command, null and recording backends.
//!
//! # Invariants
//! - Requests are fire-and-forget: callers never wait for playback.
//! - Backend failures are reported as `SpeechError` and the board only logs
//!   them; nothing about playback flows back into board state.

mod command;
mod recording;

pub use command::{CommandSpeech, SpeechProgram};
pub use recording::{NullSpeech, RecordingSpeech};

use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Speaking rate relative to the engine default.
pub const DEFAULT_RATE: f32 = 0.8;
/// Pitch relative to the engine default.
pub const DEFAULT_PITCH: f32 = 1.0;
/// Full volume.
pub const DEFAULT_VOLUME: f32 = 1.0;

/// One request handed to a speech backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Utterance {
    pub text: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Utterance {
    /// Builds a request with the board's fixed voice settings.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rate: DEFAULT_RATE,
            pitch: DEFAULT_PITCH,
            volume: DEFAULT_VOLUME,
        }
    }
}

/// Speech backend contract.
///
/// Implementations must return promptly; playback happens asynchronously
/// and overlapping requests are arbitrated by the backend itself.
pub trait SpeechCapability {
    /// Stable backend name used in logs.
    fn backend_name(&self) -> &'static str;

    fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError>;
}

impl<T: SpeechCapability + ?Sized> SpeechCapability for Box<T> {
    fn backend_name(&self) -> &'static str {
        (**self).backend_name()
    }

    fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError> {
        (**self).speak(utterance)
    }
}

impl<T: SpeechCapability + ?Sized> SpeechCapability for Arc<T> {
    fn backend_name(&self) -> &'static str {
        (**self).backend_name()
    }

    fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError> {
        (**self).speak(utterance)
    }
}

/// Errors raised by speech backends.
#[derive(Debug)]
pub enum SpeechError {
    /// Request carried no text after trim.
    EmptyText,
    /// System TTS program could not be started.
    Spawn {
        program: String,
        source: std::io::Error,
    },
}

impl Display for SpeechError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "utterance text must not be empty"),
            Self::Spawn { program, source } => {
                write!(f, "failed to start speech program `{program}`: {source}")
            }
        }
    }
}

impl Error for SpeechError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyText => None,
            Self::Spawn { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SpeechError, Utterance, DEFAULT_PITCH, DEFAULT_RATE, DEFAULT_VOLUME};
    use std::error::Error;

    #[test]
    fn utterance_uses_fixed_voice_settings() {
        let utterance = Utterance::new("I want apple");
        assert_eq!(utterance.rate, DEFAULT_RATE);
        assert_eq!(utterance.pitch, DEFAULT_PITCH);
        assert_eq!(utterance.volume, DEFAULT_VOLUME);
        assert!((utterance.rate - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn spawn_error_exposes_io_source() {
        let err = SpeechError::Spawn {
            program: "espeak-ng".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("espeak-ng"));
        assert!(err.source().is_some());
    }
}
