//! Board runtime configuration.
//!
//! # Responsibility
//! - Load optional JSON settings and apply `AACBOARD_*` environment overrides.
//! - Build the speech backend and initial store a session starts with.
//!
//! # Invariants
//! - Every field has a default; an absent file yields `BoardConfig::default()`.
//! - `validate()` runs after overrides so bad env values are caught too.

use crate::logging::{default_log_level, normalize_level, normalize_log_dir};
use crate::speech::{CommandSpeech, NullSpeech, SpeechCapability};
use crate::store::BoardStore;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const ENV_LOG_LEVEL: &str = "AACBOARD_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "AACBOARD_LOG_DIR";
pub const ENV_SPEECH_BACKEND: &str = "AACBOARD_SPEECH_BACKEND";
pub const ENV_SPEECH_PROGRAM: &str = "AACBOARD_SPEECH_PROGRAM";

const DEFAULT_SPEECH_PROGRAM: &str = "espeak-ng";

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidValue {
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid config `{}`: {source}", path.display())
            }
            Self::InvalidValue {
                field,
                value,
                reason,
            } => write!(f, "invalid value `{value}` for `{field}`: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::InvalidValue { .. } => None,
        }
    }
}

/// Which speech backend a session uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeechBackendKind {
    /// Spawn a system TTS program.
    #[default]
    Command,
    /// Accept requests silently.
    Null,
}

impl FromStr for SpeechBackendKind {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "command" => Ok(Self::Command),
            "null" | "none" => Ok(Self::Null),
            other => Err(ConfigError::InvalidValue {
                field: "speech.backend",
                value: other.to_string(),
                reason: "expected command|null".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpeechConfig {
    pub backend: SpeechBackendKind,
    pub program: String,
    pub voice: Option<String>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            backend: SpeechBackendKind::default(),
            program: DEFAULT_SPEECH_PROGRAM.to_string(),
            voice: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    pub log_level: String,
    /// Rolling log directory; logging stays off when unset.
    pub log_dir: Option<PathBuf>,
    pub speech: SpeechConfig,
    /// Start from the built-in six-category board instead of an empty one.
    pub seed_default_catalog: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            speech: SpeechConfig::default(),
            seed_default_catalog: true,
        }
    }
}

impl BoardConfig {
    /// Reads an optional file, applies process environment overrides and validates.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies `AACBOARD_*` overrides resolved through `lookup`.
    ///
    /// Blank values are treated as unset.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(level) = read(ENV_LOG_LEVEL) {
            self.log_level = level;
        }
        if let Some(dir) = read(ENV_LOG_DIR) {
            self.log_dir = Some(PathBuf::from(dir));
        }
        if let Some(backend) = read(ENV_SPEECH_BACKEND) {
            self.speech.backend = backend.parse()?;
        }
        if let Some(program) = read(ENV_SPEECH_PROGRAM) {
            self.speech.program = program;
        }
        Ok(())
    }

    /// Normalizes the log level and checks the log directory and the speech program.
    pub fn validate(&mut self) -> ConfigResult<()> {
        self.log_level = normalize_level(&self.log_level)
            .map_err(|err| ConfigError::InvalidValue {
                field: "log_level",
                value: self.log_level.clone(),
                reason: err.to_string(),
            })?
            .to_string();

        if let Some(dir) = &self.log_dir {
            normalize_log_dir(dir).map_err(|err| ConfigError::InvalidValue {
                field: "log_dir",
                value: dir.display().to_string(),
                reason: err.to_string(),
            })?;
        }

        if self.speech.backend == SpeechBackendKind::Command
            && self.speech.program.trim().is_empty()
        {
            return Err(ConfigError::InvalidValue {
                field: "speech.program",
                value: self.speech.program.clone(),
                reason: "command backend needs a program".to_string(),
            });
        }
        Ok(())
    }

    pub fn build_speech(&self) -> Box<dyn SpeechCapability + Send + Sync> {
        match self.speech.backend {
            SpeechBackendKind::Command => Box::new(CommandSpeech::new(
                self.speech.program.trim(),
                self.speech.voice.clone(),
            )),
            SpeechBackendKind::Null => Box::new(NullSpeech),
        }
    }

    pub fn build_store(&self) -> BoardStore {
        if self.seed_default_catalog {
            BoardStore::with_default_catalog()
        } else {
            BoardStore::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardConfig, ConfigError, SpeechBackendKind};

    #[test]
    fn backend_kind_parses_aliases() {
        assert_eq!("Null".parse::<SpeechBackendKind>().unwrap(), SpeechBackendKind::Null);
        assert_eq!("none".parse::<SpeechBackendKind>().unwrap(), SpeechBackendKind::Null);
        assert!(matches!(
            "pico".parse::<SpeechBackendKind>(),
            Err(ConfigError::InvalidValue { field: "speech.backend", .. })
        ));
    }

    #[test]
    fn validate_normalizes_level() {
        let mut config = BoardConfig {
            log_level: " WARNING ".to_string(),
            ..BoardConfig::default()
        };
        config.validate().unwrap();
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn validate_rejects_blank_program_for_command_backend() {
        let mut config = BoardConfig::default();
        config.speech.program = "  ".to_string();
        assert!(config.validate().is_err());

        config.speech.backend = SpeechBackendKind::Null;
        assert!(config.validate().is_ok());
    }
}
