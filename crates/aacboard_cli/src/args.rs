//! Command-line arguments and configuration precedence.
//!
//! # Invariants
//! - Precedence is flags over `AACBOARD_*` environment over config file.
//! - Validation runs once, after every layer has been applied.

use crate::error::CliError;
use aacboard_core::{BoardConfig, BoardEvent, BoardSession, SpeechCapability};
use clap::Parser;
use std::path::PathBuf;

pub type TerminalSession = BoardSession<Box<dyn SpeechCapability + Send + Sync>>;

#[derive(Debug, Parser)]
#[command(name = "aacboard", version, about = "Picture board that speaks tapped symbols")]
pub struct Args {
    /// JSON config file.
    #[arg(long, env = "AACBOARD_CONFIG")]
    pub config: Option<PathBuf>,
    /// Log level (trace|debug|info|warn|error).
    #[arg(long)]
    pub log_level: Option<String>,
    /// Absolute directory for rolling log files.
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
    /// Speech backend (command|null).
    #[arg(long)]
    pub speech: Option<String>,
    /// Start with admin affordances visible.
    #[arg(long)]
    pub admin: bool,
}

impl Args {
    /// Resolves configuration against the process environment.
    pub fn resolve_config(&self) -> Result<BoardConfig, CliError> {
        self.resolve_config_with(|key| std::env::var(key).ok())
    }

    /// Resolves configuration with environment values supplied by `lookup`.
    pub fn resolve_config_with<F>(&self, lookup: F) -> Result<BoardConfig, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match &self.config {
            Some(path) => BoardConfig::from_file(path)?,
            None => BoardConfig::default(),
        };
        config.apply_overrides(lookup)?;

        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if let Some(dir) = &self.log_dir {
            config.log_dir = Some(dir.clone());
        }
        if let Some(backend) = &self.speech {
            config.speech.backend = backend.parse()?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Opens the session described by `config`, honoring `--admin`.
    pub fn open_session(&self, config: &BoardConfig) -> TerminalSession {
        let mut session = BoardSession::new(config.build_store(), config.build_speech());
        if self.admin {
            session.handle(BoardEvent::ToggleAdmin);
        }
        session
    }
}
