//! Rolling file logs for hosts that configure a log directory.
//!
//! # Invariants
//! - One logger per process; repeating init with the same settings is a no-op.
//! - A second init with another level or directory fails with `Conflict`.
//! - Board events log ids and counts only, never user-entered text.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

static ACTIVE: OnceCell<ActiveLogger> = OnceCell::new();

/// Level and directory a logger was started with.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LogSettings {
    level: &'static str,
    log_dir: PathBuf,
}

impl LogSettings {
    fn parse(level: &str, log_dir: &Path) -> Result<Self, LoggingError> {
        Ok(Self {
            level: normalize_level(level)?,
            log_dir: normalize_log_dir(log_dir)?,
        })
    }

    fn accept(&self, requested: &LogSettings) -> Result<(), LoggingError> {
        let conflict = |setting, active: String, requested: String| LoggingError::Conflict {
            setting,
            active,
            requested,
        };
        if self.log_dir != requested.log_dir {
            return Err(conflict(
                "directory",
                self.log_dir.display().to_string(),
                requested.log_dir.display().to_string(),
            ));
        }
        if self.level != requested.level {
            return Err(conflict(
                "level",
                self.level.to_string(),
                requested.level.to_string(),
            ));
        }
        Ok(())
    }
}

struct ActiveLogger {
    settings: LogSettings,
    _handle: LoggerHandle,
}

impl ActiveLogger {
    fn start(settings: LogSettings) -> Result<Self, LoggingError> {
        let dir = &settings.log_dir;
        std::fs::create_dir_all(dir).map_err(|source| LoggingError::CreateDirectory {
            path: dir.clone(),
            source,
        })?;

        // 5 MiB per file, three rotated files kept.
        let handle = Logger::try_with_str(settings.level)
            .map_err(|err| LoggingError::Backend(err.to_string()))?
            .log_to_file(FileSpec::default().directory(dir).basename("aacboard"))
            .rotate(
                Criterion::Size(5 << 20),
                Naming::Numbers,
                Cleanup::KeepLogFiles(3),
            )
            .write_mode(WriteMode::BufferAndFlush)
            .append()
            .format_for_files(flexi_logger::detailed_format)
            .start()
            .map_err(|err| LoggingError::Backend(err.to_string()))?;

        info!(
            "event=logging_init module=core status=ok level={} log_dir={} version={}",
            settings.level,
            dir.display(),
            env!("CARGO_PKG_VERSION")
        );
        Ok(Self {
            settings,
            _handle: handle,
        })
    }
}

/// Logging bootstrap errors.
#[derive(Debug)]
pub enum LoggingError {
    UnsupportedLevel(String),
    EmptyDirectory,
    RelativeDirectory(String),
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
    },
    Backend(String),
    /// Logging is already active with different settings.
    Conflict {
        setting: &'static str,
        active: String,
        requested: String,
    },
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLevel(value) => write!(
                f,
                "unsupported log level `{value}`; expected trace|debug|info|warn|error"
            ),
            Self::EmptyDirectory => write!(f, "log_dir cannot be empty"),
            Self::RelativeDirectory(value) => {
                write!(f, "log_dir must be an absolute path, got `{value}`")
            }
            Self::CreateDirectory { path, source } => write!(
                f,
                "failed to create log directory `{}`: {source}",
                path.display()
            ),
            Self::Backend(message) => write!(f, "failed to start logger: {message}"),
            Self::Conflict {
                setting,
                active,
                requested,
            } => write!(
                f,
                "logging already initialized with {setting} `{active}`; refusing to switch to `{requested}`"
            ),
        }
    }
}

impl Error for LoggingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CreateDirectory { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Starts the rolling file logger, or confirms the running one.
///
/// # Errors
/// - `level` is not one of `trace|debug|info|warn|error`.
/// - `log_dir` is empty, relative, or cannot be created.
/// - The backend fails to start.
/// - Logging is already active with a different level or directory.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<(), LoggingError> {
    let requested = LogSettings::parse(level, log_dir)?;
    ACTIVE
        .get_or_try_init(|| ActiveLogger::start(requested.clone()))?
        .settings
        .accept(&requested)
}

/// Returns `(level, log_dir)` when logging is active.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    ACTIVE
        .get()
        .map(|active| (active.settings.level, active.settings.log_dir.clone()))
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

pub(crate) fn normalize_level(level: &str) -> Result<&'static str, LoggingError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(LoggingError::UnsupportedLevel(other.to_string())),
    }
}

pub(crate) fn normalize_log_dir(log_dir: &Path) -> Result<PathBuf, LoggingError> {
    let raw = log_dir.to_string_lossy();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LoggingError::EmptyDirectory);
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(LoggingError::RelativeDirectory(trimmed.to_string()));
    }
    Ok(path.to_path_buf())
}
