//! Terminal display surface for the AAC picture board.
//!
//! # Responsibility
//! - Parse typed commands into board events.
//! - Render session snapshots as plain text.
//! - Resolve flags, environment and config file into one configuration.
//! - Drive a read-eval-render loop over any reader and writer.

pub mod args;
pub mod command;
pub mod error;
pub mod render;
pub mod repl;

pub use args::{Args, TerminalSession};
pub use command::{parse_command, Command, CommandError};
pub use error::CliError;
pub use render::render_board;
pub use repl::run_session;
