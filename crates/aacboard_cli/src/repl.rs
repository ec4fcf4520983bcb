//! Read-eval-render loop.

use crate::command::{parse_command, Command, HELP_TEXT};
use crate::render::render_board;
use aacboard_core::{BoardSession, EventOutcome, SpeechCapability};
use log::{debug, info};
use std::io::{BufRead, Write};

/// Runs commands from `input` until EOF or `quit`, writing renders to `output`.
pub fn run_session<S, R, W>(
    session: &mut BoardSession<S>,
    input: R,
    mut output: W,
) -> std::io::Result<()>
where
    S: SpeechCapability,
    R: BufRead,
    W: Write,
{
    write!(output, "{}", render_board(&session.snapshot()))?;
    prompt(&mut output)?;

    let mut handled = 0_u64;
    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => {
                prompt(&mut output)?;
                continue;
            }
            Err(err) => {
                writeln!(output, "{err}")?;
                prompt(&mut output)?;
                continue;
            }
        };
        handled += 1;

        match command {
            Command::Quit => break,
            Command::Help => writeln!(output, "{HELP_TEXT}")?,
            Command::Json => match serde_json::to_string_pretty(&session.snapshot()) {
                Ok(json) => writeln!(output, "{json}")?,
                Err(err) => writeln!(output, "failed to encode board: {err}")?,
            },
            Command::Board(event) => {
                let outcome = session.handle(event);
                match &outcome {
                    EventOutcome::Ignored => writeln!(output, "(nothing to do)")?,
                    EventOutcome::Spoken(utterance) => {
                        writeln!(output, "Speaking: \"{}\"", utterance.text)?;
                    }
                    EventOutcome::CategoryCreated(id) => {
                        writeln!(output, "Category #{id} added.")?;
                    }
                    EventOutcome::ItemCreated(id) => writeln!(output, "Picture #{id} added.")?,
                    EventOutcome::Applied => {}
                }
                if !outcome.is_ignored() {
                    write!(output, "{}", render_board(&session.snapshot()))?;
                }
            }
        }
        prompt(&mut output)?;
    }

    debug!("event=repl_exit module=cli status=ok commands={handled}");
    info!("event=session_close module=cli status=ok");
    Ok(())
}

fn prompt<W: Write>(output: &mut W) -> std::io::Result<()> {
    write!(output, "\n> ")?;
    output.flush()
}
