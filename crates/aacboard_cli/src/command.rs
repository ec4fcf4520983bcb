//! Typed command parsing.

use aacboard_core::{BoardEvent, CategoryId, SymbolId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const HELP_TEXT: &str = "\
Commands:
  tap <symbol-id>                 add a picture to the message
  rm <index>                      remove the picture at a message position
  clear                           empty the message
  speak                           say the message aloud
  admin                           toggle admin mode
  add-category                    open the new-category form (admin)
  category <color> <name...>      submit the new-category form
  add-item <category-id>          open the new-item form (admin)
  item <emoji> <text...>          submit the new-item form
  delete <category-id> <symbol-id> delete a picture (admin)
  cancel                          close the open form
  json                            print the board as JSON
  help                            show this text
  quit                            exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Board(BoardEvent),
    Json,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Unknown(String),
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    InvalidNumber {
        command: &'static str,
        value: String,
    },
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(word) => write!(f, "unknown command `{word}`; type `help`"),
            Self::MissingArgument { command, argument } => {
                write!(f, "`{command}` needs <{argument}>")
            }
            Self::InvalidNumber { command, value } => {
                write!(f, "`{command}` expects a number, got `{value}`")
            }
        }
    }
}

impl Error for CommandError {}

/// Parses one input line; blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let rest = words.collect::<Vec<_>>();

    let command = match head.to_ascii_lowercase().as_str() {
        "tap" => Command::Board(BoardEvent::TapSymbol(SymbolId::from_raw(number(
            "tap",
            "symbol-id",
            rest.first(),
        )?))),
        "rm" | "remove" => {
            let index = number("rm", "index", rest.first())?;
            Command::Board(BoardEvent::RemoveAt(index as usize))
        }
        "clear" => Command::Board(BoardEvent::Clear),
        "speak" | "say" => Command::Board(BoardEvent::Speak),
        "admin" => Command::Board(BoardEvent::ToggleAdmin),
        "add-category" => Command::Board(BoardEvent::BeginAddCategory),
        "category" => {
            let color = rest.first().ok_or(CommandError::MissingArgument {
                command: "category",
                argument: "color",
            })?;
            Command::Board(BoardEvent::SubmitCategory {
                name: rest[1..].join(" "),
                color: (*color).to_string(),
            })
        }
        "add-item" => Command::Board(BoardEvent::BeginAddItem(CategoryId::from_raw(number(
            "add-item",
            "category-id",
            rest.first(),
        )?))),
        "item" => {
            let emoji = rest.first().ok_or(CommandError::MissingArgument {
                command: "item",
                argument: "emoji",
            })?;
            Command::Board(BoardEvent::SubmitItem {
                text: rest[1..].join(" "),
                emoji: (*emoji).to_string(),
            })
        }
        "delete" => {
            let category = number("delete", "category-id", rest.first())?;
            let symbol = number("delete", "symbol-id", rest.get(1))?;
            Command::Board(BoardEvent::DeleteItem {
                category: CategoryId::from_raw(category),
                symbol: SymbolId::from_raw(symbol),
            })
        }
        "cancel" => Command::Board(BoardEvent::Cancel),
        "json" => Command::Json,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn number(
    command: &'static str,
    argument: &'static str,
    value: Option<&&str>,
) -> Result<u32, CommandError> {
    let value = value.ok_or(CommandError::MissingArgument { command, argument })?;
    value.parse().map_err(|_| CommandError::InvalidNumber {
        command,
        value: (*value).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{parse_command, Command, CommandError};
    use aacboard_core::{BoardEvent, CategoryId, SymbolId};

    #[test]
    fn blank_line_is_not_a_command() {
        assert_eq!(parse_command("   ").unwrap(), None);
    }

    #[test]
    fn parses_form_submissions_with_multi_word_text() {
        assert_eq!(
            parse_command("item 🧸 teddy bear").unwrap(),
            Some(Command::Board(BoardEvent::SubmitItem {
                text: "teddy bear".to_string(),
                emoji: "🧸".to_string(),
            }))
        );
        assert_eq!(
            parse_command("category orange Toys and games").unwrap(),
            Some(Command::Board(BoardEvent::SubmitCategory {
                name: "Toys and games".to_string(),
                color: "orange".to_string(),
            }))
        );
    }

    #[test]
    fn forms_open_without_arguments() {
        assert_eq!(
            parse_command("add-category").unwrap(),
            Some(Command::Board(BoardEvent::BeginAddCategory))
        );
        assert_eq!(
            parse_command("add-item 2").unwrap(),
            Some(Command::Board(BoardEvent::BeginAddItem(CategoryId::from_raw(2))))
        );
    }

    #[test]
    fn item_with_emoji_only_submits_empty_text() {
        assert_eq!(
            parse_command("item 🧸").unwrap(),
            Some(Command::Board(BoardEvent::SubmitItem {
                text: String::new(),
                emoji: "🧸".to_string(),
            }))
        );
    }

    #[test]
    fn parses_numeric_arguments() {
        assert_eq!(
            parse_command("delete 1 4").unwrap(),
            Some(Command::Board(BoardEvent::DeleteItem {
                category: CategoryId::from_raw(1),
                symbol: SymbolId::from_raw(4),
            }))
        );
        assert_eq!(
            parse_command("TAP 3").unwrap(),
            Some(Command::Board(BoardEvent::TapSymbol(SymbolId::from_raw(3))))
        );
    }

    #[test]
    fn reports_argument_problems() {
        assert_eq!(
            parse_command("tap").unwrap_err(),
            CommandError::MissingArgument {
                command: "tap",
                argument: "symbol-id",
            }
        );
        assert_eq!(
            parse_command("rm -1").unwrap_err(),
            CommandError::InvalidNumber {
                command: "rm",
                value: "-1".to_string(),
            }
        );
        assert_eq!(
            parse_command("dance").unwrap_err(),
            CommandError::Unknown("dance".to_string())
        );
    }
}
