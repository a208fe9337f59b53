//! Driver command language
//!
//! One command per line. Item and menu positions are 1-based, as a person
//! counts rows on screen.
//!
//! ```text
//! tap 2              select the second catalog item
//! back               pop the active stack
//! tab search         switch tab (home, search, user)
//! type query chats   set an input (query, email, password)
//! login              submit the login form
//! menu 1 2           tap row 2 of menu section 1
//! open /details/X    follow a deep link
//! show               re-render without acting
//! quit               end the session
//! ```

use app_state::TextField;
use app_ui::{Action, NavigationTab};
use thiserror::Error;

/// Command parse errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    /// First word is not a command
    #[error("Unknown command: {0}")]
    Unknown(String),

    /// A required argument is absent
    #[error("Missing argument for {command}: {argument}")]
    MissingArgument {
        /// Command name
        command: &'static str,
        /// Argument name
        argument: &'static str,
    },

    /// An argument could not be parsed
    #[error("Invalid {argument} for {command}: {value}")]
    InvalidArgument {
        /// Command name
        command: &'static str,
        /// Argument name
        argument: &'static str,
        /// Offending text
        value: String,
    },
}

/// A parsed driver command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Dispatch an action to the app
    Dispatch(Action),
    /// Render the current screen again
    Show,
    /// End the session
    Quit,
}

/// Parse one input line; blank lines and `#` comments yield `None`
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (line, ""),
    };
    let mut args = rest.split_whitespace();

    let command = match word {
        "tap" => {
            let index = position("tap", "item", args.next())?;
            Command::Dispatch(Action::SelectItem { index })
        }
        "back" => Command::Dispatch(Action::Back),
        "tab" => {
            let name = args.next().ok_or(CommandError::MissingArgument {
                command: "tab",
                argument: "tab",
            })?;
            let tab = NavigationTab::from_id(name).ok_or_else(|| CommandError::InvalidArgument {
                command: "tab",
                argument: "tab",
                value: name.to_string(),
            })?;
            Command::Dispatch(Action::SelectTab { tab })
        }
        "type" => {
            let (name, value) = match rest.split_once(char::is_whitespace) {
                Some((name, value)) => (name, value),
                None => (rest, ""),
            };
            if name.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "type",
                    argument: "field",
                });
            }
            let field = TextField::from_name(name).ok_or_else(|| CommandError::InvalidArgument {
                command: "type",
                argument: "field",
                value: name.to_string(),
            })?;
            Command::Dispatch(Action::change_text(field, value))
        }
        "login" => Command::Dispatch(Action::SubmitLogin),
        "menu" => {
            let section = position("menu", "section", args.next())?;
            let row = position("menu", "row", args.next())?;
            Command::Dispatch(Action::PressMenuRow { section, row })
        }
        "open" => {
            let path = args.next().ok_or(CommandError::MissingArgument {
                command: "open",
                argument: "path",
            })?;
            Command::Dispatch(Action::Open {
                path: path.to_string(),
            })
        }
        "show" => Command::Show,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

/// Parse a 1-based position into a 0-based index
fn position(
    command: &'static str,
    argument: &'static str,
    value: Option<&str>,
) -> Result<usize, CommandError> {
    let value = value.ok_or(CommandError::MissingArgument { command, argument })?;
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(CommandError::InvalidArgument {
            command,
            argument,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_and_comment() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(parse_line("# tap 1"), Ok(None));
    }

    #[test]
    fn test_tap_is_one_based() {
        assert_eq!(
            parse_line("tap 3"),
            Ok(Some(Command::Dispatch(Action::SelectItem { index: 2 })))
        );
        assert!(matches!(
            parse_line("tap 0"),
            Err(CommandError::InvalidArgument { .. })
        ));
        assert!(matches!(
            parse_line("tap"),
            Err(CommandError::MissingArgument { .. })
        ));
    }

    #[test]
    fn test_tab() {
        assert_eq!(
            parse_line("tab search"),
            Ok(Some(Command::Dispatch(Action::SelectTab {
                tab: NavigationTab::Search
            })))
        );
        assert!(parse_line("tab settings").is_err());
    }

    #[test]
    fn test_type_keeps_spaces() {
        assert_eq!(
            parse_line("type query chats  noirs"),
            Ok(Some(Command::Dispatch(Action::change_text(
                TextField::SearchQuery,
                "chats  noirs"
            ))))
        );
        assert_eq!(
            parse_line("type email"),
            Ok(Some(Command::Dispatch(Action::change_text(
                TextField::Email,
                ""
            ))))
        );
        assert!(parse_line("type").is_err());
        assert!(parse_line("type colour red").is_err());
    }

    #[test]
    fn test_menu() {
        assert_eq!(
            parse_line("menu 2 1"),
            Ok(Some(Command::Dispatch(Action::PressMenuRow {
                section: 1,
                row: 0
            })))
        );
        assert!(parse_line("menu 1").is_err());
    }

    #[test]
    fn test_misc() {
        assert_eq!(parse_line("back"), Ok(Some(Command::Dispatch(Action::Back))));
        assert_eq!(parse_line("login"), Ok(Some(Command::Dispatch(Action::SubmitLogin))));
        assert_eq!(parse_line("show"), Ok(Some(Command::Show)));
        assert_eq!(parse_line("exit"), Ok(Some(Command::Quit)));
        assert_eq!(
            parse_line("open /details/Item%201"),
            Ok(Some(Command::Dispatch(Action::Open {
                path: "/details/Item%201".to_string()
            })))
        );
        assert_eq!(
            parse_line("jump"),
            Err(CommandError::Unknown("jump".to_string()))
        );
    }
}
