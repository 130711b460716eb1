//! Parsing of typed session commands.

use thiserror::Error;

use faraway_core::DomainError;
use faraway_packing::{ItemId, SortCriterion};

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// `add [quantity] <description>`; quantity defaults to 1.
    Add { quantity: u32, description: String },
    Toggle(ItemId),
    Delete(ItemId),
    Clear,
    Sort(SortCriterion),
    List,
    Stats,
    Json,
    History,
    Help,
    Quit,
    /// A blank line.
    Nothing,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown command {0:?} (try `help`)")]
    UnknownCommand(String),

    #[error("`{command}` needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub const HELP: &str = "\
commands:
  add [qty] <description>   add an item (qty 1-20, default 1)
  toggle <id>               mark an item packed / unpacked
  delete <id>               remove an item
  clear                     remove every item (asks first)
  sort <input|description|packed>
  list                      show the list
  stats                     show packing progress
  json                      dump the current state as JSON
  history                   show what happened this session
  help                      this text
  quit";

impl std::str::FromStr for Input {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command.to_ascii_lowercase().as_str() {
            "" => Ok(Input::Nothing),
            "add" | "a" => Ok(parse_add(rest)),
            "toggle" | "t" => Ok(Input::Toggle(item_id("toggle", rest)?)),
            "delete" | "del" | "rm" => Ok(Input::Delete(item_id("delete", rest)?)),
            "clear" => Ok(Input::Clear),
            "sort" => {
                if rest.is_empty() {
                    return Err(InputError::MissingArgument {
                        command: "sort",
                        what: "a criterion",
                    });
                }
                Ok(Input::Sort(rest.parse()?))
            }
            "list" | "ls" => Ok(Input::List),
            "stats" => Ok(Input::Stats),
            "json" => Ok(Input::Json),
            "history" => Ok(Input::History),
            "help" | "?" => Ok(Input::Help),
            "quit" | "exit" | "q" => Ok(Input::Quit),
            _ => Err(InputError::UnknownCommand(command.to_string())),
        }
    }
}

/// A leading number is the quantity only when a description follows it.
fn parse_add(rest: &str) -> Input {
    if let Some((first, description)) = rest.split_once(char::is_whitespace) {
        if let Ok(quantity) = first.parse::<u32>() {
            return Input::Add {
                quantity,
                description: description.trim().to_string(),
            };
        }
    }
    Input::Add {
        quantity: 1,
        description: rest.to_string(),
    }
}

fn item_id(command: &'static str, rest: &str) -> Result<ItemId, InputError> {
    if rest.is_empty() {
        return Err(InputError::MissingArgument {
            command,
            what: "an item id",
        });
    }
    Ok(rest.parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Input, InputError> {
        line.parse()
    }

    #[test]
    fn add_with_and_without_quantity() {
        assert_eq!(
            parse("add 3 Warm socks"),
            Ok(Input::Add {
                quantity: 3,
                description: "Warm socks".to_string()
            })
        );
        assert_eq!(
            parse("add Boots"),
            Ok(Input::Add {
                quantity: 1,
                description: "Boots".to_string()
            })
        );
        assert_eq!(
            parse("add 7"),
            Ok(Input::Add {
                quantity: 1,
                description: "7".to_string()
            })
        );
        assert_eq!(
            parse("add"),
            Ok(Input::Add {
                quantity: 1,
                description: String::new()
            })
        );
    }

    #[test]
    fn ids_are_required_and_numeric() {
        assert_eq!(parse("toggle 12"), Ok(Input::Toggle(ItemId(12))));
        assert_eq!(parse("  DELETE   4 "), Ok(Input::Delete(ItemId(4))));
        assert_eq!(
            parse("toggle"),
            Err(InputError::MissingArgument {
                command: "toggle",
                what: "an item id"
            })
        );
        assert!(matches!(
            parse("delete socks"),
            Err(InputError::Domain(DomainError::InvalidId(_)))
        ));
    }

    #[test]
    fn sort_takes_a_criterion() {
        assert_eq!(
            parse("sort packed"),
            Ok(Input::Sort(SortCriterion::Packed))
        );
        assert!(matches!(
            parse("sort colour"),
            Err(InputError::Domain(DomainError::Validation(_)))
        ));
        assert!(matches!(
            parse("sort"),
            Err(InputError::MissingArgument { .. })
        ));
    }

    #[test]
    fn bare_words() {
        assert_eq!(parse(""), Ok(Input::Nothing));
        assert_eq!(parse("clear"), Ok(Input::Clear));
        assert_eq!(parse("q"), Ok(Input::Quit));
        assert_eq!(
            parse("pack"),
            Err(InputError::UnknownCommand("pack".to_string()))
        );
    }
}
