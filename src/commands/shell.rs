use std::io::Write;
use std::sync::LazyLock;

use regex::Regex;
use tokio::io::{self, AsyncBufReadExt, BufReader};

use crate::error::{RosterError, Result};
use crate::output;
use crate::sync::{Event, ListSynchronizer, LoadOutcome, MutationOutcome, Outcome};
use crate::types::NewRecord;

const HELP: &str = "COMMANDS:
    add FIRST LAST ROLE   Add an employee (quote values containing spaces)
    rm N                  Remove the employee in row N
    reload                Reload the list
    help                  Show this help
    quit                  Leave the shell";

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]*)"|(\S+)"#).expect("token pattern is valid"));

#[derive(Debug, PartialEq)]
pub enum ShellCommand {
    Add(NewRecord),
    /// 1-based row number as displayed
    Remove(usize),
    Reload,
    Help,
    Quit,
}

fn tokenize(line: &str) -> Vec<String> {
    TOKEN_RE
        .captures_iter(line)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>> {
    let tokens = tokenize(line);
    let Some((command, rest)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match (command.as_str(), rest) {
        ("add" | "a", [first, last, role]) => {
            if [first, last, role].iter().any(|field| field.trim().is_empty()) {
                return Err(RosterError::InvalidInput(
                    "first name, last name and role must not be empty".to_string(),
                ));
            }
            ShellCommand::Add(NewRecord {
                first_name: first.clone(),
                last_name: last.clone(),
                role: role.clone(),
            })
        }
        ("add" | "a", _) => {
            return Err(RosterError::InvalidInput(
                "usage: add FIRST LAST ROLE".to_string(),
            ))
        }
        ("rm" | "remove", [row]) => match row.parse::<usize>() {
            Ok(n) if n > 0 => ShellCommand::Remove(n),
            _ => {
                return Err(RosterError::InvalidInput(format!(
                    "row must be a positive number, got {row}"
                )))
            }
        },
        ("rm" | "remove", _) => {
            return Err(RosterError::InvalidInput("usage: rm N".to_string()))
        }
        ("reload" | "r", []) => ShellCommand::Reload,
        ("help" | "?", _) => ShellCommand::Help,
        ("quit" | "exit" | "q", _) => ShellCommand::Quit,
        (other, _) => {
            return Err(RosterError::InvalidInput(format!(
                "unknown command '{other}', type 'help'"
            )))
        }
    };

    Ok(Some(command))
}

fn prompt() -> Result<()> {
    print!("roster> ");
    std::io::stdout().flush()?;
    Ok(())
}

async fn render(sync: &ListSynchronizer, outcome: Outcome) {
    match outcome {
        Outcome::Load(LoadOutcome::Failed)
        | Outcome::Mutation(MutationOutcome::Refreshed(LoadOutcome::Failed)) => {
            eprintln!("Could not refresh the list; showing the last loaded state.");
        }
        Outcome::Mutation(MutationOutcome::Rejected { status, message }) => {
            eprintln!(
                "Server rejected the request ({status}): {}",
                message.as_deref().unwrap_or("<no message>")
            );
            return;
        }
        Outcome::Mutation(MutationOutcome::Failed(reason)) => {
            eprintln!("Request failed ({reason}); the list was not changed.");
            return;
        }
        _ => {}
    }
    output::print_view(&*sync.view().await);
}

pub async fn run(sync: &ListSynchronizer) -> Result<()> {
    let outcome = sync.handle(Event::PageLoad).await;
    render(sync, outcome).await;
    output::print_message("Type 'help' for commands.");

    let mut lines = BufReader::new(io::stdin()).lines();
    prompt()?;

    while let Some(line) = lines.next_line().await? {
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => {
                prompt()?;
                continue;
            }
            Err(e) => {
                eprintln!("Error: {e}");
                prompt()?;
                continue;
            }
        };

        let event = match command {
            ShellCommand::Quit => break,
            ShellCommand::Help => {
                println!("{HELP}");
                None
            }
            ShellCommand::Reload => Some(Event::PageLoad),
            ShellCommand::Add(record) => Some(Event::Submit(record)),
            ShellCommand::Remove(n) => {
                let record = sync.view().await.row(n - 1).map(|row| row.record.clone());
                match record {
                    Some(record) => Some(Event::DeleteClicked(record)),
                    None => {
                        eprintln!("Error: no row {n}");
                        None
                    }
                }
            }
        };

        if let Some(event) = event {
            let outcome = sync.handle(event).await;
            render(sync, outcome).await;
        }
        prompt()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(parse_line("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_add_with_quotes() {
        let command = parse_line(r#"add Ada Lovelace "Senior Engineer""#).unwrap();
        assert_eq!(
            command,
            Some(ShellCommand::Add(NewRecord {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                role: "Senior Engineer".to_string(),
            }))
        );
    }

    #[test]
    fn test_parse_add_wrong_arity() {
        assert!(matches!(
            parse_line("add Ada Engineer"),
            Err(RosterError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_add_empty_field() {
        assert!(parse_line(r#"add Ada "" Engineer"#).is_err());
    }

    #[test]
    fn test_parse_remove() {
        assert_eq!(parse_line("rm 3").unwrap(), Some(ShellCommand::Remove(3)));
        assert!(parse_line("rm 0").is_err());
        assert!(parse_line("rm x").is_err());
        assert!(parse_line("rm").is_err());
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_line("reload").unwrap(), Some(ShellCommand::Reload));
        assert_eq!(parse_line("help").unwrap(), Some(ShellCommand::Help));
        assert_eq!(parse_line("quit").unwrap(), Some(ShellCommand::Quit));
    }

    #[test]
    fn test_parse_unknown() {
        assert!(parse_line("frobnicate").is_err());
    }
}
