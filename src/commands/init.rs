use std::io::{self, Write};

use url::Url;

use crate::config::{Config, DEFAULT_ENDPOINT};
use crate::error::{RosterError, Result};

fn ask(question: &str) -> Result<String> {
    print!("{question}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Empty input keeps the default; otherwise a whole number of seconds above 0.
fn parse_timeout(input: &str) -> Result<Option<u64>> {
    if input.is_empty() {
        return Ok(None);
    }
    match input.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Some(secs)),
        _ => Err(RosterError::InvalidInput(format!(
            "timeout must be a whole number of seconds above 0, got {input}"
        ))),
    }
}

pub async fn run() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() {
        let answer = ask(&format!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        ))?;

        if !answer.eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("Roster Configuration");
    println!("====================\n");

    let endpoint = ask(&format!("Collection endpoint [{DEFAULT_ENDPOINT}]: "))?;
    let endpoint = if endpoint.is_empty() {
        DEFAULT_ENDPOINT.to_string()
    } else {
        Url::parse(&endpoint)
            .map_err(|e| RosterError::InvalidEndpoint {
                url: endpoint.clone(),
                source: e,
            })?
            .to_string()
    };

    let timeout = parse_timeout(&ask("Request timeout in seconds [10]: ")?)?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| RosterError::ConfigRead {
            path: config_path.clone(),
            source: e,
        })?;
    }

    let mut config_content = format!("endpoint = \"{endpoint}\"\n");
    if let Some(secs) = timeout {
        config_content.push_str(&format!("timeout_secs = {secs}\n"));
    }

    std::fs::write(&config_path, config_content).map_err(|e| RosterError::ConfigRead {
        path: config_path.clone(),
        source: e,
    })?;

    println!("\nConfig saved to {}", config_path.display());

    Ok(())
}
