mod cli;
mod client;
mod commands;
mod config;
mod error;
mod output;
mod responses;
mod sync;
mod types;
mod view;


use std::error::Error;
use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use client::RosterClient;
use config::Config;
use error::Result;
use sync::ListSynchronizer;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");

        // Show error chain if verbose flag was passed
        if std::env::args().any(|arg| arg == "--verbose" || arg == "-v") {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = cause.source();
            }
        }

        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "roster=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);
    output::set_format(cli.output_format());
    output::set_quiet(cli.quiet);

    match cli.command {
        // Commands that don't require config/client
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "roster", &mut io::stdout());
        }
        Commands::Init => {
            commands::init::run().await?;
        }
        // Commands that talk to the endpoint
        command => {
            let config = Config::load()?;
            let endpoint = config.endpoint(cli.endpoint.as_deref())?;
            let client = RosterClient::new(endpoint, config.timeout())?;
            let sync = ListSynchronizer::new(client);

            match command {
                Commands::List => commands::list::run(&sync).await?,
                Commands::Add(args) => commands::add::run(&sync, args).await?,
                Commands::Remove { id } => commands::remove::run(&sync, &id).await?,
                Commands::Shell => commands::shell::run(&sync).await?,
                Commands::Completions { .. } | Commands::Init => {
                    // Already handled above
                }
            }
        }
    }

    Ok(())
}
