use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Keep an employee list in sync with its HTTP endpoint", version)]
#[command(after_help = "EXAMPLES:
    roster list                              Show all employees
    roster add -f Ada -l Lovelace -r Engineer Add an employee
    roster remove 42                         Remove employee with id 42
    roster shell                             Interactive session")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(long, short = 'o', global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Output as JSON (alias for --format json)
    #[arg(long, global = true, hide = true)]
    pub json: bool,

    /// Suppress success messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show detailed error information and debug logs
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Collection endpoint (overrides ROSTER_ENDPOINT and the config file)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,
}

impl Cli {
    /// Get the effective output format, considering --json flag
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List employees
    #[command(
        alias = "ls",
        after_help = "EXAMPLES:
    roster list
    roster list --format json"
    )]
    List,
    /// Add an employee, then show the refreshed list
    #[command(
        alias = "a",
        after_help = "EXAMPLES:
    roster add -f Ada -l Lovelace -r Engineer
    roster add --first-name Grace --last-name Hopper --role \"Team Lead\""
    )]
    Add(AddArgs),
    /// Remove an employee by id, then show the refreshed list
    #[command(
        alias = "rm",
        after_help = "EXAMPLES:
    roster remove 42"
    )]
    Remove {
        /// Employee id as shown in the ID column
        id: String,
    },
    /// Interactive session: load, then add/remove rows by command
    #[command(after_help = "EXAMPLES:
    roster shell
    roster shell --endpoint http://localhost:9000/")]
    Shell,
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    roster completions bash > ~/.bash_completion.d/roster
    roster completions zsh > ~/.zfunc/_roster
    roster completions fish > ~/.config/fish/completions/roster.fish")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    #[command(after_help = "EXAMPLES:
    roster init")]
    Init,
}

#[derive(Args)]
pub struct AddArgs {
    /// First name
    #[arg(long, short)]
    pub first_name: String,

    /// Last name
    #[arg(long, short)]
    pub last_name: String,

    /// Role
    #[arg(long, short)]
    pub role: String,
}
