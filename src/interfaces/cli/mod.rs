//! CLI interface module
//!
//! One-shot commands against the shortening API. Output goes to stdout,
//! logs to stderr.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::errors::ClientError;
use crate::runtime::ClientContext;
use commands::{config_generate, list_links, login, shorten_link, show_link, show_token};

#[derive(Debug)]
pub enum CliError {
    /// Error returned by the API client or a local store
    Client(ClientError),
    /// Bad or missing user input
    InputError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::Client(err) => err.format_simple(),
            CliError::InputError(msg) => format!("Input error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::Client(err) => err.format_colored(),
            CliError::InputError(msg) => {
                format!("{} {}", "Input error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<ClientError> for CliError {
    fn from(err: ClientError) -> Self {
        CliError::Client(err)
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(ctx: &ClientContext, cmd: Commands) -> Result<(), CliError> {
    match cmd {
        Commands::Shorten {
            url,
            alias,
            expires_in,
            save_qr,
        } => shorten_link(ctx, url, alias, expires_in, save_qr).await,

        Commands::List => list_links(ctx).await,

        Commands::Show {
            short_code,
            save_qr,
        } => show_link(ctx, short_code, save_qr).await,

        Commands::Login { email, password } => login(ctx, email, password).await,

        Commands::Token => show_token(ctx),

        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => config_generate(output_path, force),

        #[cfg(feature = "tui")]
        Commands::Tui => Err(CliError::CommandError(
            "TUI is started by the mode router".to_string(),
        )),
    }
}
