//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for shortlink using clap's derive macros.

use clap::{Parser, Subcommand};

/// shortlink - terminal client for the URL shortening service
#[derive(Parser, Debug)]
#[command(name = "shortlink")]
#[command(version)]
#[command(about = "Shorten URLs and browse your short links from the terminal", long_about = None)]
pub struct Cli {
    /// Config file path (default: ./shortlink.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    /// Keep the session token in memory only
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Start TUI mode (default when no command is given)
    #[cfg(feature = "tui")]
    Tui,

    /// Shorten a URL
    Shorten {
        /// URL to shorten
        url: String,

        /// Custom alias for the short code
        #[arg(long, short = 'a')]
        alias: Option<String>,

        /// Lifetime in hours
        #[arg(long)]
        expires_in: Option<u32>,

        /// Write the QR code image to this path
        #[arg(long)]
        save_qr: Option<String>,
    },

    /// List your most recent links (requires a session token)
    List,

    /// Show a link with its click analytics
    Show {
        /// Short code to look up
        short_code: String,

        /// Write the QR code image to this path
        #[arg(long)]
        save_qr: Option<String>,
    },

    /// Log in and store the session token
    Login {
        #[arg(long, short = 'e')]
        email: String,

        /// Password (if not provided, will prompt interactively)
        #[arg(long)]
        password: Option<String>,
    },

    /// Show whether a session token is stored
    Token,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: shortlink.toml)
        output_path: Option<String>,

        /// Force overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
