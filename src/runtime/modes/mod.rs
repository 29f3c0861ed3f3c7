//! Mode routing
//!
//! - CLI mode: one-shot commands
//! - TUI mode: interactive terminal UI (default without a command)

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "cli")]
pub use cli::run_cli;

#[cfg(feature = "tui")]
pub use tui::run_tui;

use crate::cli::Commands;

/// Mode detection result
#[derive(Debug, PartialEq)]
pub enum Mode {
    #[cfg(feature = "cli")]
    Cli,
    #[cfg(feature = "tui")]
    Tui,
    Unknown,
}

/// Detect which mode to run from the parsed command
///
/// 1. `tui` or no command with the TUI feature -> TUI mode
/// 2. Any other command with the CLI feature -> CLI mode
/// 3. Otherwise -> Unknown
pub fn detect_mode(command: Option<&Commands>) -> Mode {
    #[cfg(feature = "tui")]
    if matches!(command, None | Some(Commands::Tui)) {
        return Mode::Tui;
    }

    #[cfg(feature = "cli")]
    if command.is_some() {
        return Mode::Cli;
    }

    Mode::Unknown
}
