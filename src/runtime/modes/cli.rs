//! CLI mode
//!
//! Delegates to the command implementations in `interfaces::cli`.

use crate::cli::Commands;
use crate::interfaces::cli::CliError;
use crate::runtime::ClientContext;

pub async fn run_cli(ctx: &ClientContext, command: Commands) -> Result<(), CliError> {
    crate::interfaces::cli::run_cli_command(ctx, command).await
}
