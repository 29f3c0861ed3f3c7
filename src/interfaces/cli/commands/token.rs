//! Token status command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::runtime::ClientContext;

/// The token value itself is never printed
pub fn show_token(ctx: &ClientContext) -> Result<(), CliError> {
    let store = ctx.api().token_store();
    if store.get().is_some() {
        println!("{} Session token stored", "✓".bold().green());
    } else {
        println!("{} No session token stored", "ℹ".bold().blue());
    }
    println!("  {} {}", "Location:".bold(), store.location().dimmed());
    println!("  {} {}", "API:".bold(), ctx.api().base_url().blue());
    Ok(())
}
