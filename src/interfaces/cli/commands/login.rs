//! Login command

use std::io::{self, IsTerminal, Write};

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::runtime::ClientContext;

fn get_password(password: Option<String>) -> Result<String, CliError> {
    if let Some(pwd) = password {
        return Ok(pwd);
    }

    if !io::stdin().is_terminal() {
        return Err(CliError::InputError(
            "No password provided. Use --password or run interactively.".to_string(),
        ));
    }

    print!("Password: ");
    io::stdout()
        .flush()
        .map_err(|e| CliError::InputError(e.to_string()))?;
    rpassword::read_password()
        .map_err(|e| CliError::InputError(format!("Failed to read password: {}", e)))
}

pub async fn login(
    ctx: &ClientContext,
    email: String,
    password: Option<String>,
) -> Result<(), CliError> {
    let password = get_password(password)?;
    let data = ctx.api().login(&email, &password).await?;

    let who = data
        .user
        .as_ref()
        .and_then(|u| u.name.clone())
        .unwrap_or_else(|| email.trim().to_string());
    println!("{} Logged in as {}", "✓".bold().green(), who.cyan());

    if let Some(expires_at) = data.expires_at {
        println!(
            "  {} {}",
            "Token expires:".bold(),
            expires_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string()
                .yellow()
        );
    }
    println!(
        "  {} {}",
        "Stored in:".bold(),
        ctx.api().token_store().location().dimmed()
    );
    Ok(())
}
