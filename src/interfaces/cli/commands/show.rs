//! Show link detail command

use colored::Colorize;

use super::helpers::{print_analytics, print_result, save_qr};
use crate::controller::{Headless, NoClipboard, UiEvent};
use crate::interfaces::cli::CliError;
use crate::runtime::ClientContext;

pub async fn show_link(
    ctx: &ClientContext,
    short_code: String,
    save_qr_path: Option<String>,
) -> Result<(), CliError> {
    if !ctx.api().has_token() {
        println!(
            "{} No session token yet. Shorten a URL or run `shortlink login` first.",
            "ℹ".bold().blue()
        );
        return Ok(());
    }

    let mut controller = ctx.controller(Box::new(NoClipboard));
    controller
        .dispatch(
            UiEvent::RowActivated {
                short_code: short_code.clone(),
            },
            &mut Headless,
        )
        .await;

    let page = controller.page();
    if let Some(message) = &page.error {
        return Err(CliError::CommandError(format!("{}: {}", message, short_code)));
    }
    let Some(result) = &page.result else {
        return Ok(());
    };

    println!("{} {}", "Link".bold().green(), short_code.cyan());
    print_result(result);
    print_analytics(page.analytics.as_ref());

    if let Some(path) = save_qr_path {
        save_qr(result, &path)?;
    }
    Ok(())
}
