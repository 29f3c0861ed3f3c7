//! Shorten command

use colored::Colorize;

use super::helpers::{print_result, save_qr};
use crate::controller::{Headless, NoClipboard, UiEvent};
use crate::interfaces::cli::CliError;
use crate::runtime::ClientContext;
use crate::view::LinkListView;

/// Runs the same submit flow as the TUI: the returned token is persisted
/// and the link list refreshed with it.
pub async fn shorten_link(
    ctx: &ClientContext,
    url: String,
    alias: Option<String>,
    expires_in: Option<u32>,
    save_qr_path: Option<String>,
) -> Result<(), CliError> {
    let had_token = ctx.api().has_token();
    let mut controller = ctx.controller(Box::new(NoClipboard));
    controller
        .dispatch(
            UiEvent::Submit {
                url,
                alias: alias.unwrap_or_default(),
                expires_in,
            },
            &mut Headless,
        )
        .await;

    let page = controller.page();
    if let Some(message) = &page.error {
        return Err(CliError::CommandError(message.clone()));
    }
    let Some(result) = &page.result else {
        return Err(CliError::CommandError(
            "Server returned no short link".to_string(),
        ));
    };

    println!("{} Short link created", "✓".bold().green());
    print_result(result);

    if !had_token && ctx.api().has_token() {
        println!(
            "{} Session token saved to {}",
            "ℹ".bold().blue(),
            ctx.api().token_store().location().dimmed()
        );
    }

    if let Some(LinkListView::Rows(rows)) = &page.links {
        let total = page.link_total.unwrap_or(rows.len() as u64);
        println!(
            "{} You have {} links (shortlink list)",
            "ℹ".bold().blue(),
            total.to_string().green()
        );
    }

    if let Some(path) = save_qr_path {
        save_qr(result, &path)?;
    }

    Ok(())
}
