//! List links command

use colored::Colorize;

use super::helpers::print_rows;
use crate::interfaces::cli::CliError;
use crate::runtime::ClientContext;
use crate::view::{EMPTY_LIST_MESSAGE, LinkListView, link_list_view};

/// Unlike the TUI refresh, list failures are reported here since listing
/// is the whole point of the command.
pub async fn list_links(ctx: &ClientContext) -> Result<(), CliError> {
    let Some(page) = ctx.api().list_my_links().await? else {
        println!(
            "{} No session token yet. Shorten a URL or run `shortlink login` first.",
            "ℹ".bold().blue()
        );
        return Ok(());
    };

    match link_list_view(page.links(), &ctx.config().ui.date_format) {
        LinkListView::Empty => println!("{} {}", "ℹ".bold().blue(), EMPTY_LIST_MESSAGE),
        LinkListView::Rows(rows) => {
            println!("{}", "Your links:".bold().green());
            println!();
            print_rows(&rows);
            println!();
            println!(
                "{} Showing {} of {} links",
                "ℹ".bold().blue(),
                rows.len().to_string().green(),
                page.total.unwrap_or(rows.len() as u64).to_string().green()
            );
        }
    }
    Ok(())
}
