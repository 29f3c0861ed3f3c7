//! TUI mode
//!
//! Delegates to the terminal UI in `interfaces::tui`.

use crate::runtime::ClientContext;

pub async fn run_tui(ctx: &ClientContext) -> anyhow::Result<()> {
    crate::interfaces::tui::run_tui(ctx).await
}
