use clap::Parser;
use tracing::debug;

use shortlink_client::cli::Cli;
use shortlink_client::config::init_config;
use shortlink_client::runtime::ClientContext;
use shortlink_client::runtime::modes::{Mode, detect_mode};
use shortlink_client::system::{ConsoleSink, init_logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = init_config(cli.config.as_deref());
    let mode = detect_mode(cli.command.as_ref());

    // TUI 模式下终端由界面独占，控制台日志丢弃
    #[cfg(feature = "tui")]
    let console = if mode == Mode::Tui {
        ConsoleSink::Discard
    } else {
        ConsoleSink::Stderr
    };
    #[cfg(not(feature = "tui"))]
    let console = ConsoleSink::Stderr;
    let _guard = init_logging(&config.logging, console);
    debug!("Running in {:?} mode", mode);

    let ctx = ClientContext::from_config(config, cli.ephemeral);

    match mode {
        #[cfg(feature = "tui")]
        Mode::Tui => shortlink_client::runtime::modes::run_tui(&ctx).await,
        #[cfg(feature = "cli")]
        Mode::Cli => {
            let Some(command) = cli.command else {
                return Ok(());
            };
            if let Err(e) = shortlink_client::runtime::modes::run_cli(&ctx, command).await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
            Ok(())
        }
        Mode::Unknown => {
            eprintln!("No interface enabled. Build with the `cli` or `tui` feature.");
            std::process::exit(2);
        }
    }
}
