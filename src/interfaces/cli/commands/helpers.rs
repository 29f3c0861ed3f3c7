//! Shared output helpers for CLI commands

use std::path::Path;

use colored::Colorize;

use crate::errors::{ClientError, Result};
use crate::view::{AnalyticsView, LinkRow, ResultView, decode_data_url};

/// Largest QR code printed inline, in terminal cells
const QR_MAX_COLS: usize = 60;
const QR_MAX_ROWS: usize = 30;

/// Write the QR image of `result` to `path`
pub fn save_qr(result: &ResultView, path: &str) -> Result<()> {
    let qr = result
        .qr_code
        .as_deref()
        .ok_or_else(|| ClientError::validation("This link has no QR code"))?;
    let bytes = decode_data_url(qr)?;

    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;

    println!("{} QR code saved to {}", "✓".bold().green(), path.blue());
    Ok(())
}

/// Half-block QR rows to print, if the image decodes and fits
pub fn qr_lines(result: &ResultView) -> Option<Vec<String>> {
    let qr = result.qr_image.as_ref()?.fit(QR_MAX_COLS, QR_MAX_ROWS)?;
    Some(qr.half_block_rows())
}

pub fn print_result(result: &ResultView) {
    println!("  {} {}", "Short URL:".bold(), result.short_url.cyan().underline());
    if let Some(expires_at) = result.expires_at {
        println!(
            "  {} {}",
            "Expires:".bold(),
            expires_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string()
                .yellow()
        );
    }

    match qr_lines(result) {
        Some(rows) => {
            println!();
            for row in rows {
                println!("  {}", row.black().on_white());
            }
        }
        None if result.qr_code.is_some() => {
            println!("  {} {}", "QR code:".bold(), "use --save-qr PATH".dimmed());
        }
        None => {}
    }
}

pub fn print_rows(rows: &[LinkRow]) {
    for row in rows {
        println!(
            "  {} {} {}",
            row.short_code.cyan(),
            "->".dimmed(),
            row.original_url.blue().underline()
        );
        println!(
            "    {}  {}  {}",
            row.short_url,
            row.clicks.dimmed().cyan(),
            row.created.dimmed()
        );
    }
}

pub fn print_analytics(analytics: Option<&AnalyticsView>) {
    let Some(analytics) = analytics else {
        println!("{} No clicks yet", "ℹ".bold().blue());
        return;
    };

    println!();
    println!(
        "{} {}",
        "Total clicks:".bold().green(),
        analytics.total_clicks.to_string().green()
    );
    for section in &analytics.sections {
        println!("  {}", section.title.bold());
        for entry in &section.entries {
            println!("    {}: {}", entry.label, entry.count.to_string().cyan());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_qr_writes_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("qr").join("code.png");
        let result = ResultView::new(
            "https://s.example/a",
            Some("data:image/png;base64,aGVsbG8="),
            None,
        );
        save_qr(&result, path.to_str().unwrap()).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"hello");
    }

    #[test]
    fn test_save_qr_without_code() {
        let result = ResultView::new("https://s.example/a", None, None);
        let err = save_qr(&result, "unused.png").unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[test]
    fn test_qr_lines_only_for_decodable_images() {
        let result = ResultView::new(
            "https://s.example/a",
            Some("data:image/png;base64,aGVsbG8="),
            None,
        );
        assert_eq!(qr_lines(&result), None);
    }
}
