use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::controller::PageModel;
use crate::interfaces::tui::app::{Focus, ViewState};

/// Draw title bar with version and link count
pub fn draw_title_bar(frame: &mut Frame, page: &PageModel, area: Rect) {
    let mut spans = vec![
        Span::styled("Shortlink", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if let Some(links) = &page.links {
        let total = page.link_total.unwrap_or(links.rows().len() as u64);
        spans.push(Span::styled("| ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!("Links: {} ", total),
            Style::default().fg(Color::Yellow),
        ));
    }

    let title = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw status bar
pub fn draw_status_bar(frame: &mut Frame, page: &PageModel, area: Rect) {
    let (status_text, status_style) = if let Some(error) = &page.error {
        (
            format!("[ERROR] {}", error),
            Style::default().fg(Color::White).bg(Color::Red).bold(),
        )
    } else if page.is_submitting() {
        (
            "Shortening...".to_string(),
            Style::default().fg(Color::Black).bg(Color::Yellow).bold(),
        )
    } else if let Some(notice) = &page.notice {
        (
            format!("[WARN] {}", notice),
            Style::default().fg(Color::Yellow).bold(),
        )
    } else if page.copy.is_active() {
        (
            "[SUCCESS] Copied to clipboard".to_string(),
            Style::default().fg(Color::Black).bg(Color::Green).bold(),
        )
    } else {
        ("Ready".to_string(), Style::default().fg(Color::Cyan))
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(status, area);
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, view: &ViewState, area: Rect) {
    let shortcuts = match view.focus {
        Focus::Url | Focus::Alias => vec![
            ("Tab", "Switch Field", Color::Cyan),
            ("Enter", "Shorten", Color::Green),
            ("Ctrl+Y", "Copy", Color::Yellow),
            ("Esc", "Quit", Color::Magenta),
        ],
        Focus::Links => vec![
            ("Up/Down", "Navigate", Color::Cyan),
            ("Enter", "Details", Color::Green),
            ("o", "Open", Color::Blue),
            ("y", "Copy", Color::Yellow),
            ("r", "Refresh", Color::Cyan),
            ("Tab", "Form", Color::Cyan),
            ("q", "Quit", Color::Magenta),
        ],
    };

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(footer, area);
}
