//! Result panel: short URL, copy control, QR code and analytics

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::controller::PageModel;
use crate::interfaces::tui::constants::colors;
use crate::view::AnalyticsView;

/// Tallest QR code drawn, in terminal rows
const QR_MAX_ROWS: usize = 20;

fn analytics_lines(analytics: &AnalyticsView) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Total clicks: {}", analytics.total_clicks),
            Style::default()
                .fg(colors::SUCCESS)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    for section in &analytics.sections {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            section.title,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        for entry in &section.entries {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{}: {}", entry.label, entry.count),
                    Style::default().fg(Color::White),
                ),
            ]));
        }
    }
    lines
}

pub fn draw_result_panel(frame: &mut Frame, page: &PageModel, area: Rect) {
    let block = Block::default()
        .title("Result")
        .title_style(Style::default().fg(Color::Cyan).bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    if let Some(error) = &page.error {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                error.clone(),
                Style::default().fg(colors::ERROR).add_modifier(Modifier::BOLD),
            )),
        ];
        let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    let Some(result) = &page.result else {
        let text = vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                "Shorten a URL or select a link",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    };

    let copy_style = if page.copy.is_active() {
        Style::default().fg(Color::Black).bg(colors::SUCCESS).bold()
    } else {
        Style::default().fg(colors::WARNING).bold()
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut head = vec![
        Line::from(""),
        Line::from(Span::styled("Short URL:", Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled(
            result.short_url.clone(),
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(format!("[{}]", page.copy.label()), copy_style),
            Span::styled(" (y / Ctrl+Y)", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    if let Some(expires_at) = result.expires_at {
        head.push(Line::from(vec![
            Span::styled("Expires:   ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                expires_at.format("%Y-%m-%d %H:%M").to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]));
    }

    let room = inner.height.saturating_sub(wrapped_height(&head, inner.width)) as usize;
    let qr = result
        .qr_image
        .as_ref()
        .and_then(|qr| qr.fit(inner.width as usize, room.min(QR_MAX_ROWS)));

    if qr.is_none() && result.qr_code.is_some() {
        head.push(Line::from(vec![
            Span::styled("QR code:   ", Style::default().fg(Color::DarkGray)),
            Span::styled("--save-qr", Style::default().fg(Color::White)),
        ]));
    }

    let qr_lines: Vec<Line> = qr
        .map(|qr| {
            qr.half_block_rows()
                .into_iter()
                .map(|row| Line::from(Span::styled(row, qr_style())))
                .collect()
        })
        .unwrap_or_default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(wrapped_height(&head, inner.width)),
            Constraint::Length(qr_lines.len() as u16),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(head).wrap(Wrap { trim: true }), chunks[0]);
    // no wrapping: light modules at the line start must survive
    frame.render_widget(Paragraph::new(qr_lines), chunks[1]);

    if let Some(analytics) = &page.analytics {
        frame.render_widget(
            Paragraph::new(analytics_lines(analytics)).wrap(Wrap { trim: true }),
            chunks[2],
        );
    }
}

fn qr_style() -> Style {
    Style::default().fg(Color::Black).bg(Color::White)
}

/// Rows `lines` occupy once wrapped to `width`
fn wrapped_height(lines: &[Line], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = lines.iter().map(|l| l.width().max(1).div_ceil(width)).sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}
