use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, TableState},
};

use crate::controller::PageModel;
use crate::interfaces::tui::app::{Focus, ViewState};
use crate::interfaces::tui::constants::{URL_TRUNCATE_LENGTH, truncate};
use crate::view::{EMPTY_LIST_MESSAGE, LinkListView};

fn list_block(title: String, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }))
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
}

fn placeholder(lines: Vec<Line<'static>>, block: Block<'static>) -> Paragraph<'static> {
    let mut text = vec![Line::from(""), Line::from("")];
    text.extend(lines);
    Paragraph::new(text).block(block).alignment(Alignment::Center)
}

pub fn draw_link_list(frame: &mut Frame, page: &PageModel, view: &ViewState, area: Rect) {
    let focused = view.focus == Focus::Links;

    let rows = match &page.links {
        // list never loaded: no session token yet
        None => {
            let hint = placeholder(
                vec![
                    Line::from(Span::styled(
                        "Your links will appear here",
                        Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                    Line::from(Span::styled(
                        "Shorten a URL to start a session",
                        Style::default().fg(Color::DarkGray),
                    )),
                ],
                list_block("My Links".to_string(), focused),
            );
            frame.render_widget(hint, area);
            return;
        }
        Some(LinkListView::Empty) => {
            let empty = placeholder(
                vec![Line::from(Span::styled(
                    EMPTY_LIST_MESSAGE,
                    Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
                ))],
                list_block("My Links".to_string(), focused),
            );
            frame.render_widget(empty, area);
            return;
        }
        Some(LinkListView::Rows(rows)) => rows,
    };

    let header = Row::new(vec![
        Span::styled("Short URL", Style::default().fg(Color::Yellow).bold()),
        Span::styled("Original URL", Style::default().fg(Color::Yellow).bold()),
        Span::styled("Clicks", Style::default().fg(Color::Yellow).bold()),
        Span::styled("Created", Style::default().fg(Color::Yellow).bold()),
    ])
    .bottom_margin(1);

    let table_rows: Vec<Row> = rows
        .iter()
        .map(|row| {
            let selected_detail = page.selected.as_deref() == Some(row.short_code.as_str());
            let url_style = if selected_detail {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED)
            };
            Row::new(vec![
                Span::styled(row.short_url.clone(), url_style),
                Span::styled(
                    truncate(&row.original_url, URL_TRUNCATE_LENGTH),
                    Style::default().fg(Color::Blue),
                ),
                Span::styled(row.clicks.clone(), Style::default().fg(Color::Green)),
                Span::styled(row.created.clone(), Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    let title = match page.link_total {
        Some(total) if total > rows.len() as u64 => {
            format!("My Links ({} of {})", rows.len(), total)
        }
        _ => format!("My Links ({})", rows.len()),
    };

    let table = Table::new(
        table_rows,
        [
            Constraint::Min(24),    // Short URL
            Constraint::Min(20),    // Original URL
            Constraint::Length(11), // Clicks
            Constraint::Length(11), // Created
        ],
    )
    .header(header)
    .block(list_block(title, focused))
    .row_highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
    .highlight_symbol("▶ ")
    .column_spacing(1);

    let mut state = TableState::default();
    if focused {
        state.select(Some(view.selected_index));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
