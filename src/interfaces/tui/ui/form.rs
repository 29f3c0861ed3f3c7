//! Shorten form: URL, alias and the submit control

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::widgets::InputField;
use crate::controller::PageModel;
use crate::interfaces::tui::app::{Focus, ViewState};
use crate::interfaces::tui::constants::colors;

pub fn draw_form(frame: &mut Frame, page: &PageModel, view: &ViewState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // URL
            Constraint::Percentage(25), // Alias
            Constraint::Percentage(15), // Submit
        ])
        .split(area);

    let disabled = !page.submit_enabled();

    InputField::new("URL to shorten", &page.form.url)
        .required()
        .active(view.focus == Focus::Url)
        .disabled(disabled)
        .render(frame, chunks[0]);

    InputField::new("Alias", &page.form.alias)
        .placeholder("optional")
        .active(view.focus == Focus::Alias)
        .disabled(disabled)
        .render(frame, chunks[1]);

    let button_style = if disabled {
        Style::default().fg(colors::MUTED)
    } else {
        Style::default().fg(Color::Black).bg(colors::SUCCESS).bold()
    };
    let button = Paragraph::new(page.submit_label())
        .style(button_style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    frame.render_widget(button, chunks[2]);
}
