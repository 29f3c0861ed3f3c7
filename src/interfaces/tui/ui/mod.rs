// UI submodules
mod common;
mod form;
mod link_list;
mod result_panel;
pub mod widgets;

pub use common::{draw_footer, draw_status_bar, draw_title_bar};
pub use form::draw_form;
pub use link_list::draw_link_list;
pub use result_panel::draw_result_panel;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::app::ViewState;
use crate::controller::PageModel;

/// Main UI rendering entry point
pub fn draw(frame: &mut Frame, page: &PageModel, view: &ViewState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Form
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, page, main_chunks[0]);
    draw_form(frame, page, view, main_chunks[1]);

    // Dual-panel layout: link list | result + analytics
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main_chunks[2]);

    draw_link_list(frame, page, view, content_chunks[0]);
    draw_result_panel(frame, page, content_chunks[1]);

    draw_status_bar(frame, page, main_chunks[3]);
    draw_footer(frame, view, main_chunks[4]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{AnalyticsEntry, AnalyticsSection, AnalyticsView, LinkListView, ResultView};
    use ratatui::{Terminal, backend::TestBackend};

    fn render(page: &PageModel, view: &ViewState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| draw(f, page, view)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_empty_list_state() {
        let page = PageModel {
            links: Some(LinkListView::Empty),
            ..Default::default()
        };
        let screen = render(&page, &ViewState::default());
        assert!(screen.contains("No links yet"));
    }

    #[test]
    fn test_error_replaces_result() {
        let mut page = PageModel::default();
        page.error = Some("Alias already taken".into());
        let screen = render(&page, &ViewState::default());
        assert!(screen.contains("Alias already taken"));
        assert!(!screen.contains("Short URL"));
    }

    #[test]
    fn test_result_and_analytics_drawn() {
        let page = PageModel {
            result: Some(ResultView::new(
                "https://s.example/abc123",
                Some("data:image/png;base64,AA=="),
                None,
            )),
            analytics: Some(AnalyticsView {
                total_clicks: 9,
                sections: vec![AnalyticsSection {
                    title: "Countries",
                    entries: vec![AnalyticsEntry {
                        label: "US".into(),
                        count: 9,
                    }],
                }],
            }),
            ..Default::default()
        };
        let screen = render(&page, &ViewState::default());
        assert!(screen.contains("https://s.example/abc123"));
        assert!(screen.contains("[Copy]"));
        assert!(screen.contains("Total clicks: 9"));
        assert!(screen.contains("Countries"));
        assert!(screen.contains("US: 9"));
        // undecodable image falls back to the export hint
        assert!(screen.contains("--save-qr"));
    }

    #[test]
    fn test_qr_code_drawn_with_half_blocks() {
        let url = crate::view::qr::png_data_url(&crate::view::qr::FINDER, 4, 8);
        let page = PageModel {
            result: Some(ResultView::new("https://s.example/abc123", Some(&url), None)),
            ..Default::default()
        };
        let screen = render(&page, &ViewState::default());
        let blocks = screen.chars().filter(|c| matches!(c, '█' | '▀' | '▄')).count();
        // finder pattern covers 24 cells
        assert!(blocks >= 20, "expected QR cells, found {}", blocks);
        assert!(screen.contains("▄▄▄▄▄▄▄"));
        assert!(!screen.contains("--save-qr"));
    }

    #[test]
    fn test_submitting_label() {
        let mut page = PageModel::default();
        page.phase = crate::controller::PagePhase::Submitting;
        let screen = render(&page, &ViewState::default());
        assert!(screen.contains("Shortening..."));
    }
}
