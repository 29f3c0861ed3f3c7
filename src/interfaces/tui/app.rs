//! TUI-only view state
//!
//! Page content lives in the controller's `PageModel`; this holds what only
//! a keyboard UI needs: which widget has focus and which row is highlighted.

use crate::controller::PageModel;
use crate::view::LinkRow;

/// 当前聚焦的区域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Url,
    Alias,
    Links,
}

impl Focus {
    /// Tab 顺序
    const ALL: [Self; 3] = [Self::Url, Self::Alias, Self::Links];

    /// 切换到下一个区域
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|x| x == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// 切换到上一个区域
    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|x| x == self).unwrap_or(0);
        if idx == 0 {
            Self::ALL[Self::ALL.len() - 1]
        } else {
            Self::ALL[idx - 1]
        }
    }

    pub fn is_form(&self) -> bool {
        matches!(self, Self::Url | Self::Alias)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub focus: Focus,
    pub selected_index: usize,
}

impl ViewState {
    pub fn selected_row<'a>(&self, page: &'a PageModel) -> Option<&'a LinkRow> {
        page.links
            .as_ref()
            .and_then(|links| links.rows().get(self.selected_index))
    }

    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self, page: &PageModel) {
        let len = page.links.as_ref().map_or(0, |l| l.rows().len());
        if self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    /// Keep the highlight inside the list after a refresh shrank it
    pub fn clamp_selection(&mut self, page: &PageModel) {
        let len = page.links.as_ref().map_or(0, |l| l.rows().len());
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::LinkListView;

    fn page_with_rows(n: usize) -> PageModel {
        let rows = (0..n)
            .map(|i| LinkRow {
                short_code: format!("c{}", i),
                short_url: format!("https://s.example/c{}", i),
                original_url: "https://example.com".into(),
                clicks: "0 clicks".into(),
                created: "2024-01-01".into(),
            })
            .collect();
        PageModel {
            links: Some(LinkListView::Rows(rows)),
            ..Default::default()
        }
    }

    #[test]
    fn test_focus_cycle() {
        assert_eq!(Focus::Url.next(), Focus::Alias);
        assert_eq!(Focus::Alias.next(), Focus::Links);
        assert_eq!(Focus::Links.next(), Focus::Url);
        assert_eq!(Focus::Url.prev(), Focus::Links);
        assert!(Focus::Alias.is_form());
        assert!(!Focus::Links.is_form());
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let page = page_with_rows(2);
        let mut view = ViewState::default();
        view.move_selection_up();
        assert_eq!(view.selected_index, 0);
        view.move_selection_down(&page);
        view.move_selection_down(&page);
        assert_eq!(view.selected_index, 1);
        assert_eq!(view.selected_row(&page).unwrap().short_code, "c1");

        let shrunk = page_with_rows(1);
        view.clamp_selection(&shrunk);
        assert_eq!(view.selected_index, 0);
    }

    #[test]
    fn test_no_row_before_list_loads() {
        let page = PageModel::default();
        let view = ViewState::default();
        assert!(view.selected_row(&page).is_none());
    }
}
