//! Page indicator shown next to the navigation buttons

use crate::navigation::NavigationState;
use serde::Serialize;
use std::fmt;

/// Navigation UI snapshot with 1-based page numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageIndicator {
    /// Current page (1-based), 0 when there are no pages
    pub current_page: usize,
    pub total_pages: usize,
    pub can_go_prev: bool,
    pub can_go_next: bool,
}

impl From<NavigationState> for PageIndicator {
    fn from(state: NavigationState) -> Self {
        Self {
            current_page: if state.is_empty() { 0 } else { state.index + 1 },
            total_pages: state.count,
            can_go_prev: state.can_go_prev(),
            can_go_next: state.can_go_next(),
        }
    }
}

impl PageIndicator {
    /// Header label for a two-page spread with the cover shown alone:
    /// `Page 1 of 9`, then `Page 2-3 of 9`, `Page 4-5 of 9`, ...
    pub fn spread_label(&self) -> String {
        if self.current_page <= 1 || self.total_pages <= 1 {
            return format!("Page {} of {}", self.current_page, self.total_pages);
        }
        // Spreads pair pages (2,3), (4,5), ... after the cover
        let left = self.current_page - (self.current_page % 2 == 1) as usize;
        let right = (left + 1).min(self.total_pages);
        if right == left {
            format!("Page {} of {}", left, self.total_pages)
        } else {
            format!("Page {}-{} of {}", left, right, self.total_pages)
        }
    }
}

impl fmt::Display for PageIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.current_page, self.total_pages)
    }
}
