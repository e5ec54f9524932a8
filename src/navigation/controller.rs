//! Navigation state machine over the current page list

use crate::navigation::{FlipRequest, FlipWidget, Key};
use serde::Serialize;

/// Visible page against the page count of the latest pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    /// Current page (0-based)
    pub index: usize,
    /// Total page count
    pub count: usize,
}

impl NavigationState {
    pub fn new(count: usize) -> Self {
        Self { index: 0, count }
    }

    pub fn can_go_prev(&self) -> bool {
        self.count > 0 && self.index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.index + 1 < self.count
    }

    /// No pages: both directions disabled
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Largest valid index, or 0 when there are no pages
    pub fn last_index(&self) -> usize {
        self.count.saturating_sub(1)
    }
}

/// Turns page-flip commands into bounded navigation state.
///
/// Requests go to the widget; the index only moves when the widget reports a
/// completed flip, since the widget may land on a different page than asked
/// (for example when it shows two-page spreads).
#[derive(Debug, Clone, Default)]
pub struct NavigationController {
    state: NavigationState,
    pending: Option<FlipRequest>,
}

impl NavigationController {
    pub fn new(count: usize) -> Self {
        Self {
            state: NavigationState::new(count),
            pending: None,
        }
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn index(&self) -> usize {
        self.state.index
    }

    pub fn count(&self) -> usize {
        self.state.count
    }

    pub fn can_go_prev(&self) -> bool {
        self.state.can_go_prev()
    }

    pub fn can_go_next(&self) -> bool {
        self.state.can_go_next()
    }

    /// Last request not yet confirmed by a flip report
    pub fn pending(&self) -> Option<FlipRequest> {
        self.pending
    }

    /// Ask the widget for the next page. No-op on the last page.
    pub fn advance<W: FlipWidget + ?Sized>(&mut self, widget: &mut W) -> bool {
        if !self.can_go_next() {
            return false;
        }
        log::debug!("flip next from page {}/{}", self.state.index, self.state.count);
        self.pending = Some(FlipRequest::Next);
        widget.flip_next();
        true
    }

    /// Ask the widget for the previous page. No-op on the first page.
    pub fn retreat<W: FlipWidget + ?Sized>(&mut self, widget: &mut W) -> bool {
        if !self.can_go_prev() {
            return false;
        }
        log::debug!("flip prev from page {}/{}", self.state.index, self.state.count);
        self.pending = Some(FlipRequest::Prev);
        widget.flip_prev();
        true
    }

    /// Ask the widget to turn to `target`. No-op when out of range or
    /// already there.
    pub fn jump_to<W: FlipWidget + ?Sized>(&mut self, target: usize, widget: &mut W) -> bool {
        if target >= self.state.count || target == self.state.index {
            return false;
        }
        log::debug!("flip to page {} from {}", target, self.state.index);
        self.pending = Some(FlipRequest::To(target));
        widget.flip_to(target);
        true
    }

    /// Apply an arrow key, gated by the current availability
    pub fn handle_key<W: FlipWidget + ?Sized>(&mut self, key: Key, widget: &mut W) -> bool {
        match key {
            Key::ArrowLeft => self.retreat(widget),
            Key::ArrowRight => self.advance(widget),
        }
    }

    /// Adopt the page the widget reports as visible.
    ///
    /// Covers both confirmations of our own requests and flips the widget
    /// performed by itself. Reports beyond the last page are clamped.
    pub fn on_flip(&mut self, reported: usize) {
        self.pending = None;
        if self.state.is_empty() {
            log::warn!("flip to page {} reported with no pages", reported);
            return;
        }
        let last = self.state.last_index();
        if reported > last {
            log::warn!("flip to page {} beyond last page {}, clamping", reported, last);
        }
        self.state.index = reported.min(last);
    }

    /// Take a new page count after repagination, clamping the index and
    /// dropping any request issued against the old pages.
    pub fn on_repaginate(&mut self, new_count: usize) {
        let previous = self.state;
        self.state.count = new_count;
        self.state.index = previous.index.min(self.state.last_index());
        if let Some(request) = self.pending.take() {
            log::debug!("dropping {:?} issued before repagination", request);
        }
        if self.state.index != previous.index {
            log::debug!(
                "page index clamped {} -> {} ({} -> {} pages)",
                previous.index,
                self.state.index,
                previous.count,
                new_count
            );
        }
    }
}
