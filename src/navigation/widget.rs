//! Seam to the page-flip widget that animates and displays pages

use crate::layout::{
    Page, SizeProfile, DEFAULT_PAGE_HEIGHT, DEFAULT_PAGE_WIDTH, MAX_PAGE_HEIGHT, MAX_PAGE_WIDTH,
    MIN_PAGE_HEIGHT, MIN_PAGE_WIDTH,
};
use serde::Serialize;

/// The page-flip widget.
///
/// The widget owns rendering and animation. Flip requests are fire-and-forget:
/// once a flip completes (including drags and swipes the widget handles on
/// its own) the host reports the visible page through
/// [`NavigationController::on_flip`](crate::NavigationController::on_flip).
pub trait FlipWidget {
    /// Replace the displayed pages and open on page `start`
    fn mount(&mut self, pages: &[Page], start: usize);
    fn flip_next(&mut self);
    fn flip_prev(&mut self);
    /// Turn directly to `index`
    fn flip_to(&mut self, index: usize);
}

/// A request issued to the widget and not yet confirmed by a flip report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "camelCase")]
pub enum FlipRequest {
    Next,
    Prev,
    To(usize),
}

/// Widget without a display. Records what it was asked to do.
#[derive(Debug, Clone, Default)]
pub struct HeadlessWidget {
    /// Page count of the last mount
    pub mounted: usize,
    /// Page the last mount opened on
    pub start: usize,
    pub mounts: usize,
    pub requests: Vec<FlipRequest>,
}

impl HeadlessWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_request(&self) -> Option<FlipRequest> {
        self.requests.last().copied()
    }
}

impl FlipWidget for HeadlessWidget {
    fn mount(&mut self, pages: &[Page], start: usize) {
        self.mounted = pages.len();
        self.start = start;
        self.mounts += 1;
    }

    fn flip_next(&mut self) {
        self.requests.push(FlipRequest::Next);
    }

    fn flip_prev(&mut self) {
        self.requests.push(FlipRequest::Prev);
    }

    fn flip_to(&mut self, index: usize) {
        self.requests.push(FlipRequest::To(index));
    }
}

/// Presentation parameters handed to the widget on mount
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlipbookSettings {
    pub width: f32,
    pub height: f32,
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
    pub show_cover: bool,
    pub use_portrait: bool,
    pub draw_shadow: bool,
    pub max_shadow_opacity: f32,
    /// Flip animation length in milliseconds
    pub flipping_time: u32,
    /// Minimum swipe length in pixels that turns a page
    pub swipe_distance: f32,
    /// Whether pages can be dragged with the mouse
    pub use_mouse_events: bool,
    pub mobile_scroll_support: bool,
    pub start_page: usize,
}

impl Default for FlipbookSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_PAGE_WIDTH,
            height: DEFAULT_PAGE_HEIGHT,
            min_width: MIN_PAGE_WIDTH,
            max_width: MAX_PAGE_WIDTH,
            min_height: MIN_PAGE_HEIGHT,
            max_height: MAX_PAGE_HEIGHT,
            show_cover: true,
            use_portrait: true,
            draw_shadow: true,
            max_shadow_opacity: 0.5,
            flipping_time: 800,
            swipe_distance: 30.0,
            use_mouse_events: true,
            mobile_scroll_support: false,
            start_page: 0,
        }
    }
}

impl FlipbookSettings {
    /// Settings sized to the profile's pages. Mouse dragging is turned off on
    /// mobile, where swipes are used instead.
    pub fn for_profile(profile: &SizeProfile) -> Self {
        Self {
            width: profile.page_width,
            height: profile.page_height,
            use_mouse_events: !profile.is_mobile(),
            ..Self::default()
        }
    }

    /// Open on `page` instead of the cover
    pub fn starting_at(mut self, page: usize) -> Self {
        self.start_page = page;
        self
    }
}
