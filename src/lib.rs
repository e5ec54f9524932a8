//! Flipbook: a paginated magazine reader core
//!
//! This crate lays out a linear sequence of content blocks as flip-book pages:
//! - Heuristic height estimation per block kind (no text measurement)
//! - Greedy pagination with title page breaks and paragraph splitting
//! - A navigation state machine driven by an opaque page-flip widget
//! - Full repagination whenever the viewport profile changes

pub mod content;
pub mod error;
pub mod layout;
pub mod navigation;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::WasmReader;

// Re-export primary types
pub use content::{ContentBlock, ImageRef};
pub use error::ReaderError;
pub use layout::{
    estimate_height, paginate, paginate_with_cover, DeviceClass, Page, PageId, PageKind,
    SizeProfile, TableOfContents, Viewport,
};
pub use navigation::{
    FlipRequest, FlipWidget, FlipbookSettings, HeadlessWidget, Key, NavigationController,
    NavigationState, PageIndicator,
};

/// The reader state combining content, pages and navigation.
///
/// Owns the only copies of the page list and navigation state. Every viewport
/// change that alters the size profile repaginates, clamps navigation and
/// remounts the widget before the next command is handled.
pub struct Reader<W: FlipWidget> {
    blocks: Vec<ContentBlock>,
    cover: ImageRef,
    viewport: Viewport,
    profile: SizeProfile,
    pages: Vec<Page>,
    contents: TableOfContents,
    navigation: NavigationController,
    widget: W,
}

impl<W: FlipWidget> Reader<W> {
    /// Create a reader with the default cover and mount its pages
    pub fn new(blocks: Vec<ContentBlock>, viewport: Viewport, widget: W) -> Self {
        Self::with_cover(blocks, viewport, layout::default_cover(), widget)
    }

    /// Create a reader with custom cover art
    pub fn with_cover(
        blocks: Vec<ContentBlock>,
        viewport: Viewport,
        cover: ImageRef,
        widget: W,
    ) -> Self {
        let profile = SizeProfile::for_viewport(viewport);
        let pages = paginate_with_cover(&blocks, &profile, cover.clone());
        let mut reader = Self {
            blocks,
            cover,
            viewport,
            profile,
            contents: TableOfContents::build(&pages),
            navigation: NavigationController::new(pages.len()),
            pages,
            widget,
        };
        reader.widget.mount(&reader.pages, 0);
        reader
    }

    /// Create a reader from a JSON content source
    pub fn from_json(json: &str, viewport: Viewport, widget: W) -> Result<Self, ReaderError> {
        let blocks = content::from_json(json)?;
        Ok(Self::new(blocks, viewport, widget))
    }

    /// Track a new viewport size. Returns true if the pages were rebuilt.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        self.viewport = viewport;
        let profile = SizeProfile::for_viewport(viewport);
        if profile == self.profile {
            return false;
        }
        self.profile = profile;
        self.repaginate();
        true
    }

    /// Rebuild pages from scratch, clamp navigation, remount the widget on
    /// the clamped page
    fn repaginate(&mut self) {
        let previous = self.pages.len();
        self.pages = paginate_with_cover(&self.blocks, &self.profile, self.cover.clone());
        self.contents = TableOfContents::build(&self.pages);
        self.navigation.on_repaginate(self.pages.len());
        self.widget.mount(&self.pages, self.navigation.index());
        log::debug!(
            "repaginated for {}x{}: {} -> {} pages, at page {}",
            self.viewport.width,
            self.viewport.height,
            previous,
            self.pages.len(),
            self.navigation.index()
        );
    }

    /// Request the next page
    pub fn advance(&mut self) -> bool {
        self.navigation.advance(&mut self.widget)
    }

    /// Request the previous page
    pub fn retreat(&mut self) -> bool {
        self.navigation.retreat(&mut self.widget)
    }

    /// Request a specific page
    pub fn jump_to(&mut self, page: PageId) -> bool {
        self.navigation.jump_to(page.0, &mut self.widget)
    }

    /// Request the page opened by the article with this title
    pub fn jump_to_title(&mut self, title: &str) -> bool {
        match self.contents.page_for(title) {
            Some(page) => self.jump_to(page),
            None => false,
        }
    }

    /// Handle a DOM key name; only the arrow keys turn pages
    pub fn handle_key(&mut self, key: &str) -> bool {
        match Key::from_dom(key) {
            Some(key) => self.navigation.handle_key(key, &mut self.widget),
            None => false,
        }
    }

    /// The widget finished a flip and now shows `index`
    pub fn on_flip(&mut self, index: usize) {
        self.navigation.on_flip(index);
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.pages.get(self.navigation.index())
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn profile(&self) -> &SizeProfile {
        &self.profile
    }

    pub fn navigation(&self) -> NavigationState {
        self.navigation.state()
    }

    pub fn indicator(&self) -> PageIndicator {
        PageIndicator::from(self.navigation.state())
    }

    pub fn contents(&self) -> &TableOfContents {
        &self.contents
    }

    /// Widget settings for the current profile, opening on the current page
    pub fn settings(&self) -> FlipbookSettings {
        FlipbookSettings::for_profile(&self.profile).starting_at(self.navigation.index())
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    /// Swap in a new widget and mount the current pages on it, opened on the
    /// current page
    pub fn set_widget(&mut self, widget: W) {
        self.widget = widget;
        self.widget.mount(&self.pages, self.navigation.index());
    }
}
