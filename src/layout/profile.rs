//! Viewport-derived size profiles

use crate::error::ReaderError;
use serde::Serialize;

/// Viewports narrower than this are laid out with the mobile profile
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Vertical space taken by reader chrome (header, hints, controls)
pub const CHROME_HEIGHT: f32 = 240.0;

/// Page size bounds accepted by the flip widget
pub const MIN_PAGE_WIDTH: f32 = 300.0;
pub const MAX_PAGE_WIDTH: f32 = 500.0;
pub const MIN_PAGE_HEIGHT: f32 = 400.0;
pub const MAX_PAGE_HEIGHT: f32 = 700.0;

/// Default page size of the flip widget
pub const DEFAULT_PAGE_WIDTH: f32 = 400.0;
pub const DEFAULT_PAGE_HEIGHT: f32 = 600.0;

/// Horizontal padding around a page (per side on mobile, per page on desktop spreads)
const PAGE_GUTTER: f32 = 24.0;

/// Lowest and highest accepted paragraph split ratios
const MIN_SPLIT_RATIO: f32 = 0.25;
const MAX_SPLIT_RATIO: f32 = 0.75;

/// Host viewport in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Create a viewport, rejecting non-finite or non-positive dimensions
    pub fn new(width: f32, height: f32) -> Result<Self, ReaderError> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(ReaderError::InvalidViewport(width, height));
        }
        Ok(Self { width, height })
    }

    pub fn device_class(&self) -> DeviceClass {
        if self.width < MOBILE_BREAKPOINT {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.device_class() == DeviceClass::Mobile
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Mobile,
    #[default]
    Desktop,
}

/// Size constants for one pagination run.
///
/// All heights are in layout units (CSS pixels for the default presets).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeProfile {
    pub device: DeviceClass,
    pub page_width: f32,
    pub page_height: f32,
    /// Share of the page height usable by content
    pub capacity_fraction: f32,
    /// Maximum accumulated block height per page
    pub page_capacity: f32,
    pub line_height: f32,
    pub words_per_line: usize,
    pub title_height: f32,
    /// Author and date lines
    pub byline_height: f32,
    pub quote_height: f32,
    /// Headings of level 1 and 2
    pub heading_major_height: f32,
    /// Headings of level 3 and below
    pub heading_minor_height: f32,
    pub image_height: f32,
    pub list_item_height: f32,
    /// Cost of unknown or malformed blocks
    pub fallback_height: f32,
    /// Spacing added after every block that fits on the current page
    pub block_margin: f32,
    /// Share of words kept on the first page when a paragraph is split
    pub split_ratio: f32,
}

impl Default for SizeProfile {
    fn default() -> Self {
        Self::desktop()
    }
}

impl SizeProfile {
    /// Desktop preset at the widget's default page size
    pub fn desktop() -> Self {
        let capacity_fraction = 0.8;
        Self {
            device: DeviceClass::Desktop,
            page_width: DEFAULT_PAGE_WIDTH,
            page_height: DEFAULT_PAGE_HEIGHT,
            capacity_fraction,
            page_capacity: DEFAULT_PAGE_HEIGHT * capacity_fraction,
            line_height: 24.0,
            words_per_line: 12,
            title_height: 48.0,
            byline_height: 24.0,
            quote_height: 32.0,
            heading_major_height: 36.0,
            heading_minor_height: 28.0,
            image_height: 220.0,
            list_item_height: 24.0,
            fallback_height: 24.0,
            block_margin: 8.0,
            split_ratio: 0.5,
        }
    }

    /// Mobile preset: narrower lines, a smaller usable share of the page, and
    /// more of a split paragraph kept on the first page
    pub fn mobile() -> Self {
        let capacity_fraction = 0.7;
        Self {
            device: DeviceClass::Mobile,
            page_width: DEFAULT_PAGE_WIDTH,
            page_height: DEFAULT_PAGE_HEIGHT,
            capacity_fraction,
            page_capacity: DEFAULT_PAGE_HEIGHT * capacity_fraction,
            line_height: 22.0,
            words_per_line: 8,
            title_height: 44.0,
            byline_height: 22.0,
            quote_height: 30.0,
            heading_major_height: 32.0,
            heading_minor_height: 26.0,
            image_height: 200.0,
            list_item_height: 22.0,
            fallback_height: 22.0,
            block_margin: 8.0,
            split_ratio: 0.6,
        }
    }

    /// Derive the profile for a host viewport.
    ///
    /// Desktop shows two pages side by side, mobile a single page; the page
    /// height is what is left after the reader chrome. Both are clamped to the
    /// flip widget's bounds.
    pub fn for_viewport(viewport: Viewport) -> Self {
        let (base, width) = match viewport.device_class() {
            DeviceClass::Desktop => (Self::desktop(), viewport.width / 2.0 - 2.0 * PAGE_GUTTER),
            DeviceClass::Mobile => (Self::mobile(), viewport.width - 2.0 * PAGE_GUTTER),
        };
        let height = viewport.height - CHROME_HEIGHT;
        base.with_page_size(width, height)
    }

    /// Resize the page, recomputing capacity from the capacity fraction
    pub fn with_page_size(mut self, width: f32, height: f32) -> Self {
        self.page_width = width.clamp(MIN_PAGE_WIDTH, MAX_PAGE_WIDTH);
        self.page_height = height.clamp(MIN_PAGE_HEIGHT, MAX_PAGE_HEIGHT);
        self.page_capacity = self.page_height * self.capacity_fraction;
        self
    }

    /// Override the page capacity directly
    pub fn with_capacity(mut self, capacity: f32) -> Self {
        self.page_capacity = capacity.max(0.0);
        self
    }

    pub fn with_split_ratio(mut self, ratio: f32) -> Self {
        self.split_ratio = ratio;
        self.split_ratio = self.effective_split_ratio();
        self
    }

    /// Split ratio within the accepted bounds, whatever the field holds.
    /// NaN falls to the lower bound.
    pub fn effective_split_ratio(&self) -> f32 {
        self.split_ratio.max(MIN_SPLIT_RATIO).min(MAX_SPLIT_RATIO)
    }

    pub fn is_mobile(&self) -> bool {
        self.device == DeviceClass::Mobile
    }
}
