//! Layout: size profiles, height estimation and pagination

mod contents;
mod estimate;
mod pagination;
mod profile;

pub use contents::{truncate_label, ContentsEntry, TableOfContents, MAX_LABEL_GRAPHEMES};
pub use estimate::{estimate_height, paragraph_lines};
pub use pagination::{
    default_cover, paginate, paginate_with_cover, Page, PageId, PageKind, DEFAULT_COVER_SRC,
};
pub use profile::{
    DeviceClass, SizeProfile, Viewport, CHROME_HEIGHT, DEFAULT_PAGE_HEIGHT, DEFAULT_PAGE_WIDTH,
    MAX_PAGE_HEIGHT, MAX_PAGE_WIDTH, MIN_PAGE_HEIGHT, MIN_PAGE_WIDTH, MOBILE_BREAKPOINT,
};
