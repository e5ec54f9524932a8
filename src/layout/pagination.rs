//! Pagination of content blocks into flip-book pages

use crate::content::{split_words, ContentBlock, ImageRef};
use crate::layout::{estimate_height, SizeProfile};
use serde::Serialize;
use smallvec::SmallVec;

/// Image shown on the cover when none is configured
pub const DEFAULT_COVER_SRC: &str = "/cover.png";

/// Paragraphs taller than this many lines may be split across pages
const SPLIT_MIN_LINES: f32 = 3.0;

/// Page identifier, sequential from the cover (0).
///
/// Only meaningful within one pagination run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct PageId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    /// Page 0, holding only the cover art
    Cover,
    /// A page opened by a title block
    Article,
    /// Any other page
    Content,
}

/// A page of the flip book
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub id: PageId,
    pub kind: PageKind,
    /// Ordered blocks, never empty
    pub blocks: SmallVec<[ContentBlock; 4]>,
}

impl Page {
    /// Build the cover page from its image
    pub fn cover(image: ImageRef) -> Self {
        let mut blocks = SmallVec::new();
        blocks.push(ContentBlock::Image(image));
        Self {
            id: PageId(0),
            kind: PageKind::Cover,
            blocks,
        }
    }

    pub fn is_cover(&self) -> bool {
        self.kind == PageKind::Cover
    }

    /// Text of the title opening this page, if any
    pub fn title(&self) -> Option<&str> {
        match self.blocks.first() {
            Some(ContentBlock::Title { text }) => Some(text),
            _ => None,
        }
    }
}

/// Default cover art reference
pub fn default_cover() -> ImageRef {
    ImageRef {
        src: DEFAULT_COVER_SRC.to_string(),
        alt: Some("Cover".to_string()),
        caption: None,
    }
}

/// Paginate `blocks` behind the default cover page.
pub fn paginate(blocks: &[ContentBlock], profile: &SizeProfile) -> Vec<Page> {
    paginate_with_cover(blocks, profile, default_cover())
}

/// Paginate `blocks` with greedy first-fit packing.
///
/// Page 0 is always the cover. A title always opens a new page. A paragraph
/// taller than three lines that does not fit is split once by word count with
/// the profile's split ratio; the second fragment is never split again, even
/// if it overflows its own page.
pub fn paginate_with_cover(
    blocks: &[ContentBlock],
    profile: &SizeProfile,
    cover: ImageRef,
) -> Vec<Page> {
    let mut builder = PageBuilder::new(profile, cover);
    for block in blocks {
        builder.push(block);
    }
    let pages = builder.finish();

    log::debug!(
        "paginated {} blocks into {} pages (capacity {:.1}, {:?})",
        blocks.len(),
        pages.len(),
        profile.page_capacity,
        profile.device
    );
    pages
}

/// Accumulator for the page being filled
struct PageBuilder<'a> {
    profile: &'a SizeProfile,
    pages: Vec<Page>,
    current: SmallVec<[ContentBlock; 4]>,
    accumulated: f32,
}

impl<'a> PageBuilder<'a> {
    fn new(profile: &'a SizeProfile, cover: ImageRef) -> Self {
        Self {
            profile,
            pages: vec![Page::cover(cover)],
            current: SmallVec::new(),
            accumulated: 0.0,
        }
    }

    fn push(&mut self, block: &ContentBlock) {
        let height = estimate_height(block, self.profile);
        let capacity = self.profile.page_capacity;
        let margin = self.profile.block_margin;

        if block.is_title() {
            self.flush();
        }

        if self.accumulated + height + margin <= capacity {
            self.current.push(block.clone());
            self.accumulated += height + margin;
            return;
        }

        match block {
            ContentBlock::Paragraph { text, .. }
                if height > SPLIT_MIN_LINES * self.profile.line_height =>
            {
                let ratio = self.profile.effective_split_ratio();
                let (head, tail) = split_words(text, ratio);
                log::trace!(
                    "splitting paragraph ({:.1} units) at ratio {} on page {}",
                    height,
                    ratio,
                    self.pages.len()
                );
                self.current.push(ContentBlock::continuation(head));
                self.flush();
                self.current.push(ContentBlock::continuation(tail));
                self.accumulated = height / 2.0;
            }
            _ => {
                self.flush();
                self.current.push(block.clone());
                self.accumulated = height;
            }
        }
    }

    /// Emit the accumulator as a page, if it holds anything
    fn flush(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let blocks = std::mem::take(&mut self.current);
        let kind = if blocks[0].is_title() {
            PageKind::Article
        } else {
            PageKind::Content
        };
        let id = PageId(self.pages.len());
        log::trace!(
            "page {} complete: {} blocks, {:.1} units",
            id.0,
            blocks.len(),
            self.accumulated
        );
        self.pages.push(Page { id, kind, blocks });
        self.accumulated = 0.0;
    }

    fn finish(mut self) -> Vec<Page> {
        self.flush();
        self.pages
    }
}
