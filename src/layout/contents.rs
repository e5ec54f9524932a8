//! Table of contents derived from paginated output

use crate::layout::{Page, PageId};
use rustc_hash::FxHashMap;
use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

/// Longest label shown in the contents listing, in grapheme clusters
pub const MAX_LABEL_GRAPHEMES: usize = 48;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentsEntry {
    /// Display label, possibly shortened
    pub label: String,
    /// Full title text
    pub title: String,
    pub page: PageId,
}

/// One entry per article title, in page order
#[derive(Debug, Clone, Default)]
pub struct TableOfContents {
    entries: Vec<ContentsEntry>,
    by_title: FxHashMap<String, PageId>,
}

impl TableOfContents {
    /// Collect the titles opening pages. Titles always start a page, so
    /// every title in the content appears here.
    pub fn build(pages: &[Page]) -> Self {
        let mut toc = Self::default();
        for page in pages {
            let Some(title) = page.title() else {
                continue;
            };
            toc.by_title.entry(title.to_string()).or_insert(page.id);
            toc.entries.push(ContentsEntry {
                label: truncate_label(title, MAX_LABEL_GRAPHEMES),
                title: title.to_string(),
                page: page.id,
            });
        }
        toc
    }

    pub fn entries(&self) -> &[ContentsEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First page opened by a title with exactly this text
    pub fn page_for(&self, title: &str) -> Option<PageId> {
        self.by_title.get(title).copied()
    }
}

/// Shorten `text` to at most `max` grapheme clusters, ending in an ellipsis
/// when anything was cut
pub fn truncate_label(text: &str, max: usize) -> String {
    let text = text.trim();
    if text.graphemes(true).count() <= max {
        return text.to_string();
    }
    let kept: String = text.graphemes(true).take(max.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}
