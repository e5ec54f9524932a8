//! Magazine content blocks

use serde::{Deserialize, Serialize};

/// Image reference carried by `image` blocks and the cover page
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageRef {
    #[serde(default)]
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// One unit of magazine content.
///
/// Deserialized from `type`-tagged JSON objects. Kinds this crate does not know
/// land in [`ContentBlock::Unknown`] instead of failing the whole document, and
/// missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Title {
        #[serde(default)]
        text: String,
    },
    Author {
        #[serde(default)]
        text: String,
    },
    Date {
        #[serde(default)]
        text: String,
    },
    /// Heading; a missing level is estimated with the fallback cost
    Heading {
        #[serde(default)]
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        level: Option<u8>,
    },
    Paragraph {
        #[serde(default)]
        text: String,
        /// Set on fragments produced by splitting a paragraph across pages
        #[serde(default, skip_serializing_if = "is_false")]
        continuation: bool,
    },
    Image(ImageRef),
    Quote {
        #[serde(default)]
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        author: Option<String>,
    },
    List {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        items: Option<Vec<String>>,
        #[serde(default, skip_serializing_if = "is_false")]
        ordered: bool,
    },
    #[serde(other)]
    Unknown,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl ContentBlock {
    pub fn title(text: impl Into<String>) -> Self {
        ContentBlock::Title { text: text.into() }
    }

    pub fn author(text: impl Into<String>) -> Self {
        ContentBlock::Author { text: text.into() }
    }

    pub fn date(text: impl Into<String>) -> Self {
        ContentBlock::Date { text: text.into() }
    }

    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        ContentBlock::Heading {
            text: text.into(),
            level: Some(level),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentBlock::Paragraph {
            text: text.into(),
            continuation: false,
        }
    }

    /// A paragraph fragment produced by a page split
    pub fn continuation(text: impl Into<String>) -> Self {
        ContentBlock::Paragraph {
            text: text.into(),
            continuation: true,
        }
    }

    pub fn image(src: impl Into<String>) -> Self {
        ContentBlock::Image(ImageRef {
            src: src.into(),
            alt: None,
            caption: None,
        })
    }

    pub fn quote(text: impl Into<String>, author: Option<String>) -> Self {
        ContentBlock::Quote {
            text: text.into(),
            author,
        }
    }

    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ContentBlock::List {
            items: Some(items.into_iter().map(Into::into).collect()),
            ordered: false,
        }
    }

    /// Tag name as used in the content source
    pub fn kind_name(&self) -> &'static str {
        match self {
            ContentBlock::Title { .. } => "title",
            ContentBlock::Author { .. } => "author",
            ContentBlock::Date { .. } => "date",
            ContentBlock::Heading { .. } => "heading",
            ContentBlock::Paragraph { .. } => "paragraph",
            ContentBlock::Image(_) => "image",
            ContentBlock::Quote { .. } => "quote",
            ContentBlock::List { .. } => "list",
            ContentBlock::Unknown => "unknown",
        }
    }

    pub fn is_title(&self) -> bool {
        matches!(self, ContentBlock::Title { .. })
    }

    pub fn is_paragraph(&self) -> bool {
        matches!(self, ContentBlock::Paragraph { .. })
    }

    pub fn is_image(&self) -> bool {
        matches!(self, ContentBlock::Image(_))
    }

    pub fn is_continuation(&self) -> bool {
        matches!(
            self,
            ContentBlock::Paragraph {
                continuation: true,
                ..
            }
        )
    }

    /// Primary text of the block, if the kind has one
    pub fn text(&self) -> Option<&str> {
        match self {
            ContentBlock::Title { text }
            | ContentBlock::Author { text }
            | ContentBlock::Date { text }
            | ContentBlock::Heading { text, .. }
            | ContentBlock::Paragraph { text, .. }
            | ContentBlock::Quote { text, .. } => Some(text),
            ContentBlock::Image(_) | ContentBlock::List { .. } | ContentBlock::Unknown => None,
        }
    }
}
