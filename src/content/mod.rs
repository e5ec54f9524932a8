//! Content model: the read-only block sequence fed to pagination

mod block;
mod words;

pub use block::{ContentBlock, ImageRef};
pub use words::{split_words, word_count};

use crate::error::ReaderError;
use serde::Deserialize;
use serde_json::Value;

/// Parse a JSON array of `type`-tagged content blocks.
///
/// Each element is decoded on its own. Unknown kinds, missing tags and
/// wrongly typed fields degrade to [`ContentBlock::Unknown`]; missing fields
/// take their defaults. Only input that is not a JSON array is rejected.
pub fn from_json(json: &str) -> Result<Vec<ContentBlock>, ReaderError> {
    let values: Vec<Value> = serde_json::from_str(json)?;
    let blocks: Vec<ContentBlock> = values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            ContentBlock::deserialize(value).unwrap_or_else(|err| {
                log::warn!("content block {} is malformed: {}", index, err);
                ContentBlock::Unknown
            })
        })
        .collect();
    let unknown = blocks
        .iter()
        .filter(|block| matches!(block, ContentBlock::Unknown))
        .count();
    if unknown > 0 {
        log::warn!("content source has {} block(s) of unknown kind", unknown);
    }
    log::debug!("loaded {} content blocks", blocks.len());
    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let blocks = from_json(
            r#"[{"type": "title", "text": "A"}, {"type": "paragraph", "text": "b c"}]"#,
        )
        .unwrap();
        assert_eq!(
            blocks,
            vec![ContentBlock::title("A"), ContentBlock::paragraph("b c")]
        );
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        assert!(matches!(
            from_json(r#"{"type": "title"}"#),
            Err(ReaderError::Content(_))
        ));
        assert!(from_json("not json").is_err());
    }

    #[test]
    fn test_from_json_degrades_malformed_blocks() {
        let malformed = [
            r#"{"type": "heading", "level": "2"}"#,
            r#"{"type": "list", "items": ["a", 3]}"#,
            r#"{"text": "no type tag"}"#,
            r#"{"type": "heading", "level": 300}"#,
            r#""loose string""#,
        ];
        for block in malformed {
            let json = format!(r#"[{{"type": "title", "text": "A"}}, {}]"#, block);
            let blocks = from_json(&json).unwrap();
            assert_eq!(
                blocks,
                vec![ContentBlock::title("A"), ContentBlock::Unknown],
                "{}",
                block
            );
        }
    }

    #[test]
    fn test_from_json_empty() {
        assert!(from_json("[]").unwrap().is_empty());
    }
}
