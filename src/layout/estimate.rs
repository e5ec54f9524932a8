//! Heuristic block height estimates

use crate::content::{word_count, ContentBlock};
use crate::layout::SizeProfile;

/// Estimate the vertical footprint of `block` in layout units.
///
/// Deterministic and never negative. Paragraph height is a line-count
/// approximation from the profile's words-per-line, not a text measurement.
pub fn estimate_height(block: &ContentBlock, profile: &SizeProfile) -> f32 {
    let height = match block {
        ContentBlock::Title { .. } => profile.title_height,
        ContentBlock::Author { .. } | ContentBlock::Date { .. } => profile.byline_height,
        ContentBlock::Quote { .. } => profile.quote_height,
        ContentBlock::Heading { level, .. } => match level {
            Some(0..=2) => profile.heading_major_height,
            Some(_) => profile.heading_minor_height,
            None => profile.fallback_height,
        },
        ContentBlock::Paragraph { text, .. } => paragraph_height(text, profile),
        ContentBlock::Image(_) => profile.image_height,
        ContentBlock::List { items, .. } => match items {
            Some(items) => items.len() as f32 * profile.list_item_height,
            None => profile.fallback_height,
        },
        ContentBlock::Unknown => profile.fallback_height,
    };

    if height.is_finite() {
        height.max(0.0)
    } else {
        profile.fallback_height.max(0.0)
    }
}

/// Number of estimated lines a paragraph occupies
pub fn paragraph_lines(text: &str, profile: &SizeProfile) -> usize {
    word_count(text).div_ceil(profile.words_per_line.max(1))
}

fn paragraph_height(text: &str, profile: &SizeProfile) -> f32 {
    paragraph_lines(text, profile) as f32 * profile.line_height
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_fixed_costs() {
        let profile = SizeProfile::desktop();
        assert_eq!(estimate_height(&ContentBlock::title("A"), &profile), 48.0);
        assert_eq!(estimate_height(&ContentBlock::author("B"), &profile), 24.0);
        assert_eq!(estimate_height(&ContentBlock::date("June 28, 2025"), &profile), 24.0);
        assert_eq!(estimate_height(&ContentBlock::quote("q", None), &profile), 32.0);
        assert_eq!(estimate_height(&ContentBlock::image("/a.png"), &profile), 220.0);
    }

    #[test]
    fn test_bylines_smaller_than_title() {
        for profile in [SizeProfile::desktop(), SizeProfile::mobile()] {
            let title = estimate_height(&ContentBlock::title("A"), &profile);
            for block in [
                ContentBlock::author("B"),
                ContentBlock::date("C"),
                ContentBlock::quote("D", Some("E".to_string())),
            ] {
                assert!(estimate_height(&block, &profile) < title);
            }
        }
    }

    #[test]
    fn test_device_class_costs_differ() {
        let desktop = SizeProfile::desktop();
        let mobile = SizeProfile::mobile();
        let title = ContentBlock::title("A");
        let image = ContentBlock::image("/a.png");
        assert_ne!(estimate_height(&title, &desktop), estimate_height(&title, &mobile));
        assert_ne!(estimate_height(&image, &desktop), estimate_height(&image, &mobile));
    }

    #[test]
    fn test_heading_levels() {
        let profile = SizeProfile::desktop();
        let h2 = estimate_height(&ContentBlock::heading("Intro", 2), &profile);
        let h3 = estimate_height(&ContentBlock::heading("Detail", 3), &profile);
        let h5 = estimate_height(&ContentBlock::heading("Fine", 5), &profile);
        assert!(h2 > h3);
        assert_eq!(h3, h5);
        assert_eq!(estimate_height(&ContentBlock::heading("Top", 1), &profile), h2);
    }

    #[test]
    fn test_paragraph_lines() {
        let profile = SizeProfile {
            words_per_line: 10,
            line_height: 24.0,
            ..SizeProfile::desktop()
        };
        assert_eq!(estimate_height(&ContentBlock::paragraph(words(30)), &profile), 72.0);
        assert_eq!(estimate_height(&ContentBlock::paragraph(words(31)), &profile), 96.0);
        assert_eq!(estimate_height(&ContentBlock::paragraph(words(1)), &profile), 24.0);
        assert_eq!(estimate_height(&ContentBlock::paragraph(""), &profile), 0.0);
    }

    #[test]
    fn test_list_items() {
        let profile = SizeProfile::desktop();
        let list = ContentBlock::list(["a", "b", "c"]);
        assert_eq!(estimate_height(&list, &profile), 3.0 * profile.list_item_height);
    }

    #[test]
    fn test_malformed_blocks_use_fallback() {
        let profile = SizeProfile::desktop();
        let headless = ContentBlock::Heading {
            text: "No level".to_string(),
            level: None,
        };
        let itemless = ContentBlock::List {
            items: None,
            ordered: true,
        };
        assert_eq!(estimate_height(&headless, &profile), profile.fallback_height);
        assert_eq!(estimate_height(&itemless, &profile), profile.fallback_height);
        assert_eq!(estimate_height(&ContentBlock::Unknown, &profile), profile.fallback_height);
    }

    #[test]
    fn test_zero_words_per_line_does_not_divide_by_zero() {
        let profile = SizeProfile {
            words_per_line: 0,
            ..SizeProfile::desktop()
        };
        let height = estimate_height(&ContentBlock::paragraph(words(3)), &profile);
        assert_eq!(height, 3.0 * profile.line_height);
    }

    #[test]
    fn test_never_negative() {
        let profile = SizeProfile {
            image_height: -10.0,
            title_height: f32::NAN,
            ..SizeProfile::desktop()
        };
        assert_eq!(estimate_height(&ContentBlock::image("/a.png"), &profile), 0.0);
        assert_eq!(
            estimate_height(&ContentBlock::title("A"), &profile),
            profile.fallback_height
        );
    }

    #[test]
    fn test_deterministic() {
        let profile = SizeProfile::mobile();
        let block = ContentBlock::paragraph(words(57));
        assert_eq!(
            estimate_height(&block, &profile),
            estimate_height(&block, &profile)
        );
    }
}
