//! End-to-end reader flow: load, paginate, navigate, resize

use flipbook::{ContentBlock, FlipRequest, HeadlessWidget, PageKind, Reader, Viewport};

const ARTICLE: &str = include_str!("fixtures/article.json");

fn desktop() -> Viewport {
    Viewport::new(1280.0, 900.0).unwrap()
}

fn mobile() -> Viewport {
    Viewport::new(390.0, 844.0).unwrap()
}

fn load(viewport: Viewport) -> Reader<HeadlessWidget> {
    Reader::from_json(ARTICLE, viewport, HeadlessWidget::new()).unwrap()
}

#[test]
fn loads_fixture_content() {
    let reader = load(desktop());
    assert_eq!(reader.blocks().len(), 18);
    assert_eq!(reader.blocks()[17], ContentBlock::Unknown);

    let pages = reader.pages();
    assert!(pages.len() >= 3);
    assert_eq!(pages[0].kind, PageKind::Cover);
    assert_eq!(pages[1].kind, PageKind::Article);
    assert!(pages.iter().all(|page| !page.blocks.is_empty()));
}

#[test]
fn contents_lists_both_articles() {
    let reader = load(desktop());
    let entries = reader.contents().entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].page.0, 1);
    assert!(entries[1].page > entries[0].page);
    assert_eq!(
        reader.contents().page_for("Article number 2"),
        Some(entries[1].page)
    );
}

#[test]
fn arrow_keys_walk_every_page() {
    let mut reader = load(desktop());
    let count = reader.page_count();

    let mut flips = 0;
    while reader.handle_key("ArrowRight") {
        let next = reader.navigation().index + 1;
        reader.on_flip(next);
        flips += 1;
    }
    assert_eq!(flips, count - 1);
    assert_eq!(reader.navigation().index, count - 1);
    assert!(!reader.indicator().can_go_next);
    assert_eq!(reader.indicator().current_page, count);

    // Boundary presses are ignored and never reach the widget
    let requests = reader.widget().requests.len();
    assert!(!reader.handle_key("ArrowRight"));
    assert_eq!(reader.widget().requests.len(), requests);

    while reader.handle_key("ArrowLeft") {
        let prev = reader.navigation().index - 1;
        reader.on_flip(prev);
    }
    assert_eq!(reader.navigation().index, 0);
    assert!(!reader.indicator().can_go_prev);
}

#[test]
fn resize_repaginates_before_navigation() {
    let mut reader = load(desktop());
    let last = reader.page_count() - 1;
    reader.advance();
    reader.on_flip(last);

    // A flip requested against the desktop pages is dropped by the resize
    reader.jump_to(flipbook::PageId(1));
    assert!(reader.resize(mobile()));
    assert!(reader.page_count() >= last + 1);
    assert!(reader.navigation().index < reader.page_count());
    assert_eq!(reader.widget().mounted, reader.page_count());

    assert!(reader.retreat());
    assert_eq!(reader.widget().last_request(), Some(FlipRequest::Prev));
}

#[test]
fn rapid_resizes_match_fresh_pagination() {
    let mut reader = load(desktop());
    for (width, height) in [(1024.0, 700.0), (390.0, 844.0), (800.0, 1000.0), (375.0, 667.0)] {
        reader.resize(Viewport::new(width, height).unwrap());
    }
    let fresh = load(Viewport::new(375.0, 667.0).unwrap());
    assert_eq!(reader.pages(), fresh.pages());
    assert_eq!(reader.profile(), fresh.profile());
}

#[test]
fn empty_content_is_cover_only() {
    let reader = Reader::from_json("[]", mobile(), HeadlessWidget::new()).unwrap();
    assert_eq!(reader.page_count(), 1);
    let indicator = reader.indicator();
    assert_eq!(indicator.to_string(), "1 / 1");
    assert!(!indicator.can_go_prev);
    assert!(!indicator.can_go_next);
}
