//! Flipbook CLI (for previewing pagination only)
//! The main interface is through WASM bindings.

use flipbook::layout::truncate_label;
use flipbook::{HeadlessWidget, Reader, ReaderError, Viewport};

const USAGE: &str = "usage: flipbook <content.json> [viewport-width] [viewport-height]";

fn main() -> Result<(), ReaderError> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    };
    let width = args.next().and_then(|s| s.parse().ok()).unwrap_or(1280.0);
    let height = args.next().and_then(|s| s.parse().ok()).unwrap_or(900.0);

    let json = std::fs::read_to_string(&path)?;
    let viewport = Viewport::new(width, height)?;
    let reader = Reader::from_json(&json, viewport, HeadlessWidget::new())?;
    let profile = reader.profile();

    println!("Flipbook preview");
    println!("================");
    println!(
        "viewport {}x{} ({:?}), page {}x{}, capacity {:.1}",
        width, height, profile.device, profile.page_width, profile.page_height, profile.page_capacity
    );
    println!("{} blocks on {} pages", reader.blocks().len(), reader.page_count());
    println!();

    for page in reader.pages() {
        println!("[{}] {:?}", page.id.0, page.kind);
        for block in &page.blocks {
            let marker = if block.is_continuation() { " (cont.)" } else { "" };
            let text = block.text().map(|t| truncate_label(t, 60)).unwrap_or_default();
            println!("    {}{} {}", block.kind_name(), marker, text);
        }
    }

    if !reader.contents().is_empty() {
        println!();
        println!("Contents");
        for entry in reader.contents().entries() {
            println!("  {:<50} page {}", entry.label, entry.page.0 + 1);
        }
    }

    Ok(())
}
