//! Page navigation: state machine, widget seam and input mapping

mod controller;
mod indicator;
mod input;
mod widget;

pub use controller::{NavigationController, NavigationState};
pub use indicator::PageIndicator;
pub use input::Key;
pub use widget::{FlipRequest, FlipWidget, FlipbookSettings, HeadlessWidget};
