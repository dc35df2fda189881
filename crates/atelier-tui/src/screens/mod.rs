//! Screen implementations. Each screen is a top-level Component.

pub mod contact;
pub mod grid;

use crate::component::Component;
use crate::screen::ScreenId;

/// Create screen components for the tab bar.
pub fn create_screens() -> Vec<(ScreenId, Box<dyn Component>)> {
    vec![
        (ScreenId::Grid, Box::new(grid::GridScreen::new())),
        (ScreenId::Contact, Box::new(contact::ContactScreen::new())),
    ]
}
