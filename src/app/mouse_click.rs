//! Mouse click handling
//!
//! Routes left clicks to the component under the pointer.

use super::state::App;
use crate::layout::Region;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>) {
    match region {
        Some(Region::Suggestion(index)) => click_suggestion(app, index),
        // Input and history panel have nothing to activate
        _ => {}
    }
}

fn click_suggestion(app: &mut App, index: usize) {
    if !app.autocomplete.is_visible() {
        return;
    }

    let query = app.search_bar.query().to_string();
    let searches = app.search_bar.searches().len();
    if app.autocomplete.select_suggestion(index, &mut app.search_bar) {
        app.after_component_action(&query, searches);
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
