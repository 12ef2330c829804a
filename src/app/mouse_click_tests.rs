//! Tests for mouse click handling

use ratatui::crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;
use crate::autocomplete::SuggestRequest;
use crate::layout::Region;
use crate::test_utils::test_helpers::{
    TestChannels, draw_app, left_click, show_suggestions, test_app,
};

use super::handle_click;

const WIDTH: u16 = 60;
const HEIGHT: u16 = 20;

// Header on row 0, input on rows 1-3, dropdown border on row 4
const FIRST_SUGGESTION_ROW: u16 = 5;

fn setup_app() -> (App, TestChannels) {
    let (mut app, mut channels) = test_app();
    show_suggestions(&mut app, &mut channels, "sho", &["shoes", "shorts"]);
    draw_app(&mut app, WIDTH, HEIGHT);
    (app, channels)
}

#[test]
fn test_click_suggestion_commits_it() {
    let (mut app, mut channels) = setup_app();

    app.handle_mouse_event(left_click(5, FIRST_SUGGESTION_ROW + 1));

    assert_eq!(app.query(), "shorts");
    assert_eq!(app.search_bar.last_search(), Some("shorts"));
    assert_eq!(app.output(), Some("shorts"));
    assert_eq!(
        channels.sent(),
        vec![SuggestRequest::Record {
            term: "shorts".to_string()
        }]
    );
}

#[test]
fn test_click_outside_hides_list() {
    let (mut app, _channels) = setup_app();

    app.handle_mouse_event(left_click(45, 15));

    assert!(!app.autocomplete.is_visible());
    assert_eq!(app.query(), "sho");
    assert!(!app.should_quit());
}

#[test]
fn test_click_on_input_keeps_list() {
    let (mut app, _channels) = setup_app();

    app.handle_mouse_event(left_click(5, 2));

    assert!(app.autocomplete.is_visible());
}

#[test]
fn test_click_on_dropdown_border_does_nothing() {
    let (mut app, mut channels) = setup_app();

    app.handle_mouse_event(left_click(5, FIRST_SUGGESTION_ROW - 1));

    assert!(app.autocomplete.is_visible());
    assert!(app.search_bar.searches().is_empty());
    assert!(channels.sent().is_empty());
}

#[test]
fn test_right_click_is_ignored() {
    let (mut app, _channels) = setup_app();
    let mouse = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Right),
        column: 45,
        row: 15,
        modifiers: KeyModifiers::NONE,
    };

    app.handle_mouse_event(mouse);

    assert!(app.autocomplete.is_visible());
}

#[test]
fn test_suggestion_region_ignored_when_hidden() {
    let (mut app, _channels) = setup_app();
    app.autocomplete.close();

    handle_click(&mut app, Some(Region::Suggestion(0)));

    assert_eq!(app.query(), "sho");
    assert!(app.search_bar.searches().is_empty());
}

#[test]
fn test_out_of_range_suggestion_region_does_nothing() {
    let (mut app, _channels) = setup_app();

    handle_click(&mut app, Some(Region::Suggestion(7)));

    assert_eq!(app.query(), "sho");
    assert!(!app.should_quit());
}

#[test]
fn test_other_regions_do_nothing() {
    let (mut app, _channels) = setup_app();

    handle_click(&mut app, Some(Region::RecentSearches));
    handle_click(&mut app, Some(Region::SearchInput));
    handle_click(&mut app, None);

    assert!(app.autocomplete.is_visible());
    assert_eq!(app.query(), "sho");
}
