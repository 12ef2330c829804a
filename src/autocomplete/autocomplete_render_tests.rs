//! Tests for the suggestion dropdown

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use ratatui::{Terminal, backend::TestBackend, layout::Position};

use super::*;
use crate::autocomplete::{PointerEvents, SearchAutocomplete};
use crate::test_utils::test_helpers::{
    RecordingHost, TestChannels, buffer_text, key, test_autocomplete,
};

const INPUT: Rect = Rect {
    x: 0,
    y: 0,
    width: 40,
    height: 3,
};

fn with_suggestions(events: &PointerEvents, items: &[&str]) -> (SearchAutocomplete, TestChannels) {
    let (mut ac, channels) = test_autocomplete(events);
    let start = Instant::now();
    let fire = start + Duration::from_millis(300);
    ac.on_query_changed_at("shoes", start);
    ac.tick_at(fire);
    channels.reply(ac.current_request_id(), items);
    ac.tick_at(fire);
    (ac, channels)
}

fn draw(ac: &mut SearchAutocomplete, width: u16, height: u16) -> (Option<Rect>, String) {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let mut popup = None;
    terminal
        .draw(|frame| {
            popup = render_suggestions(ac, frame, INPUT);
        })
        .unwrap();
    (popup, buffer_text(terminal.backend().buffer()))
}

#[test]
fn test_hidden_list_renders_nothing() {
    let events = PointerEvents::new();
    let (mut ac, _channels) = test_autocomplete(&events);

    let (popup, text) = draw(&mut ac, 40, 12);

    assert!(popup.is_none());
    assert!(!text.contains("Suggestions"));
    assert_eq!(ac.root_area(), INPUT);
}

#[test]
fn test_list_renders_below_input() {
    let events = PointerEvents::new();
    let (mut ac, _channels) = with_suggestions(&events, &["shoes", "shoes for men"]);

    let (popup, text) = draw(&mut ac, 40, 12);

    let popup = popup.expect("popup should render");
    assert_eq!(popup.y, 3);
    assert_eq!(popup.height, 4);
    assert!(text.contains(" Suggestions "));
    assert!(text.contains("shoes for men"));
    assert_eq!(ac.root_area(), INPUT.union(popup));
}

#[test]
fn test_selected_row_has_marker() {
    let events = PointerEvents::new();
    let (mut ac, _channels) = with_suggestions(&events, &["shoes", "shoes for men"]);
    let mut host = RecordingHost::default();
    ac.handle_key(key(KeyCode::Down), "shoes", &mut host);
    ac.handle_key(key(KeyCode::Down), "shoes", &mut host);

    let (_, text) = draw(&mut ac, 40, 12);

    assert!(text.contains("► shoes for men"));
    assert_eq!(text.matches('►').count(), 1);
}

#[test]
fn test_no_room_below_input_hides_popup() {
    let events = PointerEvents::new();
    let (mut ac, _channels) = with_suggestions(&events, &["shoes"]);

    let (popup, _) = draw(&mut ac, 40, 4);

    assert!(popup.is_none());
    assert_eq!(ac.root_area(), INPUT);
}

#[test]
fn test_clipped_popup_limits_navigation() {
    let events = PointerEvents::new();
    let (mut ac, _channels) = with_suggestions(&events, &["shoes", "shorts", "shirts"]);
    let mut host = RecordingHost::default();

    // Room for the input, one row and the borders
    let (popup, _) = draw(&mut ac, 40, 6);
    assert_eq!(popup.map(|area| area.height), Some(3));

    ac.handle_key(key(KeyCode::Up), "sho", &mut host);
    assert_eq!(ac.selected_index(), Some(0));

    let (_, text) = draw(&mut ac, 40, 6);
    assert!(text.contains("► shoes"));
}

#[test]
fn test_popup_width_has_minimum() {
    let events = PointerEvents::new();
    let (ac, _channels) = with_suggestions(&events, &["ab"]);

    let area = popup_area(&ac, INPUT, Rect::new(0, 0, 40, 12)).unwrap();

    assert_eq!(area.width, MIN_POPUP_WIDTH);
}

#[test]
fn test_popup_width_uses_display_width() {
    let events = PointerEvents::new();
    // Each CJK char is two columns wide
    let (ac, _channels) = with_suggestions(&events, &["运动鞋男款运动鞋男款运动鞋"]);

    let area = popup_area(&ac, INPUT, Rect::new(0, 0, 80, 12)).unwrap();

    assert_eq!(area.width, 26 + POPUP_PADDING);
}

#[test]
fn test_rendered_root_area_drives_dismissal() {
    let events = PointerEvents::new();
    let (mut ac, _channels) = with_suggestions(&events, &["shoes", "shoes for men"]);
    draw(&mut ac, 40, 12);

    events.dispatch(Position::new(5, 4));
    assert!(ac.is_visible());

    events.dispatch(Position::new(5, 10));
    assert!(!ac.is_visible());
}

#[test]
fn test_custom_style_is_used() {
    let style = SuggestionStyle::with_accent(Color::Magenta);
    assert_eq!(style.border, Style::default().fg(Color::Magenta));
    assert_eq!(style.highlight.bg, Some(Color::Magenta));
    assert_eq!(SuggestionStyle::default().border.fg, Some(Color::Cyan));
}
