//! Suggestion dropdown rendering
//!
//! Draws the suggestion list directly below the search input and records the
//! widget's bounding region for click-outside dismissal.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::autocomplete_state::SearchAutocomplete;
use crate::widgets::popup;

const MIN_POPUP_WIDTH: u16 = 20;
const POPUP_BORDER_HEIGHT: u16 = 2;
// Borders plus the "► " marker
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 1;
const SELECTED_MARKER: &str = "► ";
const UNSELECTED_MARKER: &str = "  ";

/// Styling hook for the dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionStyle {
    pub border: Style,
    pub item: Style,
    pub highlight: Style,
}

impl SuggestionStyle {
    pub fn with_accent(accent: Color) -> Self {
        Self {
            border: Style::default().fg(accent),
            item: Style::default().fg(Color::White).bg(Color::Black),
            highlight: Style::default()
                .fg(Color::Black)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
        }
    }
}

impl Default for SuggestionStyle {
    fn default() -> Self {
        Self::with_accent(Color::Cyan)
    }
}

/// Render the dropdown below `input_area`
///
/// Returns the popup rect when the list is shown. The component's root area
/// is updated either way.
pub fn render_suggestions(
    autocomplete: &mut SearchAutocomplete,
    frame: &mut Frame,
    input_area: Rect,
) -> Option<Rect> {
    let popup_area = popup_area(autocomplete, input_area, frame.area());
    let Some(popup_area) = popup_area else {
        autocomplete.set_root_area(input_area);
        autocomplete.set_rendered_rows(None);
        return None;
    };
    autocomplete.set_rendered_rows(Some(usize::from(
        popup_area.height.saturating_sub(POPUP_BORDER_HEIGHT),
    )));

    let style = *autocomplete.style();
    let selected = autocomplete.selected_index();
    let items: Vec<ListItem> = autocomplete
        .visible_suggestions()
        .iter()
        .enumerate()
        .map(|(i, suggestion)| {
            let line = if selected == Some(i) {
                Line::from(Span::styled(
                    format!("{}{}", SELECTED_MARKER, suggestion),
                    style.highlight,
                ))
            } else {
                Line::from(Span::styled(
                    format!("{}{}", UNSELECTED_MARKER, suggestion),
                    style.item,
                ))
            };
            ListItem::new(line)
        })
        .collect();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, popup_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(style.border)
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(list, popup_area);

    autocomplete.set_root_area(input_area.union(popup_area));
    Some(popup_area)
}

/// Where the dropdown goes, or None if hidden or there is no room for a row
pub fn popup_area(autocomplete: &SearchAutocomplete, input_area: Rect, bounds: Rect) -> Option<Rect> {
    if !autocomplete.is_visible() {
        return None;
    }

    let suggestions = autocomplete.visible_suggestions();
    let max_text_width = suggestions
        .iter()
        .map(|s| UnicodeWidthStr::width(s.as_str()))
        .max()
        .unwrap_or(0);
    let width = (max_text_width.min(u16::MAX as usize) as u16)
        .saturating_add(POPUP_PADDING)
        .max(MIN_POPUP_WIDTH);
    let height = (suggestions.len() as u16).saturating_add(POPUP_BORDER_HEIGHT);

    let area = popup::popup_below_anchor(input_area, width, height, POPUP_OFFSET_X, bounds);
    (area.height > POPUP_BORDER_HEIGHT && area.width > 0).then_some(area)
}

#[cfg(test)]
#[path = "autocomplete_render_tests.rs"]
mod autocomplete_render_tests;
