use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use super::mouse_click;
use super::state::App;
use crate::layout::region_at;

impl App {
    /// Handle a terminal event and update application state
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Paste(text) => self.handle_paste_event(&text),
            _ => {}
        }
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // The dropdown gets first look at navigation and commit keys
        let query = self.search_bar.query().to_string();
        let searches = self.search_bar.searches().len();
        if self
            .autocomplete
            .handle_key(key, &query, &mut self.search_bar)
        {
            self.after_component_action(&query, searches);
            return;
        }

        if key.code == KeyCode::Esc {
            self.should_quit = true;
            return;
        }

        if self.search_bar.input(key) {
            self.autocomplete.on_query_changed(self.search_bar.query());
        }
    }

    /// Handle mouse events
    ///
    /// Presses reach the pointer listeners before hit-testing, so an outside
    /// press hides the dropdown whatever it lands on.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let position = Position::new(mouse.column, mouse.row);
        self.pointer_events.dispatch(position);
        let region = region_at(&self.layout_regions, position);
        mouse_click::handle_click(self, region);
    }

    pub fn handle_paste_event(&mut self, text: &str) {
        if self.search_bar.insert_text(text) {
            self.autocomplete.on_query_changed(self.search_bar.query());
        }
    }

    /// Propagate what the component asked the search bar to do
    pub(super) fn after_component_action(&mut self, query_before: &str, searches_before: usize) {
        if self.search_bar.query() != query_before {
            // Echo of a picked suggestion; the component ignores its own commit
            self.autocomplete.on_query_changed(self.search_bar.query());
        }

        if self.search_bar.searches().len() > searches_before {
            self.on_search_committed();
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
