//! Search input
//!
//! Owns the query text. The suggestion component only reads it and asks for
//! changes through `SearchHost`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use crate::autocomplete::SearchHost;

pub struct SearchBar {
    pub textarea: TextArea<'static>,
    /// Terms committed this session, oldest first
    searches: Vec<String>,
}

impl SearchBar {
    pub fn new(placeholder: &str) -> Self {
        let mut textarea = TextArea::default();

        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(placeholder);

        Self {
            textarea,
            searches: Vec::new(),
        }
    }

    pub fn query(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Feed a key to the text input. Returns true if the text changed.
    ///
    /// Keys that would break the single-line input are dropped.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        if is_newline_key(&key) {
            return false;
        }
        self.textarea.input(key)
    }

    /// Insert pasted text at the cursor, flattening line breaks to spaces
    pub fn insert_text(&mut self, text: &str) -> bool {
        let flattened: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        if flattened.is_empty() {
            return false;
        }
        self.textarea.insert_str(flattened)
    }

    /// Replace the whole query
    pub fn set_query(&mut self, text: &str) {
        self.textarea.delete_line_by_head();
        self.textarea.delete_line_by_end();
        self.insert_text(text);
    }

    pub fn searches(&self) -> &[String] {
        &self.searches
    }

    pub fn last_search(&self) -> Option<&str> {
        self.searches.last().map(String::as_str)
    }

    /// Update border color for focus
    pub fn set_border_color(&mut self, color: Color) {
        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(color)),
        );
    }
}

impl SearchHost for SearchBar {
    fn on_change(&mut self, value: &str) {
        self.set_query(value);
    }

    fn on_search(&mut self, term: &str) {
        log::info!("Search committed: '{}'", term);
        self.searches.push(term.to_string());
    }
}

fn is_newline_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => true,
        KeyCode::Char('m') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
#[path = "search_bar_tests.rs"]
mod search_bar_tests;
