use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::state::App;
use crate::autocomplete::render_suggestions;

const HELP_LINE: &str =
    " Enter: search | ↑/↓: highlight | Tab: accept | Esc: close/quit | Ctrl+C: quit";

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Search input
            Constraint::Min(3),    // Recent searches
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

        let (header_area, input_area, recent_area, help_area) =
            (layout[0], layout[1], layout[2], layout[3]);

        self.render_header(frame, header_area);

        self.search_bar.set_border_color(self.accent);
        frame.render_widget(&self.search_bar.textarea, input_area);

        self.render_recent_searches(frame, recent_area);

        frame.render_widget(
            Paragraph::new(HELP_LINE).style(Style::default().fg(Color::DarkGray)),
            help_area,
        );

        // Dropdown last so it overlays the recent searches panel
        let popup_area = render_suggestions(&mut self.autocomplete, frame, input_area);

        self.layout_regions.search_input = Some(input_area);
        self.layout_regions.recent_searches = Some(recent_area);
        self.layout_regions.suggestions = popup_area;
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header = Line::from(vec![
            Span::styled(
                " vidscout ",
                Style::default()
                    .fg(self.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("· {}", self.api_label),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(header), area);
    }

    fn render_recent_searches(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Recent searches ")
            .border_style(Style::default().fg(Color::DarkGray));

        let searches = self.search_bar.searches();
        if searches.is_empty() {
            let empty = Paragraph::new("No searches yet")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        // Newest first
        let items: Vec<ListItem> = searches
            .iter()
            .rev()
            .map(|term| ListItem::new(format!(" {}", term)))
            .collect();
        frame.render_widget(List::new(items).block(block), area);
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
