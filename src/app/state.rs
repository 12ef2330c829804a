use std::time::{Duration, Instant};

use ratatui::style::Color;

use crate::autocomplete::{
    AutocompleteSettings, PointerEvents, SearchAutocomplete, SuggestionStyle, WorkerHandle,
};
use crate::config::Config;
use crate::layout::LayoutRegions;
use crate::search_bar::SearchBar;

/// Upper bound on how long the event loop sleeps, so worker responses
/// are picked up promptly
pub const IDLE_POLL: Duration = Duration::from_millis(50);

/// Application state
pub struct App {
    /// Owner of the query text
    pub search_bar: SearchBar,
    pub autocomplete: SearchAutocomplete,
    /// Every left press is delivered here before hit-testing
    pub pointer_events: PointerEvents,
    pub layout_regions: LayoutRegions,
    pub(super) api_label: String,
    pub(super) accent: Color,
    stay_open: bool,
    pub(super) should_quit: bool,
    output: Option<String>,
}

impl App {
    pub fn new(config: &Config, worker: WorkerHandle, stay_open: bool) -> Self {
        let pointer_events = PointerEvents::new();
        let accent = config.autocomplete.accent();
        let autocomplete = SearchAutocomplete::mount(
            AutocompleteSettings::from(&config.autocomplete),
            worker,
            &pointer_events,
        )
        .with_style(SuggestionStyle::with_accent(accent));

        Self {
            search_bar: SearchBar::new(&config.autocomplete.placeholder),
            autocomplete,
            pointer_events,
            layout_regions: LayoutRegions::default(),
            api_label: config.api.base_url.clone(),
            accent,
            stay_open,
            should_quit: false,
            output: None,
        }
    }

    /// Pre-fill the search input (from the command line)
    pub fn set_initial_query(&mut self, query: &str) {
        self.search_bar.set_query(query);
        self.autocomplete.on_query_changed(self.search_bar.query());
    }

    pub fn query(&self) -> &str {
        self.search_bar.query()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Term to print on exit, if a search was committed
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn take_output(&mut self) -> Option<String> {
        self.output.take()
    }

    /// Stop the suggestion worker, waiting for committed terms to be recorded
    pub fn shutdown(&mut self) {
        self.autocomplete.unmount();
    }

    /// Drive the suggestion component. Returns true if a redraw is needed.
    pub fn tick(&mut self) -> bool {
        self.autocomplete.tick()
    }

    pub fn poll_timeout(&self) -> Duration {
        self.autocomplete
            .poll_timeout(Instant::now())
            .map_or(IDLE_POLL, |due| due.min(IDLE_POLL))
    }

    /// A search was committed through the host
    pub(super) fn on_search_committed(&mut self) {
        if self.stay_open {
            return;
        }
        self.output = self.search_bar.last_search().map(str::to_string);
        self.should_quit = true;
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
