//! Search suggestion state
//!
//! `SearchAutocomplete` is a controlled view over a query owned by the host.
//! It debounces query changes, asks the worker for suggestions, keeps only
//! the newest response, and turns Enter or a suggestion pick into a search
//! plus a best-effort record of the chosen term.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;

use super::autocomplete_render::SuggestionStyle;
use super::debouncer::{DEFAULT_DEBOUNCE_MS, Debouncer};
use super::dismissal::{DismissalController, PointerEvents};
use super::worker::{SuggestRequest, SuggestResponse, WorkerHandle};
use crate::config::AutocompleteConfig;

/// Owner of the query text
///
/// The component never edits the query itself; it asks the host to.
pub trait SearchHost {
    /// Replace the query text
    fn on_change(&mut self, value: &str);

    /// Run a search for `term`
    fn on_search(&mut self, term: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompleteSettings {
    pub debounce_ms: u64,
    /// Minimum trimmed query length (in chars) before suggestions are fetched
    pub min_query_chars: usize,
    pub max_visible: usize,
}

impl Default for AutocompleteSettings {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            min_query_chars: 2,
            max_visible: 8,
        }
    }
}

impl From<&AutocompleteConfig> for AutocompleteSettings {
    fn from(config: &AutocompleteConfig) -> Self {
        Self {
            debounce_ms: config.debounce_ms,
            min_query_chars: config.min_query_chars,
            max_visible: config.max_visible.max(1),
        }
    }
}

pub struct SearchAutocomplete {
    settings: AutocompleteSettings,
    style: SuggestionStyle,
    suggestions: Vec<String>,
    selected: Option<usize>,
    /// Rows the dropdown had room for on the last draw
    rendered_rows: Option<usize>,
    /// Shared with the dismissal listener
    visible: Rc<Cell<bool>>,
    /// Input plus dropdown, as last rendered
    root_area: Rc<Cell<Rect>>,
    debouncer: Debouncer,
    /// Trimmed query waiting for the debounce to fire
    pending_query: Option<String>,
    /// Term of the last commit, so the host echoing it back does not re-open the list
    last_committed: Option<String>,
    /// Sequence number of the most recently issued fetch
    request_id: u64,
    /// Highest sequence number already resolved; anything at or below is stale
    latest_seen_id: u64,
    worker: Option<WorkerHandle>,
    dismissal: Option<DismissalController>,
}

impl SearchAutocomplete {
    /// Create the component and attach its click-outside listener
    pub fn mount(
        settings: AutocompleteSettings,
        worker: WorkerHandle,
        pointer_events: &PointerEvents,
    ) -> Self {
        let visible = Rc::new(Cell::new(false));
        let root_area = Rc::new(Cell::new(Rect::default()));
        let dismissal =
            DismissalController::attach(pointer_events, Rc::clone(&root_area), Rc::clone(&visible));

        Self {
            debouncer: Debouncer::new(settings.debounce_ms),
            settings,
            style: SuggestionStyle::default(),
            suggestions: Vec::new(),
            selected: None,
            rendered_rows: None,
            visible,
            root_area,
            pending_query: None,
            last_committed: None,
            request_id: 0,
            latest_seen_id: 0,
            worker: Some(worker),
            dismissal: Some(dismissal),
        }
    }

    pub fn with_style(mut self, style: SuggestionStyle) -> Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> &SuggestionStyle {
        &self.style
    }

    /// Tear down: cancel the pending fetch, detach the listener, stop the worker
    ///
    /// Blocks until recorded terms are delivered or the worker gives up on
    /// them.
    pub fn unmount(&mut self) {
        if self.worker.is_none() {
            return;
        }
        self.debouncer.cancel();
        self.pending_query = None;
        self.dismissal = None;
        if let Some(worker) = self.worker.take() {
            worker.shutdown();
        }
        self.close();
        log::debug!("Search suggestions unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.worker.is_some()
    }

    pub fn on_query_changed(&mut self, query: &str) {
        self.on_query_changed_at(query, Instant::now());
    }

    /// React to a new host query value
    ///
    /// Short queries clear the list at once; longer ones restart the debounce.
    pub fn on_query_changed_at(&mut self, query: &str, now: Instant) {
        if !self.is_mounted() {
            return;
        }

        let trimmed = query.trim();
        if trimmed.chars().count() < self.settings.min_query_chars {
            self.debouncer.cancel();
            self.pending_query = None;
            self.last_committed = None;
            self.invalidate_in_flight();
            self.suggestions.clear();
            self.close();
            return;
        }

        if self.last_committed.as_deref() == Some(query) {
            return;
        }
        self.last_committed = None;

        self.pending_query = Some(trimmed.to_string());
        self.debouncer.schedule_at(now);
    }

    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    /// Fire a due fetch and apply any responses
    ///
    /// Returns true when the suggestion list or its visibility changed.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        if !self.is_mounted() {
            return false;
        }

        if self.debouncer.fire_if_ready(now)
            && let Some(query) = self.pending_query.take()
        {
            self.issue_fetch(query);
        }

        self.poll_responses()
    }

    /// How long the host loop may sleep before the next fetch is due
    pub fn poll_timeout(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_until_ready(now)
    }

    pub fn has_pending_fetch(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }

    fn issue_fetch(&mut self, query: String) {
        self.request_id += 1;
        let request_id = self.request_id;
        log::debug!("Fetching suggestions {} for '{}'", request_id, query);

        if let Some(worker) = &self.worker
            && !worker.send(SuggestRequest::Fetch { query, request_id })
        {
            log::warn!("Suggestion worker unavailable, dropping fetch {}", request_id);
        }
    }

    /// Drain worker responses, keeping only the newest
    pub fn poll_responses(&mut self) -> bool {
        let mut changed = false;
        while let Some(response) = self.next_response() {
            changed |= self.apply_response(response);
        }
        changed
    }

    fn next_response(&self) -> Option<SuggestResponse> {
        self.worker.as_ref()?.try_recv()
    }

    fn apply_response(&mut self, response: SuggestResponse) -> bool {
        match response {
            SuggestResponse::Suggestions {
                request_id,
                suggestions,
            } => {
                if request_id <= self.latest_seen_id {
                    log::debug!(
                        "Discarding stale suggestions {} (latest {})",
                        request_id,
                        self.latest_seen_id
                    );
                    return false;
                }
                self.latest_seen_id = request_id;
                self.suggestions = suggestions;
                self.selected = None;
                self.rendered_rows = None;
                self.visible.set(!self.suggestions.is_empty());
                true
            }
            SuggestResponse::Failed {
                request_id,
                message,
            } => {
                self.latest_seen_id = self.latest_seen_id.max(request_id);
                log::warn!("Suggestions {} unavailable: {}", request_id, message);
                false
            }
        }
    }

    /// Mark every fetch issued so far as stale
    fn invalidate_in_flight(&mut self) {
        self.latest_seen_id = self.request_id;
    }

    /// Handle a key while the search input has focus
    ///
    /// Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent, query: &str, host: &mut dyn SearchHost) -> bool {
        if !self.is_mounted() {
            return false;
        }

        match key.code {
            KeyCode::Enter => {
                self.commit_query(query, host);
                true
            }
            KeyCode::Esc if self.is_visible() => {
                self.close();
                true
            }
            KeyCode::Down if self.is_visible() => {
                self.select_next();
                true
            }
            KeyCode::Up if self.is_visible() => {
                self.select_previous();
                true
            }
            KeyCode::Tab if self.is_visible() => {
                let index = self.selected_index().unwrap_or(0);
                self.select_suggestion(index, host);
                true
            }
            _ => false,
        }
    }

    /// Keyboard commit: search for the query text exactly as typed
    pub fn commit_query(&mut self, query: &str, host: &mut dyn SearchHost) {
        host.on_search(query);
        self.finish_interaction();
        self.last_committed = Some(query.to_string());
        self.record(query);
    }

    /// Pointer commit: adopt the suggestion as the query and search for it
    ///
    /// Returns false if `index` is not a visible suggestion.
    pub fn select_suggestion(&mut self, index: usize, host: &mut dyn SearchHost) -> bool {
        let Some(text) = self.visible_suggestions().get(index).cloned() else {
            return false;
        };

        self.last_committed = Some(text.clone());
        host.on_change(&text);
        host.on_search(&text);
        self.finish_interaction();
        self.record(&text);
        true
    }

    fn finish_interaction(&mut self) {
        self.debouncer.cancel();
        self.pending_query = None;
        self.invalidate_in_flight();
        self.close();
    }

    /// Fire-and-forget request to persist a committed term
    fn record(&self, term: &str) {
        let term = term.trim();
        if term.is_empty() {
            return;
        }
        if let Some(worker) = &self.worker
            && !worker.send(SuggestRequest::Record {
                term: term.to_string(),
            })
        {
            log::warn!("Suggestion worker unavailable, '{}' not recorded", term);
        }
    }

    pub fn close(&mut self) {
        self.visible.set(false);
        self.selected = None;
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get() && !self.suggestions.is_empty()
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Suggestions that fit in the dropdown
    pub fn visible_suggestions(&self) -> &[String] {
        let count = self.suggestions.len().min(self.settings.max_visible);
        &self.suggestions[..count]
    }

    /// Highlighted row; an outside press hides the list and the highlight
    pub fn selected_index(&self) -> Option<usize> {
        self.selected.filter(|_| self.is_visible())
    }

    /// Record how many rows the dropdown actually drew
    ///
    /// A short terminal can clip the dropdown, so navigation stays within
    /// the drawn rows.
    pub fn set_rendered_rows(&mut self, rows: Option<usize>) {
        self.rendered_rows = rows;
        if let (Some(rows), Some(selected)) = (rows, self.selected)
            && selected >= rows
        {
            self.selected = None;
        }
    }

    fn navigable_count(&self) -> usize {
        let count = self.visible_suggestions().len();
        self.rendered_rows.map_or(count, |rows| rows.min(count))
    }

    fn select_next(&mut self) {
        let count = self.navigable_count();
        if count == 0 {
            return;
        }
        self.selected = Some(match self.selected_index() {
            Some(i) => (i + 1) % count,
            None => 0,
        });
    }

    fn select_previous(&mut self) {
        let count = self.navigable_count();
        if count == 0 {
            return;
        }
        self.selected = Some(match self.selected_index() {
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        });
    }

    pub fn set_root_area(&mut self, area: Rect) {
        self.root_area.set(area);
    }

    pub fn root_area(&self) -> Rect {
        self.root_area.get()
    }
}

impl Drop for SearchAutocomplete {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
#[path = "autocomplete_state_tests.rs"]
mod autocomplete_state_tests;
