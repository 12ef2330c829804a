//! Search suggestions for the query input
//!
//! Debounced fetching, newest-response-wins application, click-outside
//! dismissal and commit recording.

pub mod autocomplete_render;
mod autocomplete_state;
pub mod debouncer;
mod dismissal;
pub mod worker;

pub use autocomplete_render::{SuggestionStyle, render_suggestions};
pub use autocomplete_state::{AutocompleteSettings, SearchAutocomplete, SearchHost};
pub use debouncer::Debouncer;
pub use dismissal::{DismissalController, PointerEvents, PointerSubscription};
pub use worker::{SuggestRequest, SuggestResponse, WorkerHandle, spawn_worker};
