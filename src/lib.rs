//! vidscout: terminal search console with live suggestions
//!
//! The suggestion component lives in [`autocomplete`]; [`app`] hosts it next
//! to a [`search_bar::SearchBar`] that owns the query text.

pub mod api;
pub mod app;
pub mod autocomplete;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod search_bar;
pub mod widgets;
