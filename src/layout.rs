//! Layout module for tracking UI component regions
//!
//! `LayoutRegions` records where components were last rendered, and
//! `region_at()` maps a screen position back to a component.

use ratatui::layout::{Margin, Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    SearchInput,
    /// Row of the suggestion dropdown
    Suggestion(usize),
    RecentSearches,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LayoutRegions {
    pub search_input: Option<Rect>,
    pub suggestions: Option<Rect>,
    pub recent_searches: Option<Rect>,
}

/// Find the component under `position`
///
/// The dropdown overlays the other regions, so it is checked first.
pub fn region_at(regions: &LayoutRegions, position: Position) -> Option<Region> {
    if let Some(area) = regions.suggestions
        && area.contains(position)
    {
        let rows = area.inner(Margin::new(1, 1));
        if rows.contains(position) {
            return Some(Region::Suggestion(usize::from(position.y - rows.y)));
        }
        // Border of the dropdown
        return None;
    }

    if regions
        .search_input
        .is_some_and(|area| area.contains(position))
    {
        return Some(Region::SearchInput);
    }

    if regions
        .recent_searches
        .is_some_and(|area| area.contains(position))
    {
        return Some(Region::RecentSearches);
    }

    None
}
