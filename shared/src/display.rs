//! What a screen shows for a given state, independent of the DOM.

use crate::types::Category;

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

pub static MSG_SEARCH_PROMPT: &str = "Enter a search query to find outfits.";
pub static MSG_SEARCH_EMPTY: &str = "No outfits found.";
pub static MSG_ALL_EMPTY: &str = "No outfits available.";
pub static MSG_OUTFIT_MISSING: &str = "Outfit not found.";
pub static MSG_NO_RATINGS: &str = "No ratings yet";
pub static MSG_PLEASE_LOGIN: &str = "Please log in.";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Notice(&'static str),
    Items,
}

/// Home screen search results.
pub fn search_view(query: &str, loading: bool, count: usize) -> ListView {
    if loading {
        ListView::Loading
    } else if count > 0 {
        ListView::Items
    } else if query.trim().is_empty() {
        ListView::Notice(MSG_SEARCH_PROMPT)
    } else {
        ListView::Notice(MSG_SEARCH_EMPTY)
    }
}

pub fn all_outfits_view(loading: bool, count: usize) -> ListView {
    if loading {
        ListView::Loading
    } else if count == 0 {
        ListView::Notice(MSG_ALL_EMPTY)
    } else {
        ListView::Items
    }
}

/// Search input changes either issue a query or clear the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    Clear,
    Query(String),
}

pub fn search_action(input: &str) -> SearchAction {
    if input.trim().is_empty() {
        SearchAction::Clear
    } else {
        SearchAction::Query(input.to_string())
    }
}

pub fn profile_title(username: &str) -> String {
    format!("{username}'s Profile")
}

pub fn profile_empty_text(category: Option<Category>) -> String {
    match category {
        Some(category) => format!("No outfits in {category}."),
        None => "No outfits created yet.".to_string(),
    }
}

/// Whether a freshly created outfit belongs in a list filtered by `filter`.
pub fn list_keeps_created(filter: Option<Category>, created: Category) -> bool {
    filter.map_or(true, |category| category == created)
}

/// A zero average counts as unrated.
pub fn average_rating_text(average: Option<f64>) -> String {
    match average.filter(|value| *value != 0.0) {
        Some(value) => format!("Average Rating: {value:.1}"),
        None => format!("Average Rating: {MSG_NO_RATINGS}"),
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum DetailMode {
    #[default]
    Viewing,
    Editing,
}

impl DetailMode {
    /// Only the owner may leave `Viewing`.
    pub fn begin_edit(self, is_owner: bool) -> Self {
        if is_owner { DetailMode::Editing } else { self }
    }

    /// Cancel and successful save both land here.
    pub fn finish(self) -> Self {
        DetailMode::Viewing
    }
}
