use crate::constants::{API_BASE, API_OUTFITS, API_SEARCH, API_USERS, ROOT_API, ROOT_UPLOADS, SHARE_INTENT};
use crate::types::Category;

#[cfg(test)]
#[path = "utils_test.rs"]
mod utils_test;

pub fn api_url(path: &str) -> String {
    format!("{API_BASE}/{ROOT_API}/{path}")
}

pub fn upload_url(filename: &str) -> String {
    format!("{API_BASE}/{ROOT_UPLOADS}/{filename}")
}

pub fn outfit_path(id: i64) -> String {
    format!("{API_OUTFITS}/{id}")
}

/// An absent category asks for every category.
pub fn user_outfits_path(user_id: i64, category: Option<Category>) -> String {
    let category = category.map(|c| c.as_str()).unwrap_or_default();
    format!("{API_USERS}/{user_id}/{API_OUTFITS}?category={category}")
}

/// `query` must already be URI-component encoded.
pub fn search_path(query: &str) -> String {
    format!("{API_SEARCH}?q={query}")
}

/// `text` and `url` must already be URI-component encoded.
pub fn share_url(text: &str, url: &str) -> String {
    format!("{SHARE_INTENT}?text={text}&url={url}")
}
