#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Category {
    Casual,
    Formal,
    Athletic,
    Party,
    Business,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Casual,
        Category::Formal,
        Category::Athletic,
        Category::Party,
        Category::Business,
    ];

    pub const NAMES: [&'static str; 5] = ["Casual", "Formal", "Athletic", "Party", "Business"];

    pub fn as_str(&self) -> &'static str {
        match *self {
            Category::Casual => "Casual",
            Category::Formal => "Formal",
            Category::Athletic => "Athletic",
            Category::Party => "Party",
            Category::Business => "Business",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Category::ALL.iter().copied().find(|c| c.as_str() == value).ok_or(())
    }
}

/// The authenticated user as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Identity {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Outfit {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub image: String,
    pub user_id: i64,
    #[serde(default)]
    pub average_rating: Option<f64>,
}

// ===

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AuthResponse {
    #[serde(default)]
    pub user: Option<Identity>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct OutfitsResponse {
    #[serde(default)]
    pub outfits: Vec<Outfit>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RatingRequest {
    pub score: u8,
    pub outfit_id: i64,
}
