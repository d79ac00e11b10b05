use crate::constants::{RATING_MAX, RATING_MIN};
use crate::types::Category;
use crate::validate::{FormValidator, Rule};

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

pub const FIELD_USERNAME: &str = "username";
pub const FIELD_PASSWORD: &str = "password";
pub const FIELD_PROFILE_PICTURE: &str = "profile_picture";
pub const FIELD_TITLE: &str = "title";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_CATEGORY: &str = "category";
pub const FIELD_IMAGE: &str = "image";

static REQUIRED: &str = "Required";

fn credentials() -> FormValidator {
    FormValidator::new()
        .field(FIELD_USERNAME, [Rule::Required(REQUIRED), Rule::MinLength(3, "Username must be at least 3 characters")])
        .field(FIELD_PASSWORD, [Rule::Required(REQUIRED), Rule::MinLength(6, "Password must be at least 6 characters")])
}

pub fn login_form() -> FormValidator {
    credentials()
}

pub fn signup_form() -> FormValidator {
    credentials()
        .field(FIELD_PROFILE_PICTURE, [Rule::FileRequired("Profile picture (PNG/JPEG) is required")])
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutfitFormMode {
    Create,
    Edit,
}

/// Creating requires an image, editing keeps the current one when none is chosen.
pub fn outfit_form(mode: OutfitFormMode) -> FormValidator {
    let form = FormValidator::new()
        .field(FIELD_TITLE, [Rule::Required(REQUIRED), Rule::MinLength(3, "Title must be at least 3 characters")])
        .field(FIELD_DESCRIPTION, [Rule::Required(REQUIRED), Rule::MinLength(10, "Description must be at least 10 characters")])
        .field(FIELD_CATEGORY, [Rule::Required(REQUIRED), Rule::OneOf(&Category::NAMES, "Invalid category")]);
    match mode {
        OutfitFormMode::Create => form.field(FIELD_IMAGE, [Rule::FileRequired("Image (PNG/JPEG) is required")]),
        OutfitFormMode::Edit => form,
    }
}

pub static MSG_RATING_RANGE: &str = "Please enter a rating between 1 and 5";

/// Whole star counts only; anything else never reaches the backend.
pub fn parse_rating(input: &str) -> Option<u8> {
    input.trim().parse::<u8>().ok().filter(|score| (RATING_MIN..=RATING_MAX).contains(score))
}
