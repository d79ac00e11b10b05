use shared::forms::{outfit_form, signup_form, OutfitFormMode, FIELD_CATEGORY, FIELD_DESCRIPTION, FIELD_IMAGE, FIELD_PASSWORD, FIELD_PROFILE_PICTURE, FIELD_TITLE, FIELD_USERNAME};

use super::*;

fn outfit_values(description: &str) -> FormValues {
    FormValues::new()
        .with_text(FIELD_TITLE, "Red jacket")
        .with_text(FIELD_DESCRIPTION, description)
        .with_text(FIELD_CATEGORY, "Casual")
        .with_file(FIELD_IMAGE, true)
}

#[test]
fn short_description_is_held_back_and_shown() {
    let form = FormState::default();
    let sent = form.submit(&outfit_form(OutfitFormMode::Create), &outfit_values("Too short"));
    assert_eq!(sent, None);
    assert_eq!(form.errors.lock_ref().get(FIELD_DESCRIPTION), Some("Description must be at least 10 characters"));
    assert_eq!(form.errors.lock_ref().len(), 1);
}

#[test]
fn missing_profile_picture_is_held_back() {
    let form = FormState::default();
    let values = FormValues::new().with_text(FIELD_USERNAME, "alice").with_text(FIELD_PASSWORD, "secret1");
    assert_eq!(form.submit(&signup_form(), &values), None);
    assert_eq!(form.errors.lock_ref().get(FIELD_PROFILE_PICTURE), Some("Profile picture (PNG/JPEG) is required"));
}

#[test]
fn valid_form_is_released_and_errors_cleared() {
    let form = FormState::default();
    let validator = outfit_form(OutfitFormMode::Create);
    assert_eq!(form.submit(&validator, &outfit_values("")), None);
    assert!(!form.errors.lock_ref().is_empty());

    let values = outfit_values("Bright red denim jacket");
    assert_eq!(form.submit(&validator, &values), Some(values.clone()));
    assert!(form.errors.lock_ref().is_empty());
}
