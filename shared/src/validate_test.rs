use super::*;

const COLORS: &[&str] = &["red", "blue"];

fn validator() -> FormValidator {
    FormValidator::new()
        .field("name", [Rule::Required("Required"), Rule::MinLength(3, "Too short")])
        .field("color", [Rule::Required("Required"), Rule::OneOf(COLORS, "Invalid color")])
        .field("photo", [Rule::FileRequired("Photo is required")])
}

#[test]
fn valid_values_pass() {
    let values = FormValues::new()
        .with_text("name", "Ann")
        .with_text("color", "red")
        .with_file("photo", true);
    assert_eq!(validator().validate(&values), Ok(()));
}

#[test]
fn empty_form_reports_first_rule_per_field() {
    let errors = validator().validate(&FormValues::new()).unwrap_err();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors.get("name"), Some("Required"));
    assert_eq!(errors.get("color"), Some("Required"));
    assert_eq!(errors.get("photo"), Some("Photo is required"));
}

#[test]
fn errors_keep_field_order() {
    let errors = validator().validate(&FormValues::new()).unwrap_err();
    let names: Vec<_> = errors.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["name", "color", "photo"]);
}

#[test]
fn min_length_counts_characters() {
    let values = FormValues::new()
        .with_text("name", "Zé")
        .with_text("color", "blue")
        .with_file("photo", true);
    let errors = validator().validate(&values).unwrap_err();
    assert_eq!(errors.get("name"), Some("Too short"));
    assert_eq!(errors.get("color"), None);

    let values = values.with_text("name", "Zoë");
    assert!(validator().validate(&values).is_ok());
}

#[test]
fn one_of_is_case_sensitive() {
    let values = FormValues::new()
        .with_text("name", "Ann")
        .with_text("color", "Red")
        .with_file("photo", true);
    let errors = validator().validate(&values).unwrap_err();
    assert_eq!(errors.get("color"), Some("Invalid color"));
}

#[test]
fn removing_a_file_fails_again() {
    let mut values = FormValues::new().with_text("name", "Ann").with_text("color", "red").with_file("photo", true);
    values.set_file("photo", false);
    assert_eq!(validator().validate(&values).unwrap_err().get("photo"), Some("Photo is required"));
}

#[test]
fn submit_skips_send_when_invalid() {
    let mut sent = 0;
    let result = validator().submit(&FormValues::new().with_text("name", "Ann"), || sent += 1);
    assert!(result.is_err());
    assert_eq!(sent, 0);
}

#[test]
fn submit_sends_once_when_valid() {
    let mut sent = 0;
    let values = FormValues::new().with_text("name", "Ann").with_text("color", "blue").with_file("photo", true);
    let result = validator().submit(&values, || {
        sent += 1;
        "queued"
    });
    assert_eq!(result, Ok("queued"));
    assert_eq!(sent, 1);
}
