use super::*;

#[test]
fn preference_round_trip_values() {
    assert!(parse_preference(Some("true")));
    assert!(!parse_preference(Some("false")));
    assert!(!parse_preference(Some("TRUE")));
    assert!(!parse_preference(None));
    assert_eq!(preference_value(true), "true");
    assert_eq!(preference_value(false), "false");
}

#[test]
fn toast_palette() {
    assert_eq!(toast_colors(true), ("#1F2937", "#F9FAFB"));
    assert_eq!(toast_colors(false), ("#FFFFFF", "#111827"));
}
