use super::*;

#[test]
fn search_with_no_matches_says_so() {
    assert_eq!(search_view("red jacket", false, 0), ListView::Notice("No outfits found."));
}

#[test]
fn search_prompt_and_results() {
    assert_eq!(search_view("", false, 0), ListView::Notice("Enter a search query to find outfits."));
    assert_eq!(search_view("   ", false, 0), ListView::Notice(MSG_SEARCH_PROMPT));
    assert_eq!(search_view("red", true, 0), ListView::Loading);
    assert_eq!(search_view("red", false, 2), ListView::Items);
}

#[test]
fn search_action_clears_on_blank() {
    assert_eq!(search_action(""), SearchAction::Clear);
    assert_eq!(search_action("  "), SearchAction::Clear);
    assert_eq!(search_action("red jacket"), SearchAction::Query("red jacket".into()));
}

#[test]
fn all_outfits_views() {
    assert_eq!(all_outfits_view(true, 0), ListView::Loading);
    assert_eq!(all_outfits_view(false, 0), ListView::Notice("No outfits available."));
    assert_eq!(all_outfits_view(false, 3), ListView::Items);
}

#[test]
fn profile_texts() {
    assert_eq!(profile_title("ann"), "ann's Profile");
    assert_eq!(profile_empty_text(None), "No outfits created yet.");
    assert_eq!(profile_empty_text(Some(Category::Party)), "No outfits in Party.");
}

#[test]
fn created_outfit_joins_matching_list_only() {
    assert!(list_keeps_created(None, Category::Formal));
    assert!(list_keeps_created(Some(Category::Formal), Category::Formal));
    assert!(!list_keeps_created(Some(Category::Casual), Category::Formal));
}

#[test]
fn average_rating_formatting() {
    assert_eq!(average_rating_text(Some(4.26)), "Average Rating: 4.3");
    assert_eq!(average_rating_text(Some(3.0)), "Average Rating: 3.0");
    assert_eq!(average_rating_text(None), "Average Rating: No ratings yet");
    assert_eq!(average_rating_text(Some(0.0)), "Average Rating: No ratings yet");
}

#[test]
fn only_owner_enters_editing() {
    assert_eq!(DetailMode::Viewing.begin_edit(false), DetailMode::Viewing);
    assert_eq!(DetailMode::Viewing.begin_edit(true), DetailMode::Editing);
    assert_eq!(DetailMode::Editing.finish(), DetailMode::Viewing);
    assert_eq!(DetailMode::default(), DetailMode::Viewing);
}
