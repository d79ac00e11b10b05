use super::*;

#[test]
fn api_and_upload_urls() {
    assert_eq!(api_url("check-auth"), format!("{API_BASE}/api/check-auth"));
    assert_eq!(upload_url("me.png"), format!("{API_BASE}/Uploads/me.png"));
}

#[test]
fn user_outfits_with_and_without_filter() {
    assert_eq!(user_outfits_path(5, None), "users/5/outfits?category=");
    assert_eq!(user_outfits_path(5, Some(Category::Athletic)), "users/5/outfits?category=Athletic");
}

#[test]
fn resource_paths() {
    assert_eq!(outfit_path(11), "outfits/11");
    assert_eq!(search_path("red%20jacket"), "search?q=red%20jacket");
    assert_eq!(share_url("hi", "x%3A"), "https://x.com/intent/tweet?text=hi&url=x%3A");
}
