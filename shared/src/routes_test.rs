use super::*;

#[test]
fn known_paths() {
    assert_eq!(Route::from_path("/"), Route::Home);
    assert_eq!(Route::from_path(""), Route::Home);
    assert_eq!(Route::from_path("/signup"), Route::Signup);
    assert_eq!(Route::from_path("/login"), Route::Login);
    assert_eq!(Route::from_path("/profile/"), Route::Profile);
    assert_eq!(Route::from_path("/outfits"), Route::Outfits);
    assert_eq!(Route::from_path("/outfits/42"), Route::OutfitDetail(42));
}

#[test]
fn unknown_paths() {
    assert_eq!(Route::from_path("/outfits/abc"), Route::NotFound);
    assert_eq!(Route::from_path("/outfits/1/edit"), Route::NotFound);
    assert_eq!(Route::from_path("/settings"), Route::NotFound);
}

#[test]
fn urls_parse_back() {
    for route in [Route::Home, Route::Signup, Route::Login, Route::Profile, Route::Outfits, Route::OutfitDetail(7)] {
        assert_eq!(Route::from_path(&route.to_url()), route);
    }
}
