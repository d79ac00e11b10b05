use super::*;

#[test]
fn category_parses_only_known_names() {
    for category in Category::ALL {
        assert_eq!(category.as_str().parse::<Category>(), Ok(category));
    }
    assert!("casual".parse::<Category>().is_err());
    assert!("".parse::<Category>().is_err());
}

#[test]
fn category_names_follow_all() {
    let names: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();
    assert_eq!(names, Category::NAMES);
}

#[test]
fn outfit_decodes_without_rating() {
    let outfit: Outfit = serde_json::from_str(
        r#"{"id":3,"title":"Red jacket","description":"Warm and bright","category":"Casual","image":"a.png","user_id":9}"#,
    )
    .unwrap();
    assert_eq!(outfit.category, Category::Casual);
    assert_eq!(outfit.average_rating, None);
}

#[test]
fn outfit_decodes_null_rating() {
    let outfit: Outfit = serde_json::from_str(
        r#"{"id":3,"title":"Suit","description":"Two piece navy","category":"Formal","image":"b.png","user_id":9,"average_rating":null}"#,
    )
    .unwrap();
    assert_eq!(outfit.average_rating, None);
}

#[test]
fn auth_response_null_user_is_anonymous() {
    let res: AuthResponse = serde_json::from_str(r#"{"user":null}"#).unwrap();
    assert!(res.user.is_none());
    let res: AuthResponse = serde_json::from_str("{}").unwrap();
    assert!(res.user.is_none());
}

#[test]
fn partial_identity_is_rejected() {
    let res = serde_json::from_str::<AuthResponse>(r#"{"user":{"username":"ann"}}"#);
    assert!(res.is_err());
}

#[test]
fn identity_profile_picture_is_optional() {
    let res: AuthResponse = serde_json::from_str(r#"{"user":{"id":1,"username":"ann"}}"#).unwrap();
    assert_eq!(res.user, Some(Identity { id: 1, username: "ann".into(), profile_picture: None }));
}

#[test]
fn rating_request_wire_shape() {
    let json = serde_json::to_value(RatingRequest { score: 4, outfit_id: 12 }).unwrap();
    assert_eq!(json, serde_json::json!({"score": 4, "outfit_id": 12}));
}

#[test]
fn outfits_response_defaults_to_empty() {
    let res: OutfitsResponse = serde_json::from_str("{}").unwrap();
    assert!(res.outfits.is_empty());
}
