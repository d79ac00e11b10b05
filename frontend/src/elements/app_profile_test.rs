use super::*;

fn outfit(id: i64, category: Category) -> Outfit {
    Outfit {
        id,
        title: format!("Outfit {id}"),
        description: "A description long enough".to_string(),
        category,
        image: format!("{id}.png"),
        user_id: 7,
        average_rating: None,
    }
}

fn ids(state: &ProfileState) -> Vec<i64> {
    state.outfits.lock_ref().iter().map(|outfit| outfit.id).collect()
}

#[test]
fn load_shows_exactly_the_returned_set() {
    let state = ProfileState::new(7);
    state.loaded(vec![outfit(1, Category::Casual), outfit(2, Category::Party)]);
    assert_eq!(ids(&state), [1, 2]);

    state.category.set(Some(Category::Party));
    state.loaded(vec![outfit(2, Category::Party)]);
    assert_eq!(ids(&state), [2]);

    state.category.set(None);
    state.loaded(vec![outfit(1, Category::Casual), outfit(2, Category::Party), outfit(3, Category::Formal)]);
    assert_eq!(ids(&state), [1, 2, 3]);
}

#[test]
fn created_outfit_follows_the_filter() {
    let state = ProfileState::new(7);
    state.loaded(vec![outfit(1, Category::Casual)]);
    state.created(outfit(2, Category::Formal));
    assert_eq!(ids(&state), [1, 2]);

    state.category.set(Some(Category::Casual));
    state.loaded(vec![outfit(1, Category::Casual)]);
    state.created(outfit(3, Category::Formal));
    assert_eq!(ids(&state), [1]);

    state.created(outfit(4, Category::Casual));
    assert_eq!(ids(&state), [1, 4]);
}
