use std::cell::RefCell;
use std::collections::BTreeMap;

use super::*;

#[derive(Default, Debug, Clone, PartialEq)]
struct Page {
    stored: Option<String>,
    dark_class: bool,
    properties: BTreeMap<String, String>,
}

#[derive(Clone, Default)]
struct FakeTarget(Rc<RefCell<Page>>);

impl ThemeTarget for FakeTarget {
    fn load(&self) -> Option<String> {
        self.0.borrow().stored.clone()
    }

    fn save(&self, value: &str) {
        self.0.borrow_mut().stored = Some(value.to_string());
    }

    fn set_dark_class(&self, dark: bool) {
        self.0.borrow_mut().dark_class = dark;
    }

    fn set_property(&self, name: &str, value: &str) {
        self.0.borrow_mut().properties.insert(name.to_string(), value.to_string());
    }
}

fn store_with(stored: Option<&str>) -> (Rc<ThemeStore>, FakeTarget) {
    let target = FakeTarget::default();
    target.0.borrow_mut().stored = stored.map(str::to_string);
    (ThemeStore::new(Box::new(target.clone())), target)
}

#[test]
fn missing_preference_is_light_and_applied() {
    let (store, target) = store_with(None);
    assert!(!store.is_dark());
    let page = target.0.borrow();
    assert_eq!(page.stored.as_deref(), Some("false"));
    assert!(!page.dark_class);
    assert_eq!(page.properties.get("--toast-bg").map(String::as_str), Some("#FFFFFF"));
    assert_eq!(page.properties.get("--toast-text").map(String::as_str), Some("#111827"));
}

#[test]
fn stored_true_starts_dark() {
    let (store, target) = store_with(Some("true"));
    assert!(store.is_dark());
    assert!(target.0.borrow().dark_class);
    assert_eq!(target.0.borrow().properties.get("--toast-bg").map(String::as_str), Some("#1F2937"));
}

#[test]
fn toggle_writes_everything() {
    let (store, target) = store_with(Some("false"));
    store.toggle();
    assert!(store.is_dark());
    let page = target.0.borrow();
    assert_eq!(page.stored.as_deref(), Some("true"));
    assert!(page.dark_class);
    assert_eq!(page.properties.get("--toast-text").map(String::as_str), Some("#F9FAFB"));
}

#[test]
fn toggling_twice_restores_page() {
    for initial in [Some("true"), Some("false"), None] {
        let (store, target) = store_with(initial);
        let before = target.0.borrow().clone();
        store.toggle();
        assert_ne!(*target.0.borrow(), before);
        store.toggle();
        assert_eq!(*target.0.borrow(), before);
    }
}
