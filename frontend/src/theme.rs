use std::rc::Rc;

use futures_signals::signal::{Mutable, Signal};

use shared::constants::{CLASS_DARK, CSS_TOAST_BG, CSS_TOAST_TEXT, STORAGE_DARK_MODE};
use shared::theme::{parse_preference, preference_value, toast_colors};

use crate::utils::{document_element, get_storage};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Where the preference is persisted and rendered.
pub trait ThemeTarget {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
    fn set_dark_class(&self, dark: bool);
    fn set_property(&self, name: &str, value: &str);
}

/// `localStorage` plus the `<html>` element.
pub struct DocumentTheme;

impl ThemeTarget for DocumentTheme {
    fn load(&self) -> Option<String> {
        get_storage().and_then(|storage| storage.get_item(STORAGE_DARK_MODE).ok()).and_then(|value| value)
    }

    fn save(&self, value: &str) {
        if let Some(storage) = get_storage() {
            if let Err(err) = storage.set_item(STORAGE_DARK_MODE, value) {
                log::error!("theme save: {:?}", err);
            }
        }
    }

    fn set_dark_class(&self, dark: bool) {
        if let Some(element) = document_element() {
            let classes = element.class_list();
            let result = if dark { classes.add_1(CLASS_DARK) } else { classes.remove_1(CLASS_DARK) };
            if let Err(err) = result {
                log::error!("theme class: {:?}", err);
            }
        }
    }

    fn set_property(&self, name: &str, value: &str) {
        if let Some(element) = document_element() {
            if let Err(err) = element.style().set_property(name, value) {
                log::error!("theme property {name}: {:?}", err);
            }
        }
    }
}

pub struct ThemeStore {
    dark: Mutable<bool>,
    target: Box<dyn ThemeTarget>,
}

impl ThemeStore {
    /// Reads the stored preference and applies it right away.
    pub fn new(target: Box<dyn ThemeTarget>) -> Rc<Self> {
        let dark = parse_preference(target.load().as_deref());
        let store = Self { dark: Mutable::new(dark), target };
        store.apply(dark);
        Rc::new(store)
    }

    pub fn is_dark(&self) -> bool {
        self.dark.get()
    }

    pub fn dark_signal(&self) -> impl Signal<Item = bool> {
        self.dark.signal()
    }

    pub fn toggle(&self) {
        let dark = !self.is_dark();
        self.dark.set(dark);
        self.apply(dark);
        log::info!("dark mode toggled: {dark}");
    }

    fn apply(&self, dark: bool) {
        self.target.save(preference_value(dark));
        self.target.set_dark_class(dark);
        let (background, text) = toast_colors(dark);
        self.target.set_property(CSS_TOAST_BG, background);
        self.target.set_property(CSS_TOAST_TEXT, text);
    }
}
