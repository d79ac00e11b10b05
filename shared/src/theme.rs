use crate::constants::{TOAST_BG_DARK, TOAST_BG_LIGHT, TOAST_TEXT_DARK, TOAST_TEXT_LIGHT};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Stored value `"true"` means dark, anything else (or nothing) means light.
pub fn parse_preference(stored: Option<&str>) -> bool {
    stored == Some("true")
}

pub fn preference_value(dark: bool) -> &'static str {
    if dark { "true" } else { "false" }
}

/// Background and text colors of the notification layer.
pub fn toast_colors(dark: bool) -> (&'static str, &'static str) {
    if dark {
        (TOAST_BG_DARK, TOAST_TEXT_DARK)
    } else {
        (TOAST_BG_LIGHT, TOAST_TEXT_LIGHT)
    }
}

pub fn toggle_label(dark: bool) -> &'static str {
    if dark { "☀️ Light" } else { "🌙 Dark" }
}
