use dominator::{Dom, events, html};
use futures_signals::signal::SignalExt;
use wasm_bindgen_futures::spawn_local;

use shared::constants::APP_NAME;
use shared::routes::Route;
use shared::theme::toggle_label;

use crate::constants::{PROP_ARIA_LABEL, TAG_BUTTON, TAG_DIV, TAG_NAV, TAG_SPAN};
use crate::elements::widgets::{go_to, link};
use crate::state::AppState;
use crate::toast::toasts::Toast;

fn css_class(label: &str) -> String {
    format!("app-header__{label}")
}

pub fn app_header(app: AppState) -> Dom {
    let session = app.session.clone();
    let theme = app.theme.clone();
    html!(TAG_NAV, {
        .class(css_class("container"))
        .children([
            html!(TAG_DIV, {
                .class(css_class("brand"))
                .child(link(Route::Home, APP_NAME))
            }),
            html!(TAG_DIV, {
                .class(css_class("links"))
                .children([
                    link(Route::Home, "Home"),
                    link(Route::Outfits, "All Outfits"),
                ])
                .child_signal(session.identity_signal().map(move |identity| {
                    Some(match identity {
                        Some(_) => html!(TAG_SPAN, {
                            .children([link(Route::Profile, "Profile"), logout_button(app.clone())])
                        }),
                        None => html!(TAG_SPAN, {
                            .children([link(Route::Signup, "Signup"), link(Route::Login, "Login")])
                        }),
                    })
                }))
                .child(html!(TAG_BUTTON, {
                    .class(css_class("theme"))
                    .attr_signal(PROP_ARIA_LABEL, theme.dark_signal().map(|dark| {
                        if dark { "Switch to light mode".to_string() } else { "Switch to dark mode".to_string() }
                    }))
                    .text_signal(theme.dark_signal().map(toggle_label))
                    .event(move |_: events::Click| theme.toggle())
                }))
            }),
        ])
    })
}

pub fn logout_button(app: AppState) -> Dom {
    html!(TAG_BUTTON, {
        .class(css_class("logout"))
        .text("Logout")
        .event(move |_: events::Click| handle_logout(&app))
    })
}

fn handle_logout(app: &AppState) {
    let session = app.session.clone();
    spawn_local(async move {
        session.logout().await;
        go_to(Route::Home);
        Toast::success("Logged out successfully");
    });
}
