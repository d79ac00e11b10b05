use dominator::{Dom, html};
use wasm_bindgen_futures::spawn_local;

use shared::forms::{login_form, FIELD_PASSWORD, FIELD_USERNAME};
use shared::routes::Route;

use crate::constants::{TAG_DIV, TAG_P};
use crate::elements::widgets::{go_to, link, password_input, screen_header, submit_button, text_input};
use crate::state::AppState;
use crate::toast::toasts::Toast;
use crate::types::FormState;
use crate::utils::set_title;

fn css_class(label: &str) -> String {
    format!("app-login__{label}")
}

pub fn app_login(app: AppState) -> Dom {
    set_title("Login");
    let form = FormState::default();
    let submit_form = form.clone();
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            screen_header("Login", vec![link(Route::Home, "Home"), link(Route::Outfits, "All Outfits")]),
            html!(TAG_DIV, {
                .class(css_class("form"))
                .children([
                    html!("h3", {
                        .text("Sign In")
                    }),
                    text_input(&form, FIELD_USERNAME, "Username", ""),
                    password_input(&form, FIELD_PASSWORD),
                    submit_button(&form, "Login", move || login_connect(&app, &submit_form)),
                ])
            }),
            html!(TAG_P, {
                .class(css_class("footer"))
                .text("Don't have an account? ")
                .child(link(Route::Signup, "Signup"))
            }),
        ])
    })
}

fn login_connect(app: &AppState, form: &FormState) {
    let Some(values) = form.check(&login_form(), &[FIELD_USERNAME, FIELD_PASSWORD], &[]) else {
        return;
    };
    let username = values.text(FIELD_USERNAME).to_string();
    let password = values.text(FIELD_PASSWORD).to_string();
    let session = app.session.clone();
    let form = form.clone();
    form.pending.set(true);
    spawn_local(async move {
        match session.login(&username, &password).await {
            Ok(identity) => {
                log::info!("logged in as {}", identity.username);
                Toast::success("Logged in successfully");
                go_to(Route::Profile);
            }
            Err(message) => Toast::error(&format!("Login failed: {message}")),
        }
        form.pending.set(false);
    });
}
