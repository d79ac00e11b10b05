use dominator::{Dom, html};
use wasm_bindgen_futures::spawn_local;

use shared::forms::{signup_form, FIELD_PASSWORD, FIELD_PROFILE_PICTURE, FIELD_USERNAME};
use shared::routes::Route;

use crate::connect_files::form_data;
use crate::constants::{TAG_DIV, TAG_P};
use crate::elements::widgets::{file_input, go_to, link, password_input, screen_header, submit_button, text_input};
use crate::loader;
use crate::state::AppState;
use crate::toast::toasts::Toast;
use crate::types::FormState;
use crate::utils::{get_input_file, set_title};

fn css_class(label: &str) -> String {
    format!("app-signup__{label}")
}

pub fn app_signup(app: AppState) -> Dom {
    set_title("Signup");
    let form = FormState::default();
    let submit_form = form.clone();
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            screen_header("Signup", vec![link(Route::Home, "Home"), link(Route::Outfits, "All Outfits")]),
            html!(TAG_DIV, {
                .class(css_class("form"))
                .children([
                    html!("h3", {
                        .text("Create Account")
                    }),
                    text_input(&form, FIELD_USERNAME, "Username", ""),
                    password_input(&form, FIELD_PASSWORD),
                    file_input(&form, FIELD_PROFILE_PICTURE),
                    submit_button(&form, "Signup", move || signup_connect(&app, &submit_form)),
                ])
            }),
            html!(TAG_P, {
                .class(css_class("footer"))
                .text("Already have an account? ")
                .child(link(Route::Login, "Login"))
            }),
        ])
    })
}

fn signup_connect(app: &AppState, form: &FormState) {
    let Some(values) = form.check(&signup_form(), &[FIELD_USERNAME, FIELD_PASSWORD], &[FIELD_PROFILE_PICTURE]) else {
        return;
    };
    let body = form_data(
        &[
            (FIELD_USERNAME, values.text(FIELD_USERNAME)),
            (FIELD_PASSWORD, values.text(FIELD_PASSWORD)),
        ],
        &[(FIELD_PROFILE_PICTURE, get_input_file(FIELD_PROFILE_PICTURE))],
    );
    let body = match body {
        Ok(body) => body,
        Err(err) => {
            Toast::error(&err.notice("Signup failed"));
            return;
        }
    };
    let session = app.session.clone();
    let form = form.clone();
    form.pending.set(true);
    spawn_local(async move {
        match loader::signup(body).await {
            Ok(identity) => {
                session.set_identity(Some(identity));
                Toast::success("Signed up successfully");
                go_to(Route::Profile);
            }
            Err(err) => Toast::error(&err.notice("Signup failed")),
        }
        form.pending.set(false);
    });
}
