use std::rc::Rc;

use dominator::{Dom, html};
use futures_signals::map_ref;
use futures_signals::signal::{Mutable, SignalExt};
use futures_signals::signal_vec::{MutableVec, SignalVecExt};
use wasm_bindgen_futures::spawn_local;

use shared::display::{list_keeps_created, profile_empty_text, profile_title, MSG_PLEASE_LOGIN};
use shared::forms::OutfitFormMode;
use shared::routes::Route;
use shared::types::{Category, Identity, Outfit};
use shared::utils::upload_url;

use crate::constants::{PROP_ALT, PROP_SRC, TAG_DIV, TAG_IMG};
use crate::elements::app_header::logout_button;
use crate::elements::outfit_form::{outfit_fields, outfit_submit, OUTFIT_ALL_FIELDS};
use crate::elements::widgets::{category_filter, go_to, link, notice, outfit_grid, screen_header, spinner, submit_button};
use crate::loader;
use crate::session::SessionStatus;
use crate::state::AppState;
use crate::toast::toasts::Toast;
use crate::types::FormState;
use crate::utils::{get_input_value, location_href, location_pathname, set_title};

#[cfg(test)]
#[path = "app_profile_test.rs"]
mod app_profile_test;

const FIELD_FILTER: &str = "filter";

struct ProfileState {
    user_id: i64,
    category: Mutable<Option<Category>>,
    outfits: MutableVec<Outfit>,
    form: FormState,
}

impl ProfileState {
    fn new(user_id: i64) -> Self {
        Self {
            user_id,
            category: Mutable::new(None),
            outfits: MutableVec::new(),
            form: FormState::default(),
        }
    }

    /// Replaces the list with exactly what the backend returned for the filter.
    fn loaded(&self, outfits: Vec<Outfit>) {
        self.outfits.lock_mut().replace_cloned(outfits);
    }

    /// Appends a new outfit unless the active filter excludes it.
    fn created(&self, outfit: Outfit) {
        if list_keeps_created(self.category.get(), outfit.category) {
            self.outfits.lock_mut().push_cloned(outfit);
        }
    }
}

fn css_class(label: &str) -> String {
    format!("app-profile__{label}")
}

pub fn app_profile(app: AppState) -> Dom {
    set_title("Profile");
    let session = app.session.clone();
    html!(TAG_DIV, {
        .class(css_class("container"))
        .child_signal(session.status_signal().dedupe_cloned().map(move |status| {
            Some(match status {
                SessionStatus::Unknown => spinner(),
                SessionStatus::Anonymous => {
                    // a logout elsewhere may already have navigated away
                    if Route::from_path(&location_pathname(&location_href())) == Route::Profile {
                        go_to(Route::Login);
                    }
                    notice(MSG_PLEASE_LOGIN)
                }
                SessionStatus::Authenticated(identity) => profile_body(app.clone(), identity),
            })
        }))
    })
}

fn profile_body(app: AppState, identity: Identity) -> Dom {
    let state = Rc::new(ProfileState::new(identity.id));

    let load_state = state.clone();
    let filter_state = state.clone();
    let submit_state = state.clone();
    let list_state = state.clone();

    let picture = identity.profile_picture.as_ref().map(|picture| html!(TAG_IMG, {
        .class(css_class("picture"))
        .attr(PROP_SRC, &upload_url(picture))
        .attr(PROP_ALT, "Profile")
    }));

    let list = map_ref! {
        let category = state.category.signal(),
        let count = state.outfits.signal_vec_cloned().len() =>
        (*category, *count)
    };

    html!(TAG_DIV, {
        .future(state.category.signal().for_each(move |category| {
            outfits_load(load_state.clone(), category)
        }))
        .children([
            screen_header("Profile", vec![
                link(Route::Home, "Home"),
                link(Route::Outfits, "All Outfits"),
                logout_button(app),
            ]),
            html!(TAG_DIV, {
                .class(css_class("card"))
                .child(html!("h3", {
                    .text(&profile_title(&identity.username))
                }))
                .children(picture)
            }),
            html!(TAG_DIV, {
                .class(css_class("card"))
                .child(html!("h3", {
                    .text("Create New Outfit")
                }))
                .children(outfit_fields(&state.form, None))
                .child(submit_button(&state.form, "Create Outfit", move || outfit_create(&submit_state)))
            }),
            html!(TAG_DIV, {
                .class(css_class("card"))
                .children([
                    html!("h3", {
                        .text("My Outfits")
                    }),
                    category_filter(FIELD_FILTER, move || {
                        filter_state.category.set_neq(get_input_value(FIELD_FILTER).parse().ok());
                    }),
                ])
                .child_signal(list.dedupe().map(move |(category, count)| {
                    Some(if count == 0 {
                        notice(&profile_empty_text(category))
                    } else {
                        outfit_grid(list_state.outfits.signal_vec_cloned())
                    })
                }))
            }),
        ])
    })
}

async fn outfits_load(state: Rc<ProfileState>, category: Option<Category>) {
    match loader::outfits_by_user(state.user_id, category).await {
        Ok(outfits) => state.loaded(outfits),
        Err(err) => Toast::error(&err.notice("Failed to load outfits")),
    }
}

fn outfit_create(state: &Rc<ProfileState>) {
    let body = match outfit_submit(&state.form, OutfitFormMode::Create) {
        Some(Ok(body)) => body,
        Some(Err(err)) => {
            Toast::error(&err.notice("Failed to create outfit"));
            return;
        }
        None => return,
    };
    let state = state.clone();
    state.form.pending.set(true);
    spawn_local(async move {
        match loader::outfit_create(body).await {
            Ok(outfit) => {
                Toast::success("Outfit created");
                state.created(outfit);
                state.form.reset(&OUTFIT_ALL_FIELDS);
            }
            Err(err) => Toast::error(&err.notice("Failed to create outfit")),
        }
        state.form.pending.set(false);
    });
}
