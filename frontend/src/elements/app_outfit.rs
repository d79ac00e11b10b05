use std::rc::Rc;

use dominator::{Dom, html};
use futures_signals::map_ref;
use futures_signals::signal::{Mutable, SignalExt};
use wasm_bindgen_futures::spawn_local;

use shared::constants::SHARE_TEXT;
use shared::display::{average_rating_text, DetailMode, MSG_OUTFIT_MISSING};
use shared::forms::{parse_rating, OutfitFormMode, MSG_RATING_RANGE};
use shared::routes::Route;
use shared::types::{Outfit, RatingRequest};
use shared::utils::{share_url, upload_url};

use crate::constants::{PROP_ALT, PROP_NAME, PROP_PLACEHOLDER, PROP_SRC, PROP_TYPE, TAG_DIV, TAG_IMG, TAG_INPUT, TAG_P};
use crate::elements::outfit_form::{outfit_fields, outfit_submit};
use crate::elements::widgets::{button, go_to, link, notice, screen_header, spinner, submit_button};
use crate::loader;
use crate::session::SessionStore;
use crate::state::AppState;
use crate::toast::toasts::Toast;
use crate::types::FormState;
use crate::utils::{encode_component, get_input_value, location_href, open_window, set_input_value, set_title};

const FIELD_RATING: &str = "rating";

struct DetailState {
    id: i64,
    outfit: Mutable<Option<Outfit>>,
    loading: Mutable<bool>,
    mode: Mutable<DetailMode>,
    form: FormState,
}

fn css_class(label: &str) -> String {
    format!("app-outfit__{label}")
}

pub fn app_outfit(app: AppState, id: i64) -> Dom {
    set_title("Outfit");
    let state = Rc::new(DetailState {
        id,
        outfit: Mutable::new(None),
        loading: Mutable::new(true),
        mode: Mutable::new(DetailMode::Viewing),
        form: FormState::default(),
    });
    let view_state = state.clone();

    let view = map_ref! {
        let loading = state.loading.signal(),
        let outfit = state.outfit.signal_cloned(),
        let mode = state.mode.signal() =>
        (*loading, outfit.clone(), *mode)
    };

    html!(TAG_DIV, {
        .class(css_class("container"))
        .future(outfit_load(state.clone()))
        .child_signal(view.map(move |(loading, outfit, mode)| {
            Some(match (loading, outfit) {
                (true, _) => spinner(),
                (false, None) => notice(MSG_OUTFIT_MISSING),
                (false, Some(outfit)) => match mode {
                    DetailMode::Viewing => detail_view(&app, &view_state, outfit),
                    DetailMode::Editing => edit_view(&view_state, outfit),
                },
            })
        }))
    })
}

async fn outfit_load(state: Rc<DetailState>) {
    match loader::outfit_get(state.id).await {
        Ok(outfit) => {
            set_title(&outfit.title);
            state.outfit.set(Some(outfit));
        }
        Err(err) => Toast::error(&err.notice("Failed to load outfit")),
    }
    state.loading.set_neq(false);
}

fn detail_view(app: &AppState, state: &Rc<DetailState>, outfit: Outfit) -> Dom {
    let rate_state = state.clone();
    let owner_state = state.clone();
    let session = app.session.clone();
    let owner_session = app.session.clone();
    let user_id = outfit.user_id;

    html!(TAG_DIV, {
        .class(css_class("card"))
        .children([
            screen_header(&outfit.title, vec![link(Route::Profile, "Back to Profile")]),
            html!(TAG_IMG, {
                .class(css_class("image"))
                .attr(PROP_SRC, &upload_url(&outfit.image))
                .attr(PROP_ALT, &outfit.title)
            }),
            html!(TAG_P, {
                .class(css_class("description"))
                .text(&outfit.description)
            }),
            html!(TAG_P, {
                .class(css_class("category"))
                .text(&format!("Category: {}", outfit.category))
            }),
            html!(TAG_P, {
                .class(css_class("rating"))
                .text(&average_rating_text(outfit.average_rating))
            }),
            html!(TAG_DIV, {
                .class(css_class("rate"))
                .children([
                    html!(TAG_INPUT, {
                        .attr(PROP_TYPE, "number")
                        .attr(PROP_NAME, FIELD_RATING)
                        .attr("min", "1")
                        .attr("max", "5")
                        .attr(PROP_PLACEHOLDER, "1-5")
                    }),
                    button("Submit Rating", move || rating_submit(&rate_state)),
                ])
            }),
        ])
        .child_signal(session.owner_signal(user_id).map(move |owner| {
            owner.then(|| owner_controls(&owner_session, &owner_state, user_id))
        }))
        .child(button("Share on X", share))
    })
}

/// Rendered only while the viewer owns the outfit.
fn owner_controls(session: &Rc<SessionStore>, state: &Rc<DetailState>, user_id: i64) -> Dom {
    let session = session.clone();
    let edit_state = state.clone();
    let delete_state = state.clone();
    html!(TAG_DIV, {
        .class(css_class("owner"))
        .children([
            button("Edit Outfit", move || {
                edit_state.mode.replace_with(|mode| mode.begin_edit(session.is_owner(user_id)));
            }),
            button("Delete Outfit", move || outfit_delete(&delete_state)),
        ])
    })
}

fn edit_view(state: &Rc<DetailState>, outfit: Outfit) -> Dom {
    let save_state = state.clone();
    let cancel_state = state.clone();
    html!(TAG_DIV, {
        .class(css_class("card"))
        .child(html!("h3", {
            .text("Edit Outfit")
        }))
        .children(outfit_fields(&state.form, Some(&outfit)))
        .children([
            submit_button(&state.form, "Save Changes", move || outfit_update(&save_state)),
            button("Cancel", move || {
                cancel_state.form.reset(&[]);
                cancel_state.mode.replace_with(|mode| mode.finish());
            }),
        ])
    })
}

fn outfit_update(state: &Rc<DetailState>) {
    let body = match outfit_submit(&state.form, OutfitFormMode::Edit) {
        Some(Ok(body)) => body,
        Some(Err(err)) => {
            Toast::error(&err.notice("Update failed"));
            return;
        }
        None => return,
    };
    let state = state.clone();
    state.form.pending.set(true);
    spawn_local(async move {
        match loader::outfit_update(state.id, body).await {
            Ok(()) => {
                Toast::success("Outfit updated");
                state.mode.replace_with(|mode| mode.finish());
                outfit_load(state.clone()).await;
            }
            Err(err) => Toast::error(&err.notice("Update failed")),
        }
        state.form.pending.set(false);
    });
}

fn rating_submit(state: &Rc<DetailState>) {
    let Some(score) = parse_rating(&get_input_value(FIELD_RATING)) else {
        Toast::error(MSG_RATING_RANGE);
        return;
    };
    let state = state.clone();
    spawn_local(async move {
        let request = RatingRequest { score, outfit_id: state.id };
        match loader::rating_submit(&request).await {
            Ok(()) => {
                Toast::success("Rating submitted");
                set_input_value(FIELD_RATING, "");
                outfit_load(state).await;
            }
            Err(err) => Toast::error(&err.notice("Rating failed")),
        }
    });
}

fn outfit_delete(state: &Rc<DetailState>) {
    let id = state.id;
    spawn_local(async move {
        match loader::outfit_delete(id).await {
            Ok(()) => {
                Toast::success("Outfit deleted");
                go_to(Route::Profile);
            }
            Err(err) => Toast::error(&err.notice("Delete failed")),
        }
    });
}

fn share() {
    open_window(&share_url(&encode_component(SHARE_TEXT), &encode_component(&location_href())));
}
