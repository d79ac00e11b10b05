use std::rc::Rc;

use dominator::{Dom, events, html};
use futures_signals::map_ref;
use futures_signals::signal::{Mutable, SignalExt};
use futures_signals::signal_vec::{MutableVec, SignalVecExt};
use wasm_bindgen_futures::spawn_local;

use shared::constants::APP_NAME;
use shared::display::{search_action, search_view, ListView, SearchAction};
use shared::routes::Route;
use shared::types::Outfit;

use crate::constants::{PROP_NAME, PROP_PLACEHOLDER, PROP_TYPE, TAG_DIV, TAG_INPUT};
use crate::elements::app_header::logout_button;
use crate::elements::widgets::{link, notice, outfit_grid, screen_header, spinner};
use crate::loader;
use crate::state::AppState;
use crate::toast::toasts::Toast;
use crate::utils::{get_input_value, set_title};

const FIELD_SEARCH: &str = "search";

#[derive(Default)]
struct HomeState {
    query: Mutable<String>,
    loading: Mutable<bool>,
    outfits: MutableVec<Outfit>,
}

fn css_class(label: &str) -> String {
    format!("app-home__{label}")
}

pub fn app_home(app: AppState) -> Dom {
    set_title(APP_NAME);
    let state = Rc::new(HomeState::default());
    let input_state = state.clone();
    let list_state = state.clone();
    let session = app.session.clone();

    let view = map_ref! {
        let query = state.query.signal_cloned(),
        let loading = state.loading.signal(),
        let count = state.outfits.signal_vec_cloned().len() =>
        search_view(query, *loading, *count)
    };

    html!(TAG_DIV, {
        .class(css_class("container"))
        .child(html!(TAG_DIV, {
            .child_signal(session.identity_signal().map(move |identity| {
                let links = match identity {
                    Some(_) => vec![link(Route::Profile, "Profile"), logout_button(app.clone())],
                    None => vec![link(Route::Signup, "Signup"), link(Route::Login, "Login")],
                };
                Some(screen_header(APP_NAME, links))
            }))
        }))
        .child(html!(TAG_INPUT, {
            .class(css_class("search"))
            .attr(PROP_TYPE, "text")
            .attr(PROP_NAME, FIELD_SEARCH)
            .attr(PROP_PLACEHOLDER, "Search outfits or users...")
            .event(move |_: events::Input| search_changed(&input_state))
        }))
        .child_signal(view.dedupe().map(move |view| {
            Some(match view {
                ListView::Loading => spinner(),
                ListView::Notice(text) => notice(text),
                ListView::Items => outfit_grid(list_state.outfits.signal_vec_cloned()),
            })
        }))
    })
}

/// Every keystroke queries, an emptied input only clears.
fn search_changed(state: &Rc<HomeState>) {
    let input = get_input_value(FIELD_SEARCH);
    state.query.set(input.clone());
    match search_action(&input) {
        SearchAction::Clear => {
            state.outfits.lock_mut().clear();
        }
        SearchAction::Query(query) => {
            let state = state.clone();
            state.loading.set(true);
            spawn_local(async move {
                match loader::outfits_search(&query).await {
                    Ok(outfits) => {
                        state.outfits.lock_mut().replace_cloned(outfits);
                    }
                    Err(err) => Toast::error(&err.notice("Failed to load outfits")),
                }
                state.loading.set(false);
            });
        }
    }
}
