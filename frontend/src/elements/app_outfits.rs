use std::rc::Rc;

use dominator::{Dom, html};
use futures_signals::map_ref;
use futures_signals::signal::{Mutable, SignalExt};
use futures_signals::signal_vec::{MutableVec, SignalVecExt};

use shared::display::{all_outfits_view, ListView};
use shared::routes::Route;
use shared::types::Outfit;

use crate::constants::TAG_DIV;
use crate::elements::widgets::{link, notice, outfit_grid, screen_header, spinner};
use crate::loader;
use crate::toast::toasts::Toast;
use crate::utils::set_title;

struct OutfitsState {
    loading: Mutable<bool>,
    outfits: MutableVec<Outfit>,
}

fn css_class(label: &str) -> String {
    format!("app-outfits__{label}")
}

pub fn app_outfits() -> Dom {
    set_title("All Outfits");
    let state = Rc::new(OutfitsState {
        loading: Mutable::new(true),
        outfits: MutableVec::new(),
    });
    let list_state = state.clone();

    let view = map_ref! {
        let loading = state.loading.signal(),
        let count = state.outfits.signal_vec_cloned().len() =>
        all_outfits_view(*loading, *count)
    };

    html!(TAG_DIV, {
        .class(css_class("container"))
        .future(outfits_load(state.clone()))
        .child(screen_header("All Outfits", vec![link(Route::Home, "Back to Home")]))
        .child_signal(view.dedupe().map(move |view| {
            Some(match view {
                ListView::Loading => spinner(),
                ListView::Notice(text) => notice(text),
                ListView::Items => outfit_grid(list_state.outfits.signal_vec_cloned()),
            })
        }))
    })
}

async fn outfits_load(state: Rc<OutfitsState>) {
    match loader::outfits_all().await {
        Ok(outfits) => state.outfits.lock_mut().replace_cloned(outfits),
        Err(err) => Toast::error(&err.notice("Failed to load outfits")),
    }
    state.loading.set(false);
}
