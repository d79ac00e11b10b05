use dominator::{Dom, html};
use dominator::routing::url;
use futures_signals::signal::SignalExt;

use shared::routes::Route;

use crate::constants::TAG_DIV;
use crate::elements::app_header::app_header;
use crate::elements::app_home::app_home;
use crate::elements::app_login::app_login;
use crate::elements::app_outfit::app_outfit;
use crate::elements::app_outfits::app_outfits;
use crate::elements::app_profile::app_profile;
use crate::elements::app_signup::app_signup;
use crate::elements::widgets::{link, notice};
use crate::state::AppState;
use crate::toast::toasts::toasts;
use crate::utils::location_pathname;

pub fn app_root(app: AppState) -> Dom {
    let header = app_header(app.clone());
    html!(TAG_DIV, {
        .class("app-root")
        .child(header)
        .child_signal(url()
            .signal_cloned()
            .map(|url| Route::from_path(&location_pathname(&url)))
            .dedupe()
            .map(move |route| {
                log::info!("route: {:?}", route);
                Some(screen(&app, route))
            }))
        .child(toasts())
    })
}

fn screen(app: &AppState, route: Route) -> Dom {
    match route {
        Route::Home => app_home(app.clone()),
        Route::Signup => app_signup(app.clone()),
        Route::Login => app_login(app.clone()),
        Route::Profile => app_profile(app.clone()),
        Route::Outfits => app_outfits(),
        Route::OutfitDetail(id) => app_outfit(app.clone(), id),
        Route::NotFound => not_found(),
    }
}

fn not_found() -> Dom {
    html!(TAG_DIV, {
        .class("app-root__missing")
        .children([
            notice("Page not found."),
            link(Route::Home, "Back to Home"),
        ])
    })
}
