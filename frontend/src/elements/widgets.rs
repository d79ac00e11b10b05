use dominator::{Dom, EventOptions, events, html};
use dominator::routing::go_to_url;
use futures_signals::signal::{Mutable, SignalExt};
use futures_signals::signal_vec::{SignalVec, SignalVecExt};

use shared::routes::Route;
use shared::types::{Category, Outfit};
use shared::utils::upload_url;
use shared::validate::FieldName;

use crate::constants::{ACCEPT_IMAGES, PROP_ACCEPT, PROP_ALT, PROP_ARIA_LABEL, PROP_DISABLED, PROP_HREF, PROP_NAME, PROP_PLACEHOLDER, PROP_SELECTED, PROP_SRC, PROP_TYPE, PROP_VALUE, TAG_BUTTON, TAG_DIV, TAG_IMG, TAG_INPUT, TAG_NAV, TAG_OPTION, TAG_P, TAG_SELECT, TAG_SPAN, TAG_TEXTAREA};
use crate::types::FormState;

fn css_class(label: &str) -> String {
    format!("widgets__{label}")
}

pub fn go_to(route: Route) {
    go_to_url(&route.to_url());
}

pub fn link(route: Route, label: &str) -> Dom {
    let url = route.to_url();
    html!("a", {
        .class(css_class("link"))
        .attr(PROP_HREF, &url)
        .text(label)
        .event_with_options(&EventOptions::preventable(), move |e: events::Click| {
            e.prevent_default();
            go_to_url(&url);
        })
    })
}

/// Gradient title bar each screen starts with.
pub fn screen_header(title: &str, links: Vec<Dom>) -> Dom {
    html!(TAG_NAV, {
        .class(css_class("header"))
        .children([
            html!("h2", {
                .class(css_class("header-title"))
                .text(title)
            }),
            html!(TAG_DIV, {
                .class(css_class("header-links"))
                .children(links)
            }),
        ])
    })
}

pub fn spinner() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("spinner-box"))
        .child(html!(TAG_DIV, {
            .class(css_class("spinner"))
        }))
    })
}

pub fn notice(text: &str) -> Dom {
    html!(TAG_P, {
        .class(css_class("notice"))
        .text(text)
    })
}

pub fn button(label: &str, click: impl FnMut() + 'static) -> Dom {
    let mut click = click;
    html!(TAG_BUTTON, {
        .class(css_class("button"))
        .attr(PROP_TYPE, "button")
        .text(label)
        .event(move |_: events::Click| click())
    })
}

/// Disabled while the form's request is in flight.
pub fn submit_button(form: &FormState, label: &str, click: impl FnMut() + 'static) -> Dom {
    let mut click = click;
    html!(TAG_BUTTON, {
        .class(css_class("button"))
        .class(css_class("submit"))
        .attr(PROP_TYPE, "button")
        .prop_signal(PROP_DISABLED, form.pending.signal())
        .text(label)
        .event(move |_: events::Click| click())
    })
}

// === form fields

fn field_error(form: &FormState, name: FieldName) -> Dom {
    html!(TAG_DIV, {
        .child_signal(form.error_signal(name).map(|error| {
            error.map(|error| html!(TAG_DIV, {
                .class("error")
                .text(&error)
            }))
        }))
    })
}

fn field(form: &FormState, name: FieldName, input: Dom) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("field"))
        .children([input, field_error(form, name)])
    })
}

pub fn text_input(form: &FormState, name: FieldName, placeholder: &str, value: &str) -> Dom {
    field(form, name, html!(TAG_INPUT, {
        .class(css_class("input"))
        .attr(PROP_TYPE, "text")
        .attr(PROP_NAME, name)
        .attr(PROP_PLACEHOLDER, placeholder)
        .prop(PROP_VALUE, value)
    }))
}

pub fn textarea_input(form: &FormState, name: FieldName, placeholder: &str, value: &str) -> Dom {
    field(form, name, html!(TAG_TEXTAREA, {
        .class(css_class("input"))
        .attr(PROP_NAME, name)
        .attr(PROP_PLACEHOLDER, placeholder)
        .prop(PROP_VALUE, value)
    }))
}

pub fn password_input(form: &FormState, name: FieldName) -> Dom {
    let visible = Mutable::new(false);
    let toggle = visible.clone();
    field(form, name, html!(TAG_DIV, {
        .class(css_class("password"))
        .children([
            html!(TAG_INPUT, {
                .class(css_class("input"))
                .attr_signal(PROP_TYPE, visible.signal().map(|flag| if flag { "text".to_string() } else { "password".to_string() }))
                .attr(PROP_NAME, name)
                .attr(PROP_PLACEHOLDER, "Password")
            }),
            html!(TAG_BUTTON, {
                .class(css_class("password-toggle"))
                .attr(PROP_TYPE, "button")
                .attr_signal(PROP_ARIA_LABEL, visible.signal().map(|flag| if flag { "Hide password".to_string() } else { "Show password".to_string() }))
                .text_signal(visible.signal().map(|flag| if flag { "🙈" } else { "👁️" }))
                .event(move |_: events::Click| {
                    toggle.replace_with(|flag| !*flag);
                })
            }),
        ])
    }))
}

pub fn file_input(form: &FormState, name: FieldName) -> Dom {
    field(form, name, html!(TAG_INPUT, {
        .class(css_class("input"))
        .attr(PROP_TYPE, "file")
        .attr(PROP_NAME, name)
        .attr(PROP_ACCEPT, ACCEPT_IMAGES)
    }))
}

/// Category picker with a disabled placeholder, as used by outfit forms.
pub fn category_select(form: &FormState, name: FieldName, value: Option<Category>) -> Dom {
    let mut options = vec![html!(TAG_OPTION, {
        .attr(PROP_VALUE, "")
        .attr(PROP_DISABLED, "")
        .text("Select a category")
    })];
    options.extend(Category::ALL.iter().map(|category| category_option(*category)));

    field(form, name, html!(TAG_SELECT, {
        .class(css_class("input"))
        .attr(PROP_NAME, name)
        .children(options)
        .prop(PROP_VALUE, value.map(|c| c.as_str()).unwrap_or_default())
    }))
}

/// Category filter; the empty value stands for every category.
pub fn category_filter(name: &str, change: impl FnMut() + 'static) -> Dom {
    let mut change = change;
    let mut options = vec![html!(TAG_OPTION, {
        .attr(PROP_VALUE, "")
        .attr(PROP_SELECTED, "")
        .text("All Categories")
    })];
    options.extend(Category::ALL.iter().map(|category| category_option(*category)));

    html!(TAG_SELECT, {
        .class(css_class("input"))
        .attr(PROP_NAME, name)
        .children(options)
        .event(move |_: events::Change| change())
    })
}

fn category_option(category: Category) -> Dom {
    html!(TAG_OPTION, {
        .attr(PROP_VALUE, category.as_str())
        .text(category.as_str())
    })
}

// === outfits

pub fn outfit_grid(outfits: impl SignalVec<Item = Outfit> + 'static) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("grid"))
        .children_signal_vec(outfits.map(|outfit| outfit_card(&outfit)))
    })
}

fn outfit_card(outfit: &Outfit) -> Dom {
    let url = Route::OutfitDetail(outfit.id).to_url();
    html!(TAG_DIV, {
        .class(css_class("card"))
        .child(html!("a", {
            .attr(PROP_HREF, &url)
            .event_with_options(&EventOptions::preventable(), move |e: events::Click| {
                e.prevent_default();
                go_to_url(&url);
            })
            .children([
                html!(TAG_IMG, {
                    .class(css_class("card-image"))
                    .attr(PROP_SRC, &upload_url(&outfit.image))
                    .attr(PROP_ALT, &outfit.title)
                }),
                html!("h3", {
                    .class(css_class("card-title"))
                    .text(&outfit.title)
                }),
                html!(TAG_P, {
                    .class(css_class("card-text"))
                    .text(&outfit.description)
                }),
                html!(TAG_SPAN, {
                    .class(css_class("link"))
                    .text("View Details")
                }),
            ])
        }))
    })
}
