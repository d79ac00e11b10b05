use std::sync::atomic::{AtomicUsize, Ordering};

use dominator::{Dom, events, html};
use futures_signals::signal_vec::{MutableVec, SignalVecExt};
use gloo_timers::callback::Timeout;
use once_cell::sync::Lazy;

use shared::constants::{TOAST_ERROR_MS, TOAST_SUCCESS_MS};

use crate::constants::{PROP_ARIA_LABEL, TAG_BUTTON, TAG_DIV, TAG_SPAN};

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

pub static TOASTS: Lazy<MutableVec<Toast>> = Lazy::new(|| {
    MutableVec::new()
});

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: &str) {
        let id = push(ToastKind::Success, message);
        schedule_dismiss(id, TOAST_SUCCESS_MS);
    }

    pub fn error(message: &str) {
        log::error!("{message}");
        let id = push(ToastKind::Error, message);
        schedule_dismiss(id, TOAST_ERROR_MS);
    }
}

fn push(kind: ToastKind, message: &str) -> usize {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    TOASTS.lock_mut().push_cloned(Toast { id, kind, message: message.to_string() });
    id
}

fn dismiss(id: usize) {
    TOASTS.lock_mut().retain(|toast| toast.id != id);
}

fn schedule_dismiss(id: usize, millis: u32) {
    let timer = Timeout::new(millis, move || dismiss(id));
    timer.forget();
}

// ===

fn css_class(label: &str) -> String {
    format!("toasts__{label}")
}

pub fn toasts() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children_signal_vec(TOASTS.signal_vec_cloned().map(toast_item))
    })
}

fn toast_item(toast: Toast) -> Dom {
    let id = toast.id;
    let kind = match toast.kind {
        ToastKind::Success => "success",
        ToastKind::Error => "error",
    };
    html!(TAG_DIV, {
        .class(css_class("item"))
        .class(css_class(kind))
        .attr("role", "status")
        .children([
            html!(TAG_SPAN, {
                .text(&toast.message)
            }),
            html!(TAG_BUTTON, {
                .class(css_class("close"))
                .attr(PROP_ARIA_LABEL, "dismiss")
                .text("×")
                .event(move |_: events::Click| dismiss(id))
            }),
        ])
    })
}
