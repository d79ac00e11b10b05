//! Current identity, shared by every screen.
//!
//! The store is created once in `main` and handed to screens by `Rc`. Until
//! the startup session check resolves, `status` is `Unknown` and screens must
//! not treat the visitor as anonymous.

use std::rc::Rc;

use futures_signals::map_ref;
use futures_signals::signal::{Mutable, Signal};
use wasm_bindgen_futures::spawn_local;

use shared::constants::MSG_LOGIN_FAILED;
use shared::error::ApiError;
use shared::types::{Identity, LoginRequest};

use crate::loader;

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionStatus {
    Unknown,
    Anonymous,
    Authenticated(Identity),
}

pub struct SessionStore {
    identity: Mutable<Option<Identity>>,
    loading: Mutable<bool>,
}

impl SessionStore {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            identity: Mutable::new(None),
            loading: Mutable::new(true),
        })
    }

    /// Asks the backend whether the browser already holds a session.
    pub fn check(self: &Rc<Self>) {
        let store = self.clone();
        spawn_local(async move {
            let result = loader::check_auth().await;
            store.resolve_check(result);
        });
    }

    fn resolve_check(&self, result: Result<Option<Identity>, ApiError>) {
        let checked = match result {
            Ok(identity) => identity,
            Err(err) => {
                log::error!("session check: {err}");
                None
            }
        };
        // a login or signup that finished first wins
        let signed_in = self.identity.lock_ref().is_some();
        if !signed_in {
            self.identity.set(checked);
        }
        self.loading.set_neq(false);
        log::info!("session check: {:?}", self.status());
    }

    /// Rejects with the server's text, or a generic one.
    pub async fn login(&self, username: &str, password: &str) -> Result<Identity, String> {
        let request = LoginRequest { username: username.to_string(), password: password.to_string() };
        match loader::login(&request).await {
            Ok(identity) => {
                self.identity.set(Some(identity.clone()));
                Ok(identity)
            }
            Err(err) => Err(err.message_or(MSG_LOGIN_FAILED)),
        }
    }

    /// The local identity is dropped even when the backend call fails.
    pub async fn logout(&self) {
        if let Err(err) = loader::logout().await {
            log::error!("logout: {err}");
        }
        self.clear();
    }

    pub fn set_identity(&self, identity: Option<Identity>) {
        self.identity.set(identity);
    }

    pub fn clear(&self) {
        self.identity.set(None);
    }

    pub fn identity_signal(&self) -> impl Signal<Item = Option<Identity>> {
        self.identity.signal_cloned()
    }

    pub fn status(&self) -> SessionStatus {
        to_status(self.loading.get(), self.identity.get_cloned())
    }

    pub fn status_signal(&self) -> impl Signal<Item = SessionStatus> {
        map_ref! {
            let loading = self.loading.signal(),
            let identity = self.identity.signal_cloned() =>
            to_status(*loading, identity.clone())
        }
    }

    pub fn is_owner(&self, user_id: i64) -> bool {
        self.identity.lock_ref().as_ref().map_or(false, |user| user.id == user_id)
    }

    pub fn owner_signal(&self, user_id: i64) -> impl Signal<Item = bool> {
        self.identity.signal_ref(move |identity| identity.as_ref().map_or(false, |user| user.id == user_id))
    }
}

fn to_status(loading: bool, identity: Option<Identity>) -> SessionStatus {
    match identity {
        Some(identity) => SessionStatus::Authenticated(identity),
        None if loading => SessionStatus::Unknown,
        None => SessionStatus::Anonymous,
    }
}
