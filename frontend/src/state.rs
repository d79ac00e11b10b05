use std::rc::Rc;

use crate::session::SessionStore;
use crate::theme::{DocumentTheme, ThemeStore};

/// Everything screens share. Built once at startup and cloned into screens.
#[derive(Clone)]
pub struct AppState {
    pub session: Rc<SessionStore>,
    pub theme: Rc<ThemeStore>,
}

impl AppState {
    pub fn new() -> Self {
        let session = SessionStore::new();
        session.check();
        Self {
            session,
            theme: ThemeStore::new(Box::new(DocumentTheme)),
        }
    }
}
