use futures::executor::block_on;
use futures::StreamExt;
use futures_signals::signal::SignalExt;

use super::*;

fn ann() -> Identity {
    Identity { id: 7, username: "ann".to_string(), profile_picture: Some("ann.png".to_string()) }
}

#[test]
fn starts_unknown() {
    let store = SessionStore::new();
    assert_eq!(store.status(), SessionStatus::Unknown);
    assert!(!store.is_owner(7));
}

#[test]
fn check_resolves_to_identity() {
    let store = SessionStore::new();
    store.resolve_check(Ok(Some(ann())));
    assert_eq!(store.status(), SessionStatus::Authenticated(ann()));
}

#[test]
fn failed_check_is_anonymous() {
    let store = SessionStore::new();
    store.resolve_check(Err(ApiError::Network("offline".into())));
    assert_eq!(store.status(), SessionStatus::Anonymous);
}

#[test]
fn late_check_keeps_fresh_login() {
    let store = SessionStore::new();
    store.set_identity(Some(ann()));
    store.resolve_check(Ok(None));
    assert_eq!(store.status(), SessionStatus::Authenticated(ann()));

    let store = SessionStore::new();
    store.set_identity(Some(ann()));
    store.resolve_check(Err(ApiError::Network("offline".into())));
    assert_eq!(store.status(), SessionStatus::Authenticated(ann()));
}

#[test]
fn empty_check_is_anonymous() {
    let store = SessionStore::new();
    store.resolve_check(Ok(None));
    assert_eq!(store.status(), SessionStatus::Anonymous);
}

#[test]
fn ownership_follows_identity() {
    let store = SessionStore::new();
    store.resolve_check(Ok(None));
    assert!(!store.is_owner(7));

    store.set_identity(Some(ann()));
    assert!(store.is_owner(7));
    assert!(!store.is_owner(8));
}

#[test]
fn clearing_hides_owner_controls() {
    let store = SessionStore::new();
    store.set_identity(Some(ann()));
    let mut owner = Box::pin(store.owner_signal(7).to_stream());
    assert_eq!(block_on(owner.next()), Some(true));

    store.clear();
    assert!(!store.is_owner(7));
    assert_eq!(block_on(owner.next()), Some(false));
}

#[test]
fn status_signal_tracks_loading_and_identity() {
    let store = SessionStore::new();
    let mut status = Box::pin(store.status_signal().to_stream());
    assert_eq!(block_on(status.next()), Some(SessionStatus::Unknown));

    store.resolve_check(Ok(Some(ann())));
    assert_eq!(block_on(status.next()), Some(SessionStatus::Authenticated(ann())));
}
