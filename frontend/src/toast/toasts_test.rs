use super::*;

fn messages() -> Vec<String> {
    TOASTS.lock_ref().iter().map(|toast| toast.message.clone()).collect()
}

#[test]
fn push_and_dismiss_by_id() {
    let first = push(ToastKind::Success, "Outfit created");
    let second = push(ToastKind::Error, "Delete failed: Server error");
    assert_ne!(first, second);

    let current = messages();
    assert!(current.contains(&"Outfit created".to_string()));
    assert!(current.contains(&"Delete failed: Server error".to_string()));

    dismiss(first);
    let current = messages();
    assert!(!current.contains(&"Outfit created".to_string()));
    assert!(current.contains(&"Delete failed: Server error".to_string()));

    dismiss(second);
    dismiss(second);
    assert!(!messages().contains(&"Delete failed: Server error".to_string()));
}
