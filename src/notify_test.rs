use super::*;

// =============================================================
// Notification constructors
// =============================================================

#[test]
fn notification_new_has_default_severity() {
    let note = Notification::new("Saved", "All good");
    assert_eq!(note.severity, Severity::Default);
    assert_eq!(note.title, "Saved");
    assert_eq!(note.description, "All good");
}

#[test]
fn notification_destructive_has_destructive_severity() {
    let note = Notification::destructive("Missing information", "Fill in the form");
    assert_eq!(note.severity, Severity::Destructive);
}

// =============================================================
// ToastState
// =============================================================

#[test]
fn toast_state_starts_empty() {
    let state = ToastState::default();
    assert!(state.toasts.is_empty());
    assert!(state.last_id().is_none());
}

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(Notification::new("a", ""));
    let b = state.push(Notification::new("b", ""));
    assert!(b > a);
    assert_eq!(state.last_id(), Some(b));
    assert_eq!(state.toasts.len(), 2);
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(Notification::new("a", ""));
    let b = state.push(Notification::new("b", ""));
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_a_no_op() {
    let mut state = ToastState::default();
    state.push(Notification::new("a", ""));
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let a = state.push(Notification::new("a", ""));
    state.dismiss(a);
    let b = state.push(Notification::new("b", ""));
    assert!(b > a);
}
