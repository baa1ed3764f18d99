use super::*;

#[test]
fn notice_state_default_is_empty() {
    let state = NoticeState::default();
    assert!(state.items.is_empty());
    assert_eq!(state.timeout_ms, 3000);
    assert_eq!(NoticeState::with_timeout(500).timeout_ms, 500);
}

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeKind::Success, "Car added successfully");
    let b = state.push(NoticeKind::Error, "Failed to add car");
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].kind, NoticeKind::Success);
    assert_eq!(state.items[1].text, "Failed to add car");
}

#[test]
fn dismiss_removes_only_matching_notice() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeKind::Info, "Logged out successfully");
    let b = state.push(NoticeKind::Error, "Admin access required");
    assert!(state.dismiss(a));
    assert!(!state.dismiss(a));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeKind::Info, "one");
    state.dismiss(a);
    let b = state.push(NoticeKind::Info, "two");
    assert_ne!(a, b);
}

#[test]
fn css_class_per_kind() {
    assert_eq!(NoticeKind::Success.css_class(), "notice notice--success");
    assert_eq!(NoticeKind::Info.css_class(), "notice notice--info");
    assert_eq!(NoticeKind::Error.css_class(), "notice notice--error");
}
