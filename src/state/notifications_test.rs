use super::*;

// =============================================================
// NotificationKind
// =============================================================

#[test]
fn kind_default_is_info() {
    assert_eq!(NotificationKind::default(), NotificationKind::Info);
}

#[test]
fn kind_from_category_maps_known_names() {
    assert_eq!(NotificationKind::from_category("success"), NotificationKind::Success);
    assert_eq!(NotificationKind::from_category("warning"), NotificationKind::Warning);
    assert_eq!(NotificationKind::from_category("error"), NotificationKind::Error);
    assert_eq!(NotificationKind::from_category("danger"), NotificationKind::Error);
    assert_eq!(NotificationKind::from_category("message"), NotificationKind::Info);
}

#[test]
fn kind_alert_class_uses_category_suffix() {
    assert_eq!(NotificationKind::Success.alert_class(), "alert alert-success");
    assert_eq!(NotificationKind::Info.alert_class(), "alert alert-info");
}

// =============================================================
// NotificationState
// =============================================================

#[test]
fn push_appends_banner_with_unique_id() {
    let mut state = NotificationState::default();
    let (a, _) = state.push(NotificationKind::Success, "Copied", 3000, 0.0);
    let (b, _) = state.push(NotificationKind::Success, "Copied", 3000, 10.0);
    assert_ne!(a, b);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn removal_timer_fires_after_exactly_the_duration() {
    let mut state = NotificationState::default();
    let (_, delay) = state.push(NotificationKind::Info, "Saved", 3000, 1000.0);
    assert_eq!(delay, 3000);

    let (_, custom) = state.push(NotificationKind::Info, "Saved", 750, 1000.0);
    assert_eq!(custom, 750);
}

#[test]
fn banner_is_on_screen_until_its_timer_dismisses_it() {
    let mut state = NotificationState::default();
    let (id, delay) = state.push(NotificationKind::Info, "Saved", 3000, 1000.0);

    let item = &state.items[0];
    assert_eq!(item.remaining_ms(1000.0 + f64::from(delay) - 1.0), 1);
    assert_eq!(item.remaining_ms(1000.0 + f64::from(delay)), 0);

    assert!(state.dismiss(id));
    assert!(state.items.is_empty());
}

#[test]
fn remaining_ms_is_clamped_to_lifetime() {
    let mut state = NotificationState::default();
    state.push(NotificationKind::Info, "Saved", 3000, 1000.0);
    let item = &state.items[0];
    assert_eq!(item.remaining_ms(2500.0), 1500);
    assert_eq!(item.remaining_ms(10_000.0), 0);
    assert_eq!(item.remaining_ms(0.0), 3000);
}

#[test]
fn dismiss_is_idempotent() {
    let mut state = NotificationState::default();
    let (id, _) = state.push(NotificationKind::Warning, "Heads up", 3000, 0.0);
    assert!(state.dismiss(id));
    assert!(!state.dismiss(id));
    assert!(state.items.is_empty());
}

#[test]
fn overlapping_banners_are_not_deduplicated() {
    let mut state = NotificationState::default();
    for _ in 0..3 {
        state.push(NotificationKind::Success, "Copied to clipboard", 3000, 0.0);
    }
    assert_eq!(state.items.len(), 3);
}
