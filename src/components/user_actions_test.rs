#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn delete_user_without_confirmation_does_nothing() {
    assert!(!delete_user(42));
}

#[test]
fn edit_user_is_a_placeholder() {
    edit_user(42);
}

#[test]
fn placeholder_messages_are_distinct() {
    assert_ne!(EDIT_PENDING_MESSAGE, DELETE_PENDING_MESSAGE);
    assert!(DELETE_USER_PROMPT.ends_with('?'));
}
