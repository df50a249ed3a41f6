//! Edit/delete controls for a user row.
//!
//! Neither action reaches the server yet: edit shows a placeholder alert,
//! delete asks for confirmation and then shows a placeholder alert.

#[cfg(test)]
#[path = "user_actions_test.rs"]
mod user_actions_test;

use leptos::prelude::*;

use crate::util::dialogs::{alert, confirm_delete};

pub const EDIT_PENDING_MESSAGE: &str = "User editing will be added later";
pub const DELETE_PENDING_MESSAGE: &str = "User deletion will be added later";
pub const DELETE_USER_PROMPT: &str = "Are you sure you want to delete this user?";

pub fn edit_user(user_id: i64) {
    #[cfg(feature = "hydrate")]
    log::debug!("edit requested for user {user_id}");
    #[cfg(not(feature = "hydrate"))]
    let _ = user_id;
    alert(EDIT_PENDING_MESSAGE);
}

/// Returns whether the user confirmed the deletion.
pub fn delete_user(user_id: i64) -> bool {
    if !confirm_delete(Some(DELETE_USER_PROMPT)) {
        return false;
    }
    #[cfg(feature = "hydrate")]
    log::debug!("delete confirmed for user {user_id}");
    #[cfg(not(feature = "hydrate"))]
    let _ = user_id;
    alert(DELETE_PENDING_MESSAGE);
    true
}

#[component]
pub fn UserActions(user_id: i64) -> impl IntoView {
    view! {
        <button type="button" class="btn btn-sm btn-secondary" on:click=move |_| edit_user(user_id)>
            <i class="fas fa-edit"></i>
        </button>
        <button
            type="button"
            class="btn btn-sm btn-danger"
            on:click=move |_| {
                delete_user(user_id);
            }
        >
            <i class="fas fa-trash"></i>
        </button>
    }
}
