//! Copies a fixed string to the clipboard.
//!
//! Success raises a notification; failure is logged and nothing else.

use leptos::prelude::*;

use crate::util::notify::{Notifier, use_notifier};

fn copy_with_notice(text: String, notifier: Notifier) {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::notifications::NotificationKind;
        use crate::util::clipboard::{COPIED_MESSAGE, write_text};

        leptos::task::spawn_local(async move {
            match write_text(&text).await {
                Ok(()) => {
                    notifier.show(NotificationKind::Success, COPIED_MESSAGE);
                }
                Err(e) => log::error!("copy to clipboard failed: {e}"),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (text, notifier);
    }
}

#[component]
pub fn CopyButton(
    #[prop(into)] text: String,
    #[prop(into, default = "Copy".to_owned())] label: String,
) -> impl IntoView {
    let notifier = use_notifier();
    let title = format!("Copy \"{text}\"");

    view! {
        <button
            type="button"
            class="btn btn-sm btn-outline"
            title=title
            on:click=move |_| copy_with_notice(text.clone(), notifier)
        >
            <i class="fas fa-copy"></i>
            " "
            {label}
        </button>
    }
}
