//! Renders the transient notification banners.
//!
//! Every banner is pinned to the same top-right spot; concurrent banners
//! overlap rather than stack.

use leptos::prelude::*;

use crate::util::notify::use_notifier;

const BANNER_STYLE: &str = "position: fixed; top: 20px; right: 20px; z-index: 9999; min-width: 300px";

#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifier = use_notifier();
    let state = notifier.state();

    view! {
        <div class="notifications" aria-live="polite">
            <For
                each=move || state.with(|s| s.items.clone())
                key=|item| item.id
                children=move |item| {
                    let id = item.id;
                    view! {
                        <div class=item.kind.alert_class() style=BANNER_STYLE role="status">
                            <span>{item.message}</span>
                            <button
                                type="button"
                                class="alert-close"
                                aria-label="Close"
                                on:click=move |_| notifier.dismiss(id)
                            >
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
