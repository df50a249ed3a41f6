//! Button that swaps to a spinner and disables itself while work is pending.

use leptos::prelude::*;

/// Label shown next to the spinner while busy.
pub const LOADING_LABEL: &str = " Loading...";

#[component]
pub fn LoadingButton(
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] label: String,
    #[prop(into, default = "btn btn-primary".to_owned())] class: String,
    #[prop(default = "button")] kind: &'static str,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <button
            type=kind
            class=class
            disabled=move || busy.get()
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            {move || {
                if busy.get() {
                    view! {
                        <span class="loading"></span>
                        {LOADING_LABEL}
                    }
                        .into_any()
                } else {
                    label.clone().into_any()
                }
            }}
        </button>
    }
}
