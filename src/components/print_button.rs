//! Opens the browser print dialog.

use leptos::prelude::*;

use crate::util::dialogs::print_page;

#[component]
pub fn PrintButton(#[prop(into, default = "Print".to_owned())] label: String) -> impl IntoView {
    view! {
        <button type="button" class="btn btn-secondary" on:click=move |_| print_page()>
            <i class="fas fa-print"></i>
            " "
            {label}
        </button>
    }
}
