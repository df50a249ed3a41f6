//! Downloads a server resource as a file.
//!
//! The button shows a spinner while the fetch is in flight. A failure is
//! logged and surfaced as a generic error banner; nothing is retried.
//! Unmounting the button cancels its pending export so a late response
//! never triggers a download.

use leptos::prelude::*;

use crate::components::loading_button::LoadingButton;
use crate::util::notify::{Notifier, use_notifier};
use crate::util::task_gate::TaskGate;

fn start_export(url: String, filename: String, busy: RwSignal<bool>, gate: TaskGate, notifier: Notifier) {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::notifications::NotificationKind;
        use crate::util::download::{EXPORT_FAILED_MESSAGE, ExportOutcome, export_data};

        let ticket = gate.begin();
        busy.set(true);
        log::info!("export started: {url} -> {filename}");
        leptos::task::spawn_local(async move {
            match export_data(&url, &filename, &gate, ticket).await {
                Ok(ExportOutcome::Saved) => {
                    busy.set(false);
                    log::info!("export finished: {filename}");
                }
                Ok(ExportOutcome::Superseded) => log::debug!("dropping superseded export of {url}"),
                Err(e) if gate.is_current(ticket) => {
                    busy.set(false);
                    log::error!("export of {url} failed: {e}");
                    notifier.show(NotificationKind::Error, EXPORT_FAILED_MESSAGE);
                }
                Err(e) => log::debug!("superseded export of {url} failed: {e}"),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, filename, busy, gate, notifier);
    }
}

#[component]
pub fn ExportButton(
    #[prop(into)] url: String,
    #[prop(into)] filename: String,
    #[prop(into, default = "Export".to_owned())] label: String,
) -> impl IntoView {
    let notifier = use_notifier();
    let busy = RwSignal::new(false);
    let gate = TaskGate::new();

    on_cleanup({
        let gate = gate.clone();
        move || gate.cancel()
    });

    let on_click = Callback::new(move |()| {
        start_export(url.clone(), filename.clone(), busy, gate.clone(), notifier);
    });

    view! { <LoadingButton busy=busy label=label class="btn btn-success" on_click=on_click/> }
}
