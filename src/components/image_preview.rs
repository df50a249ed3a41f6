//! File input with an inline preview of the selected image.
//!
//! Picking a new file supersedes any read still in flight, so the preview
//! always shows the latest selection. No type or size checks are applied.

use leptos::prelude::*;

use crate::util::task_gate::TaskGate;

fn preview_selected_file(ev: &leptos::ev::Event, src: RwSignal<Option<String>>, gate: &TaskGate) {
    #[cfg(feature = "hydrate")]
    {
        use crate::util::file_read::read_as_data_url;

        let input = event_target::<web_sys::HtmlInputElement>(ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let ticket = gate.begin();
        let gate = gate.clone();
        leptos::task::spawn_local(async move {
            match read_as_data_url(&file).await {
                Ok(data_url) if gate.is_current(ticket) => src.set(Some(data_url)),
                Ok(_) => log::debug!("discarding stale preview of {}", file.name()),
                Err(e) => log::error!("image preview of {} failed: {e}", file.name()),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ev, src, gate);
    }
}

#[component]
pub fn ImagePreview(
    #[prop(into)] name: String,
    #[prop(into)] preview_id: String,
    #[prop(into, default = "Image".to_owned())] label: String,
) -> impl IntoView {
    let src = RwSignal::new(None::<String>);
    let gate = TaskGate::new();

    on_cleanup({
        let gate = gate.clone();
        move || gate.cancel()
    });

    view! {
        <div class="form-group image-preview">
            <label for=name.clone()>{label}</label>
            <input
                id=name.clone()
                name=name
                type="file"
                accept="image/*"
                class="form-control"
                on:change=move |ev| preview_selected_file(&ev, src, &gate)
            />
            <img
                id=preview_id
                class="image-preview__img"
                alt="Preview"
                src=move || src.get()
                style=move || if src.with(Option::is_some) { "display: block" } else { "display: none" }
            />
        </div>
    }
}
