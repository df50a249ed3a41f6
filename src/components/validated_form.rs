//! Form with required-field validation and non-negative number inputs.
//!
//! Submission validates every required field first. If any is blank, the
//! native submit is cancelled and each failing field gets the error border;
//! otherwise the browser posts the form and the submit button shows a
//! spinner until the next page arrives.

use leptos::prelude::*;

use crate::components::loading_button::LoadingButton;
use crate::config::UiConfig;
use crate::state::form::{FieldKind, FieldState, FormState};

fn field_input(form: RwSignal<FormState>, field: &FieldState, config: UiConfig) -> AnyView {
    let name = field.name.clone();
    let style = {
        let name = name.clone();
        move || form.with(|f| f.field(&name).map(|x| x.border_style(&config)).unwrap_or_default())
    };
    let initial = field.value.clone();
    let on_input = {
        let name = name.clone();
        move |ev: leptos::ev::Event| {
            let raw = event_target_value(&ev);
            let replaced = form.try_update(|f| f.set_value(&name, &raw)).flatten();
            // Partial number input stays untouched; only a clamp rewrites the element.
            #[cfg(feature = "hydrate")]
            {
                if let Some(value) = replaced {
                    event_target::<web_sys::HtmlInputElement>(&ev).set_value(&value);
                }
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = replaced;
        }
    };

    let control = if field.kind == FieldKind::TextArea {
        view! {
            <textarea
                id=name.clone()
                name=name.clone()
                class="form-control"
                required=field.required
                style=style
                prop:value=initial
                on:input=on_input
            ></textarea>
        }
            .into_any()
    } else {
        view! {
            <input
                id=name.clone()
                name=name.clone()
                type=field.kind.input_type()
                min=(field.kind == FieldKind::Number).then_some("0")
                step=(field.kind == FieldKind::Number).then_some("any")
                class="form-control"
                required=field.required
                style=style
                value=initial
                on:input=on_input
            />
        }
            .into_any()
    };

    view! {
        <div class="form-group">
            <label for=name>
                {field.label.clone()}
                {field.required.then_some(" *")}
            </label>
            {control}
        </div>
    }
        .into_any()
}

#[component]
pub fn ValidatedForm(
    #[prop(into)] id: String,
    #[prop(into)] action: String,
    fields: Vec<FieldState>,
    #[prop(into, default = "Save".to_owned())] submit_label: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let config = expect_context::<UiConfig>();
    let form = RwSignal::new(FormState::new(fields));
    let submitting = RwSignal::new(false);

    let inputs = form
        .with_untracked(|f| f.fields.clone())
        .iter()
        .map(|field| field_input(form, field, config.clone()))
        .collect_view();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        // A disposed form state has nothing to check.
        let valid = form.try_update(FormState::validate).unwrap_or(true);
        if valid {
            submitting.set(true);
        } else {
            #[cfg(feature = "hydrate")]
            {
                form.with_untracked(|f| log::debug!("submit blocked, invalid fields: {:?}", f.invalid_fields()));
            }
            ev.prevent_default();
        }
    };

    view! {
        <form
            id=id
            action=action
            method="post"
            enctype="multipart/form-data"
            novalidate=true
            on:submit=on_submit
        >
            {inputs}
            {children.map(|children| children())}
            <div class="form-actions">
                <LoadingButton busy=submitting label=submit_label kind="submit"/>
            </div>
        </form>
    }
}
