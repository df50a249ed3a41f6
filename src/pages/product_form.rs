//! Admin "add product" form with image preview.

#[cfg(test)]
#[path = "product_form_test.rs"]
mod product_form_test;

use leptos::prelude::*;

use crate::components::image_preview::ImagePreview;
use crate::components::validated_form::ValidatedForm;
use crate::state::form::{FieldKind, FieldState};

pub const PRODUCT_FORM_ID: &str = "product-form";

fn product_fields() -> Vec<FieldState> {
    vec![
        FieldState::new("name", "Name", FieldKind::Text).required(),
        FieldState::new("price", "Price", FieldKind::Number).required(),
        FieldState::new("quantity", "Quantity", FieldKind::Number).with_value("0"),
        FieldState::new("description", "Description", FieldKind::TextArea),
    ]
}

#[component]
pub fn ProductFormPage() -> impl IntoView {
    view! {
        <div class="page-header">
            <h1>"Add product"</h1>
            <a href="/admin/products" class="btn btn-secondary">"Back"</a>
        </div>
        <div class="card">
            <ValidatedForm
                id=PRODUCT_FORM_ID
                action="/admin/products/add"
                fields=product_fields()
                submit_label="Create product"
            >
                <ImagePreview name="image" preview_id="image-preview"/>
            </ValidatedForm>
        </div>
    }
}
