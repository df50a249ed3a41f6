use super::*;

fn value<'a>(form: &'a FormState, name: &str) -> Option<&'a str> {
    form.field(name).map(|f| f.value.as_str())
}

fn product_form() -> FormState {
    FormState::new(vec![
        FieldState::new("name", "Name", FieldKind::Text).required(),
        FieldState::new("price", "Price", FieldKind::Number).required(),
        FieldState::new("quantity", "Quantity", FieldKind::Number),
        FieldState::new("description", "Description", FieldKind::TextArea),
    ])
}

// =============================================================
// validate
// =============================================================

#[test]
fn form_without_required_fields_is_always_valid() {
    let mut form = FormState::new(vec![
        FieldState::new("notes", "Notes", FieldKind::TextArea),
        FieldState::new("qty", "Qty", FieldKind::Number),
    ]);
    assert!(form.validate());
    assert!(form.fields.iter().all(|f| f.mark.is_none()));

    let mut empty = FormState::default();
    assert!(empty.validate());
}

#[test]
fn validate_marks_exactly_blank_required_fields() {
    let mut form = product_form();
    form.set_value("price", "12");
    form.set_value("description", "");

    assert!(!form.validate());
    assert_eq!(form.invalid_fields(), vec!["name"]);
    assert_eq!(form.fields[1].mark, Some(FieldMark::Valid));
    assert_eq!(form.fields[2].mark, None);
    assert_eq!(form.fields[3].mark, None);
}

#[test]
fn validate_does_not_short_circuit() {
    let mut form = product_form();
    assert!(!form.validate());
    assert_eq!(form.invalid_fields(), vec!["name", "price"]);
}

#[test]
fn whitespace_only_value_is_blank() {
    let mut form = product_form();
    form.set_value("name", "   \t");
    form.set_value("price", "3");
    assert!(!form.validate());
    assert_eq!(form.invalid_fields(), vec!["name"]);
}

#[test]
fn revalidation_overwrites_previous_marks() {
    let mut form = product_form();
    assert!(!form.validate());

    form.set_value("name", "Widget");
    form.set_value("price", "9.5");
    assert!(form.validate());
    assert!(form.invalid_fields().is_empty());
    assert_eq!(form.fields[0].mark, Some(FieldMark::Valid));
}

// =============================================================
// set_value / numeric clamp
// =============================================================

#[test]
fn number_field_negative_input_is_clamped_to_zero() {
    let mut form = product_form();
    form.set_value("quantity", "-5");
    assert_eq!(value(&form, "quantity"), Some("0"));
}

#[test]
fn number_field_positive_input_is_unchanged() {
    let mut form = product_form();
    form.set_value("quantity", "5");
    assert_eq!(value(&form, "quantity"), Some("5"));
}

#[test]
fn text_field_keeps_leading_minus() {
    let mut form = product_form();
    form.set_value("name", "-5");
    assert_eq!(value(&form, "name"), Some("-5"));
}

#[test]
fn set_value_ignores_unknown_field() {
    let mut form = product_form();
    let before = form.clone();
    form.set_value("missing", "x");
    assert_eq!(form, before);
    assert_eq!(value(&form, "missing"), None);
}

// =============================================================
// presentation
// =============================================================

#[test]
fn border_style_reflects_mark() {
    let config = UiConfig::default();
    let mut field = FieldState::new("name", "Name", FieldKind::Text).required();
    assert_eq!(field.border_style(&config), "");
    field.mark = Some(FieldMark::Invalid);
    assert_eq!(field.border_style(&config), "border-color: #dc3545");
    field.mark = Some(FieldMark::Valid);
    assert_eq!(field.border_style(&config), "border-color: #e1e1e1");
}

#[test]
fn field_kind_input_types() {
    assert_eq!(FieldKind::Number.input_type(), "number");
    assert_eq!(FieldKind::Email.input_type(), "email");
    assert_eq!(FieldKind::TextArea.input_type(), "text");
}

#[test]
fn set_value_reports_rewrite_only_when_clamped() {
    let mut form = product_form();
    assert_eq!(form.set_value("quantity", "-2"), Some("0".to_owned()));
    assert_eq!(form.set_value("quantity", "1."), None);
    assert_eq!(value(&form, "quantity"), Some("1."));
    assert_eq!(form.set_value("quantity", ""), None);
    assert_eq!(form.set_value("name", "-2"), None);
    assert_eq!(form.set_value("missing", "-2"), None);
}
