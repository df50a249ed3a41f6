//! Form field values and required-field validation.
//!
//! Validity is recomputed on every [`FormState::validate`] call and written
//! back as a per-field mark, so the view can colour every failing field in
//! one pass.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::config::UiConfig;
use crate::util::number::clamp_non_negative;

/// Input flavour of a form field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Password,
    Number,
    TextArea,
}

impl FieldKind {
    /// Value of the `type` attribute for `<input>`-backed kinds.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Text | Self::TextArea => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
        }
    }
}

/// Outcome of the last validation pass for a required field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldMark {
    Valid,
    Invalid,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldState {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
    /// `None` until the first validation pass; never set on optional fields.
    pub mark: Option<FieldMark>,
}

impl FieldState {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self { name: name.into(), label: label.into(), kind, required: false, value: String::new(), mark: None }
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Inline style carrying the validation border, empty before validation.
    #[must_use]
    pub fn border_style(&self, config: &UiConfig) -> String {
        match self.mark {
            Some(FieldMark::Invalid) => format!("border-color: {}", config.invalid_border),
            Some(FieldMark::Valid) => format!("border-color: {}", config.valid_border),
            None => String::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub fields: Vec<FieldState>,
}

impl FormState {
    #[must_use]
    pub fn new(fields: Vec<FieldState>) -> Self {
        Self { fields }
    }

    /// Store raw input for `name`. Number fields never keep a negative value.
    ///
    /// Returns the stored value only when it differs from `raw`, i.e. when
    /// the input element must be overwritten. Unknown names are ignored.
    pub fn set_value(&mut self, name: &str, raw: &str) -> Option<String> {
        let field = self.fields.iter_mut().find(|f| f.name == name)?;
        let clamped = match field.kind {
            FieldKind::Number => clamp_non_negative(raw),
            _ => None,
        };
        field.value = clamped.clone().unwrap_or_else(|| raw.to_owned());
        clamped
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check every required field for a non-blank value and mark it.
    ///
    /// All fields are visited even after the first failure.
    pub fn validate(&mut self) -> bool {
        let mut valid = true;
        for field in self.fields.iter_mut().filter(|f| f.required) {
            if field.value.trim().is_empty() {
                field.mark = Some(FieldMark::Invalid);
                valid = false;
            } else {
                field.mark = Some(FieldMark::Valid);
            }
        }
        valid
    }

    /// Names of fields marked invalid by the last validation pass.
    #[must_use]
    pub fn invalid_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.mark == Some(FieldMark::Invalid))
            .map(|f| f.name.as_str())
            .collect()
    }
}
