//! JSON payloads embedded in the server-rendered document.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host server writes page data and configuration into
//! `<script type="application/json" id="...">` elements. SSR builds produce
//! that markup with [`script_safe`]; hydrate builds read it back with
//! [`read_json`]. A missing or malformed payload reads as `None` so the page
//! degrades to its defaults.

#[cfg(test)]
#[path = "embedded_test.rs"]
mod embedded_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::UiError;

/// Decode an embedded payload.
///
/// # Errors
///
/// Returns [`UiError::Payload`] if `raw` is not valid JSON for `T`.
pub fn parse_json<T: DeserializeOwned>(raw: &str) -> Result<T, UiError> {
    Ok(serde_json::from_str(raw)?)
}

/// Serialize `value` for inlining inside a `<script>` element.
///
/// `</` is escaped so payload text can never close the element early.
///
/// # Errors
///
/// Returns [`UiError::Payload`] if `value` cannot be serialized.
pub fn script_safe<T: Serialize>(value: &T) -> Result<String, UiError> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

/// Read and decode the JSON text of the element with id `element_id`.
pub fn read_json<T: DeserializeOwned>(element_id: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let document = web_sys::window().and_then(|w| w.document())?;
        let raw = document.get_element_by_id(element_id)?.text_content()?;
        match parse_json(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("ignoring embedded #{element_id}: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = element_id;
        None
    }
}
