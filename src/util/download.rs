//! Browser downloads from fetched bytes.
//!
//! The bytes become a `Blob`, the blob gets a temporary object URL, a
//! detached `<a download>` is clicked to open the save dialog, and the URL
//! is revoked straight after.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

use crate::error::UiError;
use crate::util::task_gate::{TaskGate, Ticket};

/// Generic notice shown when an export fails for any reason.
pub const EXPORT_FAILED_MESSAGE: &str = "An error occurred while exporting data";

/// What happened to a finished export.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The save dialog was opened.
    Saved,
    /// A newer export or an unmount took over while fetching; nothing was saved.
    Superseded,
}

/// Fetch `url` and hand the body to the browser as a download named
/// `filename`, unless `ticket` stopped being current on `gate` meanwhile.
///
/// # Errors
///
/// Propagates fetch failures from [`crate::net::api::fetch_binary`] and
/// browser failures from [`save_bytes`].
pub async fn export_data(url: &str, filename: &str, gate: &TaskGate, ticket: Ticket) -> Result<ExportOutcome, UiError> {
    let bytes = crate::net::api::fetch_binary(url).await?;
    save_if_current(&bytes, filename, gate.is_current(ticket))
}

/// Save `bytes` only while the export that fetched them is still wanted.
///
/// # Errors
///
/// Browser failures from [`save_bytes`]; never fails when `current` is false.
pub fn save_if_current(bytes: &[u8], filename: &str, current: bool) -> Result<ExportOutcome, UiError> {
    if !current {
        return Ok(ExportOutcome::Superseded);
    }
    save_bytes(bytes, filename)?;
    Ok(ExportOutcome::Saved)
}

/// Offer `bytes` to the user as a file download.
///
/// # Errors
///
/// Returns [`UiError::Unavailable`] without a document body and
/// [`UiError::Browser`] if blob or object URL creation fails.
pub fn save_bytes(bytes: &[u8], filename: &str) -> Result<(), UiError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(UiError::Unavailable("document"))?;
        let body = document.body().ok_or(UiError::Unavailable("document body"))?;

        let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
        let blob = web_sys::Blob::new_with_u8_array_sequence(&parts)?;
        let object_url = web_sys::Url::create_object_url_with_blob(&blob)?;

        let link: web_sys::HtmlAnchorElement = document.create_element("a")?.unchecked_into();
        link.set_href(&object_url);
        link.set_download(filename);
        body.append_child(&link)?;
        link.click();
        body.remove_child(&link)?;
        web_sys::Url::revoke_object_url(&object_url)?;
        log::debug!("download offered: {filename} ({} bytes)", bytes.len());
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (bytes, filename);
        Err(UiError::Unavailable("document"))
    }
}
