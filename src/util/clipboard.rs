//! Asynchronous clipboard writes.

#![allow(clippy::unused_async)]

use crate::error::UiError;

/// Text of the banner shown after a successful copy.
pub const COPIED_MESSAGE: &str = "Copied to clipboard";

/// Write `text` to the system clipboard.
///
/// # Errors
///
/// Returns [`UiError::Unavailable`] when there is no window or clipboard and
/// [`UiError::Browser`] when the browser rejects the write (permissions,
/// insecure context).
pub async fn write_text(text: &str) -> Result<(), UiError> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or(UiError::Unavailable("window"))?;
        let clipboard = window.navigator().clipboard().ok_or(UiError::Unavailable("clipboard"))?;
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text)).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err(UiError::Unavailable("clipboard"))
    }
}
