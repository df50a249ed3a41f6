//! Error type shared by browser helpers.
//!
//! ERROR HANDLING
//! ==============
//! Helpers return `Result<_, UiError>` and never panic. Components pick the
//! user-facing surface: export failures raise an error notification,
//! clipboard failures are only logged, and missing DOM targets degrade to a
//! silent no-op before an error is ever built.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure raised by a browser-facing helper.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("request failed: {0}")]
    Status(u16),
    /// A browser API call threw.
    #[error("browser error: {0}")]
    Browser(String),
    /// A required browser capability is missing (window, document, clipboard).
    #[error("{0} unavailable")]
    Unavailable(&'static str),
    /// An embedded JSON payload could not be decoded.
    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for UiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Browser(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for UiError {
    fn from(value: gloo_net::Error) -> Self {
        Self::Network(value.to_string())
    }
}
