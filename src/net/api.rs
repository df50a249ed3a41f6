//! HTTP helpers.
//!
//! Client-side (hydrate): real requests via `gloo-net`.
//! Server-side (SSR): stubs returning an error, since exports only make
//! sense in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::error::UiError;

/// Path of the downloadable report for `report_type` (e.g. `users`).
#[must_use]
pub fn report_export_url(report_type: &str) -> String {
    format!("/admin/reports/export/{report_type}")
}

/// Suggested filename for a downloaded report.
#[must_use]
pub fn report_filename(report_type: &str) -> String {
    format!("{report_type}_report.xlsx")
}

/// Fetch `url` and return the raw response body.
///
/// A non-success status is an error rather than a body to save, so a
/// server error page never lands on disk as a report.
///
/// # Errors
///
/// Returns [`UiError::Network`] if the request or body read fails and
/// [`UiError::Status`] if the server answers with a non-success status.
pub async fn fetch_binary(url: &str) -> Result<Vec<u8>, UiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url).send().await?;
        if !resp.ok() {
            return Err(UiError::Status(resp.status()));
        }
        Ok(resp.binary().await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(UiError::Unavailable("fetch"))
    }
}
