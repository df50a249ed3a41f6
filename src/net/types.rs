//! Page payload DTOs shared with the host server.
//!
//! DESIGN
//! ======
//! Every collection defaults to empty so a partial payload still hydrates.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// DOM id of the embedded page payload.
pub const PAGE_DATA_ELEMENT_ID: &str = "page-data";

/// A server flash message (category + text), shown once per page load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    /// `success`, `error`, `warning`, or `info`.
    #[serde(default = "default_category")]
    pub category: String,
    pub text: String,
}

fn default_category() -> String {
    "info".to_owned()
}

/// A user account as listed on the admin users screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRow {
    pub id: i64,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Everything a page needs beyond its static markup.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageData {
    pub flashes: Vec<FlashMessage>,
    pub users: Vec<UserRow>,
}
