//! Native browser dialogs: alert, confirm, print.
//!
//! Outside the browser `confirm` answers `false`, so destructive actions never
//! proceed without a user.

#[cfg(test)]
#[path = "dialogs_test.rs"]
mod dialogs_test;

/// Default prompt for deleting an item.
pub const CONFIRM_DELETE_MESSAGE: &str = "Are you sure you want to delete this item?";

/// Show a blocking alert.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                log::warn!("alert failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Ask the user to confirm; `false` when no answer can be obtained.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Confirm a deletion, using the default prompt when `message` is `None`.
pub fn confirm_delete(message: Option<&str>) -> bool {
    confirm(message.unwrap_or(CONFIRM_DELETE_MESSAGE))
}

/// Open the browser print dialog for the current page.
pub fn print_page() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.print() {
                log::warn!("print failed: {e:?}");
            }
        }
    }
}
