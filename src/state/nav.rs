//! Mobile navigation menu state.
//!
//! The toggle button and the menu panel both render from the same `open`
//! flag, so the button's `active` class and the panel's visibility cannot
//! drift apart.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Open/closed state of the collapsible navigation menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub open: bool,
}

impl NavState {
    /// Flip the menu (toggle button click).
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close the menu regardless of its prior state (nav link click).
    pub fn close(&mut self) {
        self.open = false;
    }

    /// React to a click anywhere on the document.
    ///
    /// Clicks inside the toggle or the menu are left to their own handlers;
    /// anything else closes the menu.
    pub fn on_document_click(&mut self, inside_toggle: bool, inside_menu: bool) {
        if !inside_toggle && !inside_menu {
            self.close();
        }
    }

    /// Class list shared by the toggle button and the menu panel.
    #[must_use]
    pub fn class_for(self, base: &str) -> String {
        if self.open { format!("{base} active") } else { base.to_owned() }
    }
}
