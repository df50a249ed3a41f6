//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page turns the embedded `PageData` into component props and lays
//! out the admin screen; behaviour lives in `components`.

pub mod product_form;
pub mod users;
