//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components bind the plain-Rust models in `state` to the DOM. Shared
//! dependencies (`UiConfig`, `Notifier`, `PageData`) arrive through Leptos
//! context; everything component-specific is a typed prop.

pub mod copy_button;
pub mod data_table;
pub mod export_button;
pub mod flash_messages;
pub mod image_preview;
pub mod loading_button;
pub mod nav_bar;
pub mod notification_host;
pub mod print_button;
pub mod user_actions;
pub mod validated_form;
