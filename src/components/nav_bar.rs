//! Top navigation bar with a collapsible mobile menu.
//!
//! The toggle flips the menu, any nav link closes it, and a click anywhere
//! outside both the toggle and the menu closes it too.

use leptos::prelude::*;

use crate::state::nav::NavState;

/// One entry in the navigation menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub label: String,
}

impl NavLink {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self { href: href.into(), label: label.into() }
    }
}

#[cfg(feature = "hydrate")]
fn contains_target(el: Option<web_sys::HtmlElement>, target: Option<&web_sys::Node>) -> bool {
    el.is_some_and(|el| el.contains(target))
}

#[component]
pub fn NavBar(#[prop(into)] brand: String, links: Vec<NavLink>) -> impl IntoView {
    let nav = RwSignal::new(NavState::default());
    let toggle_ref = NodeRef::<leptos::html::Button>::new();
    let menu_ref = NodeRef::<leptos::html::Ul>::new();

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let handle = window_event_listener(leptos::ev::click, move |ev| {
            let target = ev.target();
            let target = target.as_ref().and_then(|t| t.dyn_ref::<web_sys::Node>());
            let inside_toggle = contains_target(toggle_ref.get_untracked().map(Into::into), target);
            let inside_menu = contains_target(menu_ref.get_untracked().map(Into::into), target);
            nav.update(|n| n.on_document_click(inside_toggle, inside_menu));
        });
        on_cleanup(move || handle.remove());
    }

    let menu_items = links
        .into_iter()
        .map(|link| {
            view! {
                <li class="nav-item">
                    <a href=link.href class="nav-link" on:click=move |_| nav.update(NavState::close)>
                        {link.label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="navbar">
            <div class="nav-container">
                <a href="/" class="nav-brand">{brand}</a>
                <button
                    id="nav-toggle"
                    type="button"
                    node_ref=toggle_ref
                    class=move || nav.get().class_for("nav-toggle")
                    aria-label="Toggle navigation"
                    aria-expanded=move || nav.get().open.to_string()
                    on:click=move |_| nav.update(NavState::toggle)
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
                <ul id="nav-menu" node_ref=menu_ref class=move || nav.get().class_for("nav-menu")>
                    {menu_items}
                </ul>
            </div>
        </nav>
    }
}
