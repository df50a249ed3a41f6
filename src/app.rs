//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::flash_messages::FlashMessages;
use crate::components::nav_bar::{NavBar, NavLink};
use crate::components::notification_host::NotificationHost;
use crate::config::{CONFIG_ELEMENT_ID, UiConfig};
use crate::net::types::{PAGE_DATA_ELEMENT_ID, PageData};
use crate::pages::{product_form::ProductFormPage, users::UsersPage};
use crate::state::notifications::NotificationState;
use crate::util::embedded::script_safe;
use crate::util::notify::Notifier;

fn nav_links() -> Vec<NavLink> {
    vec![
        NavLink::new("/admin/dashboard", "Dashboard"),
        NavLink::new("/admin/users", "Users"),
        NavLink::new("/admin/products", "Products"),
        NavLink::new("/admin/requests", "Requests"),
        NavLink::new("/admin/reports", "Reports"),
        NavLink::new("/logout", "Log out"),
    ]
}

/// HTML shell rendered on the server for SSR + hydration.
///
/// `page` and `config` are rendered into the body and embedded as JSON so
/// the hydrating client rebuilds the same view.
pub fn shell(options: LeptosOptions, page: PageData, config: UiConfig) -> impl IntoView {
    let page_json = script_safe(&page).unwrap_or_else(|_| "{}".to_owned());
    let config_json = script_safe(&config).unwrap_or_else(|_| "{}".to_owned());

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script type="application/json" id=PAGE_DATA_ELEMENT_ID inner_html=page_json></script>
                <script type="application/json" id=CONFIG_ELEMENT_ID inner_html=config_json></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App page config/>
            </body>
        </html>
    }
}

/// Route listing for mounting the app on an Axum router.
#[cfg(feature = "ssr")]
pub fn route_list() -> Vec<leptos_axum::AxumRouteListing> {
    leptos_axum::generate_route_list(|| {
        view! { <App page=PageData::default() config=UiConfig::default()/> }
    })
}

/// Root application component.
///
/// Provides configuration, page data, and the notifier to every component.
#[component]
pub fn App(page: PageData, config: UiConfig) -> impl IntoView {
    provide_meta_context();

    let notifications = RwSignal::new(NotificationState::default());
    provide_context(Notifier::new(notifications, config.notification_ms));
    provide_context(config);

    let flashes = page.flashes.clone();
    provide_context(page);

    view! {
        <Stylesheet id="leptos" href="/pkg/admin-ui.css"/>
        <Title text="Admin"/>

        <NavBar brand="Admin" links=nav_links()/>
        <FlashMessages messages=flashes/>
        <NotificationHost/>

        <main class="container">
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=(StaticSegment("admin"), StaticSegment("users")) view=UsersPage/>
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("products"), StaticSegment("add"))
                        view=ProductFormPage
                    />
                </Routes>
            </Router>
        </main>
    }
}
