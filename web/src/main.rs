use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::views::{Conditions, Flows, HelpSeeking, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/charts/conditions")]
    Conditions {},
    #[route("/charts/help-seeking")]
    HelpSeeking {},
    #[route("/charts/flows")]
    Flows {},
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
// Shared theme (ui/assets/theme/main.css), inlined so web and desktop render
// from the same stylesheet.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_conditions(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Conditions {},
        "{label}"
    })
}
fn nav_help_seeking(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::HelpSeeking {},
        "{label}"
    })
}
fn nav_flows(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Flows {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder {
        home: nav_home,
        conditions: nav_conditions,
        help_seeking: nav_help_seeking,
        flows: nav_flows,
    });

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
