use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Navbar stylesheet, inlined as a fallback for release native builds where
// the asset pipeline is unavailable.
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so this crate never needs to know each platform's `Route` enum.
///
/// Each closure receives the label text and returns a link that already
/// contains that label as its child:
///
/// ```ignore
/// use ui::components::app_navbar::{register_nav, NavBuilder};
/// fn install_nav() {
///     register_nav(NavBuilder {
///         home: |label| rsx!( Link { class: "navbar__link", to: Route::Home {}, "{label}" } ),
///         conditions: |label| rsx!( Link { class: "navbar__link", to: Route::Conditions {}, "{label}" } ),
///         help_seeking: |label| rsx!( Link { class: "navbar__link", to: Route::HelpSeeking {}, "{label}" } ),
///         flows: |label| rsx!( Link { class: "navbar__link", to: Route::Flows {}, "{label}" } ),
///     });
/// }
/// ```
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub conditions: fn(label: &str) -> Element,
    pub help_seeking: fn(label: &str) -> Element,
    pub flows: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    // Internal nav when a builder is registered; raw children otherwise.
    let internal_nav: Option<VNode> = NAV_BUILDER.get().map(|b| {
        let home = (b.home)("Overview");
        let conditions = (b.conditions)("Conditions");
        let help_seeking = (b.help_seeking)("Help-Seeking");
        let flows = (b.flows)("Flows");

        rsx! {
            nav { class: "navbar__links",
                {home}
                {conditions}
                {help_seeking}
                {flows}
            }
        }
        .expect("AppNavbar: rsx render failed")
    });

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Campusmind" }
                    }
                    span { class: "navbar__brand-subtitle", "student mental health, charted" }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }
            }
        }
    }
}
