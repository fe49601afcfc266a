//! Shared UI crate for Campusmind. Aggregation, chart layout, and views live
//! here; the platform crates only wire up routing and launch.

pub mod charts;
pub mod core;
pub mod views;

pub mod components {
    // Application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}
