use dioxus::prelude::*;

use crate::charts::{DashboardState, HelpSeekingDonut};

#[component]
pub fn HelpSeeking() -> Element {
    let state = use_signal(DashboardState::load);
    let snapshot = state();

    rsx! {
        section { class: "page page-help-seeking",
            h1 { "Help-Seeking" }
            p { "How many students sought specialist treatment. Use the buttons to restrict the donut to students reporting a particular condition." }

            if let Some(err) = snapshot.error {
                div { class: "page__error", "⚠️ {err}" }
            } else {
                HelpSeekingDonut { rows: snapshot.rows }
            }
        }
    }
}
