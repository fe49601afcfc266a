use dioxus::prelude::*;

use crate::charts::{ConditionBarChart, DashboardState};
use crate::core::aggregate::condition_percentages;

#[component]
pub fn Conditions() -> Element {
    let state = use_signal(DashboardState::load);
    let snapshot = state();

    rsx! {
        section { class: "page page-conditions",
            h1 { "Conditions" }
            p { "Share of students reporting depression, anxiety and panic attacks, split by gender." }

            if let Some(err) = snapshot.error {
                div { class: "page__error", "⚠️ {err}" }
            } else {
                ConditionBarChart { summaries: condition_percentages(&snapshot.rows) }
            }
        }
    }
}
