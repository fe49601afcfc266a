use dioxus::prelude::*;

use crate::charts::{DashboardState, SurveyHighlights};

#[component]
pub fn Home() -> Element {
    let state = use_signal(DashboardState::load);
    let snapshot = state();

    rsx! {
        section { class: "page page-home",
            h1 { "Student Mental Health" }
            p { "An interactive look at a student mental health survey: which conditions students report, whether they reach out for help, and how those paths relate to academic outcomes." }

            ul { class: "page-home__features",
                li { "Condition prevalence by gender, with a brush to focus on specific bars." }
                li { "Help-seeking behaviour overall and per condition." }
                li { "Flows from conditions through treatment into CGPA bands." }
            }

            if let Some(err) = snapshot.error {
                div { class: "page__error", "⚠️ {err}" }
            } else {
                SurveyHighlights { rows: snapshot.rows }
            }

            p { class: "page-home__cta",
                "Pick a chart from the navigation above to start exploring."
            }
        }
    }
}
