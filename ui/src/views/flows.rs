use dioxus::prelude::*;

use crate::charts::OutcomeSankey;

#[component]
pub fn Flows() -> Element {
    rsx! {
        section { class: "page page-flows",
            h1 { "Outcome Flows" }
            p { "Follow students from how many conditions they report, through whether they sought treatment, into CGPA bands. Hover a ribbon for the full path." }

            OutcomeSankey {}
        }
    }
}
