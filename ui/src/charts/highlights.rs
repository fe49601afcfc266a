use dioxus::prelude::*;

use crate::core::aggregate::{condition_percentages, gender_tally, help_seeking_counts};
use crate::core::format;
use crate::core::survey::SurveyRow;

#[component]
pub fn SurveyHighlights(rows: Vec<SurveyRow>) -> Element {
    let total = rows.len();
    let tally = gender_tally(&rows);
    let summaries = condition_percentages(&rows);
    let help = help_seeking_counts(&rows);

    // Condition with the highest female-or-male prevalence.
    let peak = summaries
        .iter()
        .flat_map(|s| {
            [("Female", s.condition, s.female_pct), ("Male", s.condition, s.male_pct)]
        })
        .filter(|(_, _, pct)| pct.is_finite())
        .max_by(|a, b| a.2.total_cmp(&b.2));

    let peak_value = peak.map_or(f64::NAN, |(_, _, pct)| pct);
    let peak_meta = peak.map_or_else(
        || "No condition data".to_string(),
        |(gender, condition, _)| format!("{condition} among {gender} students"),
    );

    let help_meta = if help.total() > 0 {
        format!("{} answered the question", format::format_count(help.total()))
    } else {
        "No usable answers".to_string()
    };

    rsx! {
        section { class: "results-card survey-highlights",
            div { class: "results-card__header",
                h2 { "Highlights" }
                if total > 0 {
                    span { class: "results-card__meta", "{format::format_count(total as u32)} surveyed" }
                }
            }

            if total == 0 {
                p { class: "results-card__placeholder", "The survey dataset is empty." }
            } else {
                div { class: "results-highlights",
                    div { class: "results-highlight",
                        span { class: "results-highlight__label", "Respondents" }
                        strong { class: "results-highlight__value", "{total}" }
                        span { class: "results-highlight__meta",
                            "{tally.female} female · {tally.male} male · {tally.other} other"
                        }
                    }
                    div { class: "results-highlight",
                        span { class: "results-highlight__label", "Highest prevalence" }
                        strong { class: "results-highlight__value", "{format::format_percent(peak_value)}" }
                        span { class: "results-highlight__meta", "{peak_meta}" }
                    }
                    div { class: "results-highlight",
                        span { class: "results-highlight__label", "Did not seek help" }
                        strong { class: "results-highlight__value", "{help.percent_did_not_seek()}%" }
                        span { class: "results-highlight__meta", "{help_meta}" }
                    }
                }
            }
        }
    }
}
