mod bars;
pub use bars::ConditionBarChart;

mod donut;
pub use donut::HelpSeekingDonut;

mod sankey;
pub use sankey::OutcomeSankey;

mod highlights;
pub use highlights::SurveyHighlights;

mod tooltip;

use crate::core::dataset;
use crate::core::survey::SurveyRow;

/// Rows for one chart view, or the quiet reason there are none. Every view
/// loads from scratch on mount; summaries are recomputed per render pass and
/// charts never share aggregation state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub rows: Vec<SurveyRow>,
    pub error: Option<String>,
}

impl DashboardState {
    pub fn load() -> Self {
        match dataset::load_rows() {
            Ok(rows) => {
                #[cfg(debug_assertions)]
                println!("[data] survey loaded ({} rows)", rows.len());
                Self { rows, error: None }
            }
            Err(err) => Self {
                rows: Vec::new(),
                error: Some(format!("Couldn't decode the survey data: {err}")),
            },
        }
    }
}
