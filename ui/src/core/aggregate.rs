//! Aggregation of survey rows into chart-ready summaries.

use serde::Serialize;

use super::survey::{
    parse_yes_no, ConditionField, Gender, SurveyRow, YesNo, CONDITIONS, COUNTED_GENDERS,
};

/// Percentage of each counted gender reporting one condition. A gender with
/// zero respondents yields `NaN` here; the rendering layer treats non-finite
/// values as zero-height bars with a "–" label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionSummary {
    pub condition: &'static str,
    #[serde(rename = "Female")]
    pub female_pct: f64,
    #[serde(rename = "Male")]
    pub male_pct: f64,
}

impl ConditionSummary {
    pub fn percent_for(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Female => self.female_pct,
            Gender::Male => self.male_pct,
            Gender::Other => f64::NAN,
        }
    }
}

/// Raw Yes/No tallies for the help-seeking question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HelpSeekingCounts {
    #[serde(rename = "Yes")]
    pub yes: u32,
    #[serde(rename = "No")]
    pub no: u32,
}

impl HelpSeekingCounts {
    pub fn total(&self) -> u32 {
        self.yes + self.no
    }

    /// `round(No / total * 100)` — the donut's center figure.
    pub fn percent_did_not_seek(&self) -> u32 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        (f64::from(self.no) / f64::from(total) * 100.0).round() as u32
    }

    fn record(&mut self, answer: YesNo) {
        match answer {
            YesNo::Yes => self.yes += 1,
            YesNo::No => self.no += 1,
        }
    }
}

/// Respondent tally per gender bucket. Female + Male + Other always equals
/// the row count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenderTally {
    pub female: u32,
    pub male: u32,
    pub other: u32,
}

impl GenderTally {
    pub fn total(&self) -> u32 {
        self.female + self.male + self.other
    }

    pub fn for_gender(&self, gender: Gender) -> u32 {
        match gender {
            Gender::Female => self.female,
            Gender::Male => self.male,
            Gender::Other => self.other,
        }
    }
}

pub fn gender_tally(rows: &[SurveyRow]) -> GenderTally {
    let mut tally = GenderTally::default();
    for row in rows {
        match Gender::classify(&row.gender) {
            Gender::Female => tally.female += 1,
            Gender::Male => tally.male += 1,
            Gender::Other => tally.other += 1,
        }
    }
    tally
}

/// Per-condition percentages for the grouped bar chart. Rows classified
/// `Other` contribute to no denominator.
pub fn condition_percentages(rows: &[SurveyRow]) -> Vec<ConditionSummary> {
    let tally = gender_tally(rows);

    CONDITIONS
        .iter()
        .map(|condition| {
            let mut counts = [0u32; COUNTED_GENDERS.len()];
            for row in rows {
                let gender = Gender::classify(&row.gender);
                let Some(slot) = COUNTED_GENDERS.iter().position(|g| *g == gender) else {
                    continue;
                };
                if row.reports_condition(condition) {
                    counts[slot] += 1;
                }
            }

            let pct = |slot: usize| {
                f64::from(counts[slot]) / f64::from(tally.for_gender(COUNTED_GENDERS[slot]))
                    * 100.0
            };

            ConditionSummary {
                condition: condition.label,
                female_pct: pct(0),
                male_pct: pct(1),
            }
        })
        .collect()
}

/// Overall help-seeking tallies.
pub fn help_seeking_counts(rows: &[SurveyRow]) -> HelpSeekingCounts {
    let mut counts = HelpSeekingCounts::default();
    for row in rows {
        if let Some(answer) = parse_yes_no(&row.sought_help) {
            counts.record(answer);
        }
    }
    counts
}

/// Help-seeking tallies restricted to rows reporting one condition, for the
/// donut's category toggle.
pub fn help_seeking_for_condition(
    rows: &[SurveyRow],
    condition: &ConditionField,
) -> HelpSeekingCounts {
    let mut counts = HelpSeekingCounts::default();
    for row in rows {
        if !row.reports_condition(condition) {
            continue;
        }
        if let Some(answer) = parse_yes_no(&row.sought_help) {
            counts.record(answer);
        }
    }
    counts
}
