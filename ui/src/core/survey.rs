//! Survey row model and field normalization.

use serde::Deserialize;

pub const GENDER_COLUMN: &str = "Choose your gender";
pub const HELP_SEEKING_COLUMN: &str = "Did you seek any specialist for a treatment?";

/// One condition question: the CSV column it lives in and the short label
/// charts display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionField {
    pub key: &'static str,
    pub label: &'static str,
}

pub const CONDITIONS: [ConditionField; 3] = [
    ConditionField {
        key: "Do you have Depression?",
        label: "Depression",
    },
    ConditionField {
        key: "Do you have Anxiety?",
        label: "Anxiety",
    },
    ConditionField {
        key: "Do you have Panic attack?",
        label: "Panic Attack",
    },
];

/// One respondent, straight out of the CSV. Columns the charts never read
/// are not modelled; missing columns decode to empty strings and degrade to
/// non-matches downstream.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SurveyRow {
    #[serde(rename = "Choose your gender", default)]
    pub gender: String,
    #[serde(rename = "Do you have Depression?", default)]
    pub depression: String,
    #[serde(rename = "Do you have Anxiety?", default)]
    pub anxiety: String,
    #[serde(rename = "Do you have Panic attack?", default)]
    pub panic_attack: String,
    #[serde(rename = "Did you seek any specialist for a treatment?", default)]
    pub sought_help: String,
}

impl SurveyRow {
    /// Raw answer text for a condition column. Unknown keys behave like a
    /// missing column.
    pub fn condition_answer(&self, key: &str) -> &str {
        match key {
            "Do you have Depression?" => &self.depression,
            "Do you have Anxiety?" => &self.anxiety,
            "Do you have Panic attack?" => &self.panic_attack,
            _ => "",
        }
    }

    pub fn reports_condition(&self, condition: &ConditionField) -> bool {
        is_yes(self.condition_answer(condition.key))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Female,
    Male,
    Other,
}

impl Gender {
    /// First-letter heuristic over the trimmed, lowercased answer:
    /// `f…` → Female, `m…` → Male, everything else → Other.
    pub fn classify(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase();
        if normalized.starts_with('f') {
            Gender::Female
        } else if normalized.starts_with('m') {
            Gender::Male
        } else {
            Gender::Other
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::Other => "Other",
        }
    }
}

/// The two genders the percentage charts count. `Other` contributes to no
/// denominator.
pub const COUNTED_GENDERS: [Gender; 2] = [Gender::Female, Gender::Male];

/// Case-insensitive exact `"yes"` after trimming.
pub fn is_yes(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("yes")
}

/// Yes/No bucket for the help-seeking question. Blank, "maybe" and other
/// stray answers return `None` and are dropped from both buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

pub fn parse_yes_no(raw: &str) -> Option<YesNo> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("yes") {
        Some(YesNo::Yes)
    } else if trimmed.eq_ignore_ascii_case("no") {
        Some(YesNo::No)
    } else {
        None
    }
}
