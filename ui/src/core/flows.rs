//! The three-stage flow table behind the Sankey view.
//!
//! The records are a fixed lookup, not derived from the survey CSV — they
//! stand in until a real condition-count × help-seeking × CGPA aggregation
//! exists. Every consumer shares this one table.

/// One `condition bucket → help-seeking → CGPA band` flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowRecord {
    pub cond: &'static str,
    pub help: &'static str,
    pub cgpa: &'static str,
    pub value: u32,
    pub avg_cgpa: f64,
}

pub const COND_BUCKETS: [&str; 4] = [
    "No Condition",
    "One Condition",
    "Two Conditions",
    "All Three Conditions",
];
pub const HELP_STAGES: [&str; 2] = ["No", "Yes"];
pub const CGPA_BANDS: [&str; 3] = ["Low", "Medium", "High"];

pub const FLOW_TABLE: [FlowRecord; 24] = [
    FlowRecord { cond: "No Condition", help: "No", cgpa: "High", value: 12, avg_cgpa: 3.7 },
    FlowRecord { cond: "No Condition", help: "No", cgpa: "Medium", value: 8, avg_cgpa: 3.2 },
    FlowRecord { cond: "No Condition", help: "No", cgpa: "Low", value: 3, avg_cgpa: 2.5 },
    FlowRecord { cond: "No Condition", help: "Yes", cgpa: "High", value: 5, avg_cgpa: 3.8 },
    FlowRecord { cond: "No Condition", help: "Yes", cgpa: "Medium", value: 7, avg_cgpa: 3.3 },
    FlowRecord { cond: "No Condition", help: "Yes", cgpa: "Low", value: 2, avg_cgpa: 2.7 },
    FlowRecord { cond: "One Condition", help: "No", cgpa: "High", value: 8, avg_cgpa: 3.6 },
    FlowRecord { cond: "One Condition", help: "No", cgpa: "Medium", value: 14, avg_cgpa: 3.1 },
    FlowRecord { cond: "One Condition", help: "No", cgpa: "Low", value: 3, avg_cgpa: 2.4 },
    FlowRecord { cond: "One Condition", help: "Yes", cgpa: "High", value: 9, avg_cgpa: 3.7 },
    FlowRecord { cond: "One Condition", help: "Yes", cgpa: "Medium", value: 10, avg_cgpa: 3.3 },
    FlowRecord { cond: "One Condition", help: "Yes", cgpa: "Low", value: 1, avg_cgpa: 2.8 },
    FlowRecord { cond: "Two Conditions", help: "No", cgpa: "High", value: 2, avg_cgpa: 3.5 },
    FlowRecord { cond: "Two Conditions", help: "No", cgpa: "Medium", value: 7, avg_cgpa: 3.0 },
    FlowRecord { cond: "Two Conditions", help: "No", cgpa: "Low", value: 4, avg_cgpa: 2.2 },
    FlowRecord { cond: "Two Conditions", help: "Yes", cgpa: "High", value: 3, avg_cgpa: 3.6 },
    FlowRecord { cond: "Two Conditions", help: "Yes", cgpa: "Medium", value: 3, avg_cgpa: 3.2 },
    FlowRecord { cond: "Two Conditions", help: "Yes", cgpa: "Low", value: 1, avg_cgpa: 2.6 },
    FlowRecord { cond: "All Three Conditions", help: "No", cgpa: "High", value: 1, avg_cgpa: 3.4 },
    FlowRecord { cond: "All Three Conditions", help: "No", cgpa: "Medium", value: 3, avg_cgpa: 2.9 },
    FlowRecord { cond: "All Three Conditions", help: "No", cgpa: "Low", value: 2, avg_cgpa: 2.0 },
    FlowRecord { cond: "All Three Conditions", help: "Yes", cgpa: "High", value: 2, avg_cgpa: 3.5 },
    FlowRecord { cond: "All Three Conditions", help: "Yes", cgpa: "Medium", value: 1, avg_cgpa: 3.1 },
    FlowRecord { cond: "All Three Conditions", help: "Yes", cgpa: "Low", value: 0, avg_cgpa: 0.0 },
];

/// Which half of the chained flow a link renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowStage {
    CondToHelp,
    HelpToCgpa,
}

/// One drawable link. Both stages of a record carry the full record so the
/// tooltip can always state the whole path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowLink {
    pub source: &'static str,
    pub target: &'static str,
    pub stage: FlowStage,
    pub record: FlowRecord,
}

impl FlowLink {
    pub fn value(&self) -> u32 {
        self.record.value
    }
}

/// Expand each flow record into its two chained stages, preserving table
/// order.
pub fn expand_links() -> Vec<FlowLink> {
    let mut links = Vec::with_capacity(FLOW_TABLE.len() * 2);
    for record in FLOW_TABLE {
        links.push(FlowLink {
            source: record.cond,
            target: record.help,
            stage: FlowStage::CondToHelp,
            record,
        });
        links.push(FlowLink {
            source: record.help,
            target: record.cgpa,
            stage: FlowStage::HelpToCgpa,
            record,
        });
    }
    links
}
