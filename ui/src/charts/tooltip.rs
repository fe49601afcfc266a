use dioxus::prelude::*;

/// Pointer offsets matching the classic tooltip placement: a little right of
/// and above the cursor.
pub const POINTER_OFFSET_X: f64 = 15.0;
pub const POINTER_OFFSET_Y: f64 = -28.0;

/// Tooltip content plus its anchor, in chart-frame coordinates. Each chart
/// owns its own tooltip signal; nothing is shared across charts.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipState {
    pub x: f64,
    pub y: f64,
    pub title: String,
    pub lines: Vec<String>,
}

impl TooltipState {
    pub fn new(x: f64, y: f64, title: impl Into<String>) -> Self {
        Self {
            x,
            y,
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }
}

#[component]
pub fn ChartTooltip(tooltip: Option<TooltipState>) -> Element {
    let Some(tip) = tooltip else {
        return rsx! {};
    };

    let style = format!(
        "left:{:.0}px;top:{:.0}px;",
        tip.x + POINTER_OFFSET_X,
        tip.y + POINTER_OFFSET_Y
    );

    rsx! {
        div { class: "chart-tooltip", style: "{style}",
            strong { "{tip.title}" }
            for line in tip.lines.iter() {
                span { "{line}" }
            }
        }
    }
}
