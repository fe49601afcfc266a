//! Grouped bar chart: condition prevalence by gender, with pointer tooltips
//! and a horizontal brush that dims unselected bars and summarises the rest.

use dioxus::prelude::*;

use crate::core::aggregate::ConditionSummary;
use crate::core::format;
use crate::core::scale::{BandScale, LinearScale};
use crate::core::selection::{hit_test, BarMark, PixelRange, SelectionState};
use crate::core::survey::{Gender, COUNTED_GENDERS};

use super::tooltip::{ChartTooltip, TooltipState};

const MARGIN_TOP: f64 = 60.0;
const MARGIN_LEFT: f64 = 100.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 60.0;
const PLOT_WIDTH: f64 = 760.0;
const PLOT_HEIGHT: f64 = 380.0;
const BAR_CORNER: f64 = 7.0;
const Y_TICK_COUNT: usize = 8;
const LEGEND_SWATCH: f64 = 22.0;

/// Drags narrower than this count as a click, which clears the brush.
const CLICK_TOLERANCE: f64 = 3.0;

fn gender_color(gender: Gender) -> &'static str {
    match gender {
        Gender::Female => "#6a51a3",
        Gender::Male => "#3182bd",
        Gender::Other => "#cccccc",
    }
}

fn gender_hover_color(gender: Gender) -> &'static str {
    match gender {
        Gender::Female => "#4d3a78",
        Gender::Male => "#24618d",
        Gender::Other => "#9e9e9e",
    }
}

fn bar_fill(hovered: Option<usize>, index: usize, gender: Gender) -> &'static str {
    if hovered == Some(index) {
        gender_hover_color(gender)
    } else {
        gender_color(gender)
    }
}

struct BarLayout {
    marks: Vec<BarMark>,
    y: LinearScale,
    condition_labels: Vec<(String, f64)>,
}

fn build_layout(summaries: &[ConditionSummary]) -> BarLayout {
    let x0 = BandScale::new(
        summaries.iter().map(|s| s.condition),
        (0.0, PLOT_WIDTH),
    )
    .padding_inner(0.25);
    let x1 = BandScale::new(
        COUNTED_GENDERS.iter().map(|g| g.label()),
        (0.0, x0.bandwidth()),
    )
    .padding(0.18);

    let max_pct = summaries
        .iter()
        .flat_map(|s| [s.female_pct, s.male_pct])
        .filter(|v| v.is_finite())
        .fold(0.0f64, f64::max);
    let y = LinearScale::new((0.0, max_pct * 1.15), (PLOT_HEIGHT, 0.0)).nice(Y_TICK_COUNT);

    let mut marks = Vec::with_capacity(summaries.len() * COUNTED_GENDERS.len());
    for summary in summaries {
        let Some(group_x) = x0.position(summary.condition) else {
            continue;
        };
        for gender in COUNTED_GENDERS {
            let value = summary.percent_for(gender);
            // Non-finite percentages (no respondents) draw as zero-height bars.
            let plotted = if value.is_finite() { value } else { 0.0 };
            let top = y.map(plotted);
            let Some(offset) = x1.position(gender.label()) else {
                continue;
            };
            marks.push(BarMark {
                condition: summary.condition.to_string(),
                gender,
                value,
                x: group_x + offset,
                y: top,
                width: x1.bandwidth(),
                height: PLOT_HEIGHT - top,
            });
        }
    }

    let condition_labels = summaries
        .iter()
        .filter_map(|s| Some((s.condition.to_string(), x0.center(s.condition)?)))
        .collect();

    BarLayout {
        marks,
        y,
        condition_labels,
    }
}

#[component]
pub fn ConditionBarChart(summaries: Vec<ConditionSummary>) -> Element {
    let layout = build_layout(&summaries);
    let y_ticks = layout.y.ticks(Y_TICK_COUNT);

    let tooltip = use_signal(|| Option::<TooltipState>::None);
    let hovered = use_signal(|| Option::<usize>::None);
    let drag_anchor = use_signal(|| Option::<f64>::None);
    let brush = use_signal(|| Option::<PixelRange>::None);

    let selection = SelectionState::from_brush(&layout.marks, brush());
    let summary = selection.summary(&layout.marks).map(|marks| {
        marks
            .iter()
            .map(|mark| {
                format!(
                    "{} ({}): {}",
                    mark.condition,
                    mark.gender.label(),
                    format::format_percent(mark.value)
                )
            })
            .collect::<Vec<_>>()
    });

    let on_mouse_down = {
        let mut drag_anchor = drag_anchor;
        let mut brush = brush;
        let mut tooltip = tooltip;
        let mut hovered = hovered;
        move |evt: MouseEvent| {
            let x = evt.element_coordinates().x;
            drag_anchor.set(Some(x));
            brush.set(Some(PixelRange::new(x, x)));
            tooltip.set(None);
            hovered.set(None);
        }
    };

    let on_mouse_move = {
        let marks = layout.marks.clone();
        let mut brush = brush;
        let mut tooltip = tooltip;
        let mut hovered = hovered;
        move |evt: MouseEvent| {
            let point = evt.element_coordinates();
            if let Some(anchor) = drag_anchor() {
                brush.set(Some(PixelRange::new(anchor, point.x)));
                return;
            }
            match hit_test(&marks, point.x, point.y) {
                Some((index, mark)) => {
                    hovered.set(Some(index));
                    tooltip.set(Some(
                        TooltipState::new(
                            MARGIN_LEFT + point.x,
                            MARGIN_TOP + point.y,
                            mark.condition.clone(),
                        )
                        .with_line(format!(
                            "{}: {}",
                            mark.gender.label(),
                            format::format_percent(mark.value)
                        )),
                    ));
                }
                None => {
                    hovered.set(None);
                    tooltip.set(None);
                }
            }
        }
    };

    let on_mouse_up = {
        let mut drag_anchor = drag_anchor;
        let mut brush = brush;
        move |evt: MouseEvent| {
            if let Some(anchor) = drag_anchor() {
                let x = evt.element_coordinates().x;
                if (x - anchor).abs() < CLICK_TOLERANCE {
                    brush.set(None);
                } else {
                    brush.set(Some(PixelRange::new(anchor, x)));
                }
                drag_anchor.set(None);
            }
        }
    };

    let on_mouse_leave = {
        let mut drag_anchor = drag_anchor;
        let mut brush = brush;
        let mut tooltip = tooltip;
        let mut hovered = hovered;
        move |_| {
            tooltip.set(None);
            hovered.set(None);
            // Leaving mid-drag finalises the interval as-is.
            if drag_anchor().is_some() {
                drag_anchor.set(None);
                if let Some(range) = brush() {
                    if range.x1 - range.x0 < CLICK_TOLERANCE {
                        brush.set(None);
                    }
                }
            }
        }
    };

    let svg_width = PLOT_WIDTH + MARGIN_LEFT + MARGIN_RIGHT;
    let svg_height = PLOT_HEIGHT + MARGIN_TOP + MARGIN_BOTTOM;
    let active_brush = brush();

    rsx! {
        div { class: "chart-card",
            p { class: "chart-hint", "Tip: Drag horizontally on the chart to select bars" }
            div { class: "chart-frame",
                svg {
                    class: "chart chart--bars",
                    width: "{svg_width}",
                    height: "{svg_height}",
                    g { transform: "translate({MARGIN_LEFT},{MARGIN_TOP})",
                        // Axes
                        line {
                            class: "chart-axis__domain",
                            x1: "0", y1: "{PLOT_HEIGHT}",
                            x2: "{PLOT_WIDTH}", y2: "{PLOT_HEIGHT}",
                        }
                        line {
                            class: "chart-axis__domain",
                            x1: "0", y1: "0",
                            x2: "0", y2: "{PLOT_HEIGHT}",
                        }
                        for tick in y_ticks.iter() {
                            g { transform: "translate(0,{layout.y.map(*tick)})",
                                line { class: "chart-axis__tick", x1: "-6", y1: "0", x2: "0", y2: "0" }
                                text {
                                    class: "chart-axis__label chart-axis__label--y",
                                    x: "-10", y: "4", text_anchor: "end",
                                    {format::format_axis_percent(*tick)}
                                }
                            }
                        }
                        for (label, center) in layout.condition_labels.iter() {
                            text {
                                class: "chart-axis__label",
                                x: "{center}", y: "{PLOT_HEIGHT + 22.0}", text_anchor: "middle",
                                "{label}"
                            }
                        }

                        // Titles
                        text {
                            class: "chart-title",
                            x: "{PLOT_WIDTH / 2.0}", y: "-25", text_anchor: "middle",
                            "Mental Health Challenges Faced by Students"
                        }
                        text {
                            class: "chart-axis__title",
                            x: "{PLOT_WIDTH / 2.0}", y: "{PLOT_HEIGHT + 55.0}", text_anchor: "middle",
                            "Condition Type"
                        }
                        text {
                            class: "chart-axis__title",
                            transform: "rotate(-90)",
                            x: "{-PLOT_HEIGHT / 2.0}", y: "-55", text_anchor: "middle",
                            "% of Students"
                        }

                        // Bars
                        for (index, mark) in layout.marks.iter().enumerate() {
                            rect {
                                class: "bar-chart__bar",
                                x: "{mark.x}", y: "{mark.y}",
                                width: "{mark.width}", height: "{mark.height}",
                                rx: "{BAR_CORNER}", ry: "{BAR_CORNER}",
                                fill: "{bar_fill(hovered(), index, mark.gender)}",
                                opacity: "{selection.opacity(index)}",
                            }
                        }

                        // Legend
                        g { transform: "translate({PLOT_WIDTH - 120.0},0)",
                            for (slot, gender) in COUNTED_GENDERS.iter().enumerate() {
                                rect {
                                    x: "0", y: "{slot as f64 * 28.0}",
                                    width: "{LEGEND_SWATCH}", height: "{LEGEND_SWATCH}",
                                    rx: "5",
                                    fill: gender_color(*gender),
                                }
                                text {
                                    class: "chart-legend__label",
                                    x: "32", y: "{slot as f64 * 28.0 + 16.0}",
                                    {gender.label()}
                                }
                            }
                        }

                        // Brush highlight, then the transparent interaction overlay.
                        if let Some(range) = active_brush {
                            rect {
                                class: "chart-brush__extent",
                                x: "{range.x0}", y: "0",
                                width: "{range.x1 - range.x0}", height: "{PLOT_HEIGHT}",
                            }
                        }
                        rect {
                            class: "chart-brush__overlay",
                            x: "0", y: "0",
                            width: "{PLOT_WIDTH}", height: "{PLOT_HEIGHT}",
                            fill: "transparent",
                            onmousedown: on_mouse_down,
                            onmousemove: on_mouse_move,
                            onmouseup: on_mouse_up,
                            onmouseleave: on_mouse_leave,
                        }
                    }
                }
                ChartTooltip { tooltip: tooltip() }
            }

            if let Some(lines) = summary {
                div { class: "bar-summary",
                    if lines.is_empty() {
                        em { "No bars selected" }
                    } else {
                        strong { "Selected Bars:" }
                        ul {
                            for line in lines.iter() {
                                li { "{line}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
