//! Two-stage Sankey view: condition buckets through help-seeking into CGPA
//! bands. Layout comes from `core::sankey`; this component only renders and
//! handles hover.

use dioxus::prelude::*;

use crate::core::flows::{expand_links, CGPA_BANDS};
use crate::core::format;
use crate::core::sankey::{layout, SankeyLayout, SankeyNode};

use super::tooltip::{ChartTooltip, TooltipState};

const MARGIN_TOP: f64 = 80.0;
const MARGIN_LEFT: f64 = 150.0;
const MARGIN_RIGHT: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 30.0;
const PLOT_WIDTH: f64 = 700.0;
const PLOT_HEIGHT: f64 = 390.0;
const NODE_WIDTH: f64 = 28.0;
const NODE_PADDING: f64 = 18.0;

const RIBBON_OPACITY: f64 = 0.45;
const RIBBON_OPACITY_HOVER: f64 = 0.85;
const RIBBON_OPACITY_DIM: f64 = 0.15;

const STAGE_HEADERS: [&str; 3] = [
    "Mental Health Status",
    "Sought Treatment",
    "Academic Performance",
];

fn band_color(band: &str) -> &'static str {
    match band {
        "High" => "#31a354",
        "Medium" => "#ffd92f",
        "Low" => "#e6550d",
        _ => "#bdbdbd",
    }
}

fn node_color(column: usize, name: &str) -> &'static str {
    match column {
        0 => "#3182bd",
        1 => "#bdbdbd",
        _ => band_color(name),
    }
}

fn ribbon_opacity(hovered: Option<usize>, index: usize) -> f64 {
    match hovered {
        Some(hover) if hover == index => RIBBON_OPACITY_HOVER,
        Some(_) => RIBBON_OPACITY_DIM,
        None => RIBBON_OPACITY,
    }
}

fn label_x(node: &SankeyNode) -> f64 {
    if node.column == 0 {
        node.x0 - 8.0
    } else {
        node.x1 + 8.0
    }
}

fn label_anchor(node: &SankeyNode) -> &'static str {
    if node.column == 0 {
        "end"
    } else {
        "start"
    }
}

/// Both stages of a record hover to the same full-path tooltip.
fn ribbon_tooltip(layout: &SankeyLayout, index: usize, px: f64, py: f64) -> TooltipState {
    let ribbon = &layout.ribbons[index];
    let record = ribbon.link.record;
    let title = format!(
        "{} → Help: {} → {} CGPA",
        record.cond, record.help, record.cgpa
    );
    let mut tip = TooltipState::new(px, py, title).with_line(format::format_count(record.value));
    if record.value > 0 {
        tip = tip.with_line(format!("Avg CGPA: {}", format::format_cgpa(record.avg_cgpa)));
    }
    tip
}

#[component]
pub fn OutcomeSankey() -> Element {
    let links = expand_links();
    let diagram = layout(&links, PLOT_WIDTH, PLOT_HEIGHT, NODE_WIDTH, NODE_PADDING);

    let hovered = use_signal(|| Option::<usize>::None);
    let pointer = use_signal(|| (0.0f64, 0.0f64));

    let svg_width = PLOT_WIDTH + MARGIN_LEFT + MARGIN_RIGHT;
    let svg_height = PLOT_HEIGHT + MARGIN_TOP + MARGIN_BOTTOM;
    let active_hover = hovered();

    let on_svg_move = {
        let mut pointer = pointer;
        move |evt: MouseEvent| {
            let point = evt.element_coordinates();
            pointer.set((point.x, point.y));
        }
    };

    rsx! {
        div { class: "chart-card",
            div { class: "chart-frame",
                svg {
                    class: "chart chart--sankey",
                    width: "{svg_width}",
                    height: "{svg_height}",
                    onmousemove: on_svg_move,
                    text {
                        class: "chart-title",
                        x: "{svg_width / 2.0}", y: "26", text_anchor: "middle",
                        "From Conditions to Academic Outcomes"
                    }

                    g { transform: "translate({MARGIN_LEFT},{MARGIN_TOP})",
                        for (column, header) in STAGE_HEADERS.iter().enumerate() {
                            text {
                                class: "chart-subtitle",
                                x: "{diagram.column_center_x(column)}",
                                y: "-18", text_anchor: "middle",
                                "{header}"
                            }
                        }

                        for (index, ribbon) in diagram.ribbons.iter().enumerate() {
                            path {
                                class: "sankey__ribbon",
                                d: ribbon.path(),
                                fill: "none",
                                stroke: band_color(ribbon.link.record.cgpa),
                                stroke_width: "{ribbon.stroke_width()}",
                                opacity: "{ribbon_opacity(active_hover, index)}",
                                onmouseenter: {
                                    let mut hovered = hovered;
                                    move |_| hovered.set(Some(index))
                                },
                                onmouseleave: {
                                    let mut hovered = hovered;
                                    move |_| hovered.set(None)
                                },
                            }
                        }

                        for node in diagram.nodes.iter() {
                            rect {
                                class: "sankey__node",
                                x: "{node.x0}", y: "{node.y0}",
                                width: "{node.x1 - node.x0}",
                                height: "{node.height()}",
                                fill: node_color(node.column, node.name),
                            }
                            text {
                                class: "sankey__label",
                                x: "{label_x(node)}",
                                y: "{(node.y0 + node.y1) / 2.0 + 4.0}",
                                text_anchor: label_anchor(node),
                                "{node.name}"
                            }
                        }

                        // CGPA band legend
                        g { transform: "translate(0,{PLOT_HEIGHT + 14.0})",
                            for (slot, band) in CGPA_BANDS.iter().enumerate() {
                                rect {
                                    x: "{slot as f64 * 130.0}", y: "0",
                                    width: "14", height: "14", rx: "3",
                                    fill: band_color(band),
                                }
                                text {
                                    class: "chart-legend__label",
                                    x: "{slot as f64 * 130.0 + 20.0}", y: "12",
                                    "{band} CGPA"
                                }
                            }
                        }
                    }
                }
                ChartTooltip {
                    tooltip: active_hover.map(|index| {
                        let (px, py) = pointer();
                        ribbon_tooltip(&diagram, index, px, py)
                    }),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_states_the_full_record_path() {
        let links = expand_links();
        let diagram = layout(&links, PLOT_WIDTH, PLOT_HEIGHT, NODE_WIDTH, NODE_PADDING);
        let tip = ribbon_tooltip(&diagram, 0, 10.0, 20.0);
        assert!(tip.title.contains("No Condition"));
        assert!(tip.title.contains("High CGPA"));
        assert_eq!(tip.lines[0], "12 students");
        assert!(tip.lines[1].starts_with("Avg CGPA:"));
    }

    #[test]
    fn zero_value_flows_skip_the_average_line() {
        let links = expand_links();
        let diagram = layout(&links, PLOT_WIDTH, PLOT_HEIGHT, NODE_WIDTH, NODE_PADDING);
        let index = diagram
            .ribbons
            .iter()
            .position(|r| r.link.value() == 0)
            .expect("table has a zero-value flow");
        let tip = ribbon_tooltip(&diagram, index, 0.0, 0.0);
        assert_eq!(tip.lines, vec!["0 students".to_string()]);
    }

    #[test]
    fn cgpa_bands_have_distinct_colors() {
        let mut colors: Vec<_> = CGPA_BANDS.iter().map(|b| band_color(b)).collect();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), CGPA_BANDS.len());
    }
}
