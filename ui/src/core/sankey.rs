//! Layered Sankey layout for the three-stage flow diagram.
//!
//! Nodes sit in three fixed columns (condition buckets, help stages, CGPA
//! bands). Node heights are proportional to throughput via a single vertical
//! scale, links stack at both endpoints in table order, and link paths are
//! horizontal cubics. Vertical node order is declaration order — the flow is
//! small and fixed, so no iterative crossing reduction is attempted.

use super::flows::{FlowLink, CGPA_BANDS, COND_BUCKETS, HELP_STAGES};

#[derive(Debug, Clone)]
pub struct SankeyNode {
    pub name: &'static str,
    pub column: usize,
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

impl SankeyNode {
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    pub fn center_x(&self) -> f64 {
        (self.x0 + self.x1) / 2.0
    }
}

/// A positioned link: endpoint centers plus stroke width.
#[derive(Debug, Clone)]
pub struct SankeyRibbon {
    pub link: FlowLink,
    pub source_x: f64,
    pub source_y: f64,
    pub target_x: f64,
    pub target_y: f64,
    pub width: f64,
}

impl SankeyRibbon {
    /// SVG path in the shape `d3.sankeyLinkHorizontal` emits: a cubic with
    /// both control points at the horizontal midpoint.
    pub fn path(&self) -> String {
        let mid = (self.source_x + self.target_x) / 2.0;
        format!(
            "M{:.2},{:.2}C{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}",
            self.source_x,
            self.source_y,
            mid,
            self.source_y,
            mid,
            self.target_y,
            self.target_x,
            self.target_y
        )
    }

    /// Hairline floor so zero-value flows stay visible.
    pub fn stroke_width(&self) -> f64 {
        self.width.max(1.0)
    }
}

#[derive(Debug, Clone)]
pub struct SankeyLayout {
    pub nodes: Vec<SankeyNode>,
    pub ribbons: Vec<SankeyRibbon>,
}

impl SankeyLayout {
    pub fn node(&self, name: &str) -> Option<&SankeyNode> {
        self.nodes.iter().find(|node| node.name == name)
    }

    /// Mean x-center of a column's nodes, for stage headers.
    pub fn column_center_x(&self, column: usize) -> f64 {
        let columns: Vec<&SankeyNode> = self
            .nodes
            .iter()
            .filter(|node| node.column == column)
            .collect();
        if columns.is_empty() {
            return 0.0;
        }
        columns.iter().map(|node| node.center_x()).sum::<f64>() / columns.len() as f64
    }
}

const COLUMNS: [&[&str]; 3] = [&COND_BUCKETS, &HELP_STAGES, &CGPA_BANDS];

/// Compute the layout inside a `width` × `height` extent.
pub fn layout(links: &[FlowLink], width: f64, height: f64, node_width: f64, node_padding: f64) -> SankeyLayout {
    // Throughput per node: max of incoming and outgoing sums (equal for the
    // middle column by construction).
    let throughput = |name: &str| -> f64 {
        let incoming: u32 = links.iter().filter(|l| l.target == name).map(|l| l.value()).sum();
        let outgoing: u32 = links.iter().filter(|l| l.source == name).map(|l| l.value()).sum();
        f64::from(incoming.max(outgoing))
    };

    // One vertical scale for every column: the tightest column wins.
    let mut ky = f64::INFINITY;
    for column in COLUMNS {
        let total: f64 = column.iter().map(|name| throughput(name)).sum();
        if total > 0.0 {
            let usable = height - node_padding * (column.len() as f64 - 1.0);
            ky = ky.min(usable / total);
        }
    }
    if !ky.is_finite() {
        ky = 0.0;
    }

    let column_gap = (width - node_width) / (COLUMNS.len() as f64 - 1.0);
    let mut nodes = Vec::new();
    for (column_index, column) in COLUMNS.iter().enumerate() {
        let x0 = column_gap * column_index as f64;
        let mut y = 0.0;
        for &name in column.iter() {
            let node_height = throughput(name) * ky;
            nodes.push(SankeyNode {
                name,
                column: column_index,
                x0,
                x1: x0 + node_width,
                y0: y,
                y1: y + node_height,
            });
            y += node_height + node_padding;
        }
    }

    // Stack link offsets at each endpoint in link order.
    let node_top = |name: &str| nodes.iter().find(|n| n.name == name).map(|n| (n.y0, n.x0, n.x1));
    let mut source_offsets: Vec<(&str, f64)> = Vec::new();
    let mut target_offsets: Vec<(&str, f64)> = Vec::new();
    let mut take_offset = |table: &mut Vec<(&'static str, f64)>, name: &'static str, width: f64| {
        if let Some(entry) = table.iter_mut().find(|(n, _)| *n == name) {
            let offset = entry.1;
            entry.1 += width;
            offset
        } else {
            table.push((name, width));
            0.0
        }
    };

    let mut ribbons = Vec::with_capacity(links.len());
    for link in links {
        let ribbon_width = f64::from(link.value()) * ky;
        let Some((source_y0, _, source_x1)) = node_top(link.source) else {
            continue;
        };
        let Some((target_y0, target_x0, _)) = node_top(link.target) else {
            continue;
        };
        let source_offset = take_offset(&mut source_offsets, link.source, ribbon_width);
        let target_offset = take_offset(&mut target_offsets, link.target, ribbon_width);
        ribbons.push(SankeyRibbon {
            link: *link,
            source_x: source_x1,
            source_y: source_y0 + source_offset + ribbon_width / 2.0,
            target_x: target_x0,
            target_y: target_y0 + target_offset + ribbon_width / 2.0,
            width: ribbon_width,
        });
    }

    SankeyLayout { nodes, ribbons }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::flows::expand_links;

    const WIDTH: f64 = 700.0;
    const HEIGHT: f64 = 400.0;

    fn full_layout() -> SankeyLayout {
        layout(&expand_links(), WIDTH, HEIGHT, 28.0, 18.0)
    }

    #[test]
    fn nodes_stay_inside_the_extent() {
        let layout = full_layout();
        for node in &layout.nodes {
            assert!(node.x0 >= -1e-9 && node.x1 <= WIDTH + 1e-9, "{}", node.name);
            assert!(node.y0 >= -1e-9 && node.y1 <= HEIGHT + 1e-9, "{}", node.name);
            assert!(node.height() >= 0.0);
        }
    }

    #[test]
    fn columns_are_left_middle_right() {
        let layout = full_layout();
        let cond = layout.node("No Condition").unwrap();
        let help = layout.node("Yes").unwrap();
        let cgpa = layout.node("High").unwrap();
        assert_eq!(cond.x0, 0.0);
        assert!(help.x0 > cond.x1);
        assert!(cgpa.x0 > help.x1);
        assert!((cgpa.x1 - WIDTH).abs() < 1e-9);
    }

    #[test]
    fn middle_nodes_conserve_flow() {
        let links = expand_links();
        for help in HELP_STAGES {
            let incoming: u32 = links.iter().filter(|l| l.target == help).map(|l| l.value()).sum();
            let outgoing: u32 = links.iter().filter(|l| l.source == help).map(|l| l.value()).sum();
            assert_eq!(incoming, outgoing, "{help}");
        }
    }

    #[test]
    fn ribbon_widths_fill_their_nodes() {
        let layout = full_layout();
        // Sum of ribbon widths leaving a node equals its height.
        for node in layout.nodes.iter().filter(|n| n.column == 0) {
            let total: f64 = layout
                .ribbons
                .iter()
                .filter(|r| r.link.source == node.name)
                .map(|r| r.width)
                .sum();
            assert!((total - node.height()).abs() < 1e-6, "{}", node.name);
        }
    }

    #[test]
    fn ribbons_anchor_on_node_edges() {
        let layout = full_layout();
        for ribbon in &layout.ribbons {
            let source = layout.node(ribbon.link.source).unwrap();
            let target = layout.node(ribbon.link.target).unwrap();
            assert!((ribbon.source_x - source.x1).abs() < 1e-9);
            assert!((ribbon.target_x - target.x0).abs() < 1e-9);
            assert!(ribbon.source_y >= source.y0 - 1e-9 && ribbon.source_y <= source.y1 + 1e-9);
            assert!(ribbon.target_y >= target.y0 - 1e-9 && ribbon.target_y <= target.y1 + 1e-9);
        }
    }

    #[test]
    fn zero_value_flow_keeps_a_hairline() {
        let layout = full_layout();
        let zero = layout
            .ribbons
            .iter()
            .find(|r| r.link.value() == 0)
            .expect("table has a zero-value flow");
        assert_eq!(zero.width, 0.0);
        assert_eq!(zero.stroke_width(), 1.0);
    }

    #[test]
    fn path_is_a_single_cubic() {
        let layout = full_layout();
        let path = layout.ribbons[0].path();
        assert!(path.starts_with('M'));
        assert_eq!(path.matches('C').count(), 1);
    }
}
