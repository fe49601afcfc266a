//! Pie/donut geometry: angle allocation and annular sector paths.
//!
//! Angles are radians measured clockwise from 12 o'clock, matching the SVG
//! output of `d3.pie` with sorting disabled.

use std::f64::consts::TAU;

/// Start/end angles for one slice.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SliceAngles {
    pub start: f64,
    pub end: f64,
}

impl SliceAngles {
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Linear interpolation between two angle pairs.
    pub fn lerp(from: SliceAngles, to: SliceAngles, t: f64) -> SliceAngles {
        let t = t.clamp(0.0, 1.0);
        SliceAngles {
            start: from.start + (to.start - from.start) * t,
            end: from.end + (to.end - from.end) * t,
        }
    }
}

/// Allocate slice angles proportionally, preserving input order.
pub fn pie_angles(values: &[f64]) -> Vec<SliceAngles> {
    let total: f64 = values.iter().copied().filter(|v| v.is_finite() && *v > 0.0).sum();
    let mut angle = 0.0;
    values
        .iter()
        .map(|&value| {
            let span = if total > 0.0 && value.is_finite() && value > 0.0 {
                value / total * TAU
            } else {
                0.0
            };
            let slice = SliceAngles {
                start: angle,
                end: angle + span,
            };
            angle = slice.end;
            slice
        })
        .collect()
}

/// Point on a circle of radius `r` at a clockwise-from-top angle.
fn polar(radius: f64, angle: f64) -> (f64, f64) {
    (radius * angle.sin(), -radius * angle.cos())
}

/// SVG path for an annular sector between `inner` and `outer` radii.
/// Near-full circles are clamped just short of closing so the arc flags
/// stay well-defined.
pub fn annular_sector_path(inner: f64, outer: f64, angles: SliceAngles) -> String {
    let span = angles.span().clamp(0.0, TAU - 1e-4);
    if span <= 0.0 {
        return String::new();
    }
    let start = angles.start;
    let end = angles.start + span;
    let large_arc = i32::from(span > TAU / 2.0);

    let (ox0, oy0) = polar(outer, start);
    let (ox1, oy1) = polar(outer, end);
    let (ix0, iy0) = polar(inner, end);
    let (ix1, iy1) = polar(inner, start);

    format!(
        "M{ox0:.3},{oy0:.3}A{outer:.3},{outer:.3} 0 {large_arc} 1 {ox1:.3},{oy1:.3}\
         L{ix0:.3},{iy0:.3}A{inner:.3},{inner:.3} 0 {large_arc} 0 {ix1:.3},{iy1:.3}Z"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angles_cover_the_full_circle_in_order() {
        let slices = pie_angles(&[1.0, 3.0]);
        assert_eq!(slices[0].start, 0.0);
        assert!((slices[0].span() - TAU / 4.0).abs() < 1e-9);
        assert_eq!(slices[0].end, slices[1].start);
        assert!((slices[1].end - TAU).abs() < 1e-9);
    }

    #[test]
    fn zero_and_nan_values_collapse_to_empty_slices() {
        let slices = pie_angles(&[0.0, f64::NAN, 2.0]);
        assert_eq!(slices[0].span(), 0.0);
        assert_eq!(slices[1].span(), 0.0);
        assert!((slices[2].span() - TAU).abs() < 1e-9);
    }

    #[test]
    fn all_zero_input_yields_no_visible_arc() {
        let slices = pie_angles(&[0.0, 0.0]);
        assert!(slices.iter().all(|s| s.span() == 0.0));
        assert_eq!(annular_sector_path(60.0, 95.0, slices[0]), "");
    }

    #[test]
    fn sector_path_uses_large_arc_flag_past_half() {
        let slices = pie_angles(&[3.0, 1.0]);
        let big = annular_sector_path(60.0, 95.0, slices[0]);
        let small = annular_sector_path(60.0, 95.0, slices[1]);
        assert!(big.contains(" 0 1 1 "));
        assert!(small.contains(" 0 0 1 "));
        assert!(big.starts_with('M') && big.ends_with('Z'));
    }

    #[test]
    fn lerp_moves_angles_between_states() {
        let from = SliceAngles { start: 0.0, end: 1.0 };
        let to = SliceAngles { start: 1.0, end: 3.0 };
        let mid = SliceAngles::lerp(from, to, 0.5);
        assert!((mid.start - 0.5).abs() < 1e-9);
        assert!((mid.end - 2.0).abs() < 1e-9);
        assert_eq!(SliceAngles::lerp(from, to, 1.5).end, 3.0);
    }
}
