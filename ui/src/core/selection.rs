//! Brush selection and pointer hit-testing for the grouped bar chart.
//!
//! The chart keeps one `BarMark` per rendered rect so pointer and drag
//! events resolve against plot-space geometry instead of the DOM.

use super::survey::Gender;

/// One rendered bar: the datum it was built from plus its plot-space rect.
#[derive(Debug, Clone, PartialEq)]
pub struct BarMark {
    pub condition: String,
    pub gender: Gender,
    /// Percentage value; may be NaN when the gender had no respondents.
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarMark {
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Point-in-rect test in plot coordinates.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }
}

/// A horizontal pixel interval, normalized so `x0 <= x1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRange {
    pub x0: f64,
    pub x1: f64,
}

impl PixelRange {
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { x0: a, x1: b }
        } else {
            Self { x0: b, x1: a }
        }
    }

    pub fn contains(&self, x: f64) -> bool {
        x >= self.x0 && x <= self.x1
    }
}

pub const UNSELECTED_OPACITY: f64 = 0.3;

/// View-state projection of one brush event. Rebuilt from scratch every
/// time the interval changes; nothing here mutates the data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    brush: Option<PixelRange>,
    selected: Vec<usize>,
}

impl SelectionState {
    /// A bar is selected iff its rendered center x falls inside the interval.
    pub fn from_brush(marks: &[BarMark], brush: Option<PixelRange>) -> Self {
        let selected = match brush {
            Some(range) => marks
                .iter()
                .enumerate()
                .filter(|(_, mark)| range.contains(mark.center_x()))
                .map(|(index, _)| index)
                .collect(),
            None => Vec::new(),
        };
        Self { brush, selected }
    }

    pub fn is_active(&self) -> bool {
        self.brush.is_some()
    }

    pub fn selected_indices(&self) -> &[usize] {
        &self.selected
    }

    /// Opacity for the mark at `index`: full when no brush is active or the
    /// mark is selected, dimmed otherwise.
    pub fn opacity(&self, index: usize) -> f64 {
        if !self.is_active() || self.selected.contains(&index) {
            1.0
        } else {
            UNSELECTED_OPACITY
        }
    }

    /// Lines for the textual summary. `None` when the brush is cleared (the
    /// summary disappears entirely), an empty list when the brush selects
    /// nothing.
    pub fn summary<'a>(&self, marks: &'a [BarMark]) -> Option<Vec<&'a BarMark>> {
        self.brush?;
        Some(self.selected.iter().map(|&index| &marks[index]).collect())
    }
}

/// Topmost mark under the pointer, scanning in reverse paint order.
pub fn hit_test(marks: &[BarMark], px: f64, py: f64) -> Option<(usize, &BarMark)> {
    marks
        .iter()
        .enumerate()
        .rev()
        .find(|(_, mark)| mark.contains(px, py))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(condition: &str, gender: Gender, x: f64) -> BarMark {
        BarMark {
            condition: condition.into(),
            gender,
            value: 42.0,
            x,
            y: 100.0,
            width: 20.0,
            height: 300.0,
        }
    }

    fn marks() -> Vec<BarMark> {
        vec![
            mark("Depression", Gender::Female, 10.0),
            mark("Depression", Gender::Male, 40.0),
            mark("Anxiety", Gender::Female, 210.0),
            mark("Anxiety", Gender::Male, 240.0),
        ]
    }

    #[test]
    fn full_width_brush_selects_every_bar() {
        let marks = marks();
        let state = SelectionState::from_brush(&marks, Some(PixelRange::new(0.0, 400.0)));
        assert_eq!(state.selected_indices().len(), marks.len());
        assert!((0..marks.len()).all(|i| state.opacity(i) == 1.0));
    }

    #[test]
    fn empty_coverage_selects_none_but_stays_active() {
        let marks = marks();
        let state = SelectionState::from_brush(&marks, Some(PixelRange::new(100.0, 150.0)));
        assert!(state.is_active());
        assert!(state.selected_indices().is_empty());
        assert!((0..marks.len()).all(|i| state.opacity(i) == UNSELECTED_OPACITY));
        assert_eq!(state.summary(&marks), Some(Vec::new()));
    }

    #[test]
    fn cleared_brush_restores_opacity_and_drops_the_summary() {
        let marks = marks();
        let state = SelectionState::from_brush(&marks, None);
        assert!(!state.is_active());
        assert!((0..marks.len()).all(|i| state.opacity(i) == 1.0));
        assert!(state.summary(&marks).is_none());
    }

    #[test]
    fn selection_is_by_bar_center() {
        let marks = marks();
        // Covers the first bar's center (20.0) but stops short of the second's (50.0).
        let state = SelectionState::from_brush(&marks, Some(PixelRange::new(0.0, 45.0)));
        assert_eq!(state.selected_indices(), &[0]);
        assert_eq!(state.opacity(0), 1.0);
        assert_eq!(state.opacity(1), UNSELECTED_OPACITY);
    }

    #[test]
    fn ranges_normalize_reversed_drags() {
        let range = PixelRange::new(300.0, 100.0);
        assert_eq!(range.x0, 100.0);
        assert!(range.contains(200.0));
    }

    #[test]
    fn hit_test_resolves_the_pointer_to_a_mark() {
        let marks = marks();
        let (index, hit) = hit_test(&marks, 15.0, 250.0).expect("inside first bar");
        assert_eq!(index, 0);
        assert_eq!(hit.condition, "Depression");
        assert_eq!(hit.gender, Gender::Female);
        assert!(hit_test(&marks, 100.0, 250.0).is_none());
        assert!(hit_test(&marks, 15.0, 50.0).is_none(), "above the bar");
    }
}
