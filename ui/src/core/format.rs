//! Formatting helpers for presenting chart values.

pub fn format_percent(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.1}%")
    } else {
        "–".to_string()
    }
}

pub fn format_axis_percent(value: f64) -> String {
    format!("{value:.0}%")
}

pub fn format_count(value: u32) -> String {
    format!("{value} students")
}

pub fn format_cgpa(value: f64) -> String {
    format!("{value:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_formats_one_decimal() {
        assert_eq!(format_percent(44.594), "44.6%");
        assert_eq!(format_percent(0.0), "0.0%");
    }

    #[test]
    fn non_finite_percent_renders_a_dash() {
        assert_eq!(format_percent(f64::NAN), "–");
        assert_eq!(format_percent(f64::INFINITY), "–");
    }

    #[test]
    fn counts_and_cgpa_read_like_the_tooltips() {
        assert_eq!(format_count(12), "12 students");
        assert_eq!(format_cgpa(3.75), "3.8");
    }
}
