//! Band and linear scales for chart layout.

/// Ordinal scale mapping category labels onto evenly spaced bands.
#[derive(Debug, Clone)]
pub struct BandScale {
    domain: Vec<String>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
}

impl BandScale {
    pub fn new<S: Into<String>>(domain: impl IntoIterator<Item = S>, range: (f64, f64)) -> Self {
        Self {
            domain: domain.into_iter().map(Into::into).collect(),
            range,
            padding_inner: 0.0,
            padding_outer: 0.0,
        }
    }

    pub fn padding_inner(mut self, padding: f64) -> Self {
        self.padding_inner = padding.clamp(0.0, 1.0);
        self
    }

    /// Sets both inner and outer padding.
    pub fn padding(mut self, padding: f64) -> Self {
        let padding = padding.clamp(0.0, 1.0);
        self.padding_inner = padding;
        self.padding_outer = padding;
        self
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    fn step(&self) -> f64 {
        let n = self.domain.len() as f64;
        let span = self.range.1 - self.range.0;
        let divisor = (n - self.padding_inner + self.padding_outer * 2.0).max(1.0);
        span / divisor
    }

    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }

    /// Left edge of the band for a domain value, if present. Leftover space
    /// is centered (align 0.5).
    pub fn position(&self, key: &str) -> Option<f64> {
        let index = self.domain.iter().position(|entry| entry == key)?;
        let step = self.step();
        let n = self.domain.len() as f64;
        let span = self.range.1 - self.range.0;
        let start = self.range.0 + (span - step * (n - self.padding_inner)) * 0.5;
        Some(start + step * index as f64)
    }

    pub fn center(&self, key: &str) -> Option<f64> {
        self.position(key).map(|x| x + self.bandwidth() / 2.0)
    }
}

/// Continuous scale mapping a numeric domain onto pixels.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Extend the domain outward to round tick values.
    pub fn nice(mut self, count: usize) -> Self {
        let step = tick_step(self.domain.0, self.domain.1, count);
        if step > 0.0 {
            self.domain.0 = (self.domain.0 / step).floor() * step;
            self.domain.1 = (self.domain.1 / step).ceil() * step;
        }
        self
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if (d1 - d0).abs() < f64::EPSILON {
            return r0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Round tick values inside the domain, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (start, stop) = self.domain;
        let step = tick_step(start, stop, count);
        if step <= 0.0 || !step.is_finite() {
            return vec![start];
        }
        let first = (start / step).ceil();
        let last = (stop / step).floor();
        let mut ticks = Vec::new();
        let mut i = first;
        while i <= last {
            ticks.push(i * step);
            i += 1.0;
        }
        ticks
    }
}

/// d3-style tick increment: a power of ten times 1, 2 or 5.
fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let span = (stop - start).abs();
    if span == 0.0 || count == 0 {
        return 0.0;
    }
    let raw = span / count as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let factor = if residual >= 50f64.sqrt() {
        10.0
    } else if residual >= 10f64.sqrt() {
        5.0
    } else if residual >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    magnitude * factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_scale_partitions_the_range() {
        let scale = BandScale::new(["a", "b", "c"], (0.0, 300.0));
        assert!((scale.bandwidth() - 100.0).abs() < 1e-9);
        assert!((scale.position("a").unwrap() - 0.0).abs() < 1e-9);
        assert!((scale.position("c").unwrap() - 200.0).abs() < 1e-9);
        assert!(scale.position("missing").is_none());
    }

    #[test]
    fn band_scale_padding_shrinks_bands() {
        let scale = BandScale::new(["a", "b"], (0.0, 100.0)).padding_inner(0.5);
        // step = 100 / (2 - 0.5) ≈ 66.67, bandwidth = step / 2
        assert!((scale.bandwidth() - 100.0 / 1.5 / 2.0).abs() < 1e-9);
        let a = scale.position("a").unwrap();
        let b = scale.position("b").unwrap();
        assert!(b > a + scale.bandwidth());
    }

    #[test]
    fn band_centers_sit_inside_their_band() {
        let scale = BandScale::new(["a", "b"], (0.0, 100.0)).padding(0.2);
        for key in ["a", "b"] {
            let x = scale.position(key).unwrap();
            let c = scale.center(key).unwrap();
            assert!(c > x && c < x + scale.bandwidth());
        }
    }

    #[test]
    fn linear_scale_maps_and_inverts_direction() {
        // Chart y-axes run top-down: range is (height, 0).
        let scale = LinearScale::new((0.0, 100.0), (400.0, 0.0));
        assert!((scale.map(0.0) - 400.0).abs() < 1e-9);
        assert!((scale.map(100.0) - 0.0).abs() < 1e-9);
        assert!((scale.map(50.0) - 200.0).abs() < 1e-9);
    }

    #[test]
    fn ticks_are_round_and_cover_the_domain() {
        let scale = LinearScale::new((0.0, 57.5), (400.0, 0.0)).nice(8);
        let ticks = scale.ticks(8);
        assert!(ticks.len() >= 5);
        assert_eq!(ticks[0], 0.0);
        assert!(ticks.last().copied().unwrap() >= 55.0);
        // All ticks are multiples of the step.
        let step = ticks[1] - ticks[0];
        for pair in ticks.windows(2) {
            assert!((pair[1] - pair[0] - step).abs() < 1e-9);
        }
    }

    #[test]
    fn degenerate_domain_does_not_divide_by_zero() {
        let scale = LinearScale::new((10.0, 10.0), (0.0, 100.0));
        assert_eq!(scale.map(10.0), 0.0);
        assert_eq!(scale.ticks(8), vec![10.0]);
    }
}
