use {
    crate::utils::min_max,
    serde::{Deserialize, Serialize},
    std::ops::Index,
};

/// Number of recent price samples in a trend sketch.
pub const SPARKLINE_LEN: usize = 7;

/// Fixed-length trend sketch. The array type keeps the length at exactly
/// `SPARKLINE_LEN` through every mutation and every decode.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(transparent)]
pub struct Sparkline([f64; SPARKLINE_LEN]);

impl Sparkline {
    pub const fn new(samples: [f64; SPARKLINE_LEN]) -> Self {
        Self(samples)
    }

    pub fn samples(&self) -> &[f64; SPARKLINE_LEN] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// New sketch with `f` applied to every sample, order preserved.
    pub fn map(&self, f: impl FnMut(f64) -> f64) -> Self {
        Self(self.0.map(f))
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }

    pub fn range(&self) -> (f64, f64) {
        // Never empty, so min_max always has a value.
        min_max(&self.0).unwrap_or((0.0, 0.0))
    }

    /// Last sample minus first sample.
    pub fn net_change(&self) -> f64 {
        self.0[SPARKLINE_LEN - 1] - self.0[0]
    }
}

impl Index<usize> for Sparkline {
    type Output = f64;

    fn index(&self, idx: usize) -> &f64 {
        &self.0[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_keeps_length() {
        let s = Sparkline::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        let doubled = s.map(|v| v * 2.0);
        assert_eq!(doubled.len(), SPARKLINE_LEN);
        assert_eq!(doubled[6], 14.0);
        assert_eq!(s.net_change(), 6.0);
        assert_eq!(s.range(), (1.0, 7.0));
    }

    #[test]
    fn wrong_length_is_rejected_on_decode() {
        let short: Result<Sparkline, _> = serde_json::from_str("[1, 2, 3]");
        assert!(short.is_err());
        let exact: Sparkline = serde_json::from_str("[1, 2, 3, 4, 5, 6, 7]").unwrap();
        assert_eq!(exact[0], 1.0);
    }
}
