//! Significance predicate.
//!
//! A comparison is significant when its p-value falls strictly below a fixed
//! threshold. The threshold is injected from configuration rather than being a
//! global constant.

/// Conventional cutoff used when no configuration overrides it.
pub const DEFAULT_SIGNIFICANCE_THRESHOLD: f64 = 0.05;

/// Fixed-threshold significance check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Significance {
    threshold: f64,
}

impl Default for Significance {
    fn default() -> Self {
        Self::new(DEFAULT_SIGNIFICANCE_THRESHOLD)
    }
}

impl Significance {
    /// Creates a predicate with the given threshold.
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// The configured cutoff.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// `true` when `p_value < threshold`. NaN is never significant.
    pub fn is_significant(&self, p_value: f64) -> bool {
        p_value < self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold_is_five_percent() {
        assert_eq!(Significance::default().threshold(), 0.05);
    }

    #[test]
    fn test_low_p_value_is_significant() {
        assert!(Significance::default().is_significant(0.01));
    }

    #[test]
    fn test_high_p_value_is_not_significant() {
        assert!(!Significance::default().is_significant(0.8));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert!(!Significance::new(0.05).is_significant(0.05));
    }

    #[test]
    fn test_nan_is_not_significant() {
        assert!(!Significance::default().is_significant(f64::NAN));
    }

    #[test]
    fn test_custom_threshold() {
        let s = Significance::new(0.01);
        assert!(!s.is_significant(0.02));
        assert!(s.is_significant(0.004));
    }
}
