/// Exponential Moving Average distance filter.
///
/// Smooths the raw centimeter samples before they reach the gate state
/// machine. The estimate is seeded from the first sample rather than from
/// zero, so startup does not look like an object suddenly appearing.
#[derive(Debug, Clone, Copy)]
pub struct DistanceFilter {
    estimate_cm: f32,
    seeded: bool,
}

impl DistanceFilter {
    pub const fn new() -> Self {
        Self {
            estimate_cm: 0.0,
            seeded: false,
        }
    }

    /// Fold one clamped sample into the estimate:
    /// estimate = alpha * sample + (1 - alpha) * estimate.
    ///
    /// The first call seeds the estimate to the sample value. The estimate
    /// is deliberately not re-clamped afterwards; it may settle a hair
    /// outside the sample range and callers must tolerate that.
    pub fn apply(&mut self, sample_cm: f32, alpha: f32) -> f32 {
        debug_assert!(
            alpha > 0.0 && alpha <= 1.0,
            "EMA alpha must be in range (0.0, 1.0], got {}",
            alpha
        );

        if !self.seeded {
            self.estimate_cm = sample_cm;
            self.seeded = true;
            return sample_cm;
        }

        self.estimate_cm = alpha * sample_cm + (1.0 - alpha) * self.estimate_cm;
        self.estimate_cm
    }

    /// Current estimate, or 0.0 before the first sample.
    pub fn estimate_cm(&self) -> f32 {
        self.estimate_cm
    }

    /// Forget the estimate; the next sample seeds again.
    pub fn reset(&mut self) {
        self.estimate_cm = 0.0;
        self.seeded = false;
    }
}

impl Default for DistanceFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_seeds_estimate() {
        let mut filter = DistanceFilter::new();
        assert_eq!(filter.apply(123.0, 0.25), 123.0);
    }

    #[test]
    fn applies_smoothing() {
        let mut filter = DistanceFilter::new();
        filter.apply(400.0, 0.25);

        // Step from 400 to 0: estimate = 0.25 * 0 + 0.75 * 400 = 300
        let out = filter.apply(0.0, 0.25);
        assert!((out - 300.0).abs() < 1e-4);
    }

    #[test]
    fn converges_to_constant_input() {
        let mut filter = DistanceFilter::new();
        filter.apply(400.0, 0.25);

        let mut out = 0.0;
        for _ in 0..100 {
            out = filter.apply(50.0, 0.25);
        }
        assert!((out - 50.0).abs() < 0.01, "expected ~50, got {}", out);
    }

    #[test]
    fn lower_alpha_responds_slower() {
        let mut slow = DistanceFilter::new();
        let mut fast = DistanceFilter::new();
        slow.apply(400.0, 0.1);
        fast.apply(400.0, 0.5);

        // Both step toward 50; the higher alpha moves further per sample.
        assert!(fast.apply(50.0, 0.5) < slow.apply(50.0, 0.1));
    }

    #[test]
    fn reset_reseeds() {
        let mut filter = DistanceFilter::new();
        filter.apply(400.0, 0.25);
        filter.apply(300.0, 0.25);

        filter.reset();

        assert_eq!(filter.apply(50.0, 0.25), 50.0);
    }
}
