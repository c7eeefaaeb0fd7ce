use crate::curves::FadeCurve;

#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    InvalidDistanceRange,
    InvalidThresholds,
    InvalidSmoothing,
    InvalidFadeStep,
    InvalidReportInterval,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidDistanceRange => {
                write!(f, "min_distance_cm must be less than max_distance_cm")
            }
            ConfigError::InvalidThresholds => {
                write!(f, "thresholds must satisfy min < trigger < release < max")
            }
            ConfigError::InvalidSmoothing => {
                write!(f, "smoothing_alpha must be in range (0.0, 1.0]")
            }
            ConfigError::InvalidFadeStep => write!(f, "fade_step must be at least 1"),
            ConfigError::InvalidReportInterval => {
                write!(f, "report_interval_ticks must be at least 1")
            }
        }
    }
}

/// Tunable constants of the gate. All fields are public; `Default` carries
/// the reference tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Shortest distance the sensor can report, in centimeters.
    pub min_distance_cm: f32,
    /// Longest distance the sensor can report; also the timeout sentinel.
    pub max_distance_cm: f32,
    /// Gate arms below this distance.
    pub trigger_distance_cm: f32,
    /// Gate releases above this distance. Must exceed `trigger_distance_cm`;
    /// the gap between the two is the hysteresis band.
    pub release_distance_cm: f32,
    /// How long the smoothed distance must stay below the trigger threshold
    /// before the gate reports presence.
    pub trigger_time_ms: u32,
    /// How long the smoothed distance must stay above the release threshold
    /// before the gate reports absence.
    pub release_time_ms: u32,
    /// EMA coefficient: output = alpha * sample + (1 - alpha) * previous.
    /// Lower alpha = more smoothing, higher = more responsive.
    /// Requires: 0.0 < alpha <= 1.0
    pub smoothing_alpha: f32,
    /// Intensity units the indicator moves per tick while fading.
    pub fade_step: u8,
    /// Response curve applied to the intensity written to the indicator.
    pub fade_curve: FadeCurve,
    /// Diagnostics are reported every this many ticks, or immediately on a
    /// state change, whichever comes first.
    pub report_interval_ticks: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_distance_cm: 2.0,
            max_distance_cm: 400.0,
            trigger_distance_cm: 100.0,
            release_distance_cm: 200.0,
            trigger_time_ms: 250,
            release_time_ms: 1000,
            smoothing_alpha: 0.25,
            fade_step: 5,
            fade_curve: FadeCurve::Linear,
            report_interval_ticks: 20,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Distance range must be valid (min < max)
        if !(self.min_distance_cm < self.max_distance_cm) {
            return Err(ConfigError::InvalidDistanceRange);
        }

        // Both thresholds must sit strictly inside the distance range, with
        // the trigger below the release so a hysteresis band exists. A
        // release threshold at or above max could never be crossed (samples
        // are clamped), leaving the gate stuck in Triggered.
        if !(self.min_distance_cm < self.trigger_distance_cm
            && self.trigger_distance_cm < self.release_distance_cm
            && self.release_distance_cm < self.max_distance_cm)
        {
            return Err(ConfigError::InvalidThresholds);
        }

        if !(self.smoothing_alpha > 0.0 && self.smoothing_alpha <= 1.0) {
            return Err(ConfigError::InvalidSmoothing);
        }

        if self.fade_step == 0 {
            return Err(ConfigError::InvalidFadeStep);
        }

        if self.report_interval_ticks == 0 {
            return Err(ConfigError::InvalidReportInterval);
        }

        Ok(())
    }
}
