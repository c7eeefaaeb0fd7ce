//! Hysteresis gate state machine.
//!
//! Converts the smoothed distance into a discrete presence decision. Two
//! thresholds (trigger below, release above) form a hysteresis band, and the
//! intermediate `Triggering`/`Releasing` states hold a dwell timer so a
//! transient spike cannot flip the gate.

use crate::config::Config;

/// Discrete gate state, evaluated once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GateState {
    /// No object; smoothed distance at or beyond the trigger threshold.
    Idle,
    /// Distance dropped below the trigger threshold; waiting out the
    /// trigger dwell before committing.
    Triggering,
    /// Object present.
    Triggered,
    /// Distance rose above the release threshold; waiting out the release
    /// dwell before going idle.
    Releasing,
}

impl GateState {
    /// Whether the indicator should be lit in this state. `Releasing`
    /// counts as active: the light stays on until the gate fully releases.
    pub const fn is_active(self) -> bool {
        matches!(self, GateState::Triggered | GateState::Releasing)
    }

    pub const fn name(self) -> &'static str {
        match self {
            GateState::Idle => "idle",
            GateState::Triggering => "triggering",
            GateState::Triggered => "triggered",
            GateState::Releasing => "releasing",
        }
    }
}

/// State machine storage: the current state plus the timestamp at which a
/// dwell state was entered.
#[derive(Debug, Clone, Copy)]
pub struct GateMachine {
    state: GateState,
    /// Monotonic ms at which `Triggering` or `Releasing` was entered.
    /// Written only on entry from a different state, never refreshed while
    /// dwelling. Meaningless in `Idle` and `Triggered`.
    entered_at_ms: u64,
}

impl GateMachine {
    pub const fn new() -> Self {
        Self {
            state: GateState::Idle,
            entered_at_ms: 0,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Advance the machine by one tick and return the new state.
    ///
    /// `now_ms` must come from a monotonically non-decreasing clock. Leaving
    /// a dwell state early discards all dwell progress; re-entering it
    /// restarts the timer from scratch.
    pub fn advance(&mut self, smoothed_cm: f32, now_ms: u64, config: &Config) -> GateState {
        self.state = match self.state {
            GateState::Idle => {
                if smoothed_cm < config.trigger_distance_cm {
                    self.entered_at_ms = now_ms;
                    GateState::Triggering
                } else {
                    GateState::Idle
                }
            }
            GateState::Triggering => {
                if smoothed_cm >= config.trigger_distance_cm {
                    GateState::Idle
                } else if now_ms - self.entered_at_ms >= u64::from(config.trigger_time_ms) {
                    GateState::Triggered
                } else {
                    GateState::Triggering
                }
            }
            GateState::Triggered => {
                if smoothed_cm > config.release_distance_cm {
                    self.entered_at_ms = now_ms;
                    GateState::Releasing
                } else {
                    GateState::Triggered
                }
            }
            GateState::Releasing => {
                if smoothed_cm <= config.release_distance_cm {
                    GateState::Triggered
                } else if now_ms - self.entered_at_ms >= u64::from(config.release_time_ms) {
                    GateState::Idle
                } else {
                    GateState::Releasing
                }
            }
        };

        self.state
    }

    pub fn reset(&mut self) {
        self.state = GateState::Idle;
        self.entered_at_ms = 0;
    }
}

impl Default for GateMachine {
    fn default() -> Self {
        Self::new()
    }
}
