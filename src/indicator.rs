use crate::gate::GateState;

/// Intensity target for a gate state: full on while the gate is active
/// (including the not-yet-released tail), otherwise off.
pub const fn target_for(state: GateState) -> u8 {
    if state.is_active() { 255 } else { 0 }
}

/// Linear fade toward a target intensity.
///
/// The level moves by a fixed step per tick and lands exactly on the target
/// on the tick that reaches it; it never overshoots.
#[derive(Debug, Clone, Copy)]
pub struct IndicatorFade {
    level: u8,
}

impl IndicatorFade {
    pub const fn new() -> Self {
        Self { level: 0 }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Advance one tick toward `target` and return the new level.
    pub fn step_toward(&mut self, target: u8, step: u8) -> u8 {
        if self.level < target {
            self.level = self.level.saturating_add(step).min(target);
        } else if self.level > target {
            self.level = self.level.saturating_sub(step).max(target);
        }
        self.level
    }

    pub fn reset(&mut self) {
        self.level = 0;
    }
}

impl Default for IndicatorFade {
    fn default() -> Self {
        Self::new()
    }
}
