//! Edge-triggered tone signalling.
//!
//! The gate announces itself with two tones: a high chirp when an object is
//! confirmed present and a low chirp when it is confirmed gone. Tones fire
//! only on the tick where the transition happens, at most one per tick, and
//! two corner transitions are deliberately silent:
//!
//! - `Releasing` back to `Triggered` (the object never actually left, so a
//!   fresh enter tone would be noise), and
//! - `Triggering` back to `Idle` (the gate never committed, so there is
//!   nothing to announce leaving).

use crate::gate::GateState;

/// A single tone request, handed to the tone collaborator fire-and-forget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SignalEvent {
    /// Object confirmed present.
    Enter,
    /// Object confirmed gone.
    Exit,
}

impl SignalEvent {
    pub const fn frequency_hz(self) -> u16 {
        match self {
            SignalEvent::Enter => 1047, // C6
            SignalEvent::Exit => 523,   // C5
        }
    }

    pub const fn duration_ms(self) -> u16 {
        120
    }

    /// Decide the tone for a state transition, if any.
    ///
    /// Returns `None` when the state did not change or the transition is one
    /// of the silent ones.
    pub fn from_transition(previous: GateState, current: GateState) -> Option<SignalEvent> {
        if previous == current {
            return None;
        }

        match (previous, current) {
            // Re-trigger out of an incomplete release: no enter tone.
            (GateState::Releasing, GateState::Triggered) => None,
            (_, GateState::Triggered) => Some(SignalEvent::Enter),
            (GateState::Triggered | GateState::Releasing, GateState::Idle) => {
                Some(SignalEvent::Exit)
            }
            _ => None,
        }
    }
}
