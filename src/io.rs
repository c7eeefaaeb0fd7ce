//! Collaborator traits at the hardware seam.
//!
//! The control core never touches pins or timers; each tick it pulls one
//! sample through [`DistanceSensor`] and pushes its outputs through the
//! other three traits. Implementations live with the platform glue.

use num_traits::AsPrimitive;

use crate::gate::GateState;

/// One blocking distance measurement per tick.
///
/// `measure` may wait for a physical echo but must bound that wait (tens of
/// milliseconds, not forever) and return the sensor's maximum-distance
/// sentinel on timeout or missing echo. The core treats the sentinel like
/// any genuine far reading, so a dead or obstructed sensor fails safe to
/// "nothing present".
pub trait DistanceSensor {
    /// Raw sample type in centimeters; integer millimeter-style sensors can
    /// report a scaled unit as long as `as_()` yields centimeters.
    type Raw: Copy + AsPrimitive<f32>;

    fn measure(&mut self) -> Self::Raw;
}

/// Intensity sink for the indicator, typically a PWM channel.
///
/// Called once per tick with the current level, whether or not it changed;
/// the write must be idempotent and non-blocking.
pub trait IndicatorOutput {
    fn set_intensity(&mut self, level: u8);
}

/// Tone sink, typically a buzzer.
///
/// Fire-and-forget: the call must not block for the tone's duration, and a
/// new request while a tone is sounding may interrupt or drop it. The core
/// issues at most one request per tick and never queues.
pub trait ToneOutput {
    fn emit(&mut self, frequency_hz: u16, duration_ms: u16);
}

/// Textual diagnostics sink.
///
/// Invoked every `report_interval_ticks` ticks, or immediately when the
/// gate changes state. `raw_cm` is the unclamped sample as measured;
/// [`GateState::name`] gives a printable state label.
pub trait DiagnosticsSink {
    fn report(&mut self, raw_cm: f32, smoothed_cm: f32, state: GateState);
}

/// Sink for builds with nothing attached to a port.
pub struct NullSink;

impl IndicatorOutput for NullSink {
    fn set_intensity(&mut self, _level: u8) {}
}

impl ToneOutput for NullSink {
    fn emit(&mut self, _frequency_hz: u16, _duration_ms: u16) {}
}

impl DiagnosticsSink for NullSink {
    fn report(&mut self, _raw_cm: f32, _smoothed_cm: f32, _state: GateState) {}
}
