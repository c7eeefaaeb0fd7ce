use num_traits::AsPrimitive;

use crate::config::{Config, ConfigError};
use crate::filter::DistanceFilter;
use crate::gate::{GateMachine, GateState};
use crate::indicator::{self, IndicatorFade};
use crate::io::{DiagnosticsSink, DistanceSensor, IndicatorOutput, ToneOutput};
use crate::signal::SignalEvent;

/// The presence-gate controller: owns every piece of persisted state plus
/// the four hardware collaborators, and advances all of it one tick at a
/// time.
///
/// Single-threaded by construction; `tick` takes `&mut self` and runs to
/// completion, so no field is ever observed mid-update.
pub struct GateController<S, L, T, D> {
    config: Config,
    filter: DistanceFilter,
    machine: GateMachine,
    fade: IndicatorFade,
    ticks_since_report: u32,
    sensor: S,
    indicator: L,
    tone: T,
    diagnostics: D,
}

impl<S, L, T, D> GateController<S, L, T, D>
where
    S: DistanceSensor,
    L: IndicatorOutput,
    T: ToneOutput,
    D: DiagnosticsSink,
{
    pub fn new(
        config: Config,
        sensor: S,
        indicator: L,
        tone: T,
        diagnostics: D,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            filter: DistanceFilter::new(),
            machine: GateMachine::new(),
            fade: IndicatorFade::new(),
            ticks_since_report: 0,
            sensor,
            indicator,
            tone,
            diagnostics,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> GateState {
        self.machine.state()
    }

    pub fn smoothed_cm(&self) -> f32 {
        self.filter.estimate_cm()
    }

    pub fn indicator_level(&self) -> u8 {
        self.fade.level()
    }

    /// Run one control-loop pass: measure, filter, advance the gate, drive
    /// the indicator, emit at most one tone, report diagnostics when due.
    ///
    /// `now_ms` must come from a monotonically non-decreasing millisecond
    /// clock; the caller owns the inter-tick delay.
    pub fn tick(&mut self, now_ms: u64) -> GateState {
        let raw_cm: f32 = self.sensor.measure().as_();
        let clamped_cm = raw_cm.clamp(self.config.min_distance_cm, self.config.max_distance_cm);
        let smoothed_cm = self.filter.apply(clamped_cm, self.config.smoothing_alpha);

        let previous = self.machine.state();
        let current = self.machine.advance(smoothed_cm, now_ms, &self.config);

        let level = self
            .fade
            .step_toward(indicator::target_for(current), self.config.fade_step);
        self.indicator
            .set_intensity(self.config.fade_curve.apply(level));

        if let Some(event) = SignalEvent::from_transition(previous, current) {
            self.tone.emit(event.frequency_hz(), event.duration_ms());
        }

        self.ticks_since_report += 1;
        if current != previous || self.ticks_since_report >= self.config.report_interval_ticks {
            self.diagnostics.report(raw_cm, smoothed_cm, current);
            self.ticks_since_report = 0;
        }

        current
    }

    /// Return to the power-on state: estimate unseeded, gate idle, indicator
    /// dark. Collaborators are untouched.
    pub fn reset(&mut self) {
        self.filter.reset();
        self.machine.reset();
        self.fade.reset();
        self.ticks_since_report = 0;
    }
}
