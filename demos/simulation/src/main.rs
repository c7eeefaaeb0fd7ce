//! Replays scripted sensor traces through the presence-gate controller.
//!
//! Each scenario prints a per-tick table of raw reading, smoothed estimate,
//! gate state and indicator level, plus every tone the gate emits, so the
//! interplay of filter, hysteresis band and dwell timers is visible without
//! any hardware attached.

use presence_gate::{
    Config, DiagnosticsSink, DistanceSensor, FadeCurve, GateController, GateState,
    IndicatorOutput, ToneOutput,
};

/// Reference control-loop cadence; on hardware this is the inter-tick delay.
const TICK_MS: u64 = 10;

/// Sensor replaying a canned trace, holding the last reading once the
/// trace runs out. A reading equal to `Config::max_distance_cm` stands in
/// for an echo timeout.
struct ReplaySensor {
    trace: Vec<f32>,
    position: usize,
}

impl ReplaySensor {
    fn new(trace: Vec<f32>) -> Self {
        Self { trace, position: 0 }
    }
}

impl DistanceSensor for ReplaySensor {
    type Raw = f32;

    fn measure(&mut self) -> f32 {
        let cm = self.trace[self.position.min(self.trace.len() - 1)];
        self.position += 1;
        cm
    }
}

struct ConsoleIndicator {
    level: u8,
}

impl IndicatorOutput for ConsoleIndicator {
    fn set_intensity(&mut self, level: u8) {
        self.level = level;
    }
}

struct ConsoleBuzzer;

impl ToneOutput for ConsoleBuzzer {
    fn emit(&mut self, frequency_hz: u16, duration_ms: u16) {
        println!("   *** tone: {frequency_hz} Hz for {duration_ms} ms");
    }
}

struct ConsoleDiagnostics;

impl DiagnosticsSink for ConsoleDiagnostics {
    fn report(&mut self, raw_cm: f32, smoothed_cm: f32, state: GateState) {
        println!(
            "   raw {raw_cm:6.1} cm | smoothed {smoothed_cm:6.1} cm | {}",
            state.name()
        );
    }
}

/// Hold a distance for a wall-clock duration at the tick cadence.
fn hold(cm: f32, duration_ms: u64) -> impl Iterator<Item = f32> {
    std::iter::repeat(cm).take((duration_ms / TICK_MS) as usize)
}

fn run_scenario(title: &str, trace: Vec<f32>) {
    println!("=== {title} ===");

    let config = Config {
        fade_curve: FadeCurve::Perceptual,
        ..Config::default()
    };
    let ticks = trace.len() as u64;
    let mut controller = GateController::new(
        config,
        ReplaySensor::new(trace),
        ConsoleIndicator { level: 0 },
        ConsoleBuzzer,
        ConsoleDiagnostics,
    )
    .expect("valid config");

    let mut previous = controller.state();
    for i in 0..ticks {
        let state = controller.tick(i * TICK_MS);
        if state != previous {
            println!(
                "   t={:5} ms  {} -> {}  (indicator level {})",
                i * TICK_MS,
                previous.name(),
                state.name(),
                controller.indicator_level()
            );
            previous = state;
        }
    }
    println!(
        "   final: {} at {:.1} cm, indicator level {}\n",
        controller.state().name(),
        controller.smoothed_cm(),
        controller.indicator_level()
    );
}

fn main() {
    // A person walks up, lingers, and leaves.
    run_scenario(
        "approach and depart",
        hold(300.0, 200)
            .chain(hold(60.0, 2000))
            .chain(hold(300.0, 2500))
            .collect(),
    );

    // A hand sweeps past; the dwell timer rejects it.
    run_scenario(
        "transient sweep rejected",
        hold(300.0, 200)
            .chain(hold(60.0, 100))
            .chain(hold(300.0, 1000))
            .collect(),
    );

    // The object starts to leave but comes back before the release dwell
    // elapses; the gate never drops and no second enter tone sounds.
    run_scenario(
        "incomplete departure",
        hold(60.0, 1000)
            .chain(hold(300.0, 500))
            .chain(hold(60.0, 1500))
            .collect(),
    );

    // The sensor dies mid-trigger and only returns the timeout sentinel;
    // the gate fails safe to absent.
    run_scenario(
        "sensor timeout fails safe",
        hold(60.0, 1000).chain(hold(400.0, 3000)).collect(),
    );
}
