#![no_std]

mod config;
mod controller;
mod filter;
mod indicator;
pub mod curves;
pub mod gate;
pub mod io;
pub mod signal;

pub use config::{Config, ConfigError};
pub use controller::GateController;
pub use curves::FadeCurve;
pub use filter::DistanceFilter;
pub use gate::{GateMachine, GateState};
pub use indicator::IndicatorFade;
pub use io::{DiagnosticsSink, DistanceSensor, IndicatorOutput, NullSink, ToneOutput};
pub use signal::SignalEvent;
