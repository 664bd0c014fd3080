//! Motion sensor bridge.
//!
//! Registers with the host sensor system and forwards accelerometer samples
//! into the engine. Like input, samples are forwarded on the host thread and
//! never buffered.

mod bridge;
mod types;

pub use bridge::MotionBridge;
pub use types::{MotionSample, SamplingRate, SensorHost, SensorKind};
