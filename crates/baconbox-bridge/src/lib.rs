//! BaconBox host bridge.
//!
//! This crate owns the glue between a host window/input system and a native
//! engine loop: the rendering context lifecycle, the single engine thread and
//! the forwarding of input and motion events into the engine.

pub mod activity;
pub mod config;
pub mod context;
pub mod engine;
pub mod host;
pub mod input;
pub mod motion;
pub mod platform;
pub mod surface;

pub mod logging;

#[cfg(test)]
mod testing;

pub use config::BridgeConfig;
pub use host::Bridge;
