//! Host adapters.
//!
//! Each adapter owns a toolkit's event loop and translates its callbacks into
//! the capability traits of [`crate::host`].

pub mod winit;

pub use self::winit::{HostRuntime, RuntimeConfig};
