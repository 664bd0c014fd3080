//! Drawable surface lifecycle.
//!
//! The coordinator turns host surface notifications into engine bootstrap and
//! sensor registration; the drawable module carries the host's window from
//! the UI thread to the engine thread.

mod coordinator;
mod drawable;

pub use coordinator::{SurfaceLifecycleCoordinator, SurfaceLifecyclePhase};
pub use drawable::{DrawableError, DrawableSlot, NativeWindow};
