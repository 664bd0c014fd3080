//! Native engine contract and the engine thread.
//!
//! The engine is supplied from outside the crate. The bridge only guarantees
//! that its entry point runs once on a dedicated thread and that host events
//! reach its intake methods.

mod graphics;
mod thread;

pub use graphics::EngineGraphics;
pub use thread::{EngineError, EngineThreadController, EngineThreadState};

use crate::context::ContextError;

/// Context requests available to the engine from its own thread.
pub trait GraphicsCallbacks {
    /// Creates the rendering context for the current drawable and makes it
    /// current on the calling thread.
    fn create_gl_context(&mut self) -> Result<(), ContextError>;

    /// Presents the frame drawn since the last flip.
    fn flip_buffers(&mut self) -> Result<(), ContextError>;
}

/// Engine contract implemented by the native side.
///
/// `init` runs on the engine thread and normally never returns. The intake
/// methods are called synchronously from the host's event-dispatch thread
/// while `init` is running, so implementations must synchronize internally.
pub trait NativeEngine: Send + Sync + 'static {
    /// Engine entry point: initialization followed by the main loop.
    fn init(&self, gfx: &mut dyn GraphicsCallbacks);

    fn on_touch(&self, action: i32, x: f32, y: f32, pressure: f32);

    fn on_accel(&self, x: f32, y: f32, z: f32);

    fn on_key_down(&self, key_code: i32);

    fn on_key_up(&self, key_code: i32);
}
