//! Rendering context management.
//!
//! This module is responsible for:
//! - negotiating a configuration with the host graphics system
//! - creating the rendering context and the window surface for a drawable
//! - binding them current on the engine thread and presenting frames
//!
//! The host graphics system itself sits behind [`GraphicsHost`]; the `egl`
//! feature provides an implementation on top of the system EGL library.

mod error;
mod handle;
mod host;
mod manager;

#[cfg(feature = "egl")]
pub mod egl;

pub use error::{ContextError, HostError};
pub use handle::ContextHandle;
pub use host::{ConfigRequest, GraphicsHost, RenderableType};
pub use manager::GraphicsContextManager;
