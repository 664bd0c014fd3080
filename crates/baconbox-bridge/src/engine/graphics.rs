use crate::config::BridgeConfig;
use crate::context::{ContextError, GraphicsContextManager, GraphicsHost, HostError};
use crate::surface::DrawableSlot;

use super::GraphicsCallbacks;

/// Engine-side view of the graphics layer.
///
/// Built on the engine thread and handed to [`NativeEngine::init`](super::NativeEngine::init).
/// Like the manager it wraps, it cannot leave that thread.
pub struct EngineGraphics<H: GraphicsHost> {
    manager: GraphicsContextManager<H>,
    drawable: DrawableSlot<H::Drawable>,
    log_tag: String,
}

impl<H: GraphicsHost> EngineGraphics<H> {
    pub fn new(host: H, drawable: DrawableSlot<H::Drawable>, config: &BridgeConfig) -> Self {
        Self {
            manager: GraphicsContextManager::new(host, config),
            drawable,
            log_tag: config.log_tag.clone(),
        }
    }

    pub fn manager(&self) -> &GraphicsContextManager<H> {
        &self.manager
    }
}

impl<H: GraphicsHost> GraphicsCallbacks for EngineGraphics<H> {
    /// Replaces any existing context, even when no drawable is left to bind
    /// the new one to.
    fn create_gl_context(&mut self) -> Result<(), ContextError> {
        let Some(drawable) = self.drawable.get() else {
            self.manager.destroy_context();
            log::error!(target: self.log_tag.as_str(), "no drawable to create a context for");
            return Err(ContextError::SurfaceCreationFailed(HostError::new(
                "no drawable available",
            )));
        };

        match self.manager.create_context(&drawable) {
            Ok(_) => Ok(()),
            Err(e) => {
                log::error!(target: self.log_tag.as_str(), "{e}");
                Err(e)
            }
        }
    }

    fn flip_buffers(&mut self) -> Result<(), ContextError> {
        self.manager.present_frame().inspect_err(|e| {
            log::warn!(target: self.log_tag.as_str(), "flip_buffers(): {e}");
        })
    }
}
