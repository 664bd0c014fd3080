use std::marker::PhantomData;

use crate::config::BridgeConfig;

use super::{ConfigRequest, ContextError, ContextHandle, GraphicsHost, HostError, RenderableType};

/// Owns the rendering context bound to a drawable.
///
/// This type is the low-level context layer:
/// - opens the display and negotiates a configuration
/// - creates the context and the window surface, then binds them current
/// - waits for pending rendering and swaps buffers
///
/// The manager is `!Send`. It is created on the engine thread and stays there,
/// which keeps every call on the thread the context is current on.
pub struct GraphicsContextManager<H: GraphicsHost> {
    host: H,
    renderable_type: RenderableType,
    log_tag: String,

    /// Live context; `None` until a create succeeds and after a destroy.
    current: Option<ContextHandle<H>>,

    _thread_bound: PhantomData<*const ()>,
}

impl<H: GraphicsHost> GraphicsContextManager<H> {
    pub fn new(host: H, config: &BridgeConfig) -> Self {
        Self {
            host,
            renderable_type: config.renderable_type,
            log_tag: config.log_tag.clone(),
            current: None,
            _thread_bound: PhantomData,
        }
    }

    /// Returns the live context, if any.
    pub fn handle(&self) -> Option<&ContextHandle<H>> {
        self.current.as_ref()
    }

    pub fn is_current(&self) -> bool {
        self.current.is_some()
    }

    /// Returns the host graphics system.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Creates a rendering context for `drawable` and makes it current on the
    /// calling thread.
    ///
    /// An existing context is destroyed first. On failure every resource
    /// acquired by this call is released and no handle is stored.
    pub fn create_context(
        &mut self,
        drawable: &H::Drawable,
    ) -> Result<&ContextHandle<H>, ContextError> {
        self.destroy_context();

        let display = self
            .host
            .open_display()
            .map_err(ContextError::DisplayUnavailable)?;

        match self.bind(display, drawable) {
            Ok(handle) => {
                log::debug!(target: self.log_tag.as_str(), "rendering context created");
                Ok(&*self.current.insert(handle))
            }
            Err(err) => {
                if let Err(e) = self.host.terminate(display) {
                    log::warn!(target: self.log_tag.as_str(), "failed to terminate display: {e}");
                }
                Err(err)
            }
        }
    }

    fn bind(
        &mut self,
        display: H::Display,
        drawable: &H::Drawable,
    ) -> Result<ContextHandle<H>, ContextError> {
        let request = ConfigRequest::new(self.renderable_type);

        let config = match self.host.choose_config(display, &request) {
            Ok(Some(config)) => config,
            Ok(None) => return Err(ContextError::NoConfigAvailable),
            Err(e) => {
                log::debug!(target: self.log_tag.as_str(), "config selection failed: {e}");
                return Err(ContextError::NoConfigAvailable);
            }
        };

        let context = self
            .host
            .create_context(display, config)
            .map_err(ContextError::ContextCreationFailed)?;

        let surface = match self.host.create_window_surface(display, config, drawable) {
            Ok(surface) => surface,
            Err(e) => {
                self.release_context(display, context);
                return Err(ContextError::SurfaceCreationFailed(e));
            }
        };

        if let Err(e) = self.host.make_current(display, surface, context) {
            self.release_surface(display, surface);
            self.release_context(display, context);
            return Err(ContextError::MakeCurrentFailed(e));
        }

        Ok(ContextHandle {
            display,
            surface,
            context,
        })
    }

    /// Waits for pending native and client rendering, then swaps buffers.
    pub fn present_frame(&mut self) -> Result<(), ContextError> {
        let Some(handle) = self.current else {
            return Err(ContextError::PresentFailed(HostError::new(
                "no current context",
            )));
        };

        self.host.wait_native().map_err(ContextError::PresentFailed)?;
        self.host.wait_client().map_err(ContextError::PresentFailed)?;
        self.host
            .swap_buffers(handle.display, handle.surface)
            .map_err(ContextError::PresentFailed)
    }

    /// Releases surface, context and display. No-op without a context.
    pub fn destroy_context(&mut self) {
        let Some(handle) = self.current.take() else {
            return;
        };

        if let Err(e) = self.host.release_current(handle.display) {
            log::warn!(target: self.log_tag.as_str(), "failed to release current context: {e}");
        }

        self.release_surface(handle.display, handle.surface);
        self.release_context(handle.display, handle.context);

        if let Err(e) = self.host.terminate(handle.display) {
            log::warn!(target: self.log_tag.as_str(), "failed to terminate display: {e}");
        }

        log::debug!(target: self.log_tag.as_str(), "rendering context destroyed");
    }

    fn release_surface(&mut self, display: H::Display, surface: H::Surface) {
        if let Err(e) = self.host.destroy_surface(display, surface) {
            log::warn!(target: self.log_tag.as_str(), "failed to destroy surface: {e}");
        }
    }

    fn release_context(&mut self, display: H::Display, context: H::Context) {
        if let Err(e) = self.host.destroy_context(display, context) {
            log::warn!(target: self.log_tag.as_str(), "failed to destroy context: {e}");
        }
    }
}

impl<H: GraphicsHost> Drop for GraphicsContextManager<H> {
    fn drop(&mut self) {
        self.destroy_context();
    }
}
