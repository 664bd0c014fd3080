//! [`GraphicsHost`] on top of the system EGL library.

use khronos_egl as egl;

use crate::surface::NativeWindow;

use super::{ConfigRequest, GraphicsHost, HostError};

const NONE: egl::Int = 0x3038;
const RENDERABLE_TYPE: egl::Int = 0x3040;
const CORE_NATIVE_ENGINE: egl::Int = 0x305B;

impl From<egl::Error> for HostError {
    fn from(e: egl::Error) -> Self {
        HostError::new(e.to_string())
    }
}

/// EGL host backed by the statically linked `libEGL`.
pub struct EglHost {
    egl: egl::Instance<egl::Static>,
}

impl EglHost {
    pub fn new() -> Self {
        Self {
            egl: egl::Instance::new(egl::Static),
        }
    }
}

impl Default for EglHost {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphicsHost for EglHost {
    type Drawable = NativeWindow;
    type Display = egl::Display;
    type Config = egl::Config;
    type Context = egl::Context;
    type Surface = egl::Surface;

    fn open_display(&mut self) -> Result<egl::Display, HostError> {
        // SAFETY: EGL_DEFAULT_DISPLAY is always a valid native display id.
        let display = unsafe { self.egl.get_display(egl::DEFAULT_DISPLAY) }
            .ok_or_else(|| HostError::new("no default display"))?;

        let (major, minor) = self.egl.initialize(display)?;
        log::debug!("EGL {major}.{minor} initialized");
        Ok(display)
    }

    fn choose_config(
        &mut self,
        display: egl::Display,
        request: &ConfigRequest,
    ) -> Result<Option<egl::Config>, HostError> {
        let attribs = [RENDERABLE_TYPE, request.renderable_type.bits(), NONE];

        let mut configs = Vec::with_capacity(request.candidates);
        self.egl.choose_config(display, &attribs, &mut configs)?;
        Ok(configs.into_iter().next())
    }

    fn create_context(
        &mut self,
        display: egl::Display,
        config: egl::Config,
    ) -> Result<egl::Context, HostError> {
        Ok(self.egl.create_context(display, config, None, &[NONE])?)
    }

    fn create_window_surface(
        &mut self,
        display: egl::Display,
        config: egl::Config,
        drawable: &NativeWindow,
    ) -> Result<egl::Surface, HostError> {
        // SAFETY: the host keeps the window alive until it reports the surface
        // destroyed, and the surface is released before the window goes away.
        let surface = unsafe {
            self.egl
                .create_window_surface(display, config, drawable.as_ptr(), None)?
        };
        Ok(surface)
    }

    fn make_current(
        &mut self,
        display: egl::Display,
        surface: egl::Surface,
        context: egl::Context,
    ) -> Result<(), HostError> {
        Ok(self
            .egl
            .make_current(display, Some(surface), Some(surface), Some(context))?)
    }

    fn release_current(&mut self, display: egl::Display) -> Result<(), HostError> {
        Ok(self.egl.make_current(display, None, None, None)?)
    }

    fn wait_native(&mut self) -> Result<(), HostError> {
        Ok(self.egl.wait_native(CORE_NATIVE_ENGINE)?)
    }

    fn wait_client(&mut self) -> Result<(), HostError> {
        Ok(self.egl.wait_gl()?)
    }

    fn swap_buffers(
        &mut self,
        display: egl::Display,
        surface: egl::Surface,
    ) -> Result<(), HostError> {
        Ok(self.egl.swap_buffers(display, surface)?)
    }

    fn destroy_surface(
        &mut self,
        display: egl::Display,
        surface: egl::Surface,
    ) -> Result<(), HostError> {
        Ok(self.egl.destroy_surface(display, surface)?)
    }

    fn destroy_context(
        &mut self,
        display: egl::Display,
        context: egl::Context,
    ) -> Result<(), HostError> {
        Ok(self.egl.destroy_context(display, context)?)
    }

    fn terminate(&mut self, display: egl::Display) -> Result<(), HostError> {
        Ok(self.egl.terminate(display)?)
    }
}
