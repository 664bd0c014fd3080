use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::BridgeConfig;
use crate::context::GraphicsHost;
use crate::engine::{
    EngineError, EngineGraphics, EngineThreadController, EngineThreadState, NativeEngine,
};
use crate::motion::{MotionBridge, SensorHost, SensorKind};

use super::DrawableSlot;

/// Host-reported drawable lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceLifecyclePhase<D> {
    Created(D),
    Changed { width: u32, height: u32 },
    Destroyed,
}

/// Drives engine bootstrap and sensor registration from surface notifications.
///
/// - `Created` publishes the drawable and enables the accelerometer.
/// - `Changed` starts the engine thread (once) and records the size.
/// - `Destroyed` withdraws the drawable. The engine thread, its context and the
///   sensor registration are left in place.
///
/// The rendering context is not created here: the engine requests it from its
/// own thread through [`GraphicsCallbacks`](crate::engine::GraphicsCallbacks).
pub struct SurfaceLifecycleCoordinator<H: GraphicsHost, S: SensorHost> {
    config: BridgeConfig,
    engine: Arc<dyn NativeEngine>,
    controller: EngineThreadController,

    /// Moved onto the engine thread when it starts.
    graphics: Arc<Mutex<Option<H>>>,

    drawable: DrawableSlot<H::Drawable>,
    motion: Arc<MotionBridge<S>>,
    size: Mutex<Option<(u32, u32)>>,
}

impl<H: GraphicsHost, S: SensorHost> SurfaceLifecycleCoordinator<H, S> {
    pub fn new(
        config: BridgeConfig,
        engine: Arc<dyn NativeEngine>,
        graphics: H,
        motion: Arc<MotionBridge<S>>,
    ) -> Self {
        let controller = EngineThreadController::new(config.thread_name.clone());
        Self {
            config,
            engine,
            controller,
            graphics: Arc::new(Mutex::new(Some(graphics))),
            drawable: DrawableSlot::default(),
            motion,
            size: Mutex::new(None),
        }
    }

    pub fn handle(&self, phase: SurfaceLifecyclePhase<H::Drawable>) -> Result<(), EngineError> {
        match phase {
            SurfaceLifecyclePhase::Created(drawable) => self.surface_created(drawable),
            SurfaceLifecyclePhase::Changed { width, height } => {
                self.surface_changed(width, height)?;
            }
            SurfaceLifecyclePhase::Destroyed => self.surface_destroyed(),
        }
        Ok(())
    }

    pub fn surface_created(&self, drawable: H::Drawable) {
        self.drawable.set(drawable);
        self.motion.set_enabled(SensorKind::Accelerometer, true);
        log::debug!(target: self.config.tag(), "surface created");
    }

    /// Records the new size and makes sure the engine thread runs.
    ///
    /// Returns whether this call launched the engine thread.
    pub fn surface_changed(&self, width: u32, height: u32) -> Result<bool, EngineError> {
        *self.size.lock() = Some((width, height));
        log::debug!(target: self.config.tag(), "surface changed to {width}x{height}");

        let launched = self.controller.ensure_started(self.bootstrap())?;
        if launched {
            log::info!(
                target: self.config.tag(),
                "engine thread `{}` launched",
                self.controller.thread_name()
            );
        }
        Ok(launched)
    }

    // TODO: decide on a teardown policy (release the context, stop the engine
    // loop) once the engine exposes a way to leave its main loop.
    pub fn surface_destroyed(&self) {
        self.drawable.clear();
        log::debug!(
            target: self.config.tag(),
            "surface destroyed; engine thread and context kept"
        );
    }

    pub fn engine_state(&self) -> EngineThreadState {
        self.controller.state()
    }

    pub fn controller(&self) -> &EngineThreadController {
        &self.controller
    }

    /// Size reported by the last `Changed` notification.
    pub fn surface_size(&self) -> Option<(u32, u32)> {
        *self.size.lock()
    }

    pub fn has_drawable(&self) -> bool {
        self.drawable.is_set()
    }

    /// Engine thread body: builds the graphics layer on the engine thread and
    /// runs the engine entry point.
    fn bootstrap(&self) -> Box<dyn FnOnce() + Send> {
        let engine = Arc::clone(&self.engine);
        let graphics = Arc::clone(&self.graphics);
        let drawable = self.drawable.clone();
        let config = self.config.clone();

        Box::new(move || {
            let Some(host) = graphics.lock().take() else {
                log::error!(target: config.tag(), "graphics host already taken");
                return;
            };

            log::info!(
                target: config.tag(),
                "running {} entry point",
                config.library_name
            );

            let mut gfx = EngineGraphics::new(host, drawable, &config);
            engine.init(&mut gfx);

            log::warn!(target: config.tag(), "engine entry point returned");
        })
    }
}
