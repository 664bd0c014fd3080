use std::sync::Arc;

use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Force, Touch, TouchPhase, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{NativeKeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::host::{ActivityCallbacks, KeyListener, SurfaceCallbacks, TouchListener};
use crate::input::{touch_action, KeyAction};

/// Window configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "BaconBox".to_string(),
            initial_size: LogicalSize::new(800.0, 480.0),
        }
    }
}

/// Drives a host bridge from a winit event loop.
///
/// winit callbacks are mapped onto the activity/surface model:
/// `resumed` creates (or reuses) the window and reports a new surface,
/// `suspended` reports it destroyed. Rendering is left to the engine thread,
/// so the loop itself only waits for events.
pub struct HostRuntime;

impl HostRuntime {
    /// Runs the event loop until the window is closed.
    ///
    /// `drawable` extracts the host drawable from the window each time a
    /// surface is (re)created.
    pub fn run<B, F>(config: RuntimeConfig, bridge: B, drawable: F) -> Result<()>
    where
        B: ActivityCallbacks + SurfaceCallbacks + KeyListener + TouchListener + 'static,
        F: FnMut(&Window) -> Result<B::Drawable> + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = HostState::new(config, bridge, drawable);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        Ok(())
    }
}

struct HostState<B, F> {
    config: RuntimeConfig,
    session: HostSession<B>,
    drawable: F,

    /// Kept across suspend/resume; only its native surface comes and goes.
    window: Option<Arc<Window>>,
}

impl<B, F> HostState<B, F>
where
    B: ActivityCallbacks + SurfaceCallbacks + KeyListener + TouchListener,
    F: FnMut(&Window) -> Result<B::Drawable>,
{
    fn new(config: RuntimeConfig, bridge: B, drawable: F) -> Self {
        Self {
            config,
            session: HostSession::new(bridge),
            drawable,
            window: None,
        }
    }

    fn ensure_window(&mut self, event_loop: &ActiveEventLoop) -> Result<Arc<Window>> {
        if let Some(window) = &self.window {
            return Ok(Arc::clone(window));
        }

        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        self.window = Some(Arc::clone(&window));
        Ok(window)
    }

    fn resume(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window = self.ensure_window(event_loop)?;
        let drawable = (self.drawable)(&window).context("failed to get drawable from window")?;

        let size = window.inner_size();
        self.session.resume(drawable, size.width, size.height);
        Ok(())
    }
}

impl<B, F> ApplicationHandler for HostState<B, F>
where
    B: ActivityCallbacks + SurfaceCallbacks + KeyListener + TouchListener,
    F: FnMut(&Window) -> Result<B::Drawable>,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let Err(e) = self.resume(event_loop) {
            log::error!("failed to start surface: {e:#}");
            event_loop.exit();
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        self.session.suspend();
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.window.as_ref().map(|w| w.id()) != Some(window_id) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                self.session.close();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => self.session.resize(size.width, size.height),

            WindowEvent::KeyboardInput { event, .. } => {
                self.session.key(event.physical_key, event.state);
            }

            WindowEvent::Touch(touch) => {
                let (action, x, y, pressure) = translate_touch(&touch);
                self.session.bridge.on_touch(action, x, y, pressure);
            }

            _ => {}
        }
    }
}

/// Activity/surface state of one host window, independent of the window
/// itself.
struct HostSession<B> {
    bridge: B,
    created: bool,
    surface_live: bool,
}

impl<B> HostSession<B>
where
    B: ActivityCallbacks + SurfaceCallbacks + KeyListener + TouchListener,
{
    fn new(bridge: B) -> Self {
        Self {
            bridge,
            created: false,
            surface_live: false,
        }
    }

    /// Create (first time only), resume, then report the new surface and its
    /// size.
    fn resume(&mut self, drawable: B::Drawable, width: u32, height: u32) {
        if !std::mem::replace(&mut self.created, true) {
            self.bridge.on_create();
        }
        self.bridge.on_resume();

        self.stop_surface();
        self.bridge.surface_created(drawable);
        self.surface_live = true;
        self.bridge.surface_changed(width, height);
    }

    fn suspend(&mut self) {
        self.stop_surface();
        self.bridge.on_pause();
    }

    /// Size changes only matter while a surface exists.
    fn resize(&mut self, width: u32, height: u32) {
        if self.surface_live {
            self.bridge.surface_changed(width, height);
        }
    }

    fn close(&mut self) {
        self.stop_surface();
    }

    /// Returns whether the bridge consumed the key.
    fn key(&self, key: PhysicalKey, state: ElementState) -> bool {
        match translate_key(key, state) {
            Some((code, action)) => self.bridge.on_key(code, action),
            None => false,
        }
    }

    fn stop_surface(&mut self) {
        if std::mem::take(&mut self.surface_live) {
            self.bridge.surface_destroyed();
        }
    }
}

/// Maps a winit key event to a host key code and action.
///
/// Android key codes pass through untouched; elsewhere the winit key code
/// stands in. Keys winit cannot identify on other platforms are dropped.
fn translate_key(key: PhysicalKey, state: ElementState) -> Option<(i32, KeyAction)> {
    let code = key_code(key)?;
    let action = match state {
        ElementState::Pressed => KeyAction::Down,
        ElementState::Released => KeyAction::Up,
    };
    Some((code, action))
}

fn key_code(key: PhysicalKey) -> Option<i32> {
    match key {
        PhysicalKey::Code(code) => Some(code as u32 as i32),
        PhysicalKey::Unidentified(NativeKeyCode::Android(code)) => Some(code as i32),
        PhysicalKey::Unidentified(_) => None,
    }
}

/// Maps a winit touch to `(action, x, y, pressure)` in host units: physical
/// pixels and a pressure in `0.0..=1.0`.
fn translate_touch(touch: &Touch) -> (i32, f32, f32, f32) {
    (
        touch_action_code(touch.phase),
        touch.location.x as f32,
        touch.location.y as f32,
        pressure(touch.force),
    )
}

fn touch_action_code(phase: TouchPhase) -> i32 {
    match phase {
        TouchPhase::Started => touch_action::DOWN,
        TouchPhase::Ended => touch_action::UP,
        TouchPhase::Moved => touch_action::MOVE,
        TouchPhase::Cancelled => touch_action::CANCEL,
    }
}

/// Devices without pressure sensing report full pressure.
fn pressure(force: Option<Force>) -> f32 {
    force.map_or(1.0, |f| f.normalized() as f32)
}
