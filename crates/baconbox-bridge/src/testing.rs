//! Recording fakes for the host graphics system, the host sensor system and
//! the native engine.

use std::sync::Arc;
use std::thread;

use parking_lot::Mutex;

use crate::context::{ConfigRequest, GraphicsHost, HostError};
use crate::engine::{GraphicsCallbacks, NativeEngine};
use crate::motion::{SamplingRate, SensorHost, SensorKind};

// ── graphics ──────────────────────────────────────────────────────────────

/// Step at which [`FakeGraphics`] reports a failure.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Step {
    Display,
    Config,
    Context,
    Surface,
    MakeCurrent,
    WaitNative,
    WaitClient,
    Swap,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GfxCall {
    OpenDisplay,
    ChooseConfig(ConfigRequest),
    CreateContext,
    CreateSurface(u32),
    MakeCurrent,
    ReleaseCurrent,
    WaitNative,
    WaitClient,
    Swap,
    DestroySurface,
    DestroyContext,
    Terminate,
}

/// Host graphics system whose handles are plain integers.
///
/// Clones share the call log, so a test can keep one clone while the other is
/// moved onto the engine thread.
#[derive(Clone, Default)]
pub struct FakeGraphics {
    calls: Arc<Mutex<Vec<GfxCall>>>,
    fail: Option<Step>,
    no_configs: bool,
}

impl FakeGraphics {
    pub const DISPLAY: u32 = 1;
    pub const CONFIG: u32 = 7;
    pub const CONTEXT: u32 = 11;

    pub fn failing_at(step: Step) -> Self {
        Self {
            fail: Some(step),
            ..Self::default()
        }
    }

    pub fn without_configs() -> Self {
        Self {
            no_configs: true,
            ..Self::default()
        }
    }

    pub fn surface_for(drawable: u32) -> u32 {
        100 + drawable
    }

    pub fn calls(&self) -> Vec<GfxCall> {
        self.calls.lock().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    fn record(&self, call: GfxCall) {
        self.calls.lock().push(call);
    }

    fn step(&self, step: Step, call: GfxCall) -> Result<(), HostError> {
        self.record(call);
        if self.fail == Some(step) {
            return Err(HostError::new(format!("{step:?} failed")));
        }
        Ok(())
    }
}

impl GraphicsHost for FakeGraphics {
    type Drawable = u32;
    type Display = u32;
    type Config = u32;
    type Context = u32;
    type Surface = u32;

    fn open_display(&mut self) -> Result<u32, HostError> {
        self.step(Step::Display, GfxCall::OpenDisplay)?;
        Ok(Self::DISPLAY)
    }

    fn choose_config(
        &mut self,
        _display: u32,
        request: &ConfigRequest,
    ) -> Result<Option<u32>, HostError> {
        self.step(Step::Config, GfxCall::ChooseConfig(*request))?;
        Ok((!self.no_configs).then_some(Self::CONFIG))
    }

    fn create_context(&mut self, _display: u32, _config: u32) -> Result<u32, HostError> {
        self.step(Step::Context, GfxCall::CreateContext)?;
        Ok(Self::CONTEXT)
    }

    fn create_window_surface(
        &mut self,
        _display: u32,
        _config: u32,
        drawable: &u32,
    ) -> Result<u32, HostError> {
        self.step(Step::Surface, GfxCall::CreateSurface(*drawable))?;
        Ok(Self::surface_for(*drawable))
    }

    fn make_current(&mut self, _display: u32, _surface: u32, _context: u32) -> Result<(), HostError> {
        self.step(Step::MakeCurrent, GfxCall::MakeCurrent)
    }

    fn release_current(&mut self, _display: u32) -> Result<(), HostError> {
        self.record(GfxCall::ReleaseCurrent);
        Ok(())
    }

    fn wait_native(&mut self) -> Result<(), HostError> {
        self.step(Step::WaitNative, GfxCall::WaitNative)
    }

    fn wait_client(&mut self) -> Result<(), HostError> {
        self.step(Step::WaitClient, GfxCall::WaitClient)
    }

    fn swap_buffers(&mut self, _display: u32, _surface: u32) -> Result<(), HostError> {
        self.step(Step::Swap, GfxCall::Swap)
    }

    fn destroy_surface(&mut self, _display: u32, _surface: u32) -> Result<(), HostError> {
        self.record(GfxCall::DestroySurface);
        Ok(())
    }

    fn destroy_context(&mut self, _display: u32, _context: u32) -> Result<(), HostError> {
        self.record(GfxCall::DestroyContext);
        Ok(())
    }

    fn terminate(&mut self, _display: u32) -> Result<(), HostError> {
        self.record(GfxCall::Terminate);
        Ok(())
    }
}

// ── sensors ───────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SensorCall {
    Register(SensorKind, SamplingRate),
    Unregister(SensorKind),
}

#[derive(Default)]
pub struct FakeSensors {
    calls: Mutex<Vec<SensorCall>>,
    reject: bool,
}

impl FakeSensors {
    /// A host without any sensor.
    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<SensorCall> {
        self.calls.lock().clone()
    }
}

impl SensorHost for FakeSensors {
    fn register(&self, kind: SensorKind, rate: SamplingRate) -> bool {
        self.calls.lock().push(SensorCall::Register(kind, rate));
        !self.reject
    }

    fn unregister(&self, kind: SensorKind) {
        self.calls.lock().push(SensorCall::Unregister(kind));
    }
}

// ── engine ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    /// Entry point ran; carries the name of the thread it ran on.
    Init(Option<String>),
    Touch(i32, f32, f32, f32),
    Accel(f32, f32, f32),
    KeyDown(i32),
    KeyUp(i32),
}

type InitHook = Box<dyn Fn(&mut dyn GraphicsCallbacks) + Send + Sync>;

/// Engine that records every call. `init` returns right away unless a hook
/// is installed.
#[derive(Default)]
pub struct RecordingEngine {
    calls: Mutex<Vec<EngineCall>>,
    on_init: Option<InitHook>,
}

impl RecordingEngine {
    pub fn with_init(hook: impl Fn(&mut dyn GraphicsCallbacks) + Send + Sync + 'static) -> Self {
        Self {
            calls: Mutex::default(),
            on_init: Some(Box::new(hook)),
        }
    }

    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.lock().clone()
    }

    fn record(&self, call: EngineCall) {
        self.calls.lock().push(call);
    }
}

impl NativeEngine for RecordingEngine {
    fn init(&self, gfx: &mut dyn GraphicsCallbacks) {
        self.record(EngineCall::Init(thread::current().name().map(str::to_owned)));
        if let Some(hook) = &self.on_init {
            hook(gfx);
        }
    }

    fn on_touch(&self, action: i32, x: f32, y: f32, pressure: f32) {
        self.record(EngineCall::Touch(action, x, y, pressure));
    }

    fn on_accel(&self, x: f32, y: f32, z: f32) {
        self.record(EngineCall::Accel(x, y, z));
    }

    fn on_key_down(&self, key_code: i32) {
        self.record(EngineCall::KeyDown(key_code));
    }

    fn on_key_up(&self, key_code: i32) {
        self.record(EngineCall::KeyUp(key_code));
    }
}
