use std::sync::Arc;

use crate::activity::{ActivityLifecycleAdapter, ActivityPhase};
use crate::config::BridgeConfig;
use crate::context::GraphicsHost;
use crate::engine::{EngineThreadState, NativeEngine};
use crate::input::{InputBridge, KeyAction};
use crate::motion::{MotionBridge, SensorHost, SensorKind};
use crate::surface::SurfaceLifecycleCoordinator;

use super::{ActivityCallbacks, KeyListener, SensorListener, SurfaceCallbacks, TouchListener};

/// One bridge instance per host activity.
///
/// Owns every bridge component and routes host callbacks to them. All
/// callbacks are expected on the host's event-dispatch thread; the only other
/// thread is the engine thread the bridge starts itself.
pub struct Bridge<H: GraphicsHost, S: SensorHost> {
    config: BridgeConfig,
    activity: ActivityLifecycleAdapter,
    surface: SurfaceLifecycleCoordinator<H, S>,
    input: InputBridge,
    motion: Arc<MotionBridge<S>>,
}

impl<H: GraphicsHost, S: SensorHost> Bridge<H, S> {
    pub fn new(config: BridgeConfig, engine: Arc<dyn NativeEngine>, graphics: H, sensors: S) -> Self {
        let motion = Arc::new(MotionBridge::new(
            sensors,
            Arc::clone(&engine),
            config.log_tag.clone(),
        ));
        let surface = SurfaceLifecycleCoordinator::new(
            config.clone(),
            Arc::clone(&engine),
            graphics,
            Arc::clone(&motion),
        );

        log::info!(target: config.tag(), "bridge ready for {}", config.library_name);

        Self {
            activity: ActivityLifecycleAdapter::new(config.log_tag.clone()),
            input: InputBridge::new(engine),
            config,
            surface,
            motion,
        }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn activity_phase(&self) -> Option<ActivityPhase> {
        self.activity.phase()
    }

    pub fn engine_state(&self) -> EngineThreadState {
        self.surface.engine_state()
    }

    pub fn surface(&self) -> &SurfaceLifecycleCoordinator<H, S> {
        &self.surface
    }

    pub fn input(&self) -> &InputBridge {
        &self.input
    }

    pub fn motion(&self) -> &MotionBridge<S> {
        &self.motion
    }
}

impl<H: GraphicsHost, S: SensorHost> ActivityCallbacks for Bridge<H, S> {
    fn on_create(&self) {
        self.activity.on_create();
    }

    fn on_resume(&self) {
        self.activity.on_resume();
    }

    fn on_pause(&self) {
        self.activity.on_pause();
    }
}

impl<H: GraphicsHost, S: SensorHost> SurfaceCallbacks for Bridge<H, S> {
    type Drawable = H::Drawable;

    fn surface_created(&self, drawable: H::Drawable) {
        self.surface.surface_created(drawable);
    }

    fn surface_changed(&self, width: u32, height: u32) {
        // The host callback cannot fail; a spawn error leaves the engine
        // NotStarted and the next notification retries.
        if let Err(e) = self.surface.surface_changed(width, height) {
            log::error!(target: self.config.tag(), "{e}");
        }
    }

    fn surface_destroyed(&self) {
        self.surface.surface_destroyed();
    }
}

impl<H: GraphicsHost, S: SensorHost> KeyListener for Bridge<H, S> {
    fn on_key(&self, code: i32, action: KeyAction) -> bool {
        self.input.on_key(code, action)
    }
}

impl<H: GraphicsHost, S: SensorHost> TouchListener for Bridge<H, S> {
    fn on_touch(&self, action: i32, x: f32, y: f32, pressure: f32) -> bool {
        self.input.on_touch(action, x, y, pressure)
    }
}

impl<H: GraphicsHost, S: SensorHost> SensorListener for Bridge<H, S> {
    fn on_sensor_changed(&self, kind: SensorKind, values: [f32; 3]) {
        self.motion.on_sample(kind, values);
    }

    fn on_accuracy_changed(&self, kind: SensorKind, accuracy: i32) {
        self.motion.on_accuracy_changed(kind, accuracy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::{Duration, Instant};

    use crossbeam_channel::{bounded, unbounded};

    use crate::input::touch_action;
    use crate::motion::SamplingRate;
    use crate::testing::{
        EngineCall, FakeGraphics, FakeSensors, GfxCall, RecordingEngine, SensorCall,
    };

    const WAIT: Duration = Duration::from_secs(5);

    fn wait_for(bridge: &Bridge<FakeGraphics, FakeSensors>, state: EngineThreadState) {
        let deadline = Instant::now() + WAIT;
        while bridge.engine_state() != state {
            assert!(Instant::now() < deadline, "engine thread never reached {state:?}");
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn host_session_drives_engine_end_to_end() {
        let (ready_tx, ready_rx) = unbounded();
        let (stop_tx, stop_rx) = bounded::<()>(0);
        let engine = Arc::new(RecordingEngine::with_init(move |gfx| {
            ready_tx.send(gfx.create_gl_context()).unwrap();
            let _ = stop_rx.recv();
            let _ = gfx.flip_buffers();
        }));
        let graphics = FakeGraphics::default();
        let bridge = Bridge::new(
            BridgeConfig::baconbox(),
            engine.clone(),
            graphics.clone(),
            FakeSensors::default(),
        );

        bridge.on_create();
        bridge.on_resume();
        bridge.surface_created(3);
        bridge.surface_changed(480, 800);
        bridge.surface_changed(800, 480);

        assert_eq!(ready_rx.recv_timeout(WAIT).unwrap(), Ok(()));
        assert_eq!(bridge.engine_state(), EngineThreadState::Running);

        // Events reach the engine while its loop is running.
        assert!(bridge.on_touch(touch_action::UP, 10.5, 20.25, 0.8));
        assert!(bridge.on_key(29, KeyAction::Down));
        bridge.on_sensor_changed(SensorKind::Accelerometer, [0.0, 9.81, 0.0]);
        bridge.on_sensor_changed(SensorKind::Gyroscope, [1.0, 1.0, 1.0]);

        stop_tx.send(()).unwrap();
        wait_for(&bridge, EngineThreadState::Terminated);

        assert_eq!(
            engine.calls(),
            vec![
                EngineCall::Init(Some("BaconBoxThread".into())),
                EngineCall::Touch(1, 10.5, 20.25, 0.8),
                EngineCall::KeyDown(29),
                EngineCall::Accel(0.0, 9.81, 0.0),
            ]
        );
        assert_eq!(
            bridge.motion().host().calls(),
            vec![SensorCall::Register(SensorKind::Accelerometer, SamplingRate::Game)]
        );
        assert!(graphics.calls().contains(&GfxCall::CreateSurface(3)));
        assert_eq!(bridge.surface().surface_size(), Some((800, 480)));
    }

    #[test]
    fn pause_and_destroy_leave_engine_running() {
        let (ready_tx, ready_rx) = unbounded();
        let (stop_tx, stop_rx) = bounded::<()>(0);
        let engine = Arc::new(RecordingEngine::with_init(move |_| {
            ready_tx.send(()).unwrap();
            let _ = stop_rx.recv();
        }));
        let bridge = Bridge::new(
            BridgeConfig::redbox(),
            engine,
            FakeGraphics::default(),
            FakeSensors::default(),
        );

        bridge.on_resume();
        bridge.surface_created(1);
        bridge.surface_changed(100, 100);
        ready_rx.recv_timeout(WAIT).unwrap();

        bridge.surface_destroyed();
        bridge.on_pause();

        assert_eq!(bridge.activity_phase(), Some(ActivityPhase::Paused));
        assert_eq!(bridge.engine_state(), EngineThreadState::Running);
        assert!(bridge.motion().is_enabled(SensorKind::Accelerometer));
        assert!(!bridge.surface().has_drawable());

        // A new surface does not start a second engine thread.
        bridge.surface_created(2);
        bridge.surface_changed(100, 100);
        assert!(bridge.surface().has_drawable());

        stop_tx.send(()).unwrap();
        wait_for(&bridge, EngineThreadState::Terminated);
    }

    #[test]
    fn key_actions_other_than_down_and_up_are_not_consumed() {
        let engine = Arc::new(RecordingEngine::default());
        let bridge = Bridge::new(
            BridgeConfig::default(),
            engine.clone(),
            FakeGraphics::default(),
            FakeSensors::default(),
        );

        assert!(!bridge.on_key(4, KeyAction::Multiple));
        assert!(bridge.on_key(4, KeyAction::Up));
        bridge.on_accuracy_changed(SensorKind::Accelerometer, 2);

        assert_eq!(engine.calls(), vec![EngineCall::KeyUp(4)]);
        assert_eq!(bridge.engine_state(), EngineThreadState::NotStarted);
    }
}
