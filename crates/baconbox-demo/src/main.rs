use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use winit::window::Window;

use baconbox_bridge::context::egl::EglHost;
use baconbox_bridge::engine::{GraphicsCallbacks, NativeEngine};
use baconbox_bridge::logging::{init_logging, LoggingConfig};
use baconbox_bridge::motion::{SamplingRate, SensorHost, SensorKind};
use baconbox_bridge::platform::{HostRuntime, RuntimeConfig};
use baconbox_bridge::surface::NativeWindow;
use baconbox_bridge::{Bridge, BridgeConfig};

const FRAME: Duration = Duration::from_millis(16);

/// Stand-in engine: binds a context and presents empty frames.
#[derive(Default)]
struct DemoEngine {
    touches: AtomicU64,
    keys: AtomicU64,
}

impl NativeEngine for DemoEngine {
    fn init(&self, gfx: &mut dyn GraphicsCallbacks) {
        let mut bound = false;

        loop {
            if !bound {
                match gfx.create_gl_context() {
                    Ok(()) => {
                        log::info!("context ready");
                        bound = true;
                    }
                    Err(e) => log::debug!("waiting for a surface: {e}"),
                }
            } else if gfx.flip_buffers().is_err() {
                // Surface went away; rebind once the host hands out a new one.
                bound = false;
            }

            thread::sleep(FRAME);
        }
    }

    fn on_touch(&self, action: i32, x: f32, y: f32, pressure: f32) {
        let n = self.touches.fetch_add(1, Ordering::Relaxed) + 1;
        log::debug!("touch #{n}: action={action} at ({x}, {y}) pressure={pressure}");
    }

    fn on_accel(&self, x: f32, y: f32, z: f32) {
        log::trace!("accel ({x}, {y}, {z})");
    }

    fn on_key_down(&self, key_code: i32) {
        let n = self.keys.fetch_add(1, Ordering::Relaxed) + 1;
        log::debug!("key press #{n}: {key_code}");
    }

    fn on_key_up(&self, key_code: i32) {
        log::debug!("key up {key_code}");
    }
}

/// Desktop hosts have no motion sensors.
struct NoSensors;

impl SensorHost for NoSensors {
    fn register(&self, _kind: SensorKind, _rate: SamplingRate) -> bool {
        false
    }

    fn unregister(&self, _kind: SensorKind) {}
}

fn main() -> Result<()> {
    let config = BridgeConfig::baconbox();
    init_logging(LoggingConfig::for_bridge(&config));
    let runtime = RuntimeConfig {
        title: config.library_name.clone(),
        ..RuntimeConfig::default()
    };

    let engine = Arc::new(DemoEngine::default());
    let bridge = Bridge::new(config, engine, EglHost::new(), NoSensors);

    HostRuntime::run(runtime, bridge, |window: &Window| {
        Ok(NativeWindow::from_window(window)?)
    })
}
