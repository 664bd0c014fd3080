//! Host-facing surface of the bridge.
//!
//! A host (an Android activity, a winit event loop, a test) drives the bridge
//! through the narrow capability traits below. [`Bridge`] implements all of
//! them; a host only needs the ones matching the callbacks it receives.

mod bridge;

pub use bridge::Bridge;

use crate::input::KeyAction;
use crate::motion::SensorKind;

/// Application lifecycle callbacks.
pub trait ActivityCallbacks {
    fn on_create(&self);
    fn on_resume(&self);
    fn on_pause(&self);
}

/// Drawable surface callbacks.
pub trait SurfaceCallbacks {
    /// Host window type the surface wraps.
    type Drawable;

    fn surface_created(&self, drawable: Self::Drawable);
    fn surface_changed(&self, width: u32, height: u32);
    fn surface_destroyed(&self);
}

pub trait KeyListener {
    /// Returns whether the key event was consumed.
    fn on_key(&self, code: i32, action: KeyAction) -> bool;
}

pub trait TouchListener {
    /// Returns whether the touch event was consumed.
    fn on_touch(&self, action: i32, x: f32, y: f32, pressure: f32) -> bool;
}

pub trait SensorListener {
    fn on_sensor_changed(&self, kind: SensorKind, values: [f32; 3]);
    fn on_accuracy_changed(&self, kind: SensorKind, accuracy: i32);
}
