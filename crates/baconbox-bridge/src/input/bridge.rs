use std::sync::Arc;

use crate::engine::NativeEngine;

use super::{InputEvent, KeyAction};

/// Forwards key and touch events into the engine.
///
/// Calls are synchronous and unbuffered: the engine sees every host event
/// exactly once, in host order, with its fields untouched.
pub struct InputBridge {
    engine: Arc<dyn NativeEngine>,
}

impl InputBridge {
    pub fn new(engine: Arc<dyn NativeEngine>) -> Self {
        Self { engine }
    }

    pub fn forward_key(&self, code: i32, pressed: bool) {
        if pressed {
            self.engine.on_key_down(code);
        } else {
            self.engine.on_key_up(code);
        }
    }

    pub fn forward_touch(&self, action: i32, x: f32, y: f32, pressure: f32) {
        self.engine.on_touch(action, x, y, pressure);
    }

    pub fn forward(&self, event: InputEvent) {
        match event {
            InputEvent::Key { code, pressed } => self.forward_key(code, pressed),
            InputEvent::Touch {
                action,
                x,
                y,
                pressure,
            } => self.forward_touch(action, x, y, pressure),
        }
    }

    /// Handles a host key callback. Returns whether the event was consumed.
    pub fn on_key(&self, code: i32, action: KeyAction) -> bool {
        match action {
            KeyAction::Down => {
                self.forward_key(code, true);
                true
            }
            KeyAction::Up => {
                self.forward_key(code, false);
                true
            }
            KeyAction::Multiple => false,
        }
    }

    /// Handles a host touch callback. Touches are always consumed.
    pub fn on_touch(&self, action: i32, x: f32, y: f32, pressure: f32) -> bool {
        self.forward_touch(action, x, y, pressure);
        true
    }
}
