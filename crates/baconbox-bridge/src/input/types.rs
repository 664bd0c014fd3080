/// Host key action.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyAction {
    Down,
    Up,
    /// Repeated or multi-character events; not forwarded.
    Multiple,
}

impl KeyAction {
    /// Maps a host action code (Android `KeyEvent.ACTION_*`).
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Down,
            1 => Self::Up,
            _ => Self::Multiple,
        }
    }
}

/// Host touch action codes (Android `MotionEvent.ACTION_*`).
///
/// Touch actions are forwarded as raw codes; these constants exist for host
/// adapters translating from other toolkits.
pub mod touch_action {
    pub const DOWN: i32 = 0;
    pub const UP: i32 = 1;
    pub const MOVE: i32 = 2;
    pub const CANCEL: i32 = 3;
}

/// Input event as delivered by the host.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        code: i32,
        pressed: bool,
    },

    Touch {
        action: i32,
        x: f32,
        y: f32,
        pressure: f32,
    },
}
