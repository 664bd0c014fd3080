//! Input forwarding.
//!
//! Public API is platform-agnostic. Host adapters translate their key and
//! touch callbacks into calls on [`InputBridge`]; the bridge hands them to the
//! engine on the same thread, one call per host event.

mod bridge;
mod types;

pub use bridge::InputBridge;
pub use types::{touch_action, InputEvent, KeyAction};
