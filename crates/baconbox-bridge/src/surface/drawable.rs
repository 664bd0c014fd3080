use std::ffi::c_void;
use std::ptr::NonNull;
use std::sync::Arc;

use parking_lot::Mutex;
use raw_window_handle::{HasWindowHandle, RawWindowHandle};
use thiserror::Error;

/// Drawable handed from the host thread to the engine thread.
///
/// The coordinator writes it when the host reports a surface and clears it when
/// the surface goes away; the engine side reads it when asked for a context.
pub struct DrawableSlot<D> {
    inner: Arc<Mutex<Option<D>>>,
}

impl<D> DrawableSlot<D> {
    pub fn set(&self, drawable: D) {
        *self.inner.lock() = Some(drawable);
    }

    pub fn clear(&self) -> Option<D> {
        self.inner.lock().take()
    }

    pub fn is_set(&self) -> bool {
        self.inner.lock().is_some()
    }
}

impl<D: Clone> DrawableSlot<D> {
    pub fn get(&self) -> Option<D> {
        self.inner.lock().clone()
    }
}

impl<D> Clone for DrawableSlot<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<D> Default for DrawableSlot<D> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(None)),
        }
    }
}

#[derive(Debug, Error)]
pub enum DrawableError {
    #[error("window handle unavailable: {0}")]
    Handle(#[from] raw_window_handle::HandleError),

    #[error("unsupported window system: {0}")]
    Unsupported(&'static str),

    #[error("window handle is null")]
    Null,
}

/// Host native window pointer (`ANativeWindow*`, X11 window id, `HWND`).
///
/// The pointer stays valid only while the host keeps the window alive; host
/// adapters report the surface destroyed before releasing it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct NativeWindow(NonNull<c_void>);

// The pointer is only dereferenced by the host graphics system, which accepts
// native windows from any thread.
unsafe impl Send for NativeWindow {}

impl NativeWindow {
    pub fn from_window(window: &impl HasWindowHandle) -> Result<Self, DrawableError> {
        let handle = window.window_handle()?;
        Self::from_raw(handle.as_raw())
    }

    pub fn from_raw(raw: RawWindowHandle) -> Result<Self, DrawableError> {
        let ptr = match raw {
            RawWindowHandle::AndroidNdk(h) => h.a_native_window,
            RawWindowHandle::Xlib(h) => from_addr(h.window as usize)?,
            RawWindowHandle::Xcb(h) => from_addr(h.window.get() as usize)?,
            RawWindowHandle::Win32(h) => from_addr(h.hwnd.get() as usize)?,
            RawWindowHandle::Wayland(_) => return Err(DrawableError::Unsupported("wayland")),
            RawWindowHandle::AppKit(_) | RawWindowHandle::UiKit(_) => {
                return Err(DrawableError::Unsupported("apple"));
            }
            _ => return Err(DrawableError::Unsupported("other")),
        };
        Ok(Self(ptr))
    }

    #[inline]
    pub fn as_ptr(self) -> *mut c_void {
        self.0.as_ptr()
    }
}

// X11 and Win32 identify windows by integer ids passed where EGL expects a pointer.
fn from_addr(addr: usize) -> Result<NonNull<c_void>, DrawableError> {
    NonNull::new(addr as *mut c_void).ok_or(DrawableError::Null)
}
