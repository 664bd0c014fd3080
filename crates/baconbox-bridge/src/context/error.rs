use thiserror::Error;

/// Failure reported by the host graphics system.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct HostError(pub String);

impl HostError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Errors returned by [`GraphicsContextManager`](super::GraphicsContextManager).
///
/// Each step of context creation fails with its own kind so callers can tell
/// a missing configuration from a failed bind. None of them is fatal: the
/// manager is left without a context and creation may be retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    /// The default display could not be opened or initialized.
    #[error("no display available: {0}")]
    DisplayUnavailable(HostError),

    /// No configuration advertises the required renderable type.
    #[error("no rendering configuration available")]
    NoConfigAvailable,

    /// The host refused to create a rendering context.
    #[error("couldn't create context: {0}")]
    ContextCreationFailed(HostError),

    /// The host refused to create a window surface for the drawable.
    #[error("couldn't create surface: {0}")]
    SurfaceCreationFailed(HostError),

    /// Display, surface and context could not be bound to the thread.
    #[error("couldn't make context current: {0}")]
    MakeCurrentFailed(HostError),

    /// Waiting for pending rendering or swapping buffers failed.
    #[error("couldn't present frame: {0}")]
    PresentFailed(HostError),
}
