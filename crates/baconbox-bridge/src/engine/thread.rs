use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use std::thread::{self, Thread};

use parking_lot::Mutex;
use thiserror::Error;

/// Lifecycle of the engine thread.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum EngineThreadState {
    NotStarted,
    Running,
    /// The entry point returned or unwound. The thread is never restarted.
    Terminated,
}

const NOT_STARTED: u8 = 0;
const RUNNING: u8 = 1;
const TERMINATED: u8 = 2;

impl EngineThreadState {
    fn from_raw(raw: u8) -> Self {
        match raw {
            NOT_STARTED => Self::NotStarted,
            RUNNING => Self::Running,
            _ => Self::Terminated,
        }
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to spawn engine thread `{name}`: {source}")]
    Spawn {
        name: String,
        #[source]
        source: io::Error,
    },
}

/// Owns the single engine thread.
///
/// The NotStarted → Running transition is a compare-exchange, so any number
/// of concurrent `ensure_started` calls launch exactly one thread.
pub struct EngineThreadController {
    thread_name: String,
    state: Arc<AtomicU8>,
    thread: Mutex<Option<Thread>>,
}

impl EngineThreadController {
    pub fn new(thread_name: impl Into<String>) -> Self {
        Self {
            thread_name: thread_name.into(),
            state: Arc::new(AtomicU8::new(NOT_STARTED)),
            thread: Mutex::new(None),
        }
    }

    pub fn state(&self) -> EngineThreadState {
        EngineThreadState::from_raw(self.state.load(Ordering::Acquire))
    }

    pub fn thread_name(&self) -> &str {
        &self.thread_name
    }

    /// Returns the engine thread once it has been launched.
    pub fn thread(&self) -> Option<Thread> {
        self.thread.lock().clone()
    }

    /// Launches the engine thread running `entry` unless it was already
    /// launched.
    ///
    /// Returns `Ok(true)` for the call that launched the thread and `Ok(false)`
    /// otherwise. If the thread cannot be spawned the controller goes back to
    /// `NotStarted` so a later call may retry.
    pub fn ensure_started<F>(&self, entry: F) -> Result<bool, EngineError>
    where
        F: FnOnce() + Send + 'static,
    {
        if self
            .state
            .compare_exchange(NOT_STARTED, RUNNING, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Ok(false);
        }

        let state = Arc::clone(&self.state);
        let spawned = thread::Builder::new()
            .name(self.thread_name.clone())
            .spawn(move || {
                let _exit = TerminateOnExit(state);
                entry();
            });

        match spawned {
            Ok(handle) => {
                // The engine loop lives for the process; the thread is detached.
                *self.thread.lock() = Some(handle.thread().clone());
                Ok(true)
            }
            Err(source) => {
                self.state.store(NOT_STARTED, Ordering::Release);
                Err(EngineError::Spawn {
                    name: self.thread_name.clone(),
                    source,
                })
            }
        }
    }
}

/// Marks the engine as terminated when the entry point returns or panics.
struct TerminateOnExit(Arc<AtomicU8>);

impl Drop for TerminateOnExit {
    fn drop(&mut self) {
        self.0.store(TERMINATED, Ordering::Release);
    }
}
