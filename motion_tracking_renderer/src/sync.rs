/// SharedLock - the lock shared by the renderer and the pose listener.
///
/// Held for the whole of `on_draw_eye` and around every trajectory or
/// frustum mutation coming from the pose side. Lock order: SharedLock
/// first, then a drawable's own mutex.

use std::sync::{Arc, Mutex, MutexGuard};
use crate::error::{Error, Result};

/// Guard returned by `SharedLock::lock`
pub type SharedLockGuard<'a> = MutexGuard<'a, ()>;

#[derive(Debug, Clone, Default)]
pub struct SharedLock {
    inner: Arc<Mutex<()>>,
}

impl SharedLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block until the lock is acquired
    ///
    /// # Errors
    ///
    /// `Error::BackendError` if a previous holder panicked.
    pub fn lock(&self) -> Result<SharedLockGuard<'_>> {
        self.inner
            .lock()
            .map_err(|_| Error::BackendError("Shared lock poisoned".to_string()))
    }

    /// Acquire without blocking, `None` if another component holds it
    pub fn try_lock(&self) -> Option<SharedLockGuard<'_>> {
        self.inner.try_lock().ok()
    }
}

/// Lock a drawable handle, mapping poisoning to `Error::BackendError`
pub(crate) fn lock_drawable<'a, T>(
    handle: &'a Mutex<T>,
    name: &str,
) -> Result<MutexGuard<'a, T>> {
    handle
        .lock()
        .map_err(|_| Error::BackendError(format!("{} lock poisoned", name)))
}
