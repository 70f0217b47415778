//! Shared credential rotation for request handlers.

use focus_domain::{Credential, RotationQueue};
use std::sync::{Mutex, MutexGuard};

/// Round-robin pool of API credentials.
///
/// The lock is held only while drawing, never across an `.await`. Every
/// draw re-enqueues what it takes, so the pool size never changes.
#[derive(Debug, Default)]
pub struct KeyPool {
    queue: Mutex<RotationQueue<Credential>>,
}

impl KeyPool {
    pub fn new(credentials: impl IntoIterator<Item = Credential>) -> Self {
        Self {
            queue: Mutex::new(credentials.into_iter().collect()),
        }
    }

    /// Take the next `n` credentials in rotation order.
    ///
    /// Returns `None` when the pool is empty. With fewer credentials than
    /// `n`, keys repeat.
    pub fn draw(&self, n: usize) -> Option<Vec<Credential>> {
        self.lock().draw(n)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while holding the lock cannot leave the queue half-rotated.
    fn lock(&self) -> MutexGuard<'_, RotationQueue<Credential>> {
        self.queue.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
