//! Concurrency cap for live sessions

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts live sessions and refuses new ones past `max`.
#[derive(Debug)]
pub struct Admission {
    max: usize,
    active: AtomicUsize,
}

/// Held by a session for its whole lifetime; releases the slot on drop.
#[derive(Debug)]
pub struct SessionPermit {
    admission: Arc<Admission>,
}

impl Admission {
    pub fn new(max: usize) -> Arc<Self> {
        Arc::new(Self {
            max,
            active: AtomicUsize::new(0),
        })
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Number of sessions currently holding a permit
    pub fn active(&self) -> usize {
        self.active.load(Ordering::Acquire)
    }

    /// Claim a slot if one is free.
    ///
    /// The check and the increment are one compare-and-swap, so concurrent
    /// callers can never push the count past `max`.
    pub fn try_admit(self: &Arc<Self>) -> Option<SessionPermit> {
        let mut current = self.active.load(Ordering::Acquire);
        loop {
            if current >= self.max {
                return None;
            }
            match self.active.compare_exchange_weak(
                current,
                current + 1,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => {
                    return Some(SessionPermit {
                        admission: Arc::clone(self),
                    });
                }
                Err(actual) => current = actual,
            }
        }
    }
}

impl Drop for SessionPermit {
    fn drop(&mut self) {
        self.admission.active.fetch_sub(1, Ordering::AcqRel);
    }
}
