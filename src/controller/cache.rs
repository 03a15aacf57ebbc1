use std::sync::{Arc, PoisonError, RwLock};

use crate::model::Report;

/// Holds the most recent value. Readers get a shared handle, so the lock
/// is held only long enough to clone an `Arc`.
#[derive(Debug)]
pub struct Cache<T> {
    slot: RwLock<Option<Arc<T>>>,
}

pub type ReportCache = Cache<Report>;

impl<T> Default for Cache<T> {
    fn default() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }
}

impl<T> Cache<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` until the first `set`.
    pub fn get(&self) -> Option<Arc<T>> {
        // a writer can't leave the slot half-written, so a poisoned lock is still readable
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set(&self, value: T) {
        let value = Arc::new(value);
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(value);
    }

    pub fn is_populated(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}
