//! Edge-triggered boolean latch.
//!
//! A [`Latch`] is raised from the push side through any number of [`LatchSetter`]s and drained
//! from the pull side with [`Latch::get_and_reset`]. How many times it was raised in between is
//! not recorded; a consumer only learns that it happened at least once.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Consumer side of the latch.
pub struct Latch {
    flag: Arc<AtomicBool>,
}

impl Latch {
    pub fn new() -> Self {
        Self { flag: Arc::new(AtomicBool::new(false)) }
    }

    /// Hand out a producer handle sharing this latch's flag.
    pub fn setter(&self) -> LatchSetter {
        LatchSetter { flag: self.flag.clone() }
    }

    /// Read the flag and clear it in a single atomic step.
    pub fn get_and_reset(&self) -> bool {
        self.flag.swap(false, Ordering::AcqRel)
    }

    /// Read the flag without clearing it.
    pub fn is_set(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

impl Default for Latch {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Latch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Latch").field("set", &self.is_set()).finish()
    }
}

/// Producer side of the latch. Cheap to clone and `Send + Sync`.
#[derive(Clone)]
pub struct LatchSetter {
    flag: Arc<AtomicBool>,
}

impl LatchSetter {
    /// Raise the latch. Returns `true` if it was not already raised.
    pub fn set(&self) -> bool {
        self.flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Relaxed).is_ok()
    }
}

impl fmt::Debug for LatchSetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LatchSetter").finish_non_exhaustive()
    }
}
