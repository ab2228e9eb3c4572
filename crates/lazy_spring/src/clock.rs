//! Time sources for springs
//!
//! A [`Spring`](crate::Spring) never reads wall-clock time directly. It asks
//! its [`Clock`] for the current time in seconds, which by default is a
//! process-wide monotonic clock. Tests and offline renderers inject their own
//! source, typically a [`ManualClock`].

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::Instant;

/// Epoch shared by every monotonic clock in the process
static MONOTONIC_EPOCH: OnceLock<Instant> = OnceLock::new();

fn monotonic_seconds() -> f64 {
    MONOTONIC_EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64()
}

/// A shareable time source returning seconds as `f64`
///
/// The function must be monotonically non-decreasing during normal use.
#[derive(Clone)]
pub struct Clock {
    source: Arc<dyn Fn() -> f64 + Send + Sync>,
}

impl Clock {
    /// Seconds elapsed since the first monotonic clock was read in this process
    pub fn monotonic() -> Self {
        Self {
            source: Arc::new(monotonic_seconds),
        }
    }

    /// Wrap an arbitrary time function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn() -> f64 + Send + Sync + 'static,
    {
        Self {
            source: Arc::new(f),
        }
    }

    /// Read the current time
    #[inline]
    pub fn now(&self) -> f64 {
        (self.source)()
    }

    /// Check whether two handles share the same underlying source
    pub fn same_source(&self, other: &Clock) -> bool {
        Arc::ptr_eq(&self.source, &other.source)
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::monotonic()
    }
}

impl fmt::Debug for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clock").finish_non_exhaustive()
    }
}

/// A manually driven clock for deterministic stepping
///
/// Cloning yields a handle to the same time value, so a test can keep one
/// handle while the spring owns a [`Clock`] built from another.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    bits: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            bits: Arc::new(AtomicU64::new(start.to_bits())),
        }
    }

    pub fn now(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Acquire))
    }

    pub fn set(&self, seconds: f64) {
        self.bits.store(seconds.to_bits(), Ordering::Release);
    }

    /// Move time forward by `seconds`, returning the new reading
    pub fn advance(&self, seconds: f64) -> f64 {
        let next = self.now() + seconds;
        self.set(next);
        next
    }

    /// A [`Clock`] that reads this manual clock
    pub fn clock(&self) -> Clock {
        let handle = self.clone();
        Clock::from_fn(move || handle.now())
    }
}

impl From<ManualClock> for Clock {
    fn from(manual: ManualClock) -> Self {
        manual.clock()
    }
}
