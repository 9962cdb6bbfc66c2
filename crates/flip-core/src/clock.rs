use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

/// A monotonic time source read by the controller once per tick.
///
/// Readings are offsets from an arbitrary, clock-specific origin. Only
/// the difference between two readings of the same clock is meaningful.
pub trait Clock: Send {
    fn now(&self) -> Duration;
}

impl<C> Clock for Arc<C>
where
    C: Clock + Sync + ?Sized,
{
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Clock backed by [`tokio::time::Instant`], so it follows paused and
/// auto-advanced time in tokio tests.
#[cfg(feature = "tokio")]
#[derive(Debug, Clone, Copy)]
pub struct TokioClock {
    origin: tokio::time::Instant,
}

#[cfg(feature = "tokio")]
impl TokioClock {
    pub fn new() -> Self {
        Self {
            origin: tokio::time::Instant::now(),
        }
    }
}

#[cfg(feature = "tokio")]
impl Default for TokioClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "tokio")]
impl Clock for TokioClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A clock that only moves when it is told to.
///
/// Clones share the same reading, so a test can keep one handle and
/// give another to the controller.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    nanos: Arc<AtomicU64>,
}

impl ManualClock {
    /// Create a clock reading zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock with the given initial reading.
    pub fn starting_at(now: Duration) -> Self {
        let clock = Self::new();
        clock.set(now);
        clock
    }

    /// Move the reading forward by `step`.
    pub fn advance(&self, step: Duration) {
        self.nanos
            .fetch_add(saturating_nanos(step), Ordering::SeqCst);
    }

    /// Overwrite the reading. Setting an earlier value models a clock
    /// that jumped backwards.
    pub fn set(&self, now: Duration) {
        self.nanos.store(saturating_nanos(now), Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_nanos(self.nanos.load(Ordering::SeqCst))
    }
}

fn saturating_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

/// Signed number of seconds from `since` to `now`.
///
/// Negative when `now` is earlier than `since`, which happens only when
/// the underlying clock stepped backwards.
pub fn elapsed_secs(now: Duration, since: Duration) -> f64 {
    match now.checked_sub(since) {
        Some(elapsed) => elapsed.as_secs_f64(),
        None => -(since - now).as_secs_f64(),
    }
}
