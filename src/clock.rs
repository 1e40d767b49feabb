//! Time sources in milliseconds since the Unix epoch.
//!
//! A [`ServerClock`] shifts local time by the offset the backing store reports,
//! so timestamps stamped on the client are close to the ones the store will
//! assign at commit.

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

pub trait Clock {
    fn current_time_millis(&self) -> i64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn current_time_millis(&self) -> i64 {
        (**self).current_time_millis()
    }
}

/// Local wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_time_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Always returns the same instant.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn current_time_millis(&self) -> i64 {
        self.0
    }
}

/// Local clock corrected by a server-reported offset.
#[derive(Debug, Default)]
pub struct ServerClock<C = SystemClock> {
    base: C,
    offset_ms: AtomicI64,
}

impl ServerClock<SystemClock> {
    pub fn new() -> Self {
        Self::with_base(SystemClock)
    }
}

impl<C: Clock> ServerClock<C> {
    pub fn with_base(base: C) -> Self {
        Self {
            base,
            offset_ms: AtomicI64::new(0),
        }
    }

    /// Stores the difference between server and local time.
    pub fn set_offset(&self, offset_ms: i64) {
        self.offset_ms.store(offset_ms, Ordering::Relaxed);
    }

    pub fn offset(&self) -> i64 {
        self.offset_ms.load(Ordering::Relaxed)
    }
}

impl<C: Clock> Clock for ServerClock<C> {
    fn current_time_millis(&self) -> i64 {
        self.base
            .current_time_millis()
            .saturating_add(self.offset())
    }
}
