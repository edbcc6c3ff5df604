// Source of "now" for every temporal rule in the bookings context.
//
// Handlers read the clock once per operation and pass the captured instant down,
// so a single classification pass never sees two different "now" values.

use chrono::{Local, NaiveDateTime};
use std::sync::Mutex;

pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a settable instant. Used by tests and local tooling.
#[derive(Debug)]
pub struct FixedClock {
    instant: Mutex<NaiveDateTime>,
}

impl FixedClock {
    pub fn at(instant: NaiveDateTime) -> Self {
        Self {
            instant: Mutex::new(instant),
        }
    }

    pub fn set(&self, instant: NaiveDateTime) {
        if let Ok(mut guard) = self.instant.lock() {
            *guard = instant;
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        match self.instant.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
