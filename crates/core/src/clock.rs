// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction for testable calendar-day handling
//!
//! The edit policy classifies dates against "today", so everything that
//! consults the current day takes a [`Clock`] instead of reading the
//! system time directly.

use chrono::{Duration, Local, NaiveDate};
use std::sync::{Arc, Mutex};

/// A clock that provides the current calendar day
pub trait Clock: Clone + Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Real system clock, in local time
#[derive(Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Fake clock for testing with a controllable current day
#[derive(Clone)]
pub struct FakeClock {
    current: Arc<Mutex<NaiveDate>>,
}

impl FakeClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            current: Arc::new(Mutex::new(today)),
        }
    }

    /// Advance the clock by the given number of days (negative moves back)
    pub fn advance_days(&self, days: i64) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current += Duration::days(days);
    }

    /// Set the clock to a specific day
    pub fn set(&self, today: NaiveDate) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current = today;
    }
}

impl Clock for FakeClock {
    fn today(&self) -> NaiveDate {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
