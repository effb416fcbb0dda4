//! Times of day and the wrap-aware sleep duration between them.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::angle::MINUTES_PER_DAY;

/// A wall-clock time of day with minute resolution.
///
/// The picker only ever produces times snapped to its step grid, so
/// seconds and finer are deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Build from an hour/minute pair. Both components are reduced into
    /// range (`hour % 24`, `minute % 60`) rather than rejected.
    pub fn new(hour: u8, minute: u8) -> Self {
        Self {
            hour: hour % 24,
            minute: minute % 60,
        }
    }

    /// Build from minutes since midnight, taken modulo one day.
    /// Negative inputs wrap backwards from midnight.
    pub fn from_minutes(minutes: i32) -> Self {
        let mut m = minutes % MINUTES_PER_DAY;
        if m < 0 {
            m += MINUTES_PER_DAY;
        }
        Self {
            hour: (m / 60) as u8,
            minute: (m % 60) as u8,
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes since midnight, in [0, 1440).
    pub fn total_minutes(&self) -> i32 {
        self.hour as i32 * 60 + self.minute as i32
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl From<NaiveTime> for TimeOfDay {
    /// Sub-minute precision is truncated.
    fn from(t: NaiveTime) -> Self {
        Self {
            hour: t.hour() as u8,
            minute: t.minute() as u8,
        }
    }
}

impl From<TimeOfDay> for NaiveTime {
    fn from(t: TimeOfDay) -> Self {
        // Components are kept in range by construction.
        NaiveTime::from_hms_opt(t.hour as u32, t.minute as u32, 0).unwrap_or_default()
    }
}

/// Elapsed time from bed time to wake time, wrap-aware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepDuration {
    pub hours: u32,
    pub minutes: u32,
}

impl SleepDuration {
    /// Duration from `bed` to the next occurrence of `wake`.
    ///
    /// When `wake` is not strictly after `bed` it is treated as falling on
    /// the following day, so equal times yield a full 24 h, never zero.
    pub fn between(bed: TimeOfDay, wake: TimeOfDay) -> Self {
        let mut elapsed = wake.total_minutes() - bed.total_minutes();
        if elapsed <= 0 {
            elapsed += MINUTES_PER_DAY;
        }
        Self {
            hours: (elapsed / 60) as u32,
            minutes: (elapsed % 60) as u32,
        }
    }

    pub fn total_minutes(&self) -> u32 {
        self.hours * 60 + self.minutes
    }
}

impl fmt::Display for SleepDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.minutes == 0 {
            write!(f, "{} h", self.hours)
        } else {
            write!(f, "{} h {} min", self.hours, self.minutes)
        }
    }
}
