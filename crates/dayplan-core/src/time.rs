//! Minute-resolution time-of-day intervals.
//!
//! All allocation math works on minutes since midnight. Wall-clock
//! strings are parsed once at the boundary and formatted once on the
//! way out; nothing in between touches strings.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Minutes in a full day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// A half-open time-of-day interval in minutes since midnight.
///
/// `end` may reach `MINUTES_PER_DAY` when the interval runs to midnight
/// (wraparound splitting produces such intervals). Invariant after
/// normalization: `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: i64,
    pub end: i64,
}

impl TimeInterval {
    /// Create a new interval.
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Get duration in minutes.
    pub fn duration_minutes(&self) -> i64 {
        self.end - self.start
    }

    /// Check whether two intervals overlap (half-open semantics).
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Check if this interval can hold `minutes` of work.
    pub fn can_fit(&self, minutes: i64) -> bool {
        self.duration_minutes() >= minutes
    }
}

/// Split a possibly midnight-wrapping `[start, end)` pair into
/// non-wrapping intervals.
///
/// A block like 22:00-06:00 becomes `[start, 1440)` plus `[0, end)`;
/// a non-wrapping block passes through unchanged.
pub fn split_wraparound(start: i64, end: i64) -> Vec<TimeInterval> {
    if end < start {
        vec![
            TimeInterval::new(start, MINUTES_PER_DAY),
            TimeInterval::new(0, end),
        ]
    } else {
        vec![TimeInterval::new(start, end)]
    }
}

/// Parse a `HH:MM` or `HH:MM:SS` wall-clock string to minutes since
/// midnight. Only the first five characters are significant; seconds
/// are discarded.
pub fn parse_wall_clock(value: &str) -> Result<i64> {
    let trimmed = value.trim();
    let significant = if trimmed.len() > 5 {
        trimmed
            .get(..5)
            .ok_or_else(|| ScheduleError::invalid_time(value, "expected HH:MM"))?
    } else {
        trimmed
    };

    let (hours_str, minutes_str) = significant
        .split_once(':')
        .ok_or_else(|| ScheduleError::invalid_time(value, "expected HH:MM"))?;

    let hours: i64 = hours_str
        .parse()
        .map_err(|_| ScheduleError::invalid_time(value, "hours are not a number"))?;
    let minutes: i64 = minutes_str
        .parse()
        .map_err(|_| ScheduleError::invalid_time(value, "minutes are not a number"))?;

    if !(0..24).contains(&hours) {
        return Err(ScheduleError::invalid_time(value, "hours out of range"));
    }
    if !(0..60).contains(&minutes) {
        return Err(ScheduleError::invalid_time(value, "minutes out of range"));
    }

    Ok(hours * 60 + minutes)
}

/// Format minutes since midnight as a 12-hour `HH:MM AM/PM` string.
pub fn format_12h(minutes: i64) -> String {
    let hours = (minutes / 60) % 24;
    let mins = minutes % 60;

    let period = if hours >= 12 { "PM" } else { "AM" };
    let display_hours = match hours {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };

    format!("{:02}:{:02} {}", display_hours, mins, period)
}
