//! Task-to-session chunking and daily-allocation math.
//!
//! A task's remaining work is spread over the days left until its
//! deadline, one session per day. Separately, the daily-allocation
//! layer decides how much of that remaining work to attempt *today*,
//! accounting for minutes already completed.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::model::{Session, Task};

/// Tasks at or below this remaining duration run as a single session.
pub const SINGLE_SESSION_MAX: i64 = 45;

/// Availability window assumed when a deadline fails to parse.
pub const DEFAULT_DEADLINE_DAYS: i64 = 2;

/// Hard cap on one day's session length in minutes.
pub const MAX_SESSION_MINUTES: i64 = 90;

/// Parse a task deadline using an explicit ordered list of accepted
/// formats, first match wins:
///
/// 1. RFC 3339 / ISO-8601 with offset (`2024-05-01T10:00:00Z`)
/// 2. ISO-8601 without offset (`2024-05-01T10:00:00`)
/// 3. Bare date (`2024-05-01`), taken at midnight
///
/// Timezone offsets are dropped: comparisons happen on the wall clock.
pub fn parse_deadline(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }

    let date_part = value.split('T').next().unwrap_or(value);
    if let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    None
}

/// Number of days available to work on a task.
///
/// With a deadline: ceil of the seconds until it, floored at one day.
/// A deadline that fails to parse falls back to a 2-day window. Without
/// a deadline the task spreads over 3-7 days depending on its length.
pub fn days_available(task: &Task, now: NaiveDateTime) -> i64 {
    match task.deadline.as_deref() {
        Some(deadline_str) => match parse_deadline(deadline_str) {
            Some(deadline) => {
                let seconds = (deadline - now).num_seconds();
                let days = (seconds as f64 / 86_400.0).ceil() as i64;
                days.max(1)
            }
            None => DEFAULT_DEADLINE_DAYS,
        },
        None => (task.predicted_time / 30).clamp(3, 7),
    }
}

/// Minutes of work left on a task given its completion percentage.
pub fn remaining_minutes(task: &Task) -> f64 {
    task.predicted_time as f64 * (1.0 - task.progress / 100.0)
}

/// Break a task's remaining work into its full multi-day session
/// breakdown (not just today's share).
///
/// Yields nothing when less than a minute remains. Short tasks run as
/// one session; longer tasks get one session per available day, with
/// durations within one minute of each other summing exactly to the
/// rounded remaining work.
pub fn break_into_sessions(task: &Task, now: NaiveDateTime) -> Vec<Session> {
    let remaining = remaining_minutes(task);
    if remaining < 1.0 {
        return Vec::new();
    }

    let remaining = remaining.round() as i64;

    if remaining <= SINGLE_SESSION_MAX {
        return vec![Session {
            duration: remaining,
            session_num: 1,
            total_sessions: 1,
        }];
    }

    // One session per day, capped so no session rounds to zero
    let num_sessions = days_available(task, now).max(2).min(remaining);
    let per_session = remaining / num_sessions;
    let leftover = remaining % num_sessions;

    (0..num_sessions)
        .map(|i| Session {
            duration: per_session + if i < leftover { 1 } else { 0 },
            session_num: i as u32 + 1,
            total_sessions: num_sessions as u32,
        })
        .collect()
}

/// Minutes of a task's remaining work to target today: its per-day
/// share minus what was already completed. Zero or negative means the
/// daily goal is met.
pub fn daily_allocation(remaining: f64, days: i64, completed_today: i64) -> i64 {
    let per_day = (remaining / days.max(1) as f64).ceil() as i64;
    per_day - completed_today
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Complexity, Priority};
    use chrono::Duration;

    fn make_task(predicted_time: i64, progress: f64, deadline: Option<&str>) -> Task {
        Task {
            id: "t1".to_string(),
            title: "Task".to_string(),
            category: "study".to_string(),
            priority: Priority::Medium,
            complexity: Complexity::Medium,
            deadline: deadline.map(str::to_string),
            predicted_time,
            progress,
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_deadline_formats() {
        assert!(parse_deadline("2024-05-03T10:00:00Z").is_some());
        assert!(parse_deadline("2024-05-03T10:00:00+02:00").is_some());
        assert!(parse_deadline("2024-05-03T10:00:00").is_some());
        assert!(parse_deadline("2024-05-03T10:00:00.500").is_some());
        assert_eq!(
            parse_deadline("2024-05-03").unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 3)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
        assert!(parse_deadline("next tuesday").is_none());
    }

    #[test]
    fn test_days_available_with_deadline() {
        let task = make_task(120, 0.0, Some("2024-05-03T08:00:00"));
        assert_eq!(days_available(&task, now()), 2);

        // A few extra minutes past two full days rounds up to three
        let task = make_task(120, 0.0, Some("2024-05-03T08:30:00"));
        assert_eq!(days_available(&task, now()), 3);
    }

    #[test]
    fn test_days_available_past_deadline_floors_at_one() {
        let task = make_task(120, 0.0, Some("2024-04-01"));
        assert_eq!(days_available(&task, now()), 1);
    }

    #[test]
    fn test_days_available_unparseable_defaults() {
        let task = make_task(120, 0.0, Some("soonish"));
        assert_eq!(days_available(&task, now()), DEFAULT_DEADLINE_DAYS);
    }

    #[test]
    fn test_days_available_without_deadline_clamps() {
        assert_eq!(days_available(&make_task(30, 0.0, None), now()), 3);
        assert_eq!(days_available(&make_task(150, 0.0, None), now()), 5);
        assert_eq!(days_available(&make_task(600, 0.0, None), now()), 7);
    }

    #[test]
    fn test_short_task_single_session() {
        let sessions = break_into_sessions(&make_task(30, 0.0, None), now());
        assert_eq!(
            sessions,
            vec![Session {
                duration: 30,
                session_num: 1,
                total_sessions: 1
            }]
        );
    }

    #[test]
    fn test_finished_task_yields_nothing() {
        assert!(break_into_sessions(&make_task(60, 100.0, None), now()).is_empty());
        assert!(break_into_sessions(&make_task(60, 99.5, None), now()).is_empty());
    }

    #[test]
    fn test_sessions_sum_to_remaining() {
        let task = make_task(100, 0.0, None); // spreads over 3 days
        let sessions = break_into_sessions(&task, now());

        assert_eq!(sessions.len(), 3);
        assert_eq!(sessions.iter().map(|s| s.duration).sum::<i64>(), 100);
        // 100 / 3 = 33 r 1: first session gets the extra minute
        assert_eq!(sessions[0].duration, 34);
        assert_eq!(sessions[1].duration, 33);
        assert_eq!(sessions[2].duration, 33);
    }

    #[test]
    fn test_progress_shrinks_remaining() {
        let task = make_task(120, 50.0, Some("2024-05-03T08:00:00"));
        let sessions = break_into_sessions(&task, now());

        // remaining = 60, two days -> two 30-minute sessions
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions.iter().map(|s| s.duration).sum::<i64>(), 60);
    }

    #[test]
    fn test_far_deadline_never_produces_zero_sessions() {
        let far = (now() + Duration::days(200))
            .format("%Y-%m-%dT%H:%M:%S")
            .to_string();
        let task = make_task(60, 0.0, Some(far.as_str()));
        let sessions = break_into_sessions(&task, now());

        assert!(!sessions.is_empty());
        assert!(sessions.iter().all(|s| s.duration > 0));
        assert_eq!(sessions.iter().map(|s| s.duration).sum::<i64>(), 60);
    }

    #[test]
    fn test_daily_allocation_accounts_for_completed_work() {
        // remaining=60 over 2 days -> 30/day; 20 already done -> 10 left
        assert_eq!(daily_allocation(60.0, 2, 20), 10);
        assert_eq!(daily_allocation(60.0, 2, 0), 30);
        assert_eq!(daily_allocation(60.0, 2, 30), 0);
        assert_eq!(daily_allocation(60.0, 2, 45), -15);
    }
}
