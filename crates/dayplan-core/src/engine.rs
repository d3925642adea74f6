//! Scheduling engine: turns a request into today's timeline.
//!
//! Control flow per run: compute the day's free slots, sort tasks by
//! priority and deadline, then for each task chunk its remaining work,
//! derive today's target duration, and commit a placement. Placed
//! sessions, routine blocks, and completed-today markers merge into
//! one chronologically sorted output list.
//!
//! The engine holds no process-wide state; every run owns its slot
//! list and output, so concurrent runs are fully independent. A task
//! that cannot be placed is skipped with a warning and never aborts
//! the rest of the run.

use chrono::{Local, NaiveDateTime};

use crate::allocator::place_session;
use crate::chunking::{
    break_into_sessions, daily_allocation, days_available, remaining_minutes, MAX_SESSION_MINUTES,
};
use crate::error::Result;
use crate::model::{
    EntryKind, ScheduleEntry, ScheduleOutcome, ScheduleRequest, ScheduleWarning, Task,
};
use crate::slots::compute_free_slots;
use crate::time::{format_12h, parse_wall_clock, MINUTES_PER_DAY};

/// Sort sentinel for tasks without a deadline: after every real date.
const NO_DEADLINE: &str = "9999-12-31";

/// Greedy single-day scheduling engine.
///
/// The clock is injected so runs are reproducible under test.
pub struct Planner {
    now: NaiveDateTime,
}

impl Planner {
    /// Create a planner using the current local time.
    pub fn new() -> Self {
        Self {
            now: Local::now().naive_local(),
        }
    }

    /// Create a planner with a fixed clock.
    pub fn with_now(now: NaiveDateTime) -> Self {
        Self { now }
    }

    /// Generate today's schedule for a request.
    ///
    /// Fatal only on an unusable routine (unparseable wake/sleep or
    /// block times); every per-task problem is recovered locally.
    pub fn generate(&self, req: &ScheduleRequest) -> Result<ScheduleOutcome> {
        let wake_minutes = parse_wall_clock(&req.routine.wake_up)?;
        let sleep_minutes = parse_wall_clock(&req.routine.sleep)?;

        let mut free_slots = compute_free_slots(wake_minutes, sleep_minutes, &req.routine_blocks)?;

        let mut ordered: Vec<&Task> = req.tasks.iter().collect();
        ordered.sort_by(|a, b| task_sort_key(a).cmp(&task_sort_key(b)));

        // Entries keyed by start minute so display formatting stays
        // out of the ordering
        let mut timed: Vec<(i64, ScheduleEntry)> = Vec::new();
        let mut warnings = Vec::new();

        for task in ordered {
            let completed_today = req.completed_today.get(&task.id).copied().unwrap_or(0);

            let sessions = break_into_sessions(task, self.now);
            let Some(first_session) = sessions.first().copied() else {
                // Nothing left on the task
                if completed_today > 0 {
                    timed.push((0, completed_marker(task, completed_today)));
                }
                continue;
            };

            let remaining = remaining_minutes(task);

            // With a deadline, pace the remaining work across the days
            // left; otherwise today's share is the chunker's first
            // session.
            let allocation = if task.deadline.is_some() {
                let days = days_available(task, self.now);
                daily_allocation(remaining, days, completed_today)
            } else {
                first_session.duration - completed_today
            };

            if allocation <= 0 {
                if completed_today > 0 {
                    timed.push((0, completed_marker(task, completed_today)));
                }
                continue;
            }

            let target = allocation
                .min(MAX_SESSION_MINUTES)
                .min(remaining.round() as i64);

            match place_session(target, task.complexity, task.priority, &mut free_slots) {
                Some(placement) => {
                    let title = if first_session.total_sessions > 1 {
                        format!(
                            "{} (Part {}/{})",
                            task.title, first_session.session_num, first_session.total_sessions
                        )
                    } else {
                        task.title.clone()
                    };

                    timed.push((
                        placement.start,
                        ScheduleEntry {
                            task_id: Some(task.id.clone()),
                            title,
                            start: format_12h(placement.start),
                            end: format_12h(placement.end),
                            duration: target,
                            session_info: Some(first_session.into()),
                            kind: None,
                        },
                    ));
                }
                None => warnings.push(ScheduleWarning {
                    task_id: task.id.clone(),
                    message: format!(
                        "Could not schedule task '{}' - no free slots available",
                        task.title
                    ),
                }),
            }
        }

        for block in &req.routine_blocks {
            let start = parse_wall_clock(&block.start_time)?;
            let end = parse_wall_clock(&block.end_time)?;
            let duration = if end >= start {
                end - start
            } else {
                MINUTES_PER_DAY - start + end
            };

            timed.push((
                start,
                ScheduleEntry {
                    task_id: None,
                    title: title_case(&block.activity_type),
                    start: format_12h(start),
                    end: format_12h(end),
                    duration,
                    session_info: None,
                    kind: Some(EntryKind::Routine),
                },
            ));
        }

        timed.sort_by_key(|(minute, _)| *minute);

        Ok(ScheduleOutcome {
            schedule: timed.into_iter().map(|(_, entry)| entry).collect(),
            warnings,
        })
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new()
    }
}

/// Urgent first, then High, then everything else; earlier deadlines
/// break ties within a rank. Stable against input order.
fn task_sort_key(task: &Task) -> (u8, String) {
    (
        task.priority.rank(),
        task.deadline.clone().unwrap_or_else(|| NO_DEADLINE.to_string()),
    )
}

/// Marker for a task whose daily goal is already met. Carries no real
/// clock time; sorts as minute zero.
fn completed_marker(task: &Task, completed_today: i64) -> ScheduleEntry {
    ScheduleEntry {
        task_id: Some(task.id.clone()),
        title: task.title.clone(),
        start: "Done".to_string(),
        end: "Today".to_string(),
        duration: completed_today,
        session_info: None,
        kind: Some(EntryKind::CompletedSession),
    }
}

/// Title-case an activity name: "study group" -> "Study Group".
fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
