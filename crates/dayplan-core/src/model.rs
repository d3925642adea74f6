//! Request, task, and schedule-entry types.
//!
//! These mirror the wire format consumed from the request layer: tasks
//! arrive with a predicted total duration from the external predictor,
//! a priority/complexity label, an optional ISO-8601 deadline, and a
//! completion percentage. The engine never mutates its inputs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Task priority label assigned by the external predictor or the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// Scheduling rank: lower ranks are allocated first.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Urgent => 0,
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }
}

/// Task complexity label from the external predictor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Complexity {
    Low,
    #[default]
    Medium,
    High,
}

/// A pending task to be placed into today's schedule.
///
/// Read-only input: `predicted_time` and `progress` are owned by the
/// external task-tracking system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub complexity: Complexity,
    /// Optional ISO-8601 deadline (`YYYY-MM-DD` also accepted)
    #[serde(default)]
    pub deadline: Option<String>,
    /// Total estimated minutes for the whole task
    pub predicted_time: i64,
    /// Percent complete, 0-100
    #[serde(default)]
    pub progress: f64,
}

/// A fixed daily commitment that removes time from the schedulable
/// window. May wrap midnight (`end_time < start_time`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutineBlock {
    pub activity_type: String,
    pub start_time: String, // HH:MM[:SS]
    pub end_time: String,   // HH:MM[:SS]
}

fn default_wake_up() -> String {
    "07:00".to_string()
}

fn default_sleep() -> String {
    "23:00".to_string()
}

/// Wake/sleep boundary of the schedulable day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRoutine {
    #[serde(default = "default_wake_up")]
    pub wake_up: String, // HH:MM
    #[serde(default = "default_sleep")]
    pub sleep: String, // HH:MM
}

impl Default for DailyRoutine {
    fn default() -> Self {
        Self {
            wake_up: default_wake_up(),
            sleep: default_sleep(),
        }
    }
}

/// One contiguous chunk of work on a task, possibly one of several
/// spread across days. Derived fresh on every call, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub duration: i64,
    pub session_num: u32,
    pub total_sessions: u32,
}

/// Session metadata attached to a schedule entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub session_num: u32,
    pub total_sessions: u32,
    pub is_multi_session: bool,
}

impl From<Session> for SessionInfo {
    fn from(session: Session) -> Self {
        Self {
            session_num: session.session_num,
            total_sessions: session.total_sessions,
            is_multi_session: session.total_sessions > 1,
        }
    }
}

/// Discriminator for non-task schedule entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// A fixed routine block echoed into the output timeline
    Routine,
    /// Marker for a task that already met its daily goal
    CompletedSession,
}

/// One record of the output timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    pub title: String,
    pub start: String,
    pub end: String,
    pub duration: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_info: Option<SessionInfo>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<EntryKind>,
}

/// A full scheduling request as consumed from the transport layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    #[serde(default)]
    pub routine: DailyRoutine,
    #[serde(default)]
    pub routine_blocks: Vec<RoutineBlock>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    /// Minutes already worked today per task id; absent keys mean 0
    #[serde(default)]
    pub completed_today: HashMap<String, i64>,
}

/// Advisory warning for a task that could not be placed today.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleWarning {
    pub task_id: String,
    pub message: String,
}

/// Result of one scheduling run: the sorted timeline plus any
/// per-task warnings for the side channel.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleOutcome {
    pub schedule: Vec<ScheduleEntry>,
    #[serde(skip)]
    pub warnings: Vec<ScheduleWarning>,
}
