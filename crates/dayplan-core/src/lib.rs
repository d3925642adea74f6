//! # Dayplan Core Library
//!
//! Core scheduling logic for Dayplan: assigns a user's pending tasks
//! to concrete time slots within a single day, respecting fixed
//! routine blocks, priority/deadline ordering, multi-day chunking,
//! and progress already made today.
//!
//! The engine is a deterministic greedy allocator run once per
//! request. It holds no state between calls: free slots and
//! completed-today minutes arrive as input and are discarded after
//! the schedule is returned. Duration prediction, transport, and
//! persistence live in collaborating layers.
//!
//! ## Key Components
//!
//! - [`TimeInterval`]: minute-resolution time-of-day intervals
//! - [`compute_free_slots`]: wake-sleep window minus routine blocks
//! - [`break_into_sessions`]: multi-day chunking of remaining work
//! - [`place_session`]: scored placement into the best free slot
//! - [`Planner`]: the per-request engine tying it all together

pub mod allocator;
pub mod chunking;
pub mod engine;
pub mod error;
pub mod model;
pub mod slots;
pub mod time;

pub use allocator::{place_session, score_slot, Placement, TimeBand, SLOT_BUFFER_MINUTES};
pub use chunking::{
    break_into_sessions, daily_allocation, days_available, parse_deadline, remaining_minutes,
    MAX_SESSION_MINUTES,
};
pub use engine::Planner;
pub use error::{Result, ScheduleError};
pub use model::{
    Complexity, DailyRoutine, EntryKind, Priority, RoutineBlock, ScheduleEntry, ScheduleOutcome,
    ScheduleRequest, ScheduleWarning, Session, SessionInfo, Task,
};
pub use slots::compute_free_slots;
pub use time::{format_12h, parse_wall_clock, split_wraparound, TimeInterval, MINUTES_PER_DAY};
