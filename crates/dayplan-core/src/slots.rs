//! Free-slot computation for a single day.
//!
//! Subtracts routine blocks from the wake-sleep window and returns the
//! ordered, non-overlapping free intervals that remain. Blocks that
//! wrap midnight count as two busy intervals.

use crate::error::Result;
use crate::model::RoutineBlock;
use crate::time::{parse_wall_clock, split_wraparound, TimeInterval};

/// Compute the ordered free slots within `[wake, sleep)`.
///
/// Busy intervals may overlap or arrive out of order; the sweep keeps a
/// running cursor and skips intervals it has already passed. Returns an
/// empty list when the blocks fully cover the window.
pub fn compute_free_slots(
    wake_minutes: i64,
    sleep_minutes: i64,
    blocks: &[RoutineBlock],
) -> Result<Vec<TimeInterval>> {
    let mut busy: Vec<TimeInterval> = Vec::new();
    for block in blocks {
        let start = parse_wall_clock(&block.start_time)?;
        let end = parse_wall_clock(&block.end_time)?;
        busy.extend(split_wraparound(start, end));
    }

    busy.sort_by_key(|interval| (interval.start, interval.end));

    let mut free_slots = Vec::new();
    let mut cursor = wake_minutes;

    for interval in &busy {
        // Already covered by an earlier block
        if interval.end <= cursor {
            continue;
        }

        if cursor < interval.start {
            let gap_end = interval.start.min(sleep_minutes);
            if cursor < gap_end {
                free_slots.push(TimeInterval::new(cursor, gap_end));
            }
        }

        cursor = cursor.max(interval.end);

        if cursor >= sleep_minutes {
            break;
        }
    }

    if cursor < sleep_minutes {
        free_slots.push(TimeInterval::new(cursor, sleep_minutes));
    }

    Ok(free_slots)
}
