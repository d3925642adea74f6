//! Print the computed free slots for a request.
//!
//! Inspection aid for checking how routine blocks carve up the day
//! without running the full allocator.

use std::path::PathBuf;

use dayplan_core::{compute_free_slots, format_12h, parse_wall_clock, ScheduleRequest};

use super::read_request;

pub fn run(input: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let raw = read_request(input)?;
    let request: ScheduleRequest = serde_json::from_str(&raw)?;

    let wake = parse_wall_clock(&request.routine.wake_up)?;
    let sleep = parse_wall_clock(&request.routine.sleep)?;
    let slots = compute_free_slots(wake, sleep, &request.routine_blocks)?;

    let rendered: Vec<_> = slots
        .iter()
        .map(|slot| {
            serde_json::json!({
                "start": format_12h(slot.start),
                "end": format_12h(slot.end),
                "start_minutes": slot.start,
                "end_minutes": slot.end,
                "duration": slot.duration_minutes(),
            })
        })
        .collect();

    println!(
        "{}",
        serde_json::to_string(&serde_json::json!({ "free_slots": rendered }))?
    );
    Ok(())
}
