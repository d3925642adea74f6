//! Generate today's schedule from a JSON request.
//!
//! The schedule (or a `{"error": ...}` object on fatal failure) goes
//! to stdout; per-task advisory warnings go to stderr as JSON lines.

use std::path::PathBuf;

use dayplan_core::{Planner, ScheduleRequest};

use super::read_request;

pub fn run(input: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let raw = read_request(input)?;

    let request: ScheduleRequest = match serde_json::from_str(&raw) {
        Ok(request) => request,
        Err(e) => {
            println!("{}", serde_json::json!({ "error": e.to_string() }));
            return Err(Box::new(e));
        }
    };

    match Planner::new().generate(&request) {
        Ok(outcome) => {
            for warning in &outcome.warnings {
                eprintln!("{}", serde_json::to_string(warning)?);
            }
            println!("{}", serde_json::to_string(&outcome)?);
            Ok(())
        }
        Err(e) => {
            println!("{}", serde_json::json!({ "error": e.to_string() }));
            Err(Box::new(e))
        }
    }
}
