pub mod schedule;
pub mod slots;

use std::io::Read;
use std::path::PathBuf;

/// Read a JSON request from a file or stdin.
pub fn read_request(input: Option<PathBuf>) -> Result<String, Box<dyn std::error::Error>> {
    match input {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}
