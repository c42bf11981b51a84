//! CSV workload loader.
//!
//! # CSV format
//!
//! One row per passenger request.  Rows need not be sorted; requests sharing
//! a tick are submitted in file order.
//!
//! ```csv
//! tick,start_floor,end_floor
//! 0,1,5
//! 0,1,9
//! 3,8,1
//! ```

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::{PassengerRequest, Tick};

use crate::{WorkloadError, WorkloadResult, WorkloadScript};

#[derive(Deserialize)]
struct WorkloadRecord {
    tick:        u64,
    start_floor: u32,
    end_floor:   u32,
}

/// Load a [`WorkloadScript`] from a CSV file.
pub fn load_script_csv(path: &Path) -> WorkloadResult<WorkloadScript> {
    let file = std::fs::File::open(path).map_err(WorkloadError::Io)?;
    load_script_reader(file)
}

/// Like [`load_script_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for scripts embedded in
/// a binary.
pub fn load_script_reader<R: Read>(reader: R) -> WorkloadResult<WorkloadScript> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut script = WorkloadScript::new();
    for (line, result) in csv_reader.deserialize::<WorkloadRecord>().enumerate() {
        // +2: one for the header, one for 1-based line numbers.
        let row = result.map_err(|e| WorkloadError::Parse(format!("row {}: {e}", line + 2)))?;
        script.push(Tick(row.tick), PassengerRequest::new(row.start_floor, row.end_floor));
    }
    Ok(script)
}
