use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::info;

use rota_core::models::exam::ExamRow;
use rota_core::models::schedule::Schedule;

use crate::error::SheetError;

/// Columns the schedule table must carry, by position:
/// date, start time, end time, course code, course name.
const COLUMNS: usize = 5;

/// Read a schedule from any delimited-text reader.
///
/// The first record is the header row and is skipped. Every following
/// record must carry at least five columns; extra columns are ignored and
/// every cell is taken as text verbatim.
pub fn read_schedule<R: Read>(reader: R) -> Result<Schedule, SheetError> {
    let mut sheet = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (idx, record) in sheet.records().enumerate() {
        let record = record?;
        if record.len() < COLUMNS {
            return Err(SheetError::ShortRecord {
                record: idx + 1,
                found: record.len(),
                expected: COLUMNS,
            });
        }
        rows.push(ExamRow {
            date: record[0].to_string(),
            start_time: record[1].to_string(),
            end_time: record[2].to_string(),
            course_code: record[3].to_string(),
            course_name: record[4].to_string(),
        });
    }

    info!(rows = rows.len(), "schedule sheet read");
    Ok(Schedule::new(rows))
}

/// Load a schedule from a file on disk.
pub fn load_schedule(path: impl AsRef<Path>) -> Result<Schedule, SheetError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SheetError::Open {
        path: path.display().to_string(),
        source,
    })?;
    read_schedule(file)
}
