//! Line parsing and the batch loop.

use super::error::{LineError, LoadError};
use super::report::{LoadReport, RejectedLine};
use crate::heap::PriorityHeap;
use crate::record::{LoadRecord, RecordFields};
use log::{info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Number of comma-separated fields in a data line.
pub const FIELD_COUNT: usize = 5;

/// Parses and validates one data line.
///
/// # Examples
///
/// ```
/// use u_loadheap::loader::{parse_line, LineError};
///
/// let record = parse_line(" 1, 2, 3, 10, Medical supplies ").unwrap();
/// assert_eq!(record.priority(), 60);
/// assert_eq!(record.description(), "Medical supplies");
///
/// assert_eq!(parse_line("1,2,3"), Err(LineError::FieldCount { found: 3 }));
/// ```
pub fn parse_line(line: &str) -> Result<LoadRecord, LineError> {
    let mut fields: Vec<&str> = line.split(',').collect();
    // Trailing empty fields do not count: "1,2,3,4,desc," has five.
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    let fields: Vec<&str> = fields.into_iter().map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(LineError::FieldCount {
            found: fields.len(),
        });
    }

    let fields = RecordFields {
        id: parse_int("id", fields[0])?,
        category: parse_int("category", fields[1])?,
        urgency: parse_int("urgency", fields[2])?,
        weight: parse_int("weight", fields[3])?,
        description: fields[4].to_string(),
    };
    Ok(LoadRecord::try_from(fields)?)
}

/// Opens `path` and loads it with [`load_from_reader`].
pub fn load_from_path(
    path: impl AsRef<Path>,
    heap: &mut PriorityHeap<LoadRecord>,
) -> Result<LoadReport, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let report = load_from_reader(BufReader::new(file), heap)?;
    info!(
        "event=load_file module=loader status=ok path={} loaded={} rejected={}",
        path.display(),
        report.loaded,
        report.rejected.len()
    );
    Ok(report)
}

/// Loads every valid data line of `reader` into `heap`.
///
/// The whole input is read before anything is inserted, so a read failure
/// leaves the heap unchanged. Bytes that are not valid UTF-8 are replaced
/// with U+FFFD rather than failing the batch. Blank lines are ignored
/// silently; every other bad line ends up in [`LoadReport::rejected`].
pub fn load_from_reader<R: BufRead>(
    reader: R,
    heap: &mut PriorityHeap<LoadRecord>,
) -> Result<LoadReport, LoadError> {
    let mut lines = Vec::new();
    for (index, raw) in reader.split(b'\n').enumerate() {
        let line_number = index + 1;
        let mut raw = raw.map_err(|source| LoadError::Read {
            line_number,
            source,
        })?;
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        let line = String::from_utf8_lossy(&raw).into_owned();
        // header
        if index == 0 || line.trim().is_empty() {
            continue;
        }
        lines.push((line_number, line));
    }

    let parsed = parse_all(&lines);

    let mut report = LoadReport::default();
    for ((line_number, content), result) in lines.into_iter().zip(parsed) {
        match result {
            Ok(record) => {
                heap.insert(record);
                report.loaded += 1;
            }
            Err(error) => {
                warn!(
                    "event=line_rejected module=loader line={} reason=\"{}\"",
                    line_number, error
                );
                report.rejected.push(RejectedLine {
                    line_number,
                    content,
                    error,
                });
            }
        }
    }
    Ok(report)
}

#[cfg(not(feature = "parallel"))]
fn parse_all(lines: &[(usize, String)]) -> Vec<Result<LoadRecord, LineError>> {
    lines.iter().map(|(_, line)| parse_line(line)).collect()
}

#[cfg(feature = "parallel")]
fn parse_all(lines: &[(usize, String)]) -> Vec<Result<LoadRecord, LineError>> {
    use rayon::prelude::*;
    lines.par_iter().map(|(_, line)| parse_line(line)).collect()
}

fn parse_int(field: &'static str, raw: &str) -> Result<i32, LineError> {
    raw.parse().map_err(|_| LineError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}
