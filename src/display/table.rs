//! Table layout shared by every listing.

use crate::record::LoadRecord;
use std::io::{self, Write};

/// Column titles, aligned with [`LoadRecord`]'s `Display` row.
pub const TABLE_HEADER: &str = "ID   | Type | Urgency  | Wgt  | Priority   | Description";

/// Width of the horizontal rules around a table.
pub const RULE_WIDTH: usize = 75;

/// Printed in place of a table when there is nothing to show.
pub const EMPTY_MESSAGE: &str = "No loads registered.";

/// Writes a full table: rule, header, rule, then one row per record.
///
/// Writes [`EMPTY_MESSAGE`] instead when `records` is empty. Returns the
/// number of rows written.
pub fn write_table<'a, W, I>(out: &mut W, records: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a LoadRecord>,
{
    let mut records = records.into_iter().peekable();
    if records.peek().is_none() {
        writeln!(out, "{EMPTY_MESSAGE}")?;
        return Ok(0);
    }

    writeln!(out, "\n{}", "=".repeat(RULE_WIDTH))?;
    write_header(out)?;
    let mut rows = 0;
    for record in records {
        writeln!(out, "{record}")?;
        rows += 1;
    }
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    Ok(rows)
}

/// Writes a single record under a `=== title ===` banner.
pub fn write_record<W: Write>(out: &mut W, title: &str, record: &LoadRecord) -> io::Result<()> {
    writeln!(out, "\n=== {title} ===")?;
    write_header(out)?;
    writeln!(out, "{record}")
}

fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{TABLE_HEADER}")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}
