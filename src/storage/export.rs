//! CSV serialization of the joined stat listing

use super::{models::StatRecord, schema::StatsDatabase};
use crate::error::Result;
use std::fmt::Write;

/// Header row of the CSV export
pub const CSV_HEADER: &str = "Player,Date,Team,Points,Rebounds,Assists,Steals,Blocks,Turnovers";

impl StatsDatabase {
    /// Every stat row as CSV text (header included, stat ids omitted)
    pub fn export_csv(&self) -> Result<String> {
        let records = self.list_all_stats()?;
        Ok(records_to_csv(&records))
    }
}

/// Render stat records as CSV. A missing team becomes an empty field.
pub fn records_to_csv(records: &[StatRecord]) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + records.len() * 48);
    out.push_str(CSV_HEADER);
    out.push('\n');

    for record in records {
        let line = &record.line;
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{},{},{}",
            escape_field(&record.player),
            record.date.format("%Y-%m-%d"),
            escape_field(record.team.as_deref().unwrap_or("")),
            line.points,
            line.rebounds,
            line.assists,
            line.steals,
            line.blocks,
            line.turnovers,
        );
    }
    out
}

/// Quote a field if it contains a delimiter, quote or line break
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fields_are_untouched() {
        assert_eq!(escape_field("Lakers"), "Lakers");
        assert_eq!(escape_field(""), "");
    }

    #[test]
    fn test_fields_with_delimiters_are_quoted() {
        assert_eq!(escape_field("Smith, Jr."), "\"Smith, Jr.\"");
        assert_eq!(escape_field("The \"Mailman\""), "\"The \"\"Mailman\"\"\"");
        assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_empty_export_is_header_only() {
        assert_eq!(records_to_csv(&[]), format!("{}\n", CSV_HEADER));
    }
}
