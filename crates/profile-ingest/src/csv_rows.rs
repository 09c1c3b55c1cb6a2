//! CSV text to [`RawRow`]s.

use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use profile_model::RawRow;

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().to_string()
}

/// Parse CSV text whose first record is the header row.
///
/// Headers and cells are trimmed. Blank lines are skipped, short records are
/// padded with empty cells and cells past the header width are dropped.
pub fn parse_rows(text: &str) -> Result<Vec<RawRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());
    let headers: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();
    if headers.is_empty() {
        return Ok(Vec::new());
    }

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() > headers.len() {
            debug!(
                record = idx + 1,
                dropped = record.len() - headers.len(),
                "record wider than header row"
            );
        }
        let row: RawRow = headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                let value = record.get(col).map(normalize_cell).unwrap_or_default();
                (header.clone(), value)
            })
            .collect();
        rows.push(row);
    }
    Ok(rows)
}

/// Read a local CSV export with the same rules as [`parse_rows`].
pub fn read_rows_from_path(path: &Path) -> Result<Vec<RawRow>> {
    let text = fs::read_to_string(path).map_err(|source| IngestError::io(path, source))?;
    let rows = parse_rows(&text)?;
    debug!(path = %path.display(), row_count = rows.len(), "read csv file");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_headers_and_cells() {
        let rows = parse_rows(" Full Name , Dept \n  Ada Lovelace ,  CSE \n").unwrap();
        assert_eq!(rows.len(), 1);
        let headers: Vec<&str> = rows[0].headers().collect();
        assert_eq!(headers, vec!["Full Name", "Dept"]);
        assert_eq!(rows[0].get("Full Name"), Some("Ada Lovelace"));
        assert_eq!(rows[0].get("Dept"), Some("CSE"));
    }

    #[test]
    fn strips_byte_order_mark() {
        let rows = parse_rows("\u{feff}Name,Email\nAda,ada@x.edu\n").unwrap();
        assert_eq!(rows[0].get("Name"), Some("Ada"));
    }

    #[test]
    fn skips_blank_lines() {
        let rows = parse_rows("Name\nAda\n\nGrace\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].get("Name"), Some("Grace"));
    }

    #[test]
    fn pads_short_records() {
        let rows = parse_rows("Name,Email,Phone\nAda\n").unwrap();
        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[0].get("Email"), Some(""));
        assert_eq!(rows[0].get("Phone"), Some(""));
    }

    #[test]
    fn drops_cells_past_header_width() {
        let rows = parse_rows("Name\nAda,extra\n").unwrap();
        assert_eq!(rows[0].len(), 1);
        assert_eq!(rows[0].get("Name"), Some("Ada"));
    }

    #[test]
    fn quoted_cells_keep_commas() {
        let rows = parse_rows("Name,Institution\nAda,\"Analytical Engines, Ltd\"\n").unwrap();
        assert_eq!(rows[0].get("Institution"), Some("Analytical Engines, Ltd"));
    }

    #[test]
    fn empty_text_yields_no_rows() {
        assert!(parse_rows("").unwrap().is_empty());
    }
}
