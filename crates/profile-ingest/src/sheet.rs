//! Google Sheets CSV export source.

use std::time::Instant;

use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::{debug, error, info};

use profile_model::RawRow;

use crate::csv_rows::parse_rows;
use crate::error::{IngestError, Result};

/// Spreadsheet export base URL.
const SHEETS_EXPORT_BASE: &str = "https://docs.google.com/spreadsheets/d";

/// User agent string for export requests.
const USER_AGENT_VALUE: &str = concat!("faculty-profile/", env!("CARGO_PKG_VERSION"));

/// Published CSV export URL for a sheet.
///
/// `timestamp_ms` is appended as `t=` so caches never serve a stale export.
pub fn sheet_export_url(sheet_id: &str, timestamp_ms: i64) -> String {
    format!("{SHEETS_EXPORT_BASE}/{sheet_id}/export?format=csv&t={timestamp_ms}")
}

/// Anything that can return the CSV body behind an export URL.
pub trait SheetSource {
    fn fetch_csv(&self, url: &str) -> Result<String>;
}

/// Blocking HTTP source backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpSheetSource {
    client: reqwest::blocking::Client,
}

impl HttpSheetSource {
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| IngestError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

impl SheetSource for HttpSheetSource {
    fn fetch_csv(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.text()?)
    }
}

/// Fetch and parse one sheet, returning the error instead of degrading.
pub fn try_fetch_sheet_rows<S>(source: &S, sheet_id: &str) -> Result<Vec<RawRow>>
where
    S: SheetSource + ?Sized,
{
    let url = sheet_export_url(sheet_id, Utc::now().timestamp_millis());
    debug!(%url, "fetching sheet export");
    let body = source.fetch_csv(&url)?;
    parse_rows(&body)
}

/// Fetch one sheet's rows. Any failure is logged and yields no rows.
pub fn fetch_sheet_rows<S>(source: &S, sheet_id: &str) -> Vec<RawRow>
where
    S: SheetSource + ?Sized,
{
    let start = Instant::now();
    match try_fetch_sheet_rows(source, sheet_id) {
        Ok(rows) => {
            info!(
                sheet_id,
                row_count = rows.len(),
                duration_ms = start.elapsed().as_millis(),
                "sheet fetched"
            );
            rows
        }
        Err(err) => {
            error!(sheet_id, error = %err, "error fetching CSV for sheet");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_url_carries_format_and_timestamp() {
        let url = sheet_export_url("abc123", 1_700_000_000_000);
        assert_eq!(
            url,
            "https://docs.google.com/spreadsheets/d/abc123/export?format=csv&t=1700000000000"
        );
    }

    #[test]
    fn test_client_creation() {
        assert!(HttpSheetSource::new().is_ok());
    }
}
