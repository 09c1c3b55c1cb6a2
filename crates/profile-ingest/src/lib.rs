//! Profile data ingestion.
//!
//! Fetches a published spreadsheet as CSV and turns it into [`RawRow`]s with
//! trimmed headers and cells. The top-level [`fetch_sheet_rows`] never fails:
//! transport and parse errors degrade to an empty row list.
//!
//! [`RawRow`]: profile_model::RawRow

pub mod csv_rows;
pub mod error;
pub mod sheet;

pub use csv_rows::{parse_rows, read_rows_from_path};
pub use error::{IngestError, Result};
pub use sheet::{
    HttpSheetSource, SheetSource, fetch_sheet_rows, sheet_export_url, try_fetch_sheet_rows,
};
