//! Profile rendering pipeline with explicit stages.
//!
//! 1. **Load**: fetch the published sheet or read a local CSV export
//! 2. **Select**: pick the record to display
//! 3. **Build**: resolve fields, links, photo, extras and stat cards
//! 4. **Render**: produce hero HTML or the JSON view model

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use profile_core::build_profile;
use profile_ingest::{SheetSource, fetch_sheet_rows, read_rows_from_path};
use profile_model::{ProfileView, PublicationStats, RawRow, SocialOverrides};
use profile_report::{HtmlOptions, profile_json, render_hero_html};

use crate::logging::redact_value;

// ============================================================================
// Stage 1: Load
// ============================================================================

/// Where profile records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSource {
    /// Published Google Sheet, by document id.
    Sheet(String),
    /// Local CSV export with a header row.
    Csv(PathBuf),
}

/// Load every record from the source.
///
/// Sheet fetch failures are logged and yield no rows. A local file that
/// cannot be read is an error.
pub fn load_rows<S>(source: &ProfileSource, fetcher: &S) -> Result<Vec<RawRow>>
where
    S: SheetSource + ?Sized,
{
    match source {
        ProfileSource::Sheet(sheet_id) => Ok(fetch_sheet_rows(fetcher, sheet_id)),
        ProfileSource::Csv(path) => {
            let start = Instant::now();
            let rows = read_rows_from_path(path)
                .with_context(|| format!("read profile csv: {}", path.display()))?;
            info!(
                path = %path.display(),
                row_count = rows.len(),
                duration_ms = start.elapsed().as_millis(),
                "loaded profile csv"
            );
            Ok(rows)
        }
    }
}

// ============================================================================
// Stage 2: Select
// ============================================================================

/// Take the record at `index`, or an empty record when there is none.
pub fn select_row(mut rows: Vec<RawRow>, index: usize) -> RawRow {
    if index >= rows.len() {
        if !rows.is_empty() {
            warn!(
                requested = index,
                available = rows.len(),
                "row out of range, rendering defaults"
            );
        }
        return RawRow::new();
    }
    let row = rows.swap_remove(index);
    for (header, value) in row.iter() {
        debug!(column = header, value = redact_value(value), "selected cell");
    }
    row
}

// ============================================================================
// Stage 3: Build
// ============================================================================

/// Inputs that do not come from the spreadsheet.
#[derive(Debug, Clone, Default)]
pub struct BuildInputs {
    pub stats: Option<PublicationStats>,
    pub overrides: SocialOverrides,
    /// Number of times the stat deck is advanced before rendering.
    pub flips: usize,
}

/// Resolve a record into the display view.
pub fn build_view(row: &RawRow, inputs: &BuildInputs) -> ProfileView {
    let mut view = build_profile(row, inputs.stats.as_ref(), &inputs.overrides);
    let flips = match view.stats.len() {
        0 => 0,
        len => inputs.flips % len,
    };
    for _ in 0..flips {
        view.stats.advance();
    }
    debug!(
        extras = view.extras.len(),
        cards = view.stats.len(),
        active = view.stats.active(),
        "built profile view"
    );
    view
}

// ============================================================================
// Stage 4: Render
// ============================================================================

/// Output representation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderFormat {
    #[default]
    Html,
    Json,
}

pub fn render_view(
    view: &ProfileView,
    format: RenderFormat,
    options: &HtmlOptions,
) -> Result<String> {
    match format {
        RenderFormat::Html => render_hero_html(view, options),
        RenderFormat::Json => profile_json(view),
    }
}
