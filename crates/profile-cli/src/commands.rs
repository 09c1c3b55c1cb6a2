use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use profile_cli::pipeline::{
    BuildInputs, ProfileSource, build_view, load_rows, render_view, select_row,
};
use profile_core::{ALIAS_GROUPS, NON_FIELD_COLUMNS};
use profile_ingest::HttpSheetSource;
use profile_model::ProfileView;
use profile_report::{HtmlOptions, write_output};

use crate::cli::{OverrideArgs, RenderArgs, ShowArgs, SourceArgs};
use crate::summary::{apply_table_style, dim_cell, header_cell, print_profile};
use crate::types::RenderResult;

pub fn run_fields() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Accepted headers")]);
    apply_table_style(&mut table);
    for group in ALIAS_GROUPS {
        table.add_row(vec![group.field.to_string(), group.candidates.join(", ")]);
    }
    table.add_row(vec![
        dim_cell("(not shown)"),
        dim_cell(NON_FIELD_COLUMNS.join(", ")),
    ]);
    println!("{table}");
    Ok(())
}

pub fn run_render(args: &RenderArgs) -> Result<RenderResult> {
    let span = info_span!("render", row = args.source.row);
    let _guard = span.enter();
    let start = Instant::now();

    let (view, row_count) = resolve_view(&args.source, &args.overrides, args.flip)?;

    let options = if args.fragment {
        HtmlOptions::default()
    } else {
        let options = HtmlOptions::standalone();
        match &args.title {
            Some(title) => options.with_title(title),
            None => options,
        }
    };
    let rendered = render_view(&view, args.format.into(), &options)?;

    match &args.output {
        Some(path) => write_output(path, &rendered)?,
        None => print!("{rendered}"),
    }
    info!(
        format = ?args.format,
        bytes = rendered.len(),
        duration_ms = start.elapsed().as_millis(),
        "render complete"
    );

    Ok(RenderResult {
        view,
        row_count,
        output: args.output.clone(),
        bytes: rendered.len(),
    })
}

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let span = info_span!("show", row = args.source.row);
    let _guard = span.enter();
    let (view, _) = resolve_view(&args.source, &args.overrides, 0)?;
    print_profile(&view);
    Ok(())
}

fn resolve_view(
    source_args: &SourceArgs,
    overrides: &OverrideArgs,
    flips: usize,
) -> Result<(ProfileView, usize)> {
    let source = source_args.source();
    let rows = match &source {
        ProfileSource::Sheet(_) => {
            let fetcher = HttpSheetSource::new().context("create sheet client")?;
            load_rows(&source, &fetcher)?
        }
        ProfileSource::Csv(_) => load_rows(&source, &NoSheet)?,
    };
    let row_count = rows.len();
    let row = select_row(rows, source_args.row);
    let inputs = BuildInputs {
        stats: overrides.stats(),
        overrides: overrides.social(),
        flips,
    };
    Ok((build_view(&row, &inputs), row_count))
}

/// Fetcher for local sources, which never go over the network.
struct NoSheet;

impl profile_ingest::SheetSource for NoSheet {
    fn fetch_csv(&self, url: &str) -> profile_ingest::Result<String> {
        Err(profile_ingest::IngestError::Network(format!(
            "no sheet client for {url}"
        )))
    }
}
