//! CLI argument definitions for the profile renderer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use profile_cli::pipeline::{ProfileSource, RenderFormat};
use profile_model::{PublicationStats, SocialOverrides};

#[derive(Parser)]
#[command(
    name = "profile",
    version,
    about = "Faculty profile renderer - Build a profile hero section from a spreadsheet",
    long_about = "Render a faculty profile hero section from a published Google Sheet.\n\n\
                  Column headers are matched against known aliases; anything unrecognized\n\
                  is shown as an extra field. Output is HTML or the resolved JSON view."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp (pretty and compact formats).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the module path of each log event.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Include spreadsheet cell values in debug logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the hero section for one profile record.
    Render(RenderArgs),

    /// Print the resolved fields of one profile record as a table.
    Show(ShowArgs),

    /// List the header aliases recognized for each field.
    Fields,
}

#[derive(Args)]
pub struct SourceArgs {
    /// Published Google Sheet id to fetch.
    #[arg(
        long = "sheet",
        value_name = "SHEET_ID",
        conflicts_with = "csv",
        required_unless_present = "csv"
    )]
    pub sheet: Option<String>,

    /// Local CSV export to read instead of fetching.
    #[arg(long = "csv", value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Zero-based record index to display.
    #[arg(long = "row", value_name = "N", default_value_t = 0)]
    pub row: usize,
}

impl SourceArgs {
    pub fn source(&self) -> ProfileSource {
        match (&self.sheet, &self.csv) {
            (Some(sheet), _) => ProfileSource::Sheet(sheet.clone()),
            (None, Some(path)) => ProfileSource::Csv(path.clone()),
            // clap guarantees one of the two
            (None, None) => ProfileSource::Sheet(String::new()),
        }
    }
}

#[derive(Args)]
pub struct OverrideArgs {
    /// Journal publication count.
    #[arg(long = "journals", value_name = "N")]
    pub journals: Option<u32>,

    /// Conference publication count.
    #[arg(long = "conferences", value_name = "N")]
    pub conferences: Option<u32>,

    /// Books published.
    #[arg(long = "books", value_name = "N")]
    pub books: Option<u32>,

    /// Contact email shown instead of the sheet's email column.
    #[arg(long = "mail", value_name = "ADDRESS")]
    pub mail: Option<String>,

    /// GitHub profile URL.
    #[arg(long = "github", value_name = "URL")]
    pub github: Option<String>,

    /// LinkedIn profile URL.
    #[arg(long = "linkedin", value_name = "URL")]
    pub linkedin: Option<String>,
}

impl OverrideArgs {
    /// Publication counts, present only when at least one count flag was given.
    pub fn stats(&self) -> Option<PublicationStats> {
        if self.journals.is_none() && self.conferences.is_none() && self.books.is_none() {
            return None;
        }
        Some(PublicationStats {
            journals: self.journals.unwrap_or_default(),
            conferences: self.conferences.unwrap_or_default(),
            books: self.books.unwrap_or_default(),
        })
    }

    pub fn social(&self) -> SocialOverrides {
        SocialOverrides {
            mail: self.mail.clone(),
            github: self.github.clone(),
            linkedin: self.linkedin.clone(),
        }
    }
}

#[derive(Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub overrides: OverrideArgs,

    /// Output format to generate.
    #[arg(long = "format", value_enum, default_value = "html")]
    pub format: OutputFormatArg,

    /// Write output to a file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Emit only the hero section instead of a complete HTML page.
    #[arg(long = "fragment")]
    pub fragment: bool,

    /// Page title for standalone HTML (default: the profile name).
    #[arg(long = "title", value_name = "TITLE")]
    pub title: Option<String>,

    /// Advance the stat deck this many cards before rendering.
    #[arg(long = "flip", value_name = "N", default_value_t = 0)]
    pub flip: usize,
}

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormatArg {
    /// Hero section markup.
    Html,
    /// Resolved view model.
    Json,
}

impl From<OutputFormatArg> for RenderFormat {
    fn from(value: OutputFormatArg) -> Self {
        match value {
            OutputFormatArg::Html => RenderFormat::Html,
            OutputFormatArg::Json => RenderFormat::Json,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
