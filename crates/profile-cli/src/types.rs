use std::path::PathBuf;

use profile_model::ProfileView;

/// Outcome of a `render` run.
#[derive(Debug)]
pub struct RenderResult {
    pub view: ProfileView,
    pub row_count: usize,
    /// File the output went to; `None` when it was printed.
    pub output: Option<PathBuf>,
    pub bytes: usize,
}
