//! JSON view-model output.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use profile_model::ProfileView;

/// Pretty JSON for downstream consumers of the resolved profile.
pub fn profile_json(view: &ProfileView) -> Result<String> {
    let mut json = serde_json::to_string_pretty(view).context("serialize profile view")?;
    json.push('\n');
    Ok(json)
}

/// Write rendered output, creating parent directories as needed.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output dir: {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("write output: {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(())
}
