use anyhow::{Context, Result};
use std::{fs, io::Write, path::Path};
use tempfile::NamedTempFile;
use tracing::info;

use crate::convert::NameRecord;

/// Serialize `records` as a pretty-printed JSON array and move it into place
/// at `path`, creating parent directories as needed.
///
/// The JSON goes to a temp file in the destination directory first and is
/// renamed over the target, so a failed run never leaves a partial output.
pub fn write_records(records: &[NameRecord], path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)
        .with_context(|| format!("creating output directory {}", dir.display()))?;

    let json = render(records)?;

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temp file in {}", dir.display()))?;
    tmp.write_all(json.as_bytes()).context("writing output JSON")?;
    tmp.persist(path)
        .with_context(|| format!("moving output into place at {}", path.display()))?;

    info!(records = records.len(), path = %path.display(), "wrote output JSON");
    Ok(())
}

/// Render records with the exact formatting the output file uses: two-space
/// indent, non-ASCII written literally, trailing newline.
pub fn render(records: &[NameRecord]) -> Result<String> {
    let mut json =
        serde_json::to_string_pretty(records).context("serializing records to JSON")?;
    json.push('\n');
    Ok(json)
}
