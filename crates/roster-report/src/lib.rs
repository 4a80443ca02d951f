//! Grouped-schedule JSON output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use roster_model::CourseEntry;

/// Output path for a roster input: same location, `json` extension.
pub fn schedule_path(input: &Path) -> PathBuf {
    input.with_extension("json")
}

/// Write the grouped schedule as pretty-printed JSON (two-space indent,
/// numeric cells as JSON numbers, absent time/room as null).
pub fn write_schedule(path: &Path, entries: &[CourseEntry]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, entries)
        .with_context(|| format!("write schedule to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    info!(path = %path.display(), courses = entries.len(), "schedule written");
    Ok(())
}
