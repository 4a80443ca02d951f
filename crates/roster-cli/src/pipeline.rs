//! Convert pipeline with explicit stages.
//!
//! 1. **Ingest**: read the roster CSV into raw rows
//! 2. **Transform**: normalize, aggregate, order
//! 3. **Output**: write the grouped schedule JSON
//!
//! Each stage takes the output of the previous stage; the transform stage
//! is pure and never fails.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use roster_ingest::read_roster;
use roster_model::{CourseEntry, FIELD_COURSE};
use roster_report::{schedule_path, write_schedule};
use roster_transform::{NormalizeOptions, aggregate, course_key, normalize_rows, order_entries};

use crate::types::{ConvertResult, CourseSummary};

/// Settings for one convert run.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub input: PathBuf,
    /// Output override; derived from the input path when unset.
    pub output: Option<PathBuf>,
    pub options: NormalizeOptions,
    pub dry_run: bool,
}

/// Run the full pipeline for one roster file.
pub fn run_pipeline(config: &ConvertConfig) -> Result<ConvertResult> {
    let span = info_span!("convert", input = %config.input.display());
    let _guard = span.enter();

    let rows = read_roster(&config.input)
        .with_context(|| format!("read roster {}", config.input.display()))?;
    let rows_read = rows.len();
    info!(rows = rows_read, "roster ingested");

    let normalized = normalize_rows(rows, config.options);
    let rows_skipped = normalized
        .iter()
        .filter(|row| {
            row.get(FIELD_COURSE)
                .is_none_or(|course| course.is_empty_text() || course_key(course).is_none())
        })
        .count();
    let mut entries = aggregate(normalized);
    order_entries(&mut entries);
    debug!(courses = entries.len(), skipped = rows_skipped, "roster grouped");

    let output = if config.dry_run {
        None
    } else {
        let path = config
            .output
            .clone()
            .unwrap_or_else(|| schedule_path(&config.input));
        write_schedule(&path, &entries)?;
        Some(path)
    };

    Ok(ConvertResult {
        input: config.input.clone(),
        output,
        rows_read,
        rows_skipped,
        courses: entries.iter().map(course_summary).collect(),
    })
}

fn course_summary(entry: &CourseEntry) -> CourseSummary {
    CourseSummary {
        course: entry.course.clone(),
        days: entry.sessions.len(),
        sessions: entry.sessions.values().map(Vec::len).sum(),
    }
}
