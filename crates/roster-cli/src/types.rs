use std::path::PathBuf;

/// Outcome of one convert run, for summary printing.
#[derive(Debug)]
pub struct ConvertResult {
    pub input: PathBuf,
    /// None on a dry run.
    pub output: Option<PathBuf>,
    pub rows_read: usize,
    /// Rows without a usable course cell, excluded from the schedule.
    pub rows_skipped: usize,
    pub courses: Vec<CourseSummary>,
}

/// Per-course counts for the summary table.
#[derive(Debug)]
pub struct CourseSummary {
    pub course: String,
    pub days: usize,
    pub sessions: usize,
}
