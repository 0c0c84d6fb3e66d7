use std::fmt;
use std::path::PathBuf;

use crate::core::format_bytes;
use crate::error::FetchError;

/// Successful end states of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The destination already existed; nothing was requested.
    Skipped,
    /// The body was written and the file holds `bytes` bytes.
    Downloaded { bytes: u64 },
}

/// How a report should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// Result of one task, as collected by [`Batch`](crate::Batch).
#[derive(Debug)]
pub struct TaskReport {
    pub url: String,
    /// `None` only when no destination could be derived from `url`.
    pub destination: Option<PathBuf>,
    pub result: Result<Outcome, FetchError>,
}

impl TaskReport {
    pub fn severity(&self) -> Severity {
        match &self.result {
            Ok(Outcome::Skipped) => Severity::Info,
            Ok(Outcome::Downloaded { .. }) => Severity::Success,
            Err(_) => Severity::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    fn subject(&self) -> String {
        match &self.destination {
            Some(path) => path.display().to_string(),
            None => self.url.clone(),
        }
    }
}

impl fmt::Display for TaskReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let subject = self.subject();
        match &self.result {
            Ok(Outcome::Skipped) => write!(f, "File {subject} already exists; skipped"),
            Ok(Outcome::Downloaded { bytes }) => write!(
                f,
                "File {subject} downloaded successfully, {} saved",
                format_bytes(i64::try_from(*bytes).unwrap_or(i64::MAX))
            ),
            Err(FetchError::Validation { .. }) => write!(f, "Error validating file {subject}"),
            Err(err) => write!(f, "Error downloading file {subject}: {err}"),
        }
    }
}

/// Aggregate counts over a run. Informational only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: usize,
    pub bytes: u64,
}

impl Summary {
    pub fn record(&mut self, report: &TaskReport) {
        match &report.result {
            Ok(Outcome::Skipped) => self.skipped += 1,
            Ok(Outcome::Downloaded { bytes }) => {
                self.downloaded += 1;
                self.bytes = self.bytes.saturating_add(*bytes);
            }
            Err(_) => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.downloaded + self.skipped + self.failed
    }
}

impl<'a> FromIterator<&'a TaskReport> for Summary {
    fn from_iter<I: IntoIterator<Item = &'a TaskReport>>(iter: I) -> Self {
        let mut summary = Summary::default();
        for report in iter {
            summary.record(report);
        }
        summary
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} downloaded ({}), {} skipped, {} failed",
            self.downloaded,
            format_bytes(i64::try_from(self.bytes).unwrap_or(i64::MAX)),
            self.skipped,
            self.failed
        )
    }
}
