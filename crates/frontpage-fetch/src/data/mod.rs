//! Immutable types shared by the enumeration and download layers.

mod report;
mod scan;
mod task;

pub use report::{Outcome, Severity, Summary, TaskReport};
pub use scan::{Catalog, DEFAULT_BASE_URL, DateRange, ScanKind};
pub use task::DownloadTask;
