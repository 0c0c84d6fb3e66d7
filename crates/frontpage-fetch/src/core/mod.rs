//! Pure transformations for scan downloads.
//!
//! Nothing in this module touches the network or the filesystem; every
//! function here is deterministic given its inputs.

mod enumerate;
mod path;
mod size;

pub use enumerate::{FIXED_SEGMENT, days_between, scan_url};
pub use path::derive_path;
pub use size::format_bytes;
