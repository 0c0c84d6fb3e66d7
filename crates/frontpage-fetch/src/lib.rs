//! Front-page scan enumeration and concurrent streaming downloads.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable configuration and types
//! - [`core`] - Pure transformations
//! - [`effects`] - I/O operations with trait abstraction
//!
//! # Key Features
//!
//! - **Lazy Enumeration**: one URL per calendar day, generated on demand
//! - **Skip-List by Filesystem**: an existing destination is never re-fetched
//! - **Streaming Persistence**: response bodies go to disk chunk by chunk
//! - **Isolated Tasks**: every download reports its own outcome; none aborts another

pub mod core;
pub mod data;
pub mod effects;
mod error;

pub use self::core::{derive_path, format_bytes};
pub use data::{Catalog, DateRange, DownloadTask, Outcome, ScanKind, Severity, Summary, TaskReport};
pub use effects::{Batch, BoxStream, Fetcher, HttpClient, HttpResponse};

#[cfg(feature = "reqwest")]
pub use effects::{ClientOptions, ReqwestClient};

pub use error::{FetchError, Result};
