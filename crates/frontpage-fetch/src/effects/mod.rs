//! I/O operations: the HTTP seam, single-task fetching, and batch dispatch.

mod batch;
mod fetcher;
mod http;

pub use batch::Batch;
pub use fetcher::{DEFAULT_MAX_CONNECTIONS, Fetcher};
pub use http::{BoxStream, HttpClient, HttpResponse};

#[cfg(feature = "reqwest")]
pub use http::{ClientOptions, ReqwestClient};
