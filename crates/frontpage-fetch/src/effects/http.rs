use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::Stream;

/// A boxed stream type for HTTP response bodies.
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = T> + Send + 'a>>;

/// Status line and not-yet-read body of a GET response.
///
/// Producing one must not buffer the body: callers inspect `status` first
/// and only then decide whether to drain `body`.
pub struct HttpResponse<E> {
    pub status: u16,
    pub reason: String,
    pub body: BoxStream<'static, std::result::Result<Bytes, E>>,
}

/// Asynchronous HTTP client abstraction.
///
/// This trait provides the minimal interface needed for fetching scans.
/// Implementations own their connection pool and error mapping.
///
/// # Implementations
///
/// - `ReqwestClient`: Production implementation using `reqwest` (feature `reqwest`)
/// - Mock implementations for testing
pub trait HttpClient: Send + Sync {
    /// Error type for HTTP operations.
    type Error: std::error::Error + Send + 'static;

    /// Issue a GET and resolve once the response headers have arrived.
    ///
    /// # Errors
    ///
    /// Returns an error if no response could be obtained (DNS failure,
    /// connection refused or reset). Non-success statuses are *not* errors
    /// here; they are reported through [`HttpResponse::status`].
    fn get(
        &self,
        url: &str,
    ) -> impl Future<Output = std::result::Result<HttpResponse<Self::Error>, Self::Error>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;
    use crate::error::{FetchError, Result};

    /// Settings for the shared connection pool.
    #[derive(Debug, Clone)]
    pub struct ClientOptions {
        /// Idle connections kept per host for reuse.
        pub max_idle_per_host: usize,
        pub user_agent: String,
    }

    impl Default for ClientOptions {
        fn default() -> Self {
            Self {
                max_idle_per_host: crate::effects::DEFAULT_MAX_CONNECTIONS,
                user_agent: concat!("frontpage/", env!("CARGO_PKG_VERSION")).to_string(),
            }
        }
    }

    /// Production HTTP client implementation using reqwest.
    ///
    /// Requests go out over HTTP/1.1 and never carry `Expect: 100-continue`.
    pub struct ReqwestClient {
        client: reqwest::Client,
    }

    impl ReqwestClient {
        /// Create a new ReqwestClient with default configuration.
        pub fn new() -> Result<Self> {
            Self::with_options(ClientOptions::default())
        }

        pub fn with_options(options: ClientOptions) -> Result<Self> {
            let client = reqwest::Client::builder()
                .http1_only()
                .pool_max_idle_per_host(options.max_idle_per_host)
                .user_agent(options.user_agent)
                .build()
                .map_err(|e| FetchError::Network(e.to_string()))?;
            Ok(Self { client })
        }
    }

    impl HttpClient for ReqwestClient {
        type Error = reqwest::Error;

        async fn get(
            &self,
            url: &str,
        ) -> std::result::Result<HttpResponse<Self::Error>, Self::Error> {
            let response = self.client.get(url).send().await?;
            let status = response.status();

            Ok(HttpResponse {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                body: Box::pin(response.bytes_stream()),
            })
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::{ClientOptions, ReqwestClient};
