use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use futures_util::StreamExt;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

use crate::core::derive_path;
use crate::data::{DownloadTask, Outcome, TaskReport};
use crate::effects::http::{BoxStream, HttpClient};
use crate::error::{FetchError, Result};

/// Concurrent connections allowed against the remote host.
pub const DEFAULT_MAX_CONNECTIONS: usize = 1024;

/// Downloads single scans into an output root.
///
/// The fetcher owns the injected client and a connection cap shared by
/// every task that runs through it.
pub struct Fetcher<C: HttpClient> {
    client: C,
    root: PathBuf,
    connections: Semaphore,
}

impl<C: HttpClient> Fetcher<C> {
    pub fn new(client: C, root: impl Into<PathBuf>) -> Self {
        Self::with_max_connections(client, root, DEFAULT_MAX_CONNECTIONS)
    }

    /// `max_connections` is clamped to at least one.
    pub fn with_max_connections(client: C, root: impl Into<PathBuf>, max_connections: usize) -> Self {
        Self {
            client,
            root: root.into(),
            connections: Semaphore::new(max_connections.max(1)),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Derive the task for `url` and fetch it. Never fails: every error,
    /// including an underivable destination, ends up in the report.
    pub async fn fetch_url(&self, url: String) -> TaskReport {
        let destination = match derive_path(&url) {
            Ok(destination) => destination,
            Err(err) => {
                warn!(url = %url, error = %err, "cannot derive destination");
                return TaskReport {
                    url,
                    destination: None,
                    result: Err(err),
                };
            }
        };

        let task = DownloadTask { url, destination };
        let result = self.fetch(&task).await;
        if let Err(err) = &result {
            debug!(url = %task.url, error = %err, "download failed");
        }

        TaskReport {
            url: task.url,
            destination: Some(task.destination),
            result,
        }
    }

    /// Fetch one scan unless its destination already exists.
    ///
    /// A partially written or empty file is left on disk when validation
    /// fails.
    pub async fn fetch(&self, task: &DownloadTask) -> Result<Outcome> {
        let destination = self.root.join(&task.destination);

        if fs::try_exists(&destination).await? {
            debug!(path = %destination.display(), "destination exists, skipping");
            return Ok(Outcome::Skipped);
        }

        let permit = self
            .connections
            .acquire()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!(url = %task.url, "requesting");
        let response = self
            .client
            .get(&task.url)
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if response.status != 200 {
            return Err(FetchError::Status {
                code: response.status,
                reason: response.reason,
            });
        }

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).await?;
        }

        let streamed = write_body(&destination, response.body).await?;
        drop(permit);
        debug!(path = %destination.display(), bytes = streamed, "body written");

        validate(&destination).await
    }
}

async fn write_body<E: std::error::Error>(
    destination: &Path,
    mut body: BoxStream<'static, std::result::Result<Bytes, E>>,
) -> Result<u64> {
    let mut file = File::create(destination).await?;
    let mut written = 0u64;

    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(|e| FetchError::Network(e.to_string()))?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }

    file.flush().await?;
    Ok(written)
}

async fn validate(destination: &Path) -> Result<Outcome> {
    match fs::metadata(destination).await {
        Ok(meta) if meta.is_file() && meta.len() > 0 => Ok(Outcome::Downloaded { bytes: meta.len() }),
        Ok(_) => Err(FetchError::Validation {
            path: destination.to_path_buf(),
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(FetchError::Validation {
            path: destination.to_path_buf(),
        }),
        Err(e) => Err(e.into()),
    }
}
