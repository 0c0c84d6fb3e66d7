use std::path::PathBuf;

use crate::core::derive_path;
use crate::error::Result;

/// One URL-to-file download attempt.
///
/// `destination` is relative to the output root chosen by the [`Fetcher`](crate::Fetcher).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTask {
    pub url: String,
    pub destination: PathBuf,
}

impl DownloadTask {
    pub fn from_url(url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        let destination = derive_path(&url)?;
        Ok(Self { url, destination })
    }
}
