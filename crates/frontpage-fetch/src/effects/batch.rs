//! Batch download functionality.
//!
//! Every URL becomes its own tokio task. The batch waits for all of them and
//! hands back one report per URL, in completion order.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::task::{Id, JoinSet};
use tracing::{error, info};

use crate::core::derive_path;
use crate::data::TaskReport;
use crate::effects::{Fetcher, HttpClient};
use crate::error::FetchError;

/// Fans a URL sequence out over a shared [`Fetcher`].
pub struct Batch<C: HttpClient> {
    fetcher: Arc<Fetcher<C>>,
}

impl<C: HttpClient + 'static> Batch<C> {
    pub fn new(fetcher: Fetcher<C>) -> Self {
        Self::from_shared(Arc::new(fetcher))
    }

    pub fn from_shared(fetcher: Arc<Fetcher<C>>) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &Fetcher<C> {
        &self.fetcher
    }

    /// Spawn one task per URL and wait for every one of them.
    ///
    /// `on_report` sees each report as soon as its task finishes. A task
    /// that panics is reported as [`FetchError::TaskFailed`]; its siblings
    /// keep running.
    pub async fn run<I, F>(&self, urls: I, mut on_report: F) -> Vec<TaskReport>
    where
        I: IntoIterator<Item = String>,
        F: FnMut(&TaskReport),
    {
        let mut tasks = JoinSet::new();
        let mut in_flight: HashMap<Id, String> = HashMap::new();

        for url in urls {
            let fetcher = Arc::clone(&self.fetcher);
            let handle = tasks.spawn({
                let url = url.clone();
                async move { fetcher.fetch_url(url).await }
            });
            in_flight.insert(handle.id(), url);
        }

        info!(tasks = in_flight.len(), "downloads scheduled");
        let mut reports = Vec::with_capacity(in_flight.len());

        while let Some(joined) = tasks.join_next_with_id().await {
            let report = match joined {
                Ok((id, report)) => {
                    in_flight.remove(&id);
                    report
                }
                Err(err) => {
                    let url = in_flight.remove(&err.id()).unwrap_or_default();
                    error!(url = %url, error = %err, "download task did not complete");
                    TaskReport {
                        destination: derive_path(&url).ok(),
                        url,
                        result: Err(FetchError::TaskFailed(err.to_string())),
                    }
                }
            };

            on_report(&report);
            reports.push(report);
        }

        info!(tasks = reports.len(), "downloads finished");
        reports
    }
}
