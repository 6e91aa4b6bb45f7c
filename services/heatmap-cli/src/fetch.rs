//! One-shot dataset fetch.
//!
//! Single-shot: no retry, no cancellation token. A failed fetch or decode
//! yields None and the caller skips rendering entirely; the only
//! diagnostic is a debug-level event, keeping the default output silent.

use anyhow::Result;
use heatmap_common::Dataset;
use tracing::debug;

/// Fetch and decode the dataset, or None on any failure.
pub async fn fetch_dataset(url: &str) -> Option<Dataset> {
    match try_fetch(url).await {
        Ok(dataset) => {
            debug!(
                observations = dataset.monthly_variance.len(),
                base_temperature = dataset.base_temperature,
                "Fetched dataset"
            );
            Some(dataset)
        }
        Err(err) => {
            debug!(error = %err, url, "Dataset fetch failed; skipping render");
            None
        }
    }
}

async fn try_fetch(url: &str) -> Result<Dataset> {
    let response = reqwest::get(url).await?.error_for_status()?;
    Ok(response.json::<Dataset>().await?)
}
