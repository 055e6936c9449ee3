use std::time::Duration;

use anyhow::{bail, Context, Result};
use opscal_core::Seed;

/// Fetch the seed document (cohorts + assignee roster).
///
/// Any failure is fatal for the invoking command: without a seed there is
/// nothing to schedule against. Transport errors and timeouts surface via
/// the context chain; a non-success status is reported with the response
/// body so the operator can see what the server said.
pub async fn fetch_seed(url: &str, timeout_secs: u64) -> Result<Seed> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .context("build http client")?;

    let resp = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("seed fetch {url}"))?;

    let status = resp.status();
    if !status.is_success() {
        let txt = resp.text().await.unwrap_or_default();
        bail!("seed fetch failed: {status} {txt}");
    }

    resp.json::<Seed>().await.context("parse seed document")
}
