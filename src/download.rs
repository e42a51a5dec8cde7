use anyhow::{Context, Result};
use reqwest::Client;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Fetch the full body of `url` and write it to `dest`, creating parent
/// directories as needed. Returns the number of bytes written.
pub async fn download_to_file(client: &Client, url: &str, dest: &Path) -> Result<u64> {
    debug!("fetching {}", url);
    let resp = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Download request failed: {}", url))?;
    if !resp.status().is_success() {
        anyhow::bail!("Download failed: HTTP {} for {}", resp.status().as_u16(), url);
    }

    let bytes = resp.bytes().await.context("Download body read failed")?;
    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create dir {}", parent.display()))?;
        }
    }
    fs::write(dest, &bytes)
        .await
        .with_context(|| format!("Failed to write {}", dest.display()))?;

    Ok(bytes.len() as u64)
}
