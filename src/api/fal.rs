use crate::config::FalConfig;
use crate::{logi, logok, logw};
use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tracing::debug;

const QUEUE_BASE: &str = "https://queue.fal.run";
const REST_BASE: &str = "https://rest.alpha.fal.ai";
const POLL_INTERVAL: Duration = Duration::from_secs(3);

#[derive(Debug, Deserialize)]
struct QueuedRequest {
    request_id: String,
}

#[derive(Debug, Deserialize)]
struct QueueStatus {
    status: String,
    #[serde(default)]
    logs: Vec<QueueLogEntry>,
}

#[derive(Debug, Deserialize)]
struct QueueLogEntry {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct InitiatedUpload {
    upload_url: String,
    file_url: String,
}

pub struct FalClient {
    client: Client,
    api_key: String,
    queue_base: String,
    rest_base: String,
}

impl FalClient {
    pub fn new(client: Client, cfg: &FalConfig) -> Self {
        Self::with_bases(
            client,
            cfg.api_key.clone(),
            QUEUE_BASE.to_string(),
            REST_BASE.to_string(),
        )
    }

    pub fn with_bases(
        client: Client,
        api_key: String,
        queue_base: String,
        rest_base: String,
    ) -> Self {
        Self {
            client,
            api_key,
            queue_base,
            rest_base,
        }
    }

    fn auth_header(&self) -> String {
        format!("Key {}", self.api_key)
    }

    /// Submit a request to the fal queue and block until it completes,
    /// printing status transitions and remote log lines along the way.
    pub async fn subscribe(&self, model_id: &str, arguments: Value) -> Result<Value> {
        let submit_url = format!("{}/{}", self.queue_base, model_id);
        let resp = self
            .client
            .post(&submit_url)
            .header("Authorization", self.auth_header())
            .json(&arguments)
            .send()
            .await
            .context("fal queue submit failed")?;

        let status = resp.status();
        let raw = resp.text().await.unwrap_or_default();
        if !status.is_success() {
            if !raw.is_empty() {
                let snippet = raw.chars().take(800).collect::<String>();
                logw(format!("fal raw body: {}", snippet));
            }
            anyhow::bail!("fal submit failed: HTTP {} for {}", status.as_u16(), model_id);
        }

        let queued: QueuedRequest =
            serde_json::from_str(&raw).context("fal submit response parse failed")?;
        let request_id = queued.request_id;
        logi(format!("Queued {} (request {})", model_id, request_id));

        let status_url = format!(
            "{}/{}/requests/{}/status?logs=1",
            self.queue_base, model_id, request_id
        );

        let mut last_status = String::new();
        let mut seen_logs = 0usize;
        loop {
            debug!("polling {}", status_url);
            let resp = self
                .client
                .get(&status_url)
                .header("Authorization", self.auth_header())
                .send()
                .await
                .context("fal status poll failed")?;
            if !resp.status().is_success() {
                anyhow::bail!(
                    "fal status poll failed: HTTP {} for request {}",
                    resp.status().as_u16(),
                    request_id
                );
            }

            let body: QueueStatus = resp
                .json()
                .await
                .context("fal status response parse failed")?;

            if body.status != last_status {
                logi(format!("  Status: {}", body.status));
                last_status = body.status.clone();
            }
            for entry in body.logs.iter().skip(seen_logs) {
                if !entry.message.is_empty() {
                    logi(format!("  {}", entry.message));
                }
            }
            seen_logs = body.logs.len();

            match body.status.as_str() {
                "COMPLETED" => break,
                "IN_QUEUE" | "IN_PROGRESS" => {}
                other => anyhow::bail!("fal request {} ended with status {}", request_id, other),
            }

            tokio::time::sleep(POLL_INTERVAL).await;
        }

        let result_url = format!("{}/{}/requests/{}", self.queue_base, model_id, request_id);
        let resp = self
            .client
            .get(&result_url)
            .header("Authorization", self.auth_header())
            .send()
            .await
            .context("fal result fetch failed")?;
        if !resp.status().is_success() {
            anyhow::bail!(
                "fal result fetch failed: HTTP {} for request {}",
                resp.status().as_u16(),
                request_id
            );
        }

        let result: Value = resp
            .json()
            .await
            .context("fal result response parse failed")?;
        logok(format!("Completed {} (request {})", model_id, request_id));
        Ok(result)
    }

    /// Upload a local file to fal storage and return its hosted URL,
    /// suitable for passing as a model input.
    pub async fn upload_file(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload.bin");
        let content_type = guess_content_type(file_name);

        let initiate_url = format!("{}/storage/upload/initiate", self.rest_base);
        let resp = self
            .client
            .post(&initiate_url)
            .header("Authorization", self.auth_header())
            .json(&serde_json::json!({
                "file_name": file_name,
                "content_type": content_type,
            }))
            .send()
            .await
            .context("fal upload initiate failed")?;
        if !resp.status().is_success() {
            anyhow::bail!(
                "fal upload initiate failed: HTTP {}",
                resp.status().as_u16()
            );
        }

        let initiated: InitiatedUpload = resp
            .json()
            .await
            .context("fal upload initiate response parse failed")?;

        let resp = self
            .client
            .put(&initiated.upload_url)
            .header("Content-Type", content_type)
            .body(bytes)
            .send()
            .await
            .context("fal upload PUT failed")?;
        if !resp.status().is_success() {
            anyhow::bail!("fal upload PUT failed: HTTP {}", resp.status().as_u16());
        }

        Ok(initiated.file_url)
    }
}

fn guess_content_type(file_name: &str) -> &'static str {
    let lower = file_name.to_ascii_lowercase();
    if lower.ends_with(".mp4") {
        "video/mp4"
    } else if lower.ends_with(".png") {
        "image/png"
    } else if lower.ends_with(".webp") {
        "image/webp"
    } else {
        "application/octet-stream"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_follows_extension() {
        assert_eq!(guess_content_type("hero_wide_raw.mp4"), "video/mp4");
        assert_eq!(guess_content_type("HERO.MP4"), "video/mp4");
        assert_eq!(guess_content_type("og-image.png"), "image/png");
        assert_eq!(guess_content_type("notes.txt"), "application/octet-stream");
    }
}
