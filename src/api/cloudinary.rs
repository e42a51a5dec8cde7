use crate::config::CloudinaryConfig;
use anyhow::{Context, Result};
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::path::Path;
use tokio::fs;

const API_BASE: &str = "https://api.cloudinary.com/v1_1";

pub struct CloudinaryClient {
    client: Client,
    cloud_name: String,
    api_key: String,
    api_secret: String,
    base: String,
}

impl CloudinaryClient {
    pub fn new(client: Client, cfg: &CloudinaryConfig) -> Self {
        Self::with_base(client, cfg, API_BASE.to_string())
    }

    pub fn with_base(client: Client, cfg: &CloudinaryConfig, base: String) -> Self {
        Self {
            client,
            cloud_name: cfg.cloud_name.clone(),
            api_key: cfg.api_key.clone(),
            api_secret: cfg.api_secret.clone(),
            base,
        }
    }

    /// Upload a local image under a fixed folder/public id, overwriting any
    /// existing asset there. Returns the canonical hosted URL.
    pub async fn upload_image(
        &self,
        path: &Path,
        folder: &str,
        public_id: &str,
    ) -> Result<String> {
        let bytes = fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload.bin")
            .to_string();

        let timestamp = chrono::Utc::now().timestamp();
        let params: Vec<(&'static str, String)> = vec![
            ("fetch_format", "auto".to_string()),
            ("folder", folder.to_string()),
            ("overwrite", "true".to_string()),
            ("public_id", public_id.to_string()),
            ("quality", "auto:best".to_string()),
            ("timestamp", timestamp.to_string()),
        ];
        let signature = sign_request(&params, &self.api_secret);

        let mut form = Form::new();
        for (name, value) in &params {
            form = form.text(*name, value.clone());
        }
        form = form
            .text("api_key", self.api_key.clone())
            .text("signature", signature)
            .part("file", Part::bytes(bytes).file_name(file_name));

        let url = format!("{}/{}/image/upload", self.base, self.cloud_name);
        let resp = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .context("Cloudinary upload failed")?;

        let status = resp.status();
        let raw = resp.text().await.unwrap_or_default();
        if !status.is_success() {
            let snippet = raw.chars().take(800).collect::<String>();
            anyhow::bail!(
                "Cloudinary upload failed: HTTP {} ({})",
                status.as_u16(),
                snippet
            );
        }

        let root: Value =
            serde_json::from_str(&raw).context("Cloudinary response parse failed")?;
        let hosted = root
            .get("secure_url")
            .and_then(|v| v.as_str())
            .context("Cloudinary response missing secure_url")?;
        Ok(hosted.to_string())
    }
}

// Parameters are signed sorted by name; the file payload, api_key and the
// signature itself stay out of the base string.
fn string_to_sign(params: &[(&'static str, String)]) -> String {
    let mut sorted: Vec<&(&str, String)> = params.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));
    sorted
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join("&")
}

fn sign_request(params: &[(&'static str, String)], api_secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(string_to_sign(params).as_bytes());
    hasher.update(api_secret.as_bytes());
    let digest = hasher.finalize();

    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        out.push_str(&format!("{:02x}", byte));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_params() -> Vec<(&'static str, String)> {
        vec![
            ("timestamp", "1700000000".to_string()),
            ("public_id", "why-kadima".to_string()),
            ("folder", "kadima-logistics/sections".to_string()),
            ("overwrite", "true".to_string()),
            ("quality", "auto:best".to_string()),
            ("fetch_format", "auto".to_string()),
        ]
    }

    #[test]
    fn base_string_is_sorted_by_parameter_name() {
        assert_eq!(
            string_to_sign(&sample_params()),
            "fetch_format=auto&folder=kadima-logistics/sections&overwrite=true\
             &public_id=why-kadima&quality=auto:best&timestamp=1700000000"
        );
    }

    #[test]
    fn signature_is_lowercase_sha256_hex() {
        let sig = sign_request(&sample_params(), "secret");
        assert_eq!(sig.len(), 64);
        assert!(sig.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn signature_depends_on_the_secret() {
        let a = sign_request(&sample_params(), "secret-a");
        let b = sign_request(&sample_params(), "secret-b");
        assert_ne!(a, b);
    }
}
