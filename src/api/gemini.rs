use crate::config::GeminiConfig;
use crate::{logi, logw};
use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use reqwest::Client;
use serde_json::{Value, json};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const IMAGE_MODEL: &str = "gemini-2.0-flash-exp-image-generation";

pub struct GeminiClient {
    client: Client,
    api_key: String,
    base: String,
}

impl GeminiClient {
    pub fn new(client: Client, cfg: &GeminiConfig) -> Self {
        Self::with_base(client, cfg.api_key.clone(), API_BASE.to_string())
    }

    pub fn with_base(client: Client, api_key: String, base: String) -> Self {
        Self {
            client,
            api_key,
            base,
        }
    }

    /// Request one image for the prompt. Returns `Ok(None)` when the service
    /// answered without image data; the caller decides whether to continue.
    pub async fn generate_image(&self, prompt: &str) -> Result<Option<Vec<u8>>> {
        let url = format!("{}/models/{}:generateContent", self.base, IMAGE_MODEL);
        let body = json!({
            "contents": [{"parts": [{"text": prompt}]}],
            "generationConfig": {"responseModalities": ["TEXT", "IMAGE"]},
        });

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .context("Gemini request failed")?;

        let status = resp.status();
        let raw = resp.text().await.unwrap_or_default();
        if !status.is_success() {
            logw(format!("Gemini HTTP {}", status.as_u16()));
            if !raw.is_empty() {
                let snippet = raw.chars().take(800).collect::<String>();
                logw(format!("Gemini raw body: {}", snippet));
            }
            return Ok(None);
        }

        let root: Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(_) => {
                logw("Gemini response parse failed.".to_string());
                return Ok(None);
            }
        };

        if let Some(err) = root.get("error") {
            if let Some(msg) = err.get("message").and_then(|v| v.as_str()) {
                logw(format!("Gemini error message: {}", msg));
            }
            return Ok(None);
        }

        Ok(extract_inline_image(&root))
    }
}

fn extract_inline_image(root: &Value) -> Option<Vec<u8>> {
    let parts = root
        .get("candidates")?
        .as_array()?
        .first()?
        .get("content")?
        .get("parts")?
        .as_array()?;

    for part in parts {
        let data = part
            .get("inlineData")
            .or_else(|| part.get("inline_data"))
            .and_then(|d| d.get("data"))
            .and_then(|v| v.as_str());
        if let Some(data) = data {
            return Some(decode_inline_payload(data));
        }
        if let Some(text) = part.get("text").and_then(|v| v.as_str()) {
            let snippet = text.chars().take(200).collect::<String>();
            logi(format!("  Text: {}", snippet));
        }
    }

    None
}

// The service has returned both base64 text and raw bytes in this field;
// branch on whichever this payload actually is.
fn decode_inline_payload(data: &str) -> Vec<u8> {
    match BASE64_STANDARD.decode(data) {
        Ok(bytes) => bytes,
        Err(_) => data.as_bytes().to_vec(),
    }
}
