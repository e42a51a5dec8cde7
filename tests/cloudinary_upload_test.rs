use anyhow::Result;
use httpmock::prelude::*;
use kadima_assets::api::cloudinary::CloudinaryClient;
use kadima_assets::config::CloudinaryConfig;
use serde_json::json;
use tempfile::TempDir;

fn test_config() -> CloudinaryConfig {
    CloudinaryConfig {
        cloud_name: "demo-cloud".to_string(),
        api_key: "test-api-key".to_string(),
        api_secret: "test-api-secret".to_string(),
    }
}

#[tokio::test]
async fn upload_returns_the_hosted_url() -> Result<()> {
    let server = MockServer::start();
    let upload = server.mock(|when, then| {
        when.method(POST).path("/demo-cloud/image/upload");
        then.status(200).json_body(json!({
            "secure_url":
                "https://res.cloudinary.com/demo-cloud/image/upload/v1/kadima-logistics/sections/why-kadima.webp"
        }));
    });

    let dir = TempDir::new()?;
    let asset = dir.path().join("why-kadima.webp");
    tokio::fs::write(&asset, b"webp bytes").await?;

    let cloudinary =
        CloudinaryClient::with_base(reqwest::Client::new(), &test_config(), server.base_url());
    let url = cloudinary
        .upload_image(&asset, "kadima-logistics/sections", "why-kadima")
        .await?;

    assert!(url.ends_with("why-kadima.webp"));
    upload.assert();
    Ok(())
}

#[tokio::test]
async fn upload_surfaces_auth_failures() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/demo-cloud/image/upload");
        then.status(401)
            .json_body(json!({"error": {"message": "Invalid Signature"}}));
    });

    let dir = TempDir::new()?;
    let asset = dir.path().join("why-kadima.webp");
    tokio::fs::write(&asset, b"webp bytes").await?;

    let cloudinary =
        CloudinaryClient::with_base(reqwest::Client::new(), &test_config(), server.base_url());
    let outcome = cloudinary
        .upload_image(&asset, "kadima-logistics/sections", "why-kadima")
        .await;

    assert!(outcome.is_err());
    Ok(())
}
