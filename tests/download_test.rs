use anyhow::Result;
use httpmock::prelude::*;
use kadima_assets::download::download_to_file;
use tempfile::TempDir;

#[tokio::test]
async fn download_writes_the_full_body() -> Result<()> {
    let server = MockServer::start();
    let payload = b"fake video payload".to_vec();
    let asset = server.mock(|when, then| {
        when.method(GET).path("/files/hero_raw.mp4");
        then.status(200).body(payload.clone());
    });

    let dir = TempDir::new()?;
    let dest = dir.path().join("output").join("hero_raw.mp4");
    let client = reqwest::Client::new();
    let size = download_to_file(&client, &server.url("/files/hero_raw.mp4"), &dest).await?;

    assert_eq!(size, payload.len() as u64);
    assert_eq!(tokio::fs::read(&dest).await?, payload);
    asset.assert();
    Ok(())
}

#[tokio::test]
async fn download_fails_on_http_error_without_writing() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/files/missing.mp4");
        then.status(404);
    });

    let dir = TempDir::new()?;
    let dest = dir.path().join("missing.mp4");
    let client = reqwest::Client::new();
    let outcome = download_to_file(&client, &server.url("/files/missing.mp4"), &dest).await;

    assert!(outcome.is_err());
    assert!(!dest.exists());
    Ok(())
}
