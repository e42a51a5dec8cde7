use anyhow::Result;
use httpmock::prelude::*;
use kadima_assets::api::fal::FalClient;
use serde_json::json;
use tempfile::TempDir;

#[tokio::test]
async fn subscribe_runs_submit_poll_and_result_fetch() -> Result<()> {
    let server = MockServer::start();

    let submit = server.mock(|when, then| {
        when.method(POST).path("/fal-ai/video-upscaler");
        then.status(200).json_body(json!({"request_id": "req-1"}));
    });
    let status = server.mock(|when, then| {
        when.method(GET)
            .path("/fal-ai/video-upscaler/requests/req-1/status");
        then.status(200).json_body(json!({
            "status": "COMPLETED",
            "logs": [{"message": "upscaling finished"}],
        }));
    });
    let result = server.mock(|when, then| {
        when.method(GET).path("/fal-ai/video-upscaler/requests/req-1");
        then.status(200)
            .json_body(json!({"video": {"url": "https://cdn.example/out.mp4"}}));
    });

    let fal = FalClient::with_bases(
        reqwest::Client::new(),
        "test-key".to_string(),
        server.base_url(),
        server.base_url(),
    );
    let value = fal
        .subscribe("fal-ai/video-upscaler", json!({"video_url": "x", "scale": 2}))
        .await?;

    assert_eq!(value["video"]["url"], "https://cdn.example/out.mp4");
    submit.assert();
    status.assert();
    result.assert();
    Ok(())
}

#[tokio::test]
async fn subscribe_fails_when_the_request_errors_remotely() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/fal-ai/video-upscaler");
        then.status(200).json_body(json!({"request_id": "req-2"}));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/fal-ai/video-upscaler/requests/req-2/status");
        then.status(200).json_body(json!({"status": "ERROR"}));
    });

    let fal = FalClient::with_bases(
        reqwest::Client::new(),
        "test-key".to_string(),
        server.base_url(),
        server.base_url(),
    );
    let outcome = fal
        .subscribe("fal-ai/video-upscaler", json!({"video_url": "x", "scale": 2}))
        .await;

    assert!(outcome.is_err());
    Ok(())
}

#[tokio::test]
async fn upload_file_initiates_then_puts_the_bytes() -> Result<()> {
    let server = MockServer::start();

    let put = server.mock(|when, then| {
        when.method(PUT).path("/storage/put/hero");
        then.status(200);
    });
    let upload_url = server.url("/storage/put/hero");
    let initiate = server.mock(|when, then| {
        when.method(POST).path("/storage/upload/initiate");
        then.status(200).json_body(json!({
            "upload_url": upload_url,
            "file_url": "https://fal.media/files/hero_wide_raw.mp4",
        }));
    });

    let dir = TempDir::new()?;
    let src = dir.path().join("hero_wide_raw.mp4");
    tokio::fs::write(&src, b"not really a video").await?;

    let fal = FalClient::with_bases(
        reqwest::Client::new(),
        "test-key".to_string(),
        server.base_url(),
        server.base_url(),
    );
    let file_url = fal.upload_file(&src).await?;

    assert_eq!(file_url, "https://fal.media/files/hero_wide_raw.mp4");
    initiate.assert();
    put.assert();
    Ok(())
}
