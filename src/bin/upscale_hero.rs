//! Upscale the raw landscape hero video from 1080p to 4K.

use anyhow::{Context, Result};
use kadima_assets::api::fal::FalClient;
use kadima_assets::config::FalConfig;
use kadima_assets::download::download_to_file;
use kadima_assets::init;
use serde_json::json;
use std::path::Path;

const VIDEO_UPSCALER: &str = "fal-ai/video-upscaler";

// The raw 1080p Kling output, before compression.
const INPUT_VIDEO: &str = "output/hero_wide_raw.mp4";
const OUTPUT_PATH: &str = "output/hero_4k_raw.mp4";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    init::ensure_directories().await?;

    let cfg = FalConfig::from_env()?;
    let client = reqwest::Client::new();
    let fal = FalClient::new(client.clone(), &cfg);

    println!("Uploading 1080p video to fal.ai for 4K upscale...");
    let video_url = fal.upload_file(Path::new(INPUT_VIDEO)).await?;
    println!("  Uploaded: {}", video_url);

    println!("\nStarting 2x upscale (1080p -> 4K)...");
    println!("  Model: fal-ai/video-upscaler (RealESRGAN)");
    println!("  Scale: 2x (1920x1080 -> 3840x2160)");
    println!("  Estimated cost: ~$0.50");

    let result = fal
        .subscribe(
            VIDEO_UPSCALER,
            json!({
                "video_url": video_url,
                "scale": 2,
            }),
        )
        .await?;

    let output_url = result
        .get("video")
        .and_then(|v| v.get("url"))
        .and_then(|v| v.as_str())
        .context("fal result missing video.url")?;
    println!("\nUpscaled video URL: {}", output_url);

    let out_path = Path::new(OUTPUT_PATH);
    println!("Downloading to {}...", out_path.display());
    let size = download_to_file(&client, output_url, out_path).await?;
    println!("Downloaded: {:.1} MB", size as f64 / (1024.0 * 1024.0));
    println!("DONE");
    Ok(())
}
