//! Generate the landscape hero video - cinematic fulfillment center operations.

use anyhow::{Context, Result};
use kadima_assets::api::fal::FalClient;
use kadima_assets::config::FalConfig;
use kadima_assets::download::download_to_file;
use kadima_assets::init;
use serde_json::json;
use std::path::Path;

const KLING_TEXT_TO_VIDEO: &str = "fal-ai/kling-video/v3/pro/text-to-video";
const OUTPUT_PATH: &str = "output/hero_wide_raw.mp4";

const PROMPT: &str = "A continuous, seamlessly looping cinematic tracking shot inside a massive \
    modern fulfillment center warehouse.\n\
    The camera glides smoothly forward through aisles of organized shelving and conveyor belts.\n\
    Cardboard parcels and packages flow along the conveyor belt system in an endless stream.\n\
    Warm overhead industrial LED lighting bathes the clean, modern facility.\n\
    Workers in the distance scan packages and sort them into different shipping lanes.\n\
    The facility is spotless, efficient, and high-tech - representing world-class logistics \
    operations.\n\
    Professional cinematic quality with shallow depth of field and warm color grading.\n\
    The camera movement is a steady, smooth dolly forward through the space.\n\
    The motion flows in a perpetual loop with no beginning or end.\n\
    The first and last frames should be visually identical for perfect seamless looping.\n\
    16:9 wide cinematic composition. No text or logos.";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    init::ensure_directories().await?;

    let cfg = FalConfig::from_env()?;
    let client = reqwest::Client::new();
    let fal = FalClient::new(client.clone(), &cfg);

    println!("Starting wide hero video generation with Kling V3 Pro...");
    println!("  Aspect ratio: 16:9 (landscape)");
    println!("  Duration: 15 seconds");
    println!("  Audio: OFF");
    println!("  Cost: $3.36");
    println!();

    let result = fal
        .subscribe(
            KLING_TEXT_TO_VIDEO,
            json!({
                "prompt": PROMPT,
                "duration": "15",
                "aspect_ratio": "16:9",
                "generate_audio": false,
                "cfg_scale": 0.5,
            }),
        )
        .await?;

    let video_url = result
        .get("video")
        .and_then(|v| v.get("url"))
        .and_then(|v| v.as_str())
        .context("fal result missing video.url")?;
    println!("\nVideo generated! URL: {}", video_url);

    let out_path = Path::new(OUTPUT_PATH);
    println!("Downloading to {}...", out_path.display());
    let size = download_to_file(&client, video_url, out_path).await?;
    println!("Downloaded: {:.1} MB", size as f64 / (1024.0 * 1024.0));
    println!("DONE");
    Ok(())
}
