//! Generate the 15-second looping portrait hero background video.

use anyhow::{Context, Result};
use kadima_assets::api::fal::FalClient;
use kadima_assets::config::FalConfig;
use kadima_assets::download::download_to_file;
use kadima_assets::init;
use serde_json::json;
use std::path::Path;

const KLING_TEXT_TO_VIDEO: &str = "fal-ai/kling-video/v3/pro/text-to-video";
const OUTPUT_PATH: &str = "output/hero_raw.mp4";

const PROMPT: &str = "A continuous, seamlessly cyclical aerial drone shot following a modern \
    semi-truck driving along a wide highway through an industrial logistics corridor at golden hour.\n\
    The truck passes large warehouses and distribution centers on both sides.\n\
    The camera maintains a steady, smooth forward glide slightly above and behind the truck, \
    creating a perpetual following motion.\n\
    Warm golden sunlight bathes the scene with cinematic lens flare.\n\
    The road stretches endlessly ahead. Other trucks appear in the distance.\n\
    Professional cinematic quality, shallow depth of field, warm color grading.\n\
    The motion flows smoothly in a perpetual loop with no beginning or end.\n\
    The first and last frames should be visually identical for perfect looping.\n\
    Vertical 9:16 portrait composition - the road and truck fill the center with sky above and \
    road below.";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    init::ensure_directories().await?;

    let cfg = FalConfig::from_env()?;
    let client = reqwest::Client::new();
    let fal = FalClient::new(client.clone(), &cfg);

    println!("Starting hero video generation with Kling V3 Pro...");
    println!("  Aspect ratio: 9:16 (portrait)");
    println!("  Duration: 15 seconds");
    println!("  Audio: OFF");
    println!("  Estimated cost: $3.36");
    println!();

    let result = fal
        .subscribe(
            KLING_TEXT_TO_VIDEO,
            json!({
                "prompt": PROMPT,
                "duration": "15",
                "aspect_ratio": "9:16",
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
