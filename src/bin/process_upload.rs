//! Compress generated images for the web and upload them to Cloudinary.

use anyhow::{Context, Result};
use kadima_assets::api::cloudinary::CloudinaryClient;
use kadima_assets::assets::SITE_ASSETS;
use kadima_assets::compress;
use kadima_assets::config::CloudinaryConfig;
use kadima_assets::init;
use std::path::Path;

const OUTPUT_DIR: &str = "output";
const PUBLIC_IMAGES_DIR: &str = "public/images";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    init::ensure_directories().await?;

    let cfg = CloudinaryConfig::from_env()?;
    let client = reqwest::Client::new();
    let cloudinary = CloudinaryClient::new(client, &cfg);

    let mut results: Vec<(&str, String)> = Vec::new();
    for spec in SITE_ASSETS {
        println!("\n{}", "=".repeat(50));
        println!("Processing: {}", spec.src);

        let src_path = Path::new(OUTPUT_DIR).join(spec.src);
        let out_path = compress::process_asset(&src_path, Path::new(PUBLIC_IMAGES_DIR), spec)?;

        let size_kb = std::fs::metadata(&out_path)
            .with_context(|| format!("Failed to stat {}", out_path.display()))?
            .len() as f64
            / 1024.0;
        println!("  Compressed: {} ({:.0} KB)", out_path.display(), size_kb);

        println!(
            "  Uploading to Cloudinary: {}/{}...",
            spec.folder, spec.public_id
        );
        let url = cloudinary
            .upload_image(&out_path, spec.folder, spec.public_id)
            .await?;
        println!("  Cloudinary URL: {}", url);
        results.push((spec.public_id, url));
    }

    println!("\n{}", "=".repeat(50));
    println!("ALL UPLOADS COMPLETE");
    println!("{}", "=".repeat(50));
    for (name, url) in &results {
        println!("  {}: {}", name, url);
    }
    Ok(())
}
