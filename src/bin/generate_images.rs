//! Generate the site images with Gemini image generation.

use anyhow::{Context, Result};
use kadima_assets::api::gemini::GeminiClient;
use kadima_assets::config::GeminiConfig;
use kadima_assets::init;
use std::path::Path;
use tokio::fs;

const OUTPUT_DIR: &str = "output";

struct ImageJob {
    prompt: &'static str,
    filename: &'static str,
    description: &'static str,
}

const IMAGE_JOBS: &[ImageJob] = &[
    ImageJob {
        prompt: "Generate an image: A professional commercial photograph of a modern logistics \
            warehouse interior.\n\
            The scene shows a clean, well-organized distribution center with workers in \
            high-visibility vests checking inventory on tablets near neatly stacked pallets. \
            Warm overhead LED lighting creates an inviting atmosphere. Conveyor belts and \
            shelving systems are visible in the background.\n\
            The color palette emphasizes warm whites, navy blue accents, and touches of green \
            from safety vests.\n\
            Professional corporate photography quality. Clean, modern, and trustworthy.\n\
            Aspect ratio: 4:3 landscape. The image should feel premium and inspire confidence \
            in logistics operations.\n\
            No text or watermarks.",
        filename: "why-kadima.png",
        description: "WhyKadima section - warehouse/logistics operations photo",
    },
    ImageJob {
        prompt: "Generate an image: A professional commercial photograph of a bright yellow \
            delivery truck parked at a modern warehouse loading dock during golden hour. The \
            truck is positioned at a slight angle showing the side and front. The loading dock \
            has clean concrete and organized package carts nearby. Warm golden sunlight creates \
            dramatic shadows and a professional feel.\n\
            The scene conveys reliability, global reach, and efficient delivery operations.\n\
            Professional commercial photography with shallow depth of field.\n\
            Aspect ratio: approximately 5:4 (slightly taller than wide landscape).\n\
            No text, logos, or watermarks on the image itself. Just the truck and environment.",
        filename: "dhl-spotlight.png",
        description: "DHL Spotlight section - delivery truck at loading dock",
    },
    ImageJob {
        prompt: "Generate an image: A professional Open Graph social sharing graphic image.\n\
            Background: Deep navy blue (#0D1F3C) with subtle abstract geometric grid pattern in \
            emerald green (#10B981) at low opacity.\n\
            Center text: \"KADIMA\" in large, bold, clean sans-serif font in white. Below it in \
            smaller text: \"LOGISTICS\" in emerald green (#10B981).\n\
            Below the brand name: \"Cut Shipping Costs 20-30%\" in white, medium weight.\n\
            At the bottom: \"Free Shipping Audit | DHL - UPS - FedEx - USPS\" in small white \
            text at 70% opacity.\n\
            The overall design is clean, corporate, and modern. Minimal. No photographs - pure \
            graphic design.\n\
            A subtle emerald green gradient glow emanates from behind the text.\n\
            Aspect ratio: 1.91:1 (wide landscape, like 1200x630 pixels).\n\
            Professional, premium feel. Like a Fortune 500 company's social card.",
        filename: "og-image.png",
        description: "OG social sharing image (1200x630)",
    },
];

async fn generate_and_save(gemini: &GeminiClient, job: &ImageJob) -> Result<bool> {
    let Some(bytes) = gemini.generate_image(job.prompt).await? else {
        return Ok(false);
    };

    let out_path = Path::new(OUTPUT_DIR).join(job.filename);
    fs::write(&out_path, &bytes)
        .await
        .with_context(|| format!("Failed to write {}", out_path.display()))?;
    println!(
        "  SUCCESS: {} ({:.0} KB)",
        out_path.display(),
        bytes.len() as f64 / 1024.0
    );
    Ok(true)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    init::ensure_directories().await?;

    let cfg = GeminiConfig::from_env()?;
    let client = reqwest::Client::new();
    let gemini = GeminiClient::new(client, &cfg);

    let mut generated = 0usize;
    for job in IMAGE_JOBS {
        println!("\n{}", "=".repeat(60));
        println!("Generating: {}", job.description);
        println!("Output: {}", job.filename);
        println!("{}", "=".repeat(60));

        // A failed image is reported and the list continues.
        match generate_and_save(&gemini, job).await {
            Ok(true) => generated += 1,
            Ok(false) => {
                println!("  WARNING: No image data returned for {}", job.description);
            }
            Err(err) => println!("  ERROR: {:#}", err),
        }
    }

    println!("\n{}", "=".repeat(60));
    println!(
        "IMAGE GENERATION COMPLETE ({}/{} images)",
        generated,
        IMAGE_JOBS.len()
    );
    println!("{}", "=".repeat(60));
    Ok(())
}
