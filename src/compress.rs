use crate::assets::{AssetSpec, Encoding};
use crate::logi;
use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, RgbImage, Rgba};
use std::path::{Path, PathBuf};

/// Downscale to `max_width` preserving aspect ratio. Images at or below the
/// limit pass through untouched.
pub fn shrink_to_width(img: DynamicImage, max_width: u32) -> DynamicImage {
    let (width, height) = img.dimensions();
    if width <= max_width {
        return img;
    }
    let new_height = ((height as f64) * (max_width as f64) / (width as f64)).round() as u32;
    img.resize_exact(max_width, new_height.max(1), FilterType::Lanczos3)
}

/// Composite over opaque white. WebP output here is flattened; transparency
/// has no place in the photographic section assets.
pub fn flatten_onto_white(img: &DynamicImage) -> RgbImage {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let mut out = RgbImage::new(width, height);
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let Rgba([r, g, b, a]) = *pixel;
        let alpha = a as u32;
        let blend = |c: u8| (((c as u32) * alpha + 255 * (255 - alpha)) / 255) as u8;
        out.put_pixel(x, y, image::Rgb([blend(r), blend(g), blend(b)]));
    }
    out
}

pub fn encode_webp(img: &RgbImage, quality: f32) -> Vec<u8> {
    let (width, height) = img.dimensions();
    webp::Encoder::from_rgb(img.as_raw(), width, height)
        .encode(quality)
        .to_vec()
}

/// Apply one descriptor: open the source, shrink, encode, and write the
/// web-ready file into `dest_dir`. Returns the written path.
pub fn process_asset(src_path: &Path, dest_dir: &Path, spec: &AssetSpec) -> Result<PathBuf> {
    let img = image::open(src_path)
        .with_context(|| format!("Failed to open {}", src_path.display()))?;
    let (width, height) = img.dimensions();
    logi(format!("  Original: {}x{}", width, height));

    let img = shrink_to_width(img, spec.max_width);
    let (new_width, new_height) = img.dimensions();
    if (new_width, new_height) != (width, height) {
        logi(format!("  Resized to: {}x{}", new_width, new_height));
    }

    let out_path = dest_dir.join(spec.out);
    match spec.encoding {
        Encoding::WebP { quality } => {
            let flat = flatten_onto_white(&img);
            let bytes = encode_webp(&flat, quality as f32);
            std::fs::write(&out_path, &bytes)
                .with_context(|| format!("Failed to write {}", out_path.display()))?;
        }
        Encoding::Png => {
            img.save_with_format(&out_path, image::ImageFormat::Png)
                .with_context(|| format!("Failed to write {}", out_path.display()))?;
        }
    }

    Ok(out_path)
}
