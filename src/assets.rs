//! The static table describing how each generated image becomes a web asset.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    WebP { quality: u8 },
    Png,
}

#[derive(Debug, Clone, Copy)]
pub struct AssetSpec {
    /// Source filename inside the output directory.
    pub src: &'static str,
    /// Web-ready filename inside the public images directory.
    pub out: &'static str,
    /// Cloudinary destination folder.
    pub folder: &'static str,
    /// Cloudinary public id (uploads overwrite this id).
    pub public_id: &'static str,
    pub encoding: Encoding,
    pub max_width: u32,
}

pub const SITE_ASSETS: &[AssetSpec] = &[
    AssetSpec {
        src: "why-kadima.png",
        out: "why-kadima.webp",
        folder: "kadima-logistics/sections",
        public_id: "why-kadima",
        encoding: Encoding::WebP { quality: 82 },
        // 2x display size for a ~600px container
        max_width: 1200,
    },
    AssetSpec {
        src: "dhl-spotlight.png",
        out: "dhl-spotlight.webp",
        folder: "kadima-logistics/sections",
        public_id: "dhl-spotlight",
        encoding: Encoding::WebP { quality: 80 },
        max_width: 1200,
    },
    AssetSpec {
        // The OG card stays PNG; social scrapers are inconsistent about WebP.
        src: "og-image.png",
        out: "og-image.png",
        folder: "kadima-logistics/og-images",
        public_id: "og-main",
        encoding: Encoding::Png,
        max_width: 1200,
    },
];
