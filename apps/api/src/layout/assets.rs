//! Template images: header logos and the full-page background watermark.
//!
//! Images are decoded once at startup and re-encoded as RGBA PNG so the
//! renderer can embed them with known pixel dimensions. The watermark's
//! opacity is multiplied into its alpha channel here, since the document
//! model has no per-picture transparency.

use std::io;
use std::path::{Path, PathBuf};

use image::codecs::png::PngEncoder;
use image::{ColorType, GenericImageView, ImageEncoder};
use thiserror::Error;
use tracing::{info, warn};

pub const LEFT_LOGO_FILE: &str = "left_logo_small.png";
pub const RIGHT_LOGO_FILE: &str = "right_logo_small.png";
pub const BACKGROUND_FILE: &str = "bg.png";

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read image {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("failed to encode image as PNG: {0}")]
    Encode(#[source] image::ImageError),
}

/// A PNG-encoded picture with its pixel size.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAsset {
    pub png_data: Vec<u8>,
    pub width_px: u32,
    pub height_px: u32,
}

impl ImageAsset {
    /// Decodes any format the `image` crate understands and normalizes it to PNG.
    #[cfg(test)]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        Self::decode_with_opacity(bytes, 1.0)
    }

    /// Decodes any format the `image` crate understands, scales every pixel's
    /// alpha by `opacity` and normalizes the result to PNG.
    pub fn decode_with_opacity(bytes: &[u8], opacity: f32) -> Result<Self, AssetError> {
        let decoded = image::load_from_memory(bytes).map_err(AssetError::Decode)?;
        let (width, height) = decoded.dimensions();
        let mut rgba = decoded.to_rgba8();

        let opacity = opacity.clamp(0.0, 1.0);
        if opacity < 1.0 {
            for pixel in rgba.pixels_mut() {
                pixel.0[3] = (f32::from(pixel.0[3]) * opacity).round() as u8;
            }
        }

        let mut png_data = Vec::new();
        PngEncoder::new(&mut png_data)
            .write_image(rgba.as_raw(), width, height, ColorType::Rgba8.into())
            .map_err(AssetError::Encode)?;

        Ok(ImageAsset {
            png_data,
            width_px: width,
            height_px: height,
        })
    }

    pub fn load(path: &Path, opacity: f32) -> Result<Self, AssetError> {
        let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::decode_with_opacity(&bytes, opacity)
    }

    /// Width in EMUs that keeps the aspect ratio at `height_emu`.
    pub fn width_for_height(&self, height_emu: u32) -> u32 {
        if self.height_px == 0 {
            return 0;
        }
        ((height_emu as f64) * (self.width_px as f64) / (self.height_px as f64)).round() as u32
    }
}

/// The optional pictures a template can use. Any of them may be missing;
/// the renderer falls back to text labels for logos and omits the watermark.
#[derive(Debug, Clone, Default)]
pub struct TemplateAssets {
    pub left_logo: Option<ImageAsset>,
    pub right_logo: Option<ImageAsset>,
    pub background: Option<ImageAsset>,
}

impl TemplateAssets {
    /// No pictures at all; every embellishment uses its fallback.
    #[cfg(test)]
    pub fn none() -> Self {
        Self::default()
    }

    /// Loads the template images from `dir`, logging and skipping any that
    /// cannot be read or decoded.
    pub fn load_dir(dir: &Path, watermark_opacity: f32) -> Self {
        let assets = TemplateAssets {
            left_logo: load_optional(&dir.join(LEFT_LOGO_FILE), 1.0),
            right_logo: load_optional(&dir.join(RIGHT_LOGO_FILE), 1.0),
            background: load_optional(&dir.join(BACKGROUND_FILE), watermark_opacity),
        };
        info!(
            "Template assets from {}: left_logo={} right_logo={} background={}",
            dir.display(),
            assets.left_logo.is_some(),
            assets.right_logo.is_some(),
            assets.background.is_some()
        );
        assets
    }
}

fn load_optional(path: &Path, opacity: f32) -> Option<ImageAsset> {
    match ImageAsset::load(path, opacity) {
        Ok(asset) => Some(asset),
        Err(e) => {
            warn!("Skipping template image {}: {e}", path.display());
            None
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::solid_png;
    use super::*;

    #[test]
    fn test_from_bytes_keeps_dimensions() {
        let asset = ImageAsset::from_bytes(&solid_png(40, 10)).unwrap();
        assert_eq!((asset.width_px, asset.height_px), (40, 10));
        assert!(!asset.png_data.is_empty());
    }

    #[test]
    fn test_opacity_is_baked_into_alpha() {
        let asset = ImageAsset::decode_with_opacity(&solid_png(4, 4), 0.17).unwrap();
        let decoded = image::load_from_memory(&asset.png_data).unwrap().to_rgba8();
        // 255 * 0.17 = 43.35
        assert!(decoded.pixels().all(|p| p.0[3] == 43));
        assert!(decoded.pixels().all(|p| p.0[0] == 242));
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        let err = ImageAsset::from_bytes(b"not an image").unwrap_err();
        assert!(matches!(err, AssetError::Decode(_)));
    }

    #[test]
    fn test_width_for_height_keeps_aspect_ratio() {
        let asset = ImageAsset::from_bytes(&solid_png(300, 100)).unwrap();
        assert_eq!(asset.width_for_height(320_040), 960_120);
    }

    #[test]
    fn test_load_dir_skips_missing_and_broken_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(LEFT_LOGO_FILE), solid_png(20, 10)).unwrap();
        std::fs::write(dir.path().join(BACKGROUND_FILE), b"broken").unwrap();

        let assets = TemplateAssets::load_dir(dir.path(), 0.17);
        assert!(assets.left_logo.is_some());
        assert!(assets.right_logo.is_none());
        assert!(assets.background.is_none());
    }

    #[test]
    fn test_load_reports_missing_path() {
        let err = ImageAsset::load(Path::new("/definitely/not/here.png"), 1.0).unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
    }
}
