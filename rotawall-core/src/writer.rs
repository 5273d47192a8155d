use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;

use crate::error::Result;

const JPEG_QUALITY: u8 = 90;

/// Persist the resized image as a JPEG under `dir`, creating the directory
/// if needed and overwriting any previous output. Returns the written path.
///
/// The image is flattened to RGB first so PNG sources with an alpha channel
/// still encode.
pub fn save_wallpaper(img: &DynamicImage, dir: &Path, filename: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(filename);

    let rgb = img.to_rgb8();
    let mut buf = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY);
    rgb.write_with_encoder(encoder)?;

    std::fs::write(&path, buf)?;
    Ok(path)
}
