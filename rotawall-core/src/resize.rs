use std::io::Cursor;

use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};

use crate::error::Result;
use crate::models::{ResizeMode, Resolution};

/// Decode raw candidate bytes, sniffing the format from the content.
pub fn decode_image(data: &[u8]) -> Result<DynamicImage> {
    let img = ImageReader::new(Cursor::new(data))
        .with_guessed_format()?
        .decode()?;
    Ok(img)
}

/// Pure geometric transform: adapt `img` to `target` under the given mode.
///
/// - `Fit` preserves aspect ratio and never exceeds the target on either
///   axis; the binding axis matches the target exactly.
/// - `Fill` scales to cover the target, then center-crops to exact size.
/// - `Stretch` resamples to exact target size, distorting freely.
pub fn resize_to(img: &DynamicImage, target: Resolution, mode: ResizeMode) -> DynamicImage {
    match mode {
        ResizeMode::Fit => {
            let (w, h) = fit_dimensions(img.width(), img.height(), target);
            img.resize_exact(w, h, FilterType::Lanczos3)
        }
        ResizeMode::Fill => {
            let (w, h) = cover_dimensions(img.width(), img.height(), target);
            let scaled = img.resize_exact(w, h, FilterType::Lanczos3);
            let x = (w - target.width) / 2;
            let y = (h - target.height) / 2;
            scaled.crop_imm(x, y, target.width, target.height)
        }
        ResizeMode::Stretch => {
            img.resize_exact(target.width, target.height, FilterType::Lanczos3)
        }
    }
}

/// Largest dimensions that preserve the image's aspect ratio while staying
/// inside the target on both axes.
fn fit_dimensions(img_w: u32, img_h: u32, target: Resolution) -> (u32, u32) {
    let img_ratio = img_w as f64 / img_h as f64;

    if img_ratio > target.ratio() {
        // wider than the screen: width binds
        let w = target.width;
        let h = ((w as f64 / img_ratio) as u32).max(1);
        (w, h)
    } else {
        // taller (or equal): height binds
        let h = target.height;
        let w = ((h as f64 * img_ratio) as u32).max(1);
        (w, h)
    }
}

/// Smallest aspect-preserving dimensions that cover the target on both axes.
fn cover_dimensions(img_w: u32, img_h: u32, target: Resolution) -> (u32, u32) {
    let img_ratio = img_w as f64 / img_h as f64;

    if img_ratio > target.ratio() {
        // wider than the screen: height binds, width overshoots
        let h = target.height;
        let w = ((h as f64 * img_ratio).ceil() as u32).max(target.width);
        (w, h)
    } else {
        let w = target.width;
        let h = ((w as f64 / img_ratio).ceil() as u32).max(target.height);
        (w, h)
    }
}
