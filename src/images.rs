use std::path::Path;

use image::{imageops, GrayImage, Luma, RgbaImage};

use crate::icon::in_rounded_rect;
use crate::logger::log_line;
use crate::models::ICON_SPECS;

/// Crop to a centered square whose side is the shorter input dimension.
pub fn center_crop_square(img: &RgbaImage) -> RgbaImage {
    let (w, h) = img.dimensions();
    let side = w.min(h);
    let left = (w - side) / 2;
    let top = (h - side) / 2;
    imageops::crop_imm(img, left, top, side, side).to_image()
}

/// Corner radius for a given icon size, never below 2 px.
pub fn corner_radius(size: u32) -> u32 {
    ((size as f32 * 0.16) as u32).max(2)
}

/// Single-channel rounded-rectangle mask: 255 inside, 0 in the corners.
pub fn rounded_alpha_mask(size: u32, radius: u32) -> GrayImage {
    let s = size as f32;
    let r = radius as f32;
    GrayImage::from_fn(size, size, |x, y| {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;
        if in_rounded_rect(px, py, 0.0, 0.0, s, s, r) {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

/// Replace the image's alpha channel with the mask. Dimensions must match.
pub fn apply_alpha_mask(img: &mut RgbaImage, mask: &GrayImage) {
    debug_assert_eq!(img.dimensions(), mask.dimensions());
    for (px, m) in img.pixels_mut().zip(mask.pixels()) {
        px.0[3] = m.0[0];
    }
}

/// Keep a normalized copy of the cropped source for future edits/debug.
pub fn write_source_copy(src: &RgbaImage, out_dir: &Path) -> Result<(), image::ImageError> {
    std::fs::create_dir_all(out_dir)?;
    let path = out_dir.join("source.png");
    src.save(&path)?;
    log_line(&format!("Saved source copy to {}", path.display()));
    Ok(())
}

/// Resize the source square to every target size, round the corners, save.
pub fn write_masked_icons(src: &RgbaImage, out_dir: &Path) -> Result<(), image::ImageError> {
    std::fs::create_dir_all(out_dir)?;
    for spec in ICON_SPECS {
        let mut img = if src.dimensions() == (spec.size, spec.size) {
            src.clone()
        } else {
            imageops::resize(src, spec.size, spec.size, imageops::FilterType::Lanczos3)
        };
        let mask = rounded_alpha_mask(spec.size, corner_radius(spec.size));
        apply_alpha_mask(&mut img, &mask);
        let path = out_dir.join(spec.filename);
        img.save(&path)?;
        log_line(&format!("Wrote {}", path.display()));
    }
    Ok(())
}

/// Save the drawn base sprite as-is and Lanczos-downsample the smaller
/// targets; the sprite already carries its rounded corners.
pub fn write_scaled_icons(base: &RgbaImage, out_dir: &Path) -> Result<(), image::ImageError> {
    std::fs::create_dir_all(out_dir)?;
    for spec in ICON_SPECS {
        let img = if base.dimensions() == (spec.size, spec.size) {
            base.clone()
        } else {
            imageops::resize(base, spec.size, spec.size, imageops::FilterType::Lanczos3)
        };
        let path = out_dir.join(spec.filename);
        img.save(&path)?;
        log_line(&format!("Wrote {}", path.display()));
    }
    Ok(())
}
