use std::path::Path;

use anyhow::Context as _;
use softgpu_engine::Framebuffer;

/// Converts the framebuffer to tightly packed RGBA rows, top row first.
///
/// The device stores texel `(x, y)` at `x * height + y` with `y = 0` at the
/// bottom, so rows are flipped on the way out.
pub fn to_image_rows(fb: &Framebuffer) -> Vec<u8> {
    let (width, height) = (fb.width(), fb.height());
    let mut out = Vec::with_capacity(width as usize * height as usize * 4);
    for row in 0..height {
        let y = height - 1 - row;
        for x in 0..width {
            let texel = fb.color_at(x, y).unwrap_or_default();
            out.extend_from_slice(&[texel.r, texel.g, texel.b, texel.a]);
        }
    }
    out
}

/// Writes the framebuffer as a PNG, creating parent directories as needed.
pub fn save_png(fb: &Framebuffer, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        path,
        &to_image_rows(fb),
        fb.width(),
        fb.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;

    log::info!("wrote {}", path.display());
    Ok(())
}
