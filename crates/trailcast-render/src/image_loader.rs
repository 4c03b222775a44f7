//! Image loading module.
//!
//! Decodes PNG, JPEG, WebP, and other formats into canvases for overlay
//! plugins. Failures surface as asset errors at render setup time.

use std::path::Path;

use trailcast_core::{Canvas, TrailcastError, TrailcastResult};

/// Load an image file and convert it to an RGBA canvas.
pub fn load_image(path: &Path) -> TrailcastResult<Canvas> {
    let img = image::open(path).map_err(|e| {
        TrailcastError::asset(
            format!("failed to load image '{}': {}", path.display(), e),
            path,
        )
    })?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut canvas = Canvas::new(width, height);
    canvas.data = rgba.into_raw();

    Ok(canvas)
}

/// Load an image from raw encoded bytes (e.g. an embedded asset).
pub fn load_image_from_bytes(data: &[u8]) -> TrailcastResult<Canvas> {
    let img = image::load_from_memory(data)
        .map_err(|e| TrailcastError::asset(format!("failed to decode image: {}", e), "<memory>"))?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut canvas = Canvas::new(width, height);
    canvas.data = rgba.into_raw();

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_image_missing_file() {
        let result = load_image(Path::new("/nonexistent/image.png"));
        assert!(matches!(result, Err(TrailcastError::Asset { .. })));
    }

    #[test]
    fn test_load_image_from_invalid_bytes() {
        let result = load_image_from_bytes(&[0u8; 16]);
        assert!(matches!(result, Err(TrailcastError::Asset { .. })));
    }
}
