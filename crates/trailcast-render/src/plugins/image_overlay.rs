use trailcast_core::{Canvas, Position, TrailcastResult};

use crate::context::RenderingContext;
use crate::overlay::render_image;
use crate::plugins::RendererPlugin;

pub const IMAGE_OVERLAY_ORDER: i32 = 30;

/// Composites a bitmap (logo) at a fixed anchor on every frame, above the
/// moving content. The bitmap is decoded once at render setup.
pub struct ImageOverlayPlugin {
    image: Canvas,
    position: Position,
    margin: i32,
}

impl ImageOverlayPlugin {
    pub fn new(image: Canvas, position: Position, margin: i32) -> Self {
        Self {
            image,
            position,
            margin,
        }
    }
}

impl RendererPlugin for ImageOverlayPlugin {
    fn name(&self) -> &'static str {
        "image-overlay"
    }

    fn order(&self) -> i32 {
        IMAGE_OVERLAY_ORDER
    }

    fn render_frame(
        &mut self,
        _frame: u64,
        canvas: &mut Canvas,
        _context: &dyn RenderingContext,
    ) -> TrailcastResult<()> {
        render_image(&self.image, self.position, self.margin, canvas);
        Ok(())
    }
}
