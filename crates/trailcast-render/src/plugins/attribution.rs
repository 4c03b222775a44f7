use embedded_graphics::mono_font::ascii::FONT_6X10;
use trailcast_core::{Canvas, Position, TrailcastResult};

use crate::context::RenderingContext;
use crate::overlay::render_image;
use crate::plugins::RendererPlugin;
use crate::text::{TextAlignment, TextRenderer};

pub const ATTRIBUTION_ORDER: i32 = 40;

/// Renders the attribution text block once into the background; it is
/// frame-invariant, so the per-frame pass stays a no-op.
pub struct AttributionPlugin {
    text: String,
    position: Position,
    margin: i32,
}

impl AttributionPlugin {
    pub fn new(text: String, position: Position, margin: i32) -> Self {
        Self {
            text,
            position,
            margin,
        }
    }
}

impl RendererPlugin for AttributionPlugin {
    fn name(&self) -> &'static str {
        "attribution"
    }

    fn order(&self) -> i32 {
        ATTRIBUTION_ORDER
    }

    fn render_background(
        &mut self,
        canvas: &mut Canvas,
        _context: &dyn RenderingContext,
    ) -> TrailcastResult<()> {
        let block =
            TextRenderer::with_font(&FONT_6X10).render_text(&self.text, TextAlignment::Left);
        render_image(&block, self.position, self.margin, canvas);
        Ok(())
    }
}
