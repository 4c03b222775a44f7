use trailcast_core::{Canvas, Color, TrailcastResult};

use crate::context::RenderingContext;
use crate::plugins::RendererPlugin;

/// Fills the canvas with the configured background color, once, under
/// everything else.
pub struct BackgroundColorPlugin {
    background_color: Color,
}

impl BackgroundColorPlugin {
    pub fn new(background_color: Color) -> Self {
        Self { background_color }
    }
}

impl RendererPlugin for BackgroundColorPlugin {
    fn name(&self) -> &'static str {
        "background-color"
    }

    fn order(&self) -> i32 {
        i32::MIN
    }

    fn render_background(
        &mut self,
        canvas: &mut Canvas,
        _context: &dyn RenderingContext,
    ) -> TrailcastResult<()> {
        canvas.fill(&self.background_color);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::NullContext;

    #[test]
    fn test_background_fill() {
        let mut plugin = BackgroundColorPlugin::new(Color::BLUE);
        let mut canvas = Canvas::new(4, 4);
        plugin.render_background(&mut canvas, &NullContext).unwrap();
        assert_eq!(canvas.get_pixel(0, 0), Some([0, 0, 255, 255]));
        assert_eq!(canvas.get_pixel(3, 3), Some([0, 0, 255, 255]));
    }

    #[test]
    fn test_frame_pass_is_noop() {
        let mut plugin = BackgroundColorPlugin::new(Color::BLUE);
        let mut canvas = Canvas::new(4, 4);
        let before = canvas.clone();
        plugin.render_frame(0, &mut canvas, &NullContext).unwrap();
        assert_eq!(canvas, before);
    }

    #[test]
    fn test_order_is_minimum() {
        assert_eq!(BackgroundColorPlugin::new(Color::BLUE).order(), i32::MIN);
    }
}
