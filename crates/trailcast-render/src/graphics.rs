//! embedded-graphics adapter for the frame canvas.

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::Size,
    pixelcolor::{Rgb888, RgbColor},
    Pixel,
};
use trailcast_core::{Canvas, Color};

/// Wraps a [`Canvas`] as an embedded-graphics draw target so mono-font text
/// and styled primitives can rasterize into it. Drawn pixels are written
/// fully opaque; out-of-bounds pixels are clipped.
pub struct CanvasDrawTarget<'a> {
    canvas: &'a mut Canvas,
}

impl<'a> CanvasDrawTarget<'a> {
    pub fn new(canvas: &'a mut Canvas) -> Self {
        Self { canvas }
    }
}

impl DrawTarget for CanvasDrawTarget<'_> {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels.into_iter() {
            if point.x >= 0 && point.y >= 0 {
                self.canvas.blend_pixel(
                    point.x as u32,
                    point.y as u32,
                    [color.r(), color.g(), color.b(), 255],
                );
            }
        }
        Ok(())
    }
}

impl embedded_graphics::prelude::OriginDimensions for CanvasDrawTarget<'_> {
    fn size(&self) -> Size {
        Size::new(self.canvas.width, self.canvas.height)
    }
}

/// Convert an engine color to the opaque RGB color primitives draw with.
pub fn to_rgb888(color: &Color) -> Rgb888 {
    let [r, g, b, _] = color.to_rgba8();
    Rgb888::new(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};

    #[test]
    fn test_draw_line_into_canvas() {
        let mut canvas = Canvas::new(10, 10);
        let style = PrimitiveStyle::with_stroke(Rgb888::RED, 1);
        Line::new(Point::new(0, 0), Point::new(9, 0))
            .into_styled(style)
            .draw(&mut CanvasDrawTarget::new(&mut canvas))
            .unwrap();
        assert_eq!(canvas.get_pixel(0, 0), Some([255, 0, 0, 255]));
        assert_eq!(canvas.get_pixel(9, 0), Some([255, 0, 0, 255]));
        assert_eq!(canvas.get_pixel(0, 1), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_draw_clips_out_of_bounds() {
        let mut canvas = Canvas::new(4, 4);
        let style = PrimitiveStyle::with_fill(Rgb888::GREEN);
        Circle::with_center(Point::new(0, 0), 6)
            .into_styled(style)
            .draw(&mut CanvasDrawTarget::new(&mut canvas))
            .unwrap();
        // In-bounds part of the disc is drawn, the rest is clipped.
        assert_eq!(canvas.get_pixel(0, 0), Some([0, 255, 0, 255]));
        assert_eq!(canvas.get_pixel(3, 3), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_to_rgb888_drops_alpha() {
        let c = Color::rgba(1.0, 0.5, 0.0, 0.25);
        let rgb = to_rgb888(&c);
        assert_eq!(rgb.r(), 255);
        assert_eq!(rgb.b(), 0);
    }
}
