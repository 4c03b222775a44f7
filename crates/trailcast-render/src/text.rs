//! Text rendering module.
//!
//! Rasterizes multi-line text into a standalone translucent canvas using the
//! embedded-graphics built-in mono fonts. Each line is drawn twice: a white
//! halo pass (the round-stroke outline equivalent, stamped at every integer
//! offset within the halo radius) and a black fill pass on top, so the text
//! stays legible over an arbitrary moving background.

use embedded_graphics::{
    geometry::Point,
    mono_font::{ascii::FONT_10X20, MonoFont, MonoTextStyle},
    pixelcolor::{Rgb888, RgbColor},
    text::{Baseline, Text},
    Drawable,
};
use trailcast_core::Canvas;

use crate::graphics::CanvasDrawTarget;

/// Halo stroke radius in pixels (half of the 3 px outline stroke).
const HALO_RADIUS: f32 = 1.5;

/// Horizontal alignment of lines within the rendered text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Text renderer over a fixed mono font.
pub struct TextRenderer {
    font: &'static MonoFont<'static>,
}

impl TextRenderer {
    /// Renderer with the default annotation font.
    pub fn new() -> Self {
        Self { font: &FONT_10X20 }
    }

    /// Renderer with a specific mono font (e.g. a smaller one for labels).
    pub fn with_font(font: &'static MonoFont<'static>) -> Self {
        Self { font }
    }

    /// Height of one text line in pixels.
    pub fn line_height(&self) -> u32 {
        self.font.character_size.height
    }

    /// Distance from the top of a line to its baseline.
    fn ascent(&self) -> i32 {
        self.font.baseline as i32
    }

    /// Rendered pixel width of a single line.
    pub fn measure_line(&self, line: &str) -> u32 {
        let chars = line.chars().count() as u32;
        if chars == 0 {
            return 0;
        }
        chars * self.font.character_size.width + (chars - 1) * self.font.character_spacing
    }

    /// Render text into a new canvas sized to fit.
    ///
    /// The text is trimmed as a whole, then split on line breaks. The canvas
    /// width is the widest line, the height is `lines × line_height`, and
    /// unpainted pixels stay transparent. Whitespace-only input yields a 1×1
    /// transparent canvas.
    pub fn render_text(&self, text: &str, alignment: TextAlignment) -> Canvas {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Canvas::new(1, 1);
        }

        let lines: Vec<&str> = trimmed
            .split('\n')
            .map(|line| line.trim_end_matches('\r'))
            .collect();

        let width = lines
            .iter()
            .map(|line| self.measure_line(line))
            .max()
            .unwrap_or(0)
            .max(1);
        let line_height = self.line_height();
        let height = lines.len() as u32 * line_height;

        let mut canvas = Canvas::new(width, height);
        let halo_style = MonoTextStyle::new(self.font, Rgb888::WHITE);
        let fill_style = MonoTextStyle::new(self.font, Rgb888::BLACK);

        for (index, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }

            let line_width = self.measure_line(line);
            let x = match alignment {
                TextAlignment::Left => 0,
                TextAlignment::Center => (width - line_width) as i32 / 2,
                TextAlignment::Right => (width - line_width) as i32,
            };
            let line_number = index as i32 + 1;
            let baseline =
                (-(line_height as i32) + self.ascent()) + line_number * line_height as i32;

            // Halo pass: white stamps covering the stroke disc.
            for dy in -1i32..=1 {
                for dx in -1i32..=1 {
                    if (dx * dx + dy * dy) as f32 > HALO_RADIUS * HALO_RADIUS {
                        continue;
                    }
                    let _ = Text::with_baseline(
                        line,
                        Point::new(x + dx, baseline + dy),
                        halo_style,
                        Baseline::Alphabetic,
                    )
                    .draw(&mut CanvasDrawTarget::new(&mut canvas));
                }
            }

            // Fill pass: the glyphs themselves.
            let _ = Text::with_baseline(
                line,
                Point::new(x, baseline),
                fill_style,
                Baseline::Alphabetic,
            )
            .draw(&mut CanvasDrawTarget::new(&mut canvas));
        }

        canvas
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}
