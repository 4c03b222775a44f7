use std::sync::Arc;

use embedded_graphics::{
    geometry::Point,
    mono_font::ascii::FONT_6X10,
    pixelcolor::{Rgb888, RgbColor},
    primitives::{Circle, Primitive, PrimitiveStyleBuilder},
    Drawable,
};
use trailcast_core::{Canvas, TrackEndPolicy, TrailcastResult, TrackPosition};

use crate::context::RenderingContext;
use crate::graphics::{to_rgb888, CanvasDrawTarget};
use crate::plugins::RendererPlugin;
use crate::text::{TextAlignment, TextRenderer};
use crate::timeline::Timeline;

pub const MARKER_ORDER: i32 = 10;

/// Gap between a marker's edge and its label, in pixels.
const LABEL_GAP: i32 = 3;

/// Draws each track's current position as a filled disc with a white ring,
/// plus the track's label beside it.
pub struct MarkerPlugin {
    timeline: Arc<Timeline>,
    end_policy: TrackEndPolicy,
    /// Pre-rendered label blocks, one per track, None for unlabeled tracks.
    labels: Vec<Option<Canvas>>,
}

impl MarkerPlugin {
    pub fn new(timeline: Arc<Timeline>, end_policy: TrackEndPolicy) -> Self {
        let label_renderer = TextRenderer::with_font(&FONT_6X10);
        let labels = timeline
            .tracks()
            .iter()
            .map(|resolved| {
                if resolved.label.trim().is_empty() {
                    None
                } else {
                    Some(label_renderer.render_text(&resolved.label, TextAlignment::Left))
                }
            })
            .collect();
        Self {
            timeline,
            end_policy,
            labels,
        }
    }
}

impl RendererPlugin for MarkerPlugin {
    fn name(&self) -> &'static str {
        "marker"
    }

    fn order(&self) -> i32 {
        MARKER_ORDER
    }

    fn render_frame(
        &mut self,
        frame: u64,
        canvas: &mut Canvas,
        _context: &dyn RenderingContext,
    ) -> TrailcastResult<()> {
        let projection = self.timeline.projection();

        for (index, resolved) in self.timeline.tracks().iter().enumerate() {
            let point = match self.timeline.position_at(index, frame) {
                TrackPosition::NotStarted => continue,
                TrackPosition::Active { point, .. } => point,
                TrackPosition::Finished { point } => match self.end_policy {
                    TrackEndPolicy::Hold => point,
                    TrackEndPolicy::Hide => continue,
                },
            };

            let (x, y) = projection.project_px(&point);
            let diameter = resolved.marker_size.max(3);
            let style = PrimitiveStyleBuilder::new()
                .fill_color(to_rgb888(&resolved.color))
                .stroke_color(Rgb888::WHITE)
                .stroke_width(1)
                .build();
            let _ = Circle::with_center(Point::new(x, y), diameter)
                .into_styled(style)
                .draw(&mut CanvasDrawTarget::new(canvas));

            if let Some(label) = &self.labels[index] {
                let label_x = x + (diameter as i32 + 1) / 2 + LABEL_GAP;
                let label_y = y - label.height as i32 / 2;
                canvas.composite_over(label, label_x, label_y);
            }
        }

        Ok(())
    }
}
