use std::sync::Arc;

use trailcast_core::{Canvas, Position, SpeedUnit, Timestamp, TrailcastResult, TrackPosition};

use crate::context::RenderingContext;
use crate::overlay::render_image;
use crate::plugins::RendererPlugin;
use crate::text::{TextAlignment, TextRenderer};
use crate::timeline::Timeline;

pub const INFORMATION_ORDER: i32 = 20;

/// Live annotation block: the frame's timestamp and the current speed in the
/// configured unit, re-rendered every frame and anchored with the shared
/// placement routine.
pub struct InformationPlugin {
    timeline: Arc<Timeline>,
    position: Position,
    margin: i32,
    speed_unit: SpeedUnit,
    text_renderer: TextRenderer,
}

impl InformationPlugin {
    pub fn new(
        timeline: Arc<Timeline>,
        position: Position,
        margin: i32,
        speed_unit: SpeedUnit,
    ) -> Self {
        Self {
            timeline,
            position,
            margin,
            speed_unit,
            text_renderer: TextRenderer::new(),
        }
    }

    /// The block's text at an instant: a UTC timestamp line, plus a speed
    /// line when a track is active and the converted value is finite. A
    /// stopped pace (non-finite) renders as a time-only block.
    fn block_text(&self, time: Timestamp) -> String {
        let time_line = format_utc(time);

        let speed_line = self
            .timeline
            .tracks()
            .iter()
            .find(|resolved| {
                matches!(resolved.track.point_at(time), TrackPosition::Active { .. })
            })
            .and_then(|resolved| self.speed_unit.format(resolved.track.speed_at(time)));

        match speed_line {
            Some(speed) => format!("{}\n{}", time_line, speed),
            None => time_line,
        }
    }
}

/// Format an absolute timestamp as a UTC date-time line.
fn format_utc(time: Timestamp) -> String {
    match chrono::DateTime::from_timestamp_millis(time.as_millis()) {
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => time.to_string(),
    }
}

impl RendererPlugin for InformationPlugin {
    fn name(&self) -> &'static str {
        "information"
    }

    fn order(&self) -> i32 {
        INFORMATION_ORDER
    }

    fn render_frame(
        &mut self,
        frame: u64,
        canvas: &mut Canvas,
        _context: &dyn RenderingContext,
    ) -> TrailcastResult<()> {
        let time = self.timeline.timestamp_for(frame);
        let block = self
            .text_renderer
            .render_text(&self.block_text(time), TextAlignment::Left);
        render_image(&block, self.position, self.margin, canvas);
        Ok(())
    }
}
