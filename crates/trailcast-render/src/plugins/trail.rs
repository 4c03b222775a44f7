use std::sync::Arc;

use embedded_graphics::{
    geometry::Point,
    primitives::{Line, Primitive, PrimitiveStyle},
    Drawable,
};
use trailcast_core::{Canvas, TrailcastResult, TrackPosition};

use crate::context::RenderingContext;
use crate::graphics::{to_rgb888, CanvasDrawTarget};
use crate::plugins::RendererPlugin;
use crate::timeline::Timeline;

pub const TRAIL_ORDER: i32 = 0;

/// Draws every track's path from its first sample up to the frame's
/// interpolated head position.
pub struct TrackTrailPlugin {
    timeline: Arc<Timeline>,
}

impl TrackTrailPlugin {
    pub fn new(timeline: Arc<Timeline>) -> Self {
        Self { timeline }
    }
}

impl RendererPlugin for TrackTrailPlugin {
    fn name(&self) -> &'static str {
        "track-trail"
    }

    fn order(&self) -> i32 {
        TRAIL_ORDER
    }

    fn render_frame(
        &mut self,
        frame: u64,
        canvas: &mut Canvas,
        _context: &dyn RenderingContext,
    ) -> TrailcastResult<()> {
        let time = self.timeline.timestamp_for(frame);
        let projection = self.timeline.projection();

        for resolved in self.timeline.tracks() {
            let head = match resolved.track.point_at(time) {
                TrackPosition::NotStarted => continue,
                TrackPosition::Active { point, .. } => point,
                TrackPosition::Finished { point } => point,
            };

            let style = PrimitiveStyle::with_stroke(
                to_rgb888(&resolved.color),
                resolved.line_width.max(1),
            );

            let mut previous: Option<Point> = None;
            for sample in resolved.track.points_until(time) {
                let (x, y) = projection.project_px(&sample.geo());
                let current = Point::new(x, y);
                if let Some(start) = previous {
                    let _ = Line::new(start, current)
                        .into_styled(style)
                        .draw(&mut CanvasDrawTarget::new(canvas));
                }
                previous = Some(current);
            }

            // Segment from the last passed sample to the interpolated head.
            let (hx, hy) = projection.project_px(&head);
            let head_point = Point::new(hx, hy);
            if let Some(start) = previous {
                if start != head_point {
                    let _ = Line::new(start, head_point)
                        .into_styled(style)
                        .draw(&mut CanvasDrawTarget::new(canvas));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::NullContext;
    use trailcast_core::{Color, RenderConfig, Timestamp, TrackConfig, TrackPoint};

    fn timeline() -> Arc<Timeline> {
        let mut config = RenderConfig::new(100, 100, 1.0);
        config.viewport_padding = 10;
        config.tracks.push(TrackConfig::new(
            "",
            Color::RED,
            vec![
                TrackPoint::new(Timestamp::from_seconds(0.0), 0.0, 0.0),
                TrackPoint::new(Timestamp::from_seconds(10.0), 0.0, 0.001),
            ],
        ));
        Arc::new(Timeline::build(&config).unwrap())
    }

    #[test]
    fn test_trail_grows_with_time() {
        let timeline = timeline();
        let mut plugin = TrackTrailPlugin::new(Arc::clone(&timeline));

        let mut early = Canvas::new(100, 100);
        plugin.render_frame(2, &mut early, &NullContext).unwrap();
        let mut late = Canvas::new(100, 100);
        plugin.render_frame(8, &mut late, &NullContext).unwrap();

        let ink = |canvas: &Canvas| {
            canvas
                .data
                .chunks_exact(4)
                .filter(|px| px[3] > 0)
                .count()
        };
        assert!(ink(&early) > 0);
        assert!(ink(&late) > ink(&early));
    }

    #[test]
    fn test_trail_covers_start_to_head() {
        let timeline = timeline();
        let mut plugin = TrackTrailPlugin::new(Arc::clone(&timeline));
        let mut canvas = Canvas::new(100, 100);
        plugin.render_frame(5, &mut canvas, &NullContext).unwrap();

        let projection = timeline.projection();
        let (sx, sy) = projection.project_px(&trailcast_core::GeoPoint::new(0.0, 0.0));
        let (mx, my) = projection.project_px(&trailcast_core::GeoPoint::new(0.0, 0.0005));
        assert_eq!(canvas.get_pixel(sx as u32, sy as u32), Some([255, 0, 0, 255]));
        assert_eq!(canvas.get_pixel(mx as u32, my as u32), Some([255, 0, 0, 255]));
        // Beyond the head nothing is drawn yet.
        let (ex, ey) = projection.project_px(&trailcast_core::GeoPoint::new(0.0, 0.001));
        assert_eq!(canvas.get_pixel(ex as u32, ey as u32), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_not_started_track_draws_nothing() {
        // Track B starts 5 s into the render; its half of the canvas must
        // stay empty on frame 0.
        let mut config = RenderConfig::new(100, 100, 1.0);
        config.viewport_padding = 10;
        config.tracks.push(TrackConfig::new(
            "a",
            Color::RED,
            vec![
                TrackPoint::new(Timestamp::from_seconds(0.0), 0.001, 0.0),
                TrackPoint::new(Timestamp::from_seconds(10.0), 0.001, 0.001),
            ],
        ));
        config.tracks.push(TrackConfig::new(
            "b",
            Color::BLUE,
            vec![
                TrackPoint::new(Timestamp::from_seconds(5.0), -0.001, 0.0),
                TrackPoint::new(Timestamp::from_seconds(10.0), -0.001, 0.001),
            ],
        ));
        let timeline = Arc::new(Timeline::build(&config).unwrap());
        let mut plugin = TrackTrailPlugin::new(timeline);
        let mut canvas = Canvas::new(100, 100);
        plugin.render_frame(0, &mut canvas, &NullContext).unwrap();

        // Nothing below the vertical midline (track B's area) is inked.
        for y in 60..100 {
            for x in 0..100 {
                assert_eq!(canvas.get_pixel(x, y), Some([0, 0, 0, 0]));
            }
        }
    }
}
