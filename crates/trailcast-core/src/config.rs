use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::color::Color;
use crate::error::{TrailcastError, TrailcastResult};
use crate::position::Position;
use crate::speed::SpeedUnit;
use crate::time::{Duration, Timestamp};
use crate::track::TrackPoint;

/// What to draw for a track whose time range ends before the render's last
/// frame: keep the marker at its final position, or remove it. The trail
/// itself always stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TrackEndPolicy {
    #[default]
    Hold,
    Hide,
}

/// Per-track styling and data.
///
/// Owned by the render configuration; plugins see the resolved form through
/// the shared timeline rather than copies of this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackConfig {
    /// Label drawn next to the track's marker; empty for none.
    pub label: String,
    /// Trail and marker color.
    pub color: Color,
    /// Trail stroke width in pixels.
    pub line_width: u32,
    /// Marker diameter in pixels.
    pub marker_size: u32,
    /// Signed shift applied to every sample timestamp, in milliseconds.
    pub time_offset: i64,
    /// Drop samples before this instant (applied after the offset).
    pub trim_start: Option<Timestamp>,
    /// Drop samples after this instant (applied after the offset).
    pub trim_end: Option<Timestamp>,
    /// The raw time-ordered samples.
    pub points: Vec<TrackPoint>,
}

impl TrackConfig {
    pub fn new(label: impl Into<String>, color: Color, points: Vec<TrackPoint>) -> Self {
        Self {
            label: label.into(),
            color,
            line_width: 2,
            marker_size: 9,
            time_offset: 0,
            trim_start: None,
            trim_end: None,
            points,
        }
    }
}

/// The resolved configuration for one render invocation.
///
/// Produced by an external collaborator (GUI, CLI, project loader); the
/// engine only validates and consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Output canvas width in pixels.
    pub width: u32,
    /// Output canvas height in pixels.
    pub height: u32,
    /// Output frame rate.
    pub fps: f64,
    /// Explicit render duration; defaults to the union span of all tracks.
    pub duration: Option<Duration>,
    /// Background fill color.
    pub background_color: Color,
    /// Margin between overlays and the canvas edge, in pixels.
    pub margin: i32,
    /// Padding between the projected tracks and the canvas edge, in pixels.
    pub viewport_padding: u32,
    pub track_end_policy: TrackEndPolicy,
    /// Unit for the live speed annotation.
    pub speed_unit: SpeedUnit,
    /// Anchor of the time/speed information block.
    pub information_position: Position,
    /// Attribution text; empty for none.
    pub attribution: String,
    pub attribution_position: Position,
    /// Bitmap overlay (logo) file; None for no overlay.
    pub logo: Option<PathBuf>,
    pub logo_position: Position,
    pub tracks: Vec<TrackConfig>,
}

impl RenderConfig {
    pub fn new(width: u32, height: u32, fps: f64) -> Self {
        Self {
            width,
            height,
            fps,
            duration: None,
            background_color: Color::WHITE,
            margin: 10,
            viewport_padding: 20,
            track_end_policy: TrackEndPolicy::default(),
            speed_unit: SpeedUnit::default(),
            information_position: Position::BottomRight,
            attribution: String::new(),
            attribution_position: Position::BottomLeft,
            logo: None,
            logo_position: Position::TopLeft,
            tracks: Vec::new(),
        }
    }

    /// Reject configurations that cannot produce any output. Runs before the
    /// frame loop so these surface as a single terminal failure.
    pub fn validate(&self) -> TrailcastResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(TrailcastError::InvalidConfiguration(format!(
                "output dimensions must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err(TrailcastError::InvalidConfiguration(format!(
                "frame rate must be positive, got {}",
                self.fps
            )));
        }
        if self.tracks.is_empty() {
            return Err(TrailcastError::InvalidConfiguration(
                "at least one track is required".to_string(),
            ));
        }
        for (index, track) in self.tracks.iter().enumerate() {
            if track.points.is_empty() {
                return Err(TrailcastError::InvalidConfiguration(format!(
                    "track {} ('{}') has no samples",
                    index, track.label
                )));
            }
        }
        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(1280, 720, 30.0)
    }
}
