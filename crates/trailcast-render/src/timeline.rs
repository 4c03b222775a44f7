//! The resolved render timeline: tracks, frame timing, and projection.

use trailcast_core::{
    Color, Duration, GeoBounds, RenderConfig, Timestamp, TrailcastError, TrailcastResult, Track,
    TrackConfig, TrackPoint, TrackPosition,
};

use crate::projection::MapProjection;

/// A track with its styling, after offset/trim resolution.
#[derive(Debug, Clone)]
pub struct ResolvedTrack {
    pub label: String,
    pub color: Color,
    pub line_width: u32,
    pub marker_size: u32,
    pub track: Track,
}

/// Immutable per-render state shared by all position-dependent plugins:
/// the resolved tracks, the frame timing, and the map projection.
#[derive(Debug, Clone)]
pub struct Timeline {
    tracks: Vec<ResolvedTrack>,
    start: Timestamp,
    duration: Duration,
    total_frames: u64,
    fps: f64,
    projection: MapProjection,
}

impl Timeline {
    /// Resolve a validated configuration into a render timeline.
    ///
    /// Applies each track's time offset and trim window, validates the
    /// results, derives the global start and duration, and fits the map
    /// projection over the union bounds of all samples.
    pub fn build(config: &RenderConfig) -> TrailcastResult<Self> {
        config.validate()?;

        let mut tracks = Vec::with_capacity(config.tracks.len());
        for track_config in &config.tracks {
            tracks.push(resolve_track(track_config)?);
        }

        let start = tracks
            .iter()
            .map(|t| t.track.start_time())
            .min()
            .expect("validated configuration has at least one track");
        let end = tracks
            .iter()
            .map(|t| t.track.end_time())
            .max()
            .expect("validated configuration has at least one track");

        let duration = config.duration.unwrap_or_else(|| end.duration_since(start));
        if duration.is_zero() {
            return Err(TrailcastError::InvalidConfiguration(
                "render duration is zero".to_string(),
            ));
        }

        // Both endpoints are rendered: a 10 s span at 1 fps is 11 frames.
        let total_frames = (duration.as_seconds() * config.fps).floor() as u64 + 1;

        let bounds = GeoBounds::from_points(
            tracks
                .iter()
                .flat_map(|t| t.track.points().iter().map(|p| p.geo())),
        )
        .expect("resolved tracks are non-empty");

        let projection =
            MapProjection::fit(&bounds, config.width, config.height, config.viewport_padding);

        tracing::info!(
            tracks = tracks.len(),
            total_frames,
            duration = %duration,
            "resolved render timeline"
        );

        Ok(Self {
            tracks,
            start,
            duration,
            total_frames,
            fps: config.fps,
            projection,
        })
    }

    pub fn tracks(&self) -> &[ResolvedTrack] {
        &self.tracks
    }

    pub fn start(&self) -> Timestamp {
        self.start
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    pub fn projection(&self) -> &MapProjection {
        &self.projection
    }

    /// The logical timestamp of an output frame.
    pub fn timestamp_for(&self, frame: u64) -> Timestamp {
        self.start + Duration::from_millis((frame as f64 * 1000.0 / self.fps).round() as i64)
    }

    /// A track's interpolated position at a frame's instant.
    pub fn position_at(&self, track_index: usize, frame: u64) -> TrackPosition {
        self.tracks[track_index]
            .track
            .point_at(self.timestamp_for(frame))
    }
}

/// Apply offset and trim to one configured track and validate the result.
fn resolve_track(config: &TrackConfig) -> TrailcastResult<ResolvedTrack> {
    let points: Vec<TrackPoint> = config
        .points
        .iter()
        .map(|p| TrackPoint {
            time: p.time.offset_by(config.time_offset),
            ..*p
        })
        .filter(|p| {
            config.trim_start.map_or(true, |start| p.time >= start)
                && config.trim_end.map_or(true, |end| p.time <= end)
        })
        .collect();

    if points.is_empty() {
        return Err(TrailcastError::Track(format!(
            "track '{}' has no samples inside its trim window",
            config.label
        )));
    }

    Ok(ResolvedTrack {
        label: config.label.clone(),
        color: config.color,
        line_width: config.line_width,
        marker_size: config.marker_size,
        track: Track::new(points)?,
    })
}
