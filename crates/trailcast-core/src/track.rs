use serde::{Deserialize, Serialize};

use crate::error::{TrailcastError, TrailcastResult};
use crate::geo::GeoPoint;
use crate::time::Timestamp;

/// A single GPS sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    pub time: Timestamp,
    pub lat: f64,
    pub lon: f64,
    pub elevation: Option<f64>,
}

impl TrackPoint {
    pub fn new(time: Timestamp, lat: f64, lon: f64) -> Self {
        Self {
            time,
            lat,
            lon,
            elevation: None,
        }
    }

    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = Some(elevation);
        self
    }

    /// The sample's geographic coordinate.
    pub fn geo(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

/// Where a track is relative to a queried instant.
///
/// Position-dependent plugins no-op on `NotStarted`; whether `Finished`
/// tracks stay visible is a configuration policy, not a property of the
/// track itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackPosition {
    /// The instant precedes the first sample.
    NotStarted,
    /// The instant lies inside the track's time range.
    Active {
        point: GeoPoint,
        elevation: Option<f64>,
    },
    /// The instant is past the last sample; the final position is reported.
    Finished { point: GeoPoint },
}

/// An ordered, time-indexed sequence of GPS samples, immutable once built.
///
/// Invariant: timestamps are non-decreasing. Equal adjacent timestamps are
/// tolerated; a zero-length bracket interpolates with factor zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    points: Vec<TrackPoint>,
}

impl Track {
    /// Build a track, validating that it is non-empty and time-ordered.
    pub fn new(points: Vec<TrackPoint>) -> TrailcastResult<Self> {
        if points.is_empty() {
            return Err(TrailcastError::Track("track has no samples".to_string()));
        }
        for pair in points.windows(2) {
            if pair[1].time < pair[0].time {
                return Err(TrailcastError::Track(format!(
                    "track timestamps must be non-decreasing ({} follows {})",
                    pair[1].time, pair[0].time
                )));
            }
        }
        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[TrackPoint] {
        &self.points
    }

    /// Timestamp of the first sample.
    pub fn start_time(&self) -> Timestamp {
        self.points[0].time
    }

    /// Timestamp of the last sample.
    pub fn end_time(&self) -> Timestamp {
        self.points[self.points.len() - 1].time
    }

    /// Resolve the track's position at an instant by locating the bracketing
    /// samples and linearly interpolating latitude, longitude, and elevation.
    pub fn point_at(&self, time: Timestamp) -> TrackPosition {
        let first = &self.points[0];
        let last = &self.points[self.points.len() - 1];

        if time < first.time {
            return TrackPosition::NotStarted;
        }
        if time > last.time {
            return TrackPosition::Finished { point: last.geo() };
        }
        if time == last.time {
            return TrackPosition::Active {
                point: last.geo(),
                elevation: last.elevation,
            };
        }

        // First sample strictly after `time`; the bracket is [next-1, next].
        let next = self.points.partition_point(|p| p.time <= time);
        let prev = &self.points[next - 1];
        let next = &self.points[next];

        let span = next.time.duration_since(prev.time).as_millis();
        let t = if span == 0 {
            0.0
        } else {
            time.duration_since(prev.time).as_millis() as f64 / span as f64
        };

        let elevation = match (prev.elevation, next.elevation) {
            (Some(a), Some(b)) => Some(a + (b - a) * t),
            _ => None,
        };

        TrackPosition::Active {
            point: prev.geo().lerp(&next.geo(), t),
            elevation,
        }
    }

    /// All samples with a timestamp at or before the given instant, in order.
    pub fn points_until(&self, time: Timestamp) -> &[TrackPoint] {
        let end = self.points.partition_point(|p| p.time <= time);
        &self.points[..end]
    }

    /// Instantaneous speed in km/h at an instant, derived from the bracketing
    /// segment's great-circle distance over its time delta. Zero outside the
    /// track's time range and on zero-length time brackets.
    pub fn speed_at(&self, time: Timestamp) -> f64 {
        if self.points.len() < 2 || time < self.start_time() || time > self.end_time() {
            return 0.0;
        }

        let idx = self
            .points
            .partition_point(|p| p.time < time)
            .clamp(1, self.points.len() - 1);
        let prev = &self.points[idx - 1];
        let next = &self.points[idx];

        let hours = next.time.duration_since(prev.time).as_seconds() / 3600.0;
        if hours <= 0.0 {
            return 0.0;
        }
        prev.geo().distance_km(&next.geo()) / hours
    }
}
