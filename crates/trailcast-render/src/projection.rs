//! Mapping from geographic coordinates to canvas pixels.

use trailcast_core::{GeoBounds, GeoPoint};

/// Fits a geographic bounding box into the canvas, minus padding.
///
/// Equirectangular with latitude correction: longitudes are compressed by
/// `cos(mid_lat)` so horizontal and vertical pixel distances match, and one
/// uniform scale preserves the aspect ratio. The projection is linear in
/// latitude/longitude, so interpolating sample coordinates and projecting
/// commutes: a midpoint in time lands on the pixel midpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapProjection {
    center_x: f64,
    center_y: f64,
    mid: GeoPoint,
    lon_factor: f64,
    scale: f64,
}

impl MapProjection {
    /// Build a projection that places `bounds` centered inside a
    /// `width` × `height` canvas with `padding` pixels kept clear on every
    /// edge. Degenerate bounds (a single point) collapse to the center.
    pub fn fit(bounds: &GeoBounds, width: u32, height: u32, padding: u32) -> Self {
        let mid = bounds.center();
        let lon_factor = mid.lat.to_radians().cos();

        let avail_width = width.saturating_sub(2 * padding).max(1) as f64;
        let avail_height = height.saturating_sub(2 * padding).max(1) as f64;

        let lon_span = bounds.lon_span() * lon_factor;
        let lat_span = bounds.lat_span();

        let scale_x = if lon_span > 0.0 {
            avail_width / lon_span
        } else {
            f64::INFINITY
        };
        let scale_y = if lat_span > 0.0 {
            avail_height / lat_span
        } else {
            f64::INFINITY
        };

        let scale = scale_x.min(scale_y);
        let scale = if scale.is_finite() { scale } else { 0.0 };

        Self {
            center_x: width as f64 / 2.0,
            center_y: height as f64 / 2.0,
            mid,
            lon_factor,
            scale,
        }
    }

    /// Project a coordinate to fractional pixel coordinates.
    pub fn project(&self, point: &GeoPoint) -> (f64, f64) {
        let x = self.center_x + (point.lon - self.mid.lon) * self.lon_factor * self.scale;
        let y = self.center_y - (point.lat - self.mid.lat) * self.scale;
        (x, y)
    }

    /// Project a coordinate to the nearest whole pixel.
    pub fn project_px(&self, point: &GeoPoint) -> (i32, i32) {
        let (x, y) = self.project(point);
        (x.round() as i32, y.round() as i32)
    }
}
