//! # trailcast-core
//!
//! Core types and primitives for the Trailcast track animation engine.
//! This crate contains the foundational types shared across all Trailcast
//! crates: canvases, colors, timestamps, geographic primitives, the track
//! data model, speed units, render configuration, and error types.

pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod geo;
pub mod hash;
pub mod position;
pub mod speed;
pub mod time;
pub mod track;

pub use canvas::Canvas;
pub use color::Color;
pub use config::{RenderConfig, TrackConfig, TrackEndPolicy};
pub use error::{TrailcastError, TrailcastResult};
pub use geo::{GeoBounds, GeoPoint};
pub use hash::{hash_canvas, hash_canvases, ContentHash};
pub use position::Position;
pub use speed::SpeedUnit;
pub use time::{Duration, Timestamp};
pub use track::{Track, TrackPoint, TrackPosition};
