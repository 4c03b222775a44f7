//! # trailcast-render
//!
//! The Trailcast rendering engine. Takes a resolved render configuration and
//! produces finished raster frames: for each output frame it interpolates
//! every track's position at that instant, composites background, trails,
//! markers, and text/image overlays in deterministic plugin order, and hands
//! the canvas to a caller-supplied sink. Encoding the frames into a video
//! container is a downstream concern.

pub mod context;
pub mod graphics;
pub mod image_loader;
pub mod overlay;
pub mod plugins;
pub mod projection;
pub mod scheduler;
pub mod text;
pub mod timeline;
pub mod worker;

pub use context::{NullContext, RenderingContext};
pub use plugins::RendererPlugin;
pub use projection::MapProjection;
pub use scheduler::{CollectSink, FrameScheduler, FrameSink, RenderOutcome, RenderPhase};
pub use text::{TextAlignment, TextRenderer};
pub use timeline::{ResolvedTrack, Timeline};
pub use worker::{render_in_worker, ProgressReport, RenderWorker};
