//! The frame scheduler: drives the timeline and the plugin pipeline.

use std::sync::Arc;

use trailcast_core::{Canvas, RenderConfig, TrailcastError, TrailcastResult};

use crate::context::RenderingContext;
use crate::plugins::{self, RendererPlugin};
use crate::timeline::Timeline;

/// Downstream consumer of finished frames (the encoder boundary).
///
/// The scheduler calls this synchronously with exactly one frame in flight;
/// a slow sink provides natural backpressure. An error aborts the render.
pub trait FrameSink {
    fn accept_frame(&mut self, frame: u64, canvas: &Canvas) -> TrailcastResult<()>;
}

/// A sink that keeps every frame in memory. Suitable for tests and short
/// renders.
#[derive(Debug, Default)]
pub struct CollectSink {
    pub frames: Vec<Canvas>,
}

impl CollectSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameSink for CollectSink {
    fn accept_frame(&mut self, _frame: u64, canvas: &Canvas) -> TrailcastResult<()> {
        self.frames.push(canvas.clone());
        Ok(())
    }
}

/// Lifecycle of one render invocation.
///
/// `Uninitialized → BackgroundPainted → Rendering(f) → Done | Cancelled |
/// Failed`; the explicit state replaces call-order convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPhase {
    Uninitialized,
    BackgroundPainted,
    Rendering { frame: u64 },
    Done,
    Cancelled,
    Failed,
}

/// Terminal outcome of a render that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// All frames were produced.
    Completed { frames: u64 },
    /// The caller cancelled after `frames` frames had been fully emitted.
    Cancelled { frames: u64 },
}

impl RenderOutcome {
    /// Frames that were fully composited and emitted.
    pub fn frames(&self) -> u64 {
        match self {
            RenderOutcome::Completed { frames } | RenderOutcome::Cancelled { frames } => *frames,
        }
    }
}

/// Produces one finished canvas per output frame, in order, through the
/// ordered plugin pipeline.
pub struct FrameScheduler {
    width: u32,
    height: u32,
    timeline: Arc<Timeline>,
    plugins: Vec<Box<dyn RendererPlugin>>,
    phase: RenderPhase,
}

impl FrameScheduler {
    /// Build a scheduler with the plugin set resolved from the configuration.
    pub fn new(config: &RenderConfig) -> TrailcastResult<Self> {
        let timeline = Arc::new(Timeline::build(config)?);
        let plugins = plugins::default_plugins(config, &timeline)?;
        Ok(Self::assemble(config, timeline, plugins))
    }

    /// Build a scheduler with an explicitly supplied plugin set. The builder
    /// receives the resolved timeline so plugins can share it.
    pub fn with_plugins<F>(config: &RenderConfig, build: F) -> TrailcastResult<Self>
    where
        F: FnOnce(&Arc<Timeline>) -> Vec<Box<dyn RendererPlugin>>,
    {
        let timeline = Arc::new(Timeline::build(config)?);
        let plugins = build(&timeline);
        Ok(Self::assemble(config, timeline, plugins))
    }

    fn assemble(
        config: &RenderConfig,
        timeline: Arc<Timeline>,
        mut plugins: Vec<Box<dyn RendererPlugin>>,
    ) -> Self {
        // Stable sort: equal orders keep registration order.
        plugins.sort_by_key(|plugin| plugin.order());
        Self {
            width: config.width,
            height: config.height,
            timeline,
            plugins,
            phase: RenderPhase::Uninitialized,
        }
    }

    pub fn timeline(&self) -> &Arc<Timeline> {
        &self.timeline
    }

    pub fn phase(&self) -> RenderPhase {
        self.phase
    }

    /// Run the render: one background pass, then every frame in timestamp
    /// order through every plugin, emitting each finished canvas to `sink`.
    ///
    /// Progress is reported after each emitted frame; cancellation is
    /// checked at the frame boundary, so a request observed after frame `k`
    /// means frames `0..=k` were emitted and frame `k+1` never begins.
    pub fn render(
        &mut self,
        sink: &mut dyn FrameSink,
        context: &dyn RenderingContext,
    ) -> TrailcastResult<RenderOutcome> {
        if self.phase != RenderPhase::Uninitialized {
            return Err(TrailcastError::Render(
                "scheduler has already rendered".to_string(),
            ));
        }

        let total = self.timeline.total_frames();
        tracing::info!(
            width = self.width,
            height = self.height,
            total_frames = total,
            plugins = self.plugins.len(),
            "starting render"
        );

        // Background pass: frame-invariant content, painted once.
        let mut background = Canvas::new(self.width, self.height);
        for plugin in &mut self.plugins {
            if let Err(error) = plugin.render_background(&mut background, context) {
                self.phase = RenderPhase::Failed;
                return Err(TrailcastError::BackgroundPass {
                    plugin: plugin.name().to_string(),
                    message: error.to_string(),
                });
            }
        }
        self.phase = RenderPhase::BackgroundPainted;

        for frame in 0..total {
            self.phase = RenderPhase::Rendering { frame };

            // Re-seed from the background so frame-local drawing never leaks
            // into later frames, while background content persists under all
            // of them.
            let mut canvas = background.clone();
            for plugin in &mut self.plugins {
                if let Err(error) = plugin.render_frame(frame, &mut canvas, context) {
                    self.phase = RenderPhase::Failed;
                    return Err(TrailcastError::FramePass {
                        plugin: plugin.name().to_string(),
                        frame,
                        message: error.to_string(),
                    });
                }
            }

            if let Err(error) = sink.accept_frame(frame, &canvas) {
                self.phase = RenderPhase::Failed;
                return Err(error);
            }

            let percent = (((frame + 1) * 100) / total) as u8;
            context.report_progress(percent, &format!("Rendered frame {} of {}", frame + 1, total));

            if context.is_cancelled() {
                self.phase = RenderPhase::Cancelled;
                tracing::info!(frames = frame + 1, "render cancelled");
                return Ok(RenderOutcome::Cancelled { frames: frame + 1 });
            }

            tracing::trace!(frame, "frame complete");
        }

        self.phase = RenderPhase::Done;
        tracing::info!(frames = total, "render complete");
        Ok(RenderOutcome::Completed { frames: total })
    }
}
