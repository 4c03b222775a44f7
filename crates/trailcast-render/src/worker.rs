//! Dedicated render worker thread.
//!
//! Rendering runs on its own thread so the caller (UI or CLI) stays
//! responsive. The worker exposes the progress/cancellation boundary through
//! primitives that are safe to touch from other threads: an atomic flag for
//! cancellation and an mpsc channel for progress reports.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;

use trailcast_core::{TrailcastError, TrailcastResult};

use crate::context::RenderingContext;
use crate::scheduler::{FrameScheduler, FrameSink, RenderOutcome};

/// One progress update from the render thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressReport {
    pub percent: u8,
    pub message: String,
}

/// Context handed to the scheduler inside the worker thread.
struct WorkerContext {
    cancelled: Arc<AtomicBool>,
    progress: Sender<ProgressReport>,
}

impl RenderingContext for WorkerContext {
    fn report_progress(&self, percent: u8, message: &str) {
        // A dropped receiver must not wedge the render.
        let _ = self.progress.send(ProgressReport {
            percent,
            message: message.to_string(),
        });
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Handle to a render running on its own thread.
pub struct RenderWorker<S> {
    handle: JoinHandle<(TrailcastResult<RenderOutcome>, S)>,
    cancelled: Arc<AtomicBool>,
    progress: Receiver<ProgressReport>,
}

impl<S> RenderWorker<S> {
    /// Request cooperative cancellation; the scheduler honors it at the next
    /// frame boundary.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Receiver of progress reports, one per emitted frame. Disconnects when
    /// the render finishes.
    pub fn progress(&self) -> &Receiver<ProgressReport> {
        &self.progress
    }

    /// Wait for the render to finish, returning the outcome and the sink.
    /// The sink is lost if the worker thread panicked.
    pub fn join(self) -> (TrailcastResult<RenderOutcome>, Option<S>) {
        match self.handle.join() {
            Ok((outcome, sink)) => (outcome, Some(sink)),
            Err(_) => (
                Err(TrailcastError::Render("render worker panicked".to_string())),
                None,
            ),
        }
    }
}

/// Move a scheduler onto a dedicated thread and start rendering into `sink`.
pub fn render_in_worker<S>(mut scheduler: FrameScheduler, mut sink: S) -> TrailcastResult<RenderWorker<S>>
where
    S: FrameSink + Send + 'static,
{
    let cancelled = Arc::new(AtomicBool::new(false));
    let (progress_tx, progress_rx) = mpsc::channel();

    let context = WorkerContext {
        cancelled: Arc::clone(&cancelled),
        progress: progress_tx,
    };

    let handle = std::thread::Builder::new()
        .name("trailcast-render".to_string())
        .spawn(move || {
            let outcome = scheduler.render(&mut sink, &context);
            (outcome, sink)
        })?;

    Ok(RenderWorker {
        handle,
        cancelled,
        progress: progress_rx,
    })
}
