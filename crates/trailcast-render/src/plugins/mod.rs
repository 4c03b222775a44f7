//! The renderer plugin contract and the built-in plugin set.
//!
//! Each plugin contributes to the shared frame canvas at two lifecycle
//! points: a background pass run exactly once before the first frame, and a
//! per-frame pass run once per output frame. Plugins draw in ascending
//! `order`; ties keep registration order.

pub mod attribution;
pub mod background;
pub mod image_overlay;
pub mod info;
pub mod marker;
pub mod trail;

use std::sync::Arc;

use trailcast_core::{Canvas, RenderConfig, TrailcastResult};

use crate::context::RenderingContext;
use crate::image_loader;
use crate::timeline::Timeline;

pub use attribution::AttributionPlugin;
pub use background::BackgroundColorPlugin;
pub use image_overlay::ImageOverlayPlugin;
pub use info::InformationPlugin;
pub use marker::MarkerPlugin;
pub use trail::TrackTrailPlugin;

/// A unit of frame composition.
///
/// Plugins hold configuration-derived immutable state (resolved colors,
/// pre-rendered labels, shared timeline) plus private caches; they must not
/// retain the canvas reference past a call. A plugin that cannot resolve its
/// data for a frame (track not started, overlay hidden) no-ops that frame;
/// that is expected steady state, not an error. A returned error aborts the
/// whole render.
pub trait RendererPlugin: Send {
    /// Stable identifier used in failure diagnostics.
    fn name(&self) -> &'static str;

    /// Compositing rank; lower draws first. `i32::MIN` is reserved for the
    /// background fill so it always comes first.
    fn order(&self) -> i32;

    /// Draw frame-invariant content. Invoked exactly once, before frame 0.
    fn render_background(
        &mut self,
        canvas: &mut Canvas,
        context: &dyn RenderingContext,
    ) -> TrailcastResult<()> {
        let _ = (canvas, context);
        Ok(())
    }

    /// Draw time-varying content for one frame.
    fn render_frame(
        &mut self,
        frame: u64,
        canvas: &mut Canvas,
        context: &dyn RenderingContext,
    ) -> TrailcastResult<()> {
        let _ = (frame, canvas, context);
        Ok(())
    }
}

/// Resolve the active plugin set from the configuration.
///
/// The set is fixed for the render; there is no runtime discovery. Overlay
/// plugins are only registered when their configuration enables them, so a
/// hidden information block or an absent logo costs nothing per frame.
pub fn default_plugins(
    config: &RenderConfig,
    timeline: &Arc<Timeline>,
) -> TrailcastResult<Vec<Box<dyn RendererPlugin>>> {
    let mut plugins: Vec<Box<dyn RendererPlugin>> = vec![
        Box::new(BackgroundColorPlugin::new(config.background_color)),
        Box::new(TrackTrailPlugin::new(Arc::clone(timeline))),
        Box::new(MarkerPlugin::new(
            Arc::clone(timeline),
            config.track_end_policy,
        )),
    ];

    if !config.information_position.is_hidden() {
        plugins.push(Box::new(InformationPlugin::new(
            Arc::clone(timeline),
            config.information_position,
            config.margin,
            config.speed_unit,
        )));
    }

    if let Some(path) = &config.logo {
        let image = image_loader::load_image(path)?;
        plugins.push(Box::new(ImageOverlayPlugin::new(
            image,
            config.logo_position,
            config.margin,
        )));
    }

    if !config.attribution.trim().is_empty() {
        plugins.push(Box::new(AttributionPlugin::new(
            config.attribution.clone(),
            config.attribution_position,
            config.margin,
        )));
    }

    tracing::debug!(count = plugins.len(), "resolved plugin set");
    Ok(plugins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trailcast_core::{Color, Timestamp, TrackConfig, TrackPoint};

    fn base_config() -> RenderConfig {
        let mut config = RenderConfig::new(100, 100, 1.0);
        config.tracks.push(TrackConfig::new(
            "",
            Color::RED,
            vec![
                TrackPoint::new(Timestamp::from_seconds(0.0), 0.0, 0.0),
                TrackPoint::new(Timestamp::from_seconds(5.0), 0.001, 0.001),
            ],
        ));
        config
    }

    #[test]
    fn test_default_set_without_overlays() {
        let mut config = base_config();
        config.information_position = trailcast_core::Position::Hidden;
        config.attribution.clear();
        let timeline = Arc::new(Timeline::build(&config).unwrap());
        let plugins = default_plugins(&config, &timeline).unwrap();
        // Background, trail, marker.
        assert_eq!(plugins.len(), 3);
    }

    #[test]
    fn test_default_set_with_information_and_attribution() {
        let mut config = base_config();
        config.attribution = "GPS data: example".to_string();
        let timeline = Arc::new(Timeline::build(&config).unwrap());
        let plugins = default_plugins(&config, &timeline).unwrap();
        assert_eq!(plugins.len(), 5);
    }

    #[test]
    fn test_missing_logo_is_a_setup_error() {
        let mut config = base_config();
        config.logo = Some("/nonexistent/logo.png".into());
        let timeline = Arc::new(Timeline::build(&config).unwrap());
        assert!(default_plugins(&config, &timeline).is_err());
    }

    #[test]
    fn test_background_order_is_reserved_minimum() {
        let config = base_config();
        let timeline = Arc::new(Timeline::build(&config).unwrap());
        let plugins = default_plugins(&config, &timeline).unwrap();
        assert_eq!(plugins[0].order(), i32::MIN);
        assert!(plugins[1..].iter().all(|p| p.order() > i32::MIN));
    }
}
