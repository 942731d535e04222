use std::path::PathBuf;

use crate::{
    bounds::Bounds,
    config::RenderConfig,
    render::{self, RenderOutput},
    shape::Shape,
    types::Feature,
    view::ViewTransform,
};

/// One opened file: its drawable shapes and its own camera.
///
/// Documents are independent; zooming or rotating one never touches
/// another.
#[derive(Clone, Debug)]
pub struct Document {
    pub title: String,
    pub path: Option<PathBuf>,
    pub shapes: Vec<Shape>,
    /// Features read from the file, including skipped ones.
    pub feature_count: usize,
    /// Features that produced no shapes (unsupported or malformed).
    pub skipped: usize,
    /// Union of all shape extents, without margin.
    pub bounds: Option<Bounds>,
    pub view: ViewTransform,
    needs_fit: bool,
}

impl Document {
    /// Renders `features` into a new document.
    ///
    /// `malformed` counts features the loader already dropped; they are
    /// reported together with unsupported geometries in `skipped`.
    pub fn from_features(
        title: impl Into<String>,
        path: Option<PathBuf>,
        features: &[Feature],
        malformed: usize,
        cfg: &RenderConfig,
    ) -> Self {
        let RenderOutput {
            shapes,
            skipped,
            bounds,
        } = render::render_collection(features, cfg);

        Self {
            title: title.into(),
            path,
            shapes,
            feature_count: features.len() + malformed,
            skipped: skipped + malformed,
            bounds,
            view: ViewTransform::default(),
            needs_fit: bounds.is_some(),
        }
    }

    /// The box the view should frame: all shapes plus `margin` per side.
    pub fn fit_target(&self, margin: f64) -> Option<Bounds> {
        self.bounds.map(|b| b.expand_by(margin))
    }

    /// Asks the canvas to refit on its next frame.
    pub fn request_fit(&mut self) {
        self.needs_fit = self.bounds.is_some();
    }

    pub fn needs_fit(&self) -> bool {
        self.needs_fit
    }

    /// Fits the view to the shapes if a fit is pending.
    ///
    /// The viewport size is only known once the canvas has been laid out,
    /// so fitting is deferred until then.
    ///
    /// ### Returns
    /// `true` if the view was changed.
    pub fn fit_if_needed(&mut self, viewport: glam::DVec2, cfg: &RenderConfig) -> bool {
        if !self.needs_fit || viewport.x <= 0.0 || viewport.y <= 0.0 {
            return false;
        }
        let Some(target) = self.fit_target(cfg.fit_margin) else {
            self.needs_fit = false;
            return false;
        };
        self.view.fit(target, viewport, cfg);
        self.needs_fit = false;
        true
    }
}
