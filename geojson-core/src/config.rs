use crate::style::{Color, rgb};

/// Rendering and view defaults.
///
/// Style values here apply whenever a feature does not carry its own
/// override in `properties`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    /// Point radius when `properties.radius` is absent.
    pub point_radius: f64,
    /// Point fill when `properties.color` is absent.
    pub point_color: Color,
    pub line_color: Color,
    pub line_width: f64,
    pub polygon_outline: Color,
    pub polygon_outline_width: f64,
    /// Margin added on every side of the drawn extent when fitting the view.
    pub fit_margin: f64,
    pub zoom_in_factor: f64,
    pub zoom_out_factor: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            point_radius: 1.0,
            point_color: rgb(255, 0, 0),
            line_color: rgb(0, 0, 255),
            line_width: 3.0,
            polygon_outline: rgb(0, 255, 0),
            polygon_outline_width: 0.2,
            fit_margin: 1.0,
            zoom_in_factor: 1.1,
            zoom_out_factor: 0.9,
            min_zoom: 1e-6,
            max_zoom: 1e9,
        }
    }
}
