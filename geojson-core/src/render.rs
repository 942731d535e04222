//! Geometry-to-shape translation.
//!
//! Every function here is pure: it takes one geometry (or one feature) plus
//! its style and returns drawable shapes. The usual entry point is
//! [`render_collection`], which walks a whole feature list:
//!
//! 1. [`render_feature`] dispatches on the geometry kind.
//! 2. Points, multipoints, line strings and polygons become circles,
//!    circles, polylines and polygons respectively.
//! 3. Unsupported kinds yield nothing and are counted as skipped.

use crate::{
    bounds::{self, Bounds},
    config::RenderConfig,
    shape::{Circle, Polygon, Polyline, Shape},
    style::Style,
    types::{Coord, Feature, Geometry},
};

/// Translates a point into a filled circle.
///
/// The circle is centred exactly on `coord`. Radius and fill come from
/// `style`, falling back to [`RenderConfig::point_radius`] and
/// [`RenderConfig::point_color`].
pub fn render_point(coord: Coord, style: &Style, cfg: &RenderConfig) -> Circle {
    Circle {
        center: coord,
        radius: style.radius.unwrap_or(cfg.point_radius),
        fill: style.color.unwrap_or(cfg.point_color),
    }
}

/// Translates every coordinate of a multipoint with the shared style.
pub fn render_multi_point(coords: &[Coord], style: &Style, cfg: &RenderConfig) -> Vec<Circle> {
    coords
        .iter()
        .map(|&c| render_point(c, style, cfg))
        .collect()
}

/// Connects the coordinates in input order.
///
/// Stroke color and width are fixed by `cfg` unless the feature overrides
/// them with `stroke` / `stroke-width`.
pub fn render_line_string(coords: &[Coord], style: &Style, cfg: &RenderConfig) -> Polyline {
    Polyline {
        points: coords.to_vec(),
        stroke: style.stroke_color.unwrap_or(cfg.line_color),
        width: style.stroke_width.unwrap_or(cfg.line_width),
    }
}

/// Builds a polygon from the outer ring.
///
/// Holes (rings after the first) are not drawn. The ring is copied as is;
/// no closing point is appended. The polygon is filled only when the
/// feature has a `color`. The outline is always
/// [`RenderConfig::polygon_outline`]; `stroke` / `stroke-width` apply to
/// line strings only.
pub fn render_polygon(rings: &[Vec<Coord>], style: &Style, cfg: &RenderConfig) -> Polygon {
    Polygon {
        points: rings.first().cloned().unwrap_or_default(),
        fill: style.color,
        stroke: cfg.polygon_outline,
        width: cfg.polygon_outline_width,
    }
}

/// Translates one feature into zero or more shapes.
///
/// Returns an empty vector for [`Geometry::Unsupported`]; reporting that is
/// up to the caller.
pub fn render_feature(feature: &Feature, cfg: &RenderConfig) -> Vec<Shape> {
    let style = &feature.style;
    match &feature.geometry {
        Geometry::Point(c) => vec![render_point(*c, style, cfg).into()],
        Geometry::MultiPoint(coords) => render_multi_point(coords, style, cfg)
            .into_iter()
            .map(Shape::from)
            .collect(),
        Geometry::LineString(coords) => vec![render_line_string(coords, style, cfg).into()],
        Geometry::Polygon(rings) => vec![render_polygon(rings, style, cfg).into()],
        Geometry::Unsupported { .. } => Vec::new(),
    }
}

/// Shapes produced from a feature list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderOutput {
    pub shapes: Vec<Shape>,
    /// Number of features whose geometry kind is not drawable.
    pub skipped: usize,
    /// Union of all shape extents, refreshed after every feature.
    pub bounds: Option<Bounds>,
}

/// Renders all features, skipping unsupported ones.
///
/// A skipped feature never aborts the pass; each one is logged at `warn`.
pub fn render_collection(features: &[Feature], cfg: &RenderConfig) -> RenderOutput {
    let mut out = RenderOutput::default();

    for (index, feature) in features.iter().enumerate() {
        if !feature.geometry.is_supported() {
            log::warn!(
                "feature {index}: geometry type {:?} is not recognized, skipping",
                feature.geometry.kind()
            );
            out.skipped += 1;
            continue;
        }

        for shape in render_feature(feature, cfg) {
            if let Some(b) = shape.bounds() {
                out.bounds = bounds::merge(out.bounds, b);
            }
            out.shapes.push(shape);
        }
    }

    out
}
