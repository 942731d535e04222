use glam::DVec2;

use crate::style::Style;

/// A planar coordinate `(x, y)`.
///
/// Coordinates are used exactly as they appear in the input file; no map
/// projection is applied. Any elevation component is dropped on load.
pub type Coord = DVec2;

/// A parsed GeoJSON geometry.
///
/// Only the four geometry kinds the renderer draws get their own variant.
/// Everything else is kept as [`Geometry::Unsupported`] so the caller can
/// report which kind was skipped.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Point(Coord),
    MultiPoint(Vec<Coord>),
    LineString(Vec<Coord>),
    /// Linear rings; ring 0 is the outer boundary, the rest are holes.
    Polygon(Vec<Vec<Coord>>),
    Unsupported {
        kind: String,
    },
}

impl Geometry {
    /// The GeoJSON `type` tag this geometry was parsed from.
    pub fn kind(&self) -> &str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::MultiPoint(_) => "MultiPoint",
            Geometry::LineString(_) => "LineString",
            Geometry::Polygon(_) => "Polygon",
            Geometry::Unsupported { kind } => kind,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Geometry::Unsupported { .. })
    }
}

/// One feature of a feature collection: a geometry plus its style record.
#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    pub geometry: Geometry,
    pub style: Style,
}

impl Feature {
    pub fn new(geometry: Geometry, style: Style) -> Self {
        Self { geometry, style }
    }
}
