//! Tolerant GeoJSON loading.
//!
//! Only the top-level `features` array is read. A feature that cannot be
//! interpreted is logged and skipped; only an unreadable file, invalid JSON
//! or a missing `features` array fails the whole load.

use std::path::Path;

use serde_json::Value;

use crate::{
    config::RenderConfig,
    document::Document,
    error::{FeatureError, LoadError},
    style::Style,
    types::{Coord, Feature, Geometry},
};

/// Fewest positions that still draw something.
const MIN_MULTI_POINT: usize = 1;
const MIN_LINE_STRING: usize = 2;
const MIN_OUTER_RING: usize = 3;

/// Features read from one collection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedCollection {
    pub features: Vec<Feature>,
    /// Entries dropped because they could not be interpreted.
    pub malformed: usize,
}

/// Parses a feature collection from JSON text.
pub fn parse_collection(text: &str) -> Result<ParsedCollection, LoadError> {
    let root: Value = serde_json::from_str(text)?;

    let items = match root {
        Value::Object(mut map) => match map.remove("features") {
            Some(Value::Array(items)) => items,
            _ => return Err(LoadError::MissingFeatures),
        },
        _ => return Err(LoadError::MissingFeatures),
    };

    let mut parsed = ParsedCollection::default();
    for (index, item) in items.into_iter().enumerate() {
        match parse_feature(item) {
            Ok(feature) => parsed.features.push(feature),
            Err(e) => {
                log::warn!("feature {index}: {e}, skipping");
                parsed.malformed += 1;
            }
        }
    }
    Ok(parsed)
}

/// Interprets one entry of the `features` array.
pub fn parse_feature(value: Value) -> Result<Feature, FeatureError> {
    let Value::Object(obj) = value else {
        return Err(FeatureError::NotAnObject);
    };

    let Some(Value::Object(geometry)) = obj.get("geometry") else {
        return Err(FeatureError::MissingGeometry);
    };
    let kind = geometry
        .get("type")
        .and_then(Value::as_str)
        .ok_or(FeatureError::MissingType)?;
    let coords = geometry.get("coordinates").unwrap_or(&Value::Null);

    let geometry = parse_geometry(kind, coords)?;
    let style = Style::from_properties(obj.get("properties"));
    Ok(Feature::new(geometry, style))
}

/// Converts a `type` tag and its `coordinates` payload into a [`Geometry`].
///
/// Kinds other than the four drawable ones are returned as
/// [`Geometry::Unsupported`] without looking at their coordinates.
///
/// A payload too short to draw anything (an empty multipoint, a line string
/// with fewer than two positions, an outer ring with fewer than three) is
/// rejected like a malformed one.
pub fn parse_geometry(kind: &str, coords: &Value) -> Result<Geometry, FeatureError> {
    let bad = || FeatureError::BadCoordinates {
        kind: kind.to_string(),
    };

    let geometry = match kind {
        "Point" => Geometry::Point(parse_point(coords).ok_or_else(bad)?),
        "MultiPoint" => {
            Geometry::MultiPoint(parse_min_positions(coords, MIN_MULTI_POINT).ok_or_else(bad)?)
        }
        "LineString" => {
            Geometry::LineString(parse_min_positions(coords, MIN_LINE_STRING).ok_or_else(bad)?)
        }
        "Polygon" => {
            let rings = coords
                .as_array()
                .and_then(|rings| rings.iter().map(parse_positions).collect::<Option<Vec<_>>>())
                .ok_or_else(bad)?;
            // Holes are never drawn, so only the outer ring has to be usable.
            match rings.first() {
                Some(outer) if outer.len() >= MIN_OUTER_RING => {}
                _ => return Err(bad()),
            }
            Geometry::Polygon(rings)
        }
        other => Geometry::Unsupported {
            kind: other.to_string(),
        },
    };
    Ok(geometry)
}

/// `[x, y, ...]`; extra components are ignored.
fn parse_position(value: &Value) -> Option<Coord> {
    let arr = value.as_array()?;
    let x = arr.first()?.as_f64()?;
    let y = arr.get(1)?.as_f64()?;
    Some(Coord::new(x, y))
}

/// A point position, unwrapping one level of nesting (`[[x, y]]`).
fn parse_point(value: &Value) -> Option<Coord> {
    match value.as_array()?.first()? {
        inner @ Value::Array(_) => parse_position(inner),
        _ => parse_position(value),
    }
}

fn parse_positions(value: &Value) -> Option<Vec<Coord>> {
    value.as_array()?.iter().map(parse_position).collect()
}

fn parse_min_positions(value: &Value, min: usize) -> Option<Vec<Coord>> {
    parse_positions(value).filter(|positions| positions.len() >= min)
}

/// Parses and renders a collection held in memory.
pub fn load_str(title: &str, text: &str, cfg: &RenderConfig) -> Result<Document, LoadError> {
    let parsed = parse_collection(text)?;
    Ok(Document::from_features(
        title,
        None,
        &parsed.features,
        parsed.malformed,
        cfg,
    ))
}

/// Reads, parses and renders a GeoJSON file into a new document.
///
/// The document title is the file name.
pub fn load_file(path: &Path, cfg: &RenderConfig) -> Result<Document, LoadError> {
    log::info!("loading GeoJSON file {}", path.display());

    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let title = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let mut doc = load_str(&title, &text, cfg)?;
    doc.path = Some(path.to_path_buf());

    log::info!(
        "loaded {}: {} features, {} shapes, {} skipped",
        doc.title,
        doc.feature_count,
        doc.shapes.len(),
        doc.skipped
    );
    Ok(doc)
}
