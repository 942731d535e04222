//! Core GeoJSON loading and geometry-to-shape translation library.
//!
//! Main components:
//! - [`types`] — coordinates, geometries and features.
//! - [`style`] — per-feature style records and color parsing.
//! - [`loader`] — tolerant parsing of feature collections from text or files.
//! - [`render`] — translation of features into drawable shapes.
//! - [`shape`] — renderer-agnostic circles, polylines and polygons.
//! - [`bounds`] — axis-aligned boxes used for fit-to-view.
//! - [`view`] — per-document zoom, pan and rotation.
//! - [`document`] — one opened file with its shapes and camera.
//! - [`workspace`] — tabs and the active-document handle.
//! - [`config`] — rendering and view defaults.
//! - [`error`] — load and feature errors.

pub mod bounds;
pub mod config;
pub mod document;
pub mod error;
pub mod loader;
pub mod render;
pub mod shape;
pub mod style;
pub mod types;
pub mod view;
pub mod workspace;
