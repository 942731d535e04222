use std::path::PathBuf;

/// Failure to load a document. Aborts that document only.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no \"features\" array at the top level")]
    MissingFeatures,
}

/// A single feature that could not be interpreted. The feature is skipped
/// and loading continues.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FeatureError {
    #[error("feature is not an object")]
    NotAnObject,

    #[error("feature has no geometry")]
    MissingGeometry,

    #[error("geometry has no \"type\"")]
    MissingType,

    #[error("{kind} geometry has malformed coordinates")]
    BadCoordinates { kind: String },
}
