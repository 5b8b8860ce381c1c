use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures of the morph core: bad indices, unusable geometry, bad clocks.
///
/// Every variant is reported to the caller; none of them is replaced with a
/// default value inside the core.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MorphError {
    #[error("shape index {index} is out of range (catalog has {count} shapes)")]
    InvalidShapeIndex { index: usize, count: usize },

    #[error("shape {shape} has no points and cannot be padded")]
    DegenerateGeometry { shape: usize },

    #[error("shape catalog contains no points")]
    EmptyCatalog,

    #[error("no geometry loaded yet")]
    NotLoaded,

    #[error("clock went backwards: {now} < {previous}")]
    ClockWentBackwards { previous: f32, now: f32 },

    #[error("attribute length {actual} does not match buffer length {expected}")]
    AttributeLengthMismatch { expected: usize, actual: usize },

    #[error("shape file error: {0}")]
    ShapeFile(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CloudError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Morph(#[from] MorphError),

    #[error("renderer error: {0}")]
    Renderer(String),
}
