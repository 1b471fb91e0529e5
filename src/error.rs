use thiserror::Error;

/// Top-level error type for the soap film experiment engine.
#[derive(Debug, Error)]
pub enum SoapFilmError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to drawables held by a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("drawable not found: {0}")]
    DrawableNotFound(&'static str),
}

/// Errors raised while loading or validating an experiment configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Convenience type alias for results using [`SoapFilmError`].
pub type Result<T> = std::result::Result<T, SoapFilmError>;
