use road_chainage::ChainageError;

/// Error types for the command-line host
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("GPX parsing error: {0}")]
    GpxParse(#[from] gpx::errors::GpxError),

    #[error(transparent)]
    Chainage(#[from] ChainageError),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
