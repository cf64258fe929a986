use std::path::PathBuf;

/// Result type used across the crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write run trace: {0}")]
    Output(#[from] std::io::Error),
    #[error("Serde error: {0}")]
    SerdeError(#[from] serde_json::Error),
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid embedded schema: {0}")]
    Schema(String),
    #[error("Malformed input in {source_name}:\n{}", .details.join("\n"))]
    MalformedInput {
        source_name: String,
        details: Vec<String>,
    },
}

impl Error {
    /// Builds an [`Error::Io`] tied to the file that failed to load
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
