//! CatalogError for message catalog loading

use std::path::PathBuf;

/// Error type for loading a message catalog from configuration.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Failed to read message catalog '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not a JSON object of known message keys to strings.
    #[error("Invalid message catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// A message was configured as the empty string.
    #[error("Message '{key}' must not be empty")]
    EmptyMessage { key: String },
}

impl CatalogError {
    /// Creates a new I/O error for the given catalog path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
