use std::path::PathBuf;

/// Errors that can occur while loading an MSL document
///
/// Parsing itself never fails; only reading the source can.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// I/O error while reading a stream
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The library file could not be opened or read
    #[error("Failed to read {}: {source}", path.display())]
    Open {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
