use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CcuError {
    // IO-related errors
    #[error("Failed to read cache file: {path}")]
    CacheRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write cache file: {path}")]
    CacheWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Data processing errors
    #[error("Failed to parse JSON: {context}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize snapshot")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid timestamp: {value}")]
    TimestampParse { value: String },

    // Process inspection
    #[error("Failed to spawn process inspector")]
    ProcessSpawn(#[from] std::io::Error),

    #[error("Process inspection failed: {message}")]
    ProcessInspect { message: String },

    #[error("Parent process inspection is not supported on this platform")]
    UnsupportedPlatform,
}

pub type Result<T> = std::result::Result<T, CcuError>;
