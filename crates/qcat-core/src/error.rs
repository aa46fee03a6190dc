//! Error types for qcat-core

/// Result type for qcat-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while transforming a catalog
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not find a `{label}: |` block in the document")]
    BlockNotFound { label: String },

    #[error("Invalid block label `{label}`: {message}")]
    InvalidLabel { label: String, message: String },

    #[error("Malformed JSON in embedded block: {message}")]
    MalformedStructuredData { message: String },

    #[error("Malformed query text at line {line}: {message}")]
    MalformedFlatText { line: usize, message: String },

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    pub fn block_not_found(label: impl Into<String>) -> Self {
        Self::BlockNotFound {
            label: label.into(),
        }
    }

    pub fn structured(message: impl Into<String>) -> Self {
        Self::MalformedStructuredData {
            message: message.into(),
        }
    }

    pub fn flat(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedFlatText {
            line,
            message: message.into(),
        }
    }
}
