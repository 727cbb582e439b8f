//! Error types for form state, storage and export.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for form state operations.
pub type FormResult<T> = Result<T, FormError>;

/// Errors raised when a form update is rejected at the boundary.
#[derive(Debug, Error)]
pub enum FormError {
    /// Key doesn't match any field, axis, question or stakeholder attribute.
    #[error("Unknown form key: {0}")]
    UnknownKey(String),

    /// Phase id outside the catalog.
    #[error("Unknown phase: {0}")]
    UnknownPhase(u8),

    /// Checklist index past the end of the phase's questions.
    #[error("Phase {phase} has no checklist question {index}")]
    UnknownQuestion { phase: u8, index: usize },

    /// Score value is not an integer in 1..=5.
    #[error("Invalid score '{value}' for '{axis}': expected an integer from 1 to 5")]
    InvalidScore { axis: String, value: String },

    /// Checklist value is neither "true" nor "false".
    #[error("Invalid checklist value '{0}': expected 'true' or 'false'")]
    InvalidChecklistValue(String),
}

/// Errors from a storage port.
#[derive(Debug, Error)]
pub enum StorageError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored document is not a valid form state.
    #[error("Invalid stored data: {0}")]
    Json(#[from] serde_json::Error),

    /// Simulated or backend-specific failure.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Errors from the download action.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Could not create the output directory or write the file.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from a clipboard backend.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// None of the candidate clipboard programs is installed.
    #[error("No clipboard tool found (tried: {0})")]
    NoTool(String),

    /// The clipboard program ran but reported failure.
    #[error("{program} exited with {status}")]
    ToolFailed { program: String, status: std::process::ExitStatus },

    /// IO error talking to the clipboard program.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend refused the write.
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
}
