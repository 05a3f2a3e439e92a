//! Error types for the semantics tour

use thiserror::Error;

/// Main error type for running and reporting the tour
#[derive(Error, Debug)]
pub enum DemoError {
    /// A comparison did not produce the outcome its semantics guarantee
    #[error("Contract violation in {step}: {check} expected {expected}, observed {observed}")]
    ContractViolation {
        /// Step the finding belongs to
        step: String,
        /// The comparison that was checked
        check: String,
        /// What the aggregate's semantics require
        expected: String,
        /// What was actually observed
        observed: String,
    },

    /// The report could not be serialized
    #[error("Render error: {0}")]
    Render(#[from] serde_json::Error),
}

/// Result type alias for tour operations
pub type Result<T> = std::result::Result<T, DemoError>;
