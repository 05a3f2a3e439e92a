//! Run configuration for the tour

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How a report is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per finding
    #[default]
    Text,

    /// The whole report as pretty-printed JSON
    Json,
}

/// Configuration for a run of the tour.
///
/// Passed to [`crate::demo::run`] and consulted by the binary when
/// rendering and verifying the result.
#[derive(Debug, Clone)]
pub struct DemoContext {
    /// Rendering of the report
    pub format: OutputFormat,

    /// Check every finding against its expected outcome
    pub verify: bool,

    /// Log each finding as it is recorded
    pub trace: bool,
}

impl Default for DemoContext {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            verify: true,
            trace: false,
        }
    }
}

impl DemoContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a specific output format.
    pub fn with_format(format: OutputFormat) -> Self {
        Self {
            format,
            ..Default::default()
        }
    }

    /// Disable verification (builder pattern)
    pub fn without_verify(mut self) -> Self {
        self.verify = false;
        self
    }

    /// Enable per-finding tracing (builder pattern)
    pub fn traced(mut self) -> Self {
        self.trace = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context() {
        let ctx = DemoContext::new();
        assert_eq!(ctx.format, OutputFormat::Text);
        assert!(ctx.verify);
        assert!(!ctx.trace);
    }

    #[test]
    fn test_format_names() {
        assert_eq!(OutputFormat::from_str("text", true), Ok(OutputFormat::Text));
        assert_eq!(OutputFormat::from_str("JSON", true), Ok(OutputFormat::Json));
        assert!(OutputFormat::from_str("xml", true).is_err());
    }

    #[test]
    fn test_builders() {
        let ctx = DemoContext::with_format(OutputFormat::Json)
            .without_verify()
            .traced();
        assert_eq!(ctx.format, OutputFormat::Json);
        assert!(!ctx.verify);
        assert!(ctx.trace);
    }
}
