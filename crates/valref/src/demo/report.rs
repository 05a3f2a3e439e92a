//! Findings, steps and the report they make up

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::aggregate::Semantics;
use crate::context::OutputFormat;
use crate::error::{DemoError, Result};

/// Result of comparing two bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The comparison held
    Equal,

    /// The comparison did not hold
    NotEqual,
}

impl Outcome {
    /// Outcome of a boolean comparison
    pub fn of(equal: bool) -> Self {
        if equal {
            Outcome::Equal
        } else {
            Outcome::NotEqual
        }
    }

    /// Whether this is [`Outcome::Equal`]
    pub fn is_equal(self) -> bool {
        matches!(self, Outcome::Equal)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Equal => write!(f, "equal"),
            Outcome::NotEqual => write!(f, "not equal"),
        }
    }
}

/// One thing the tour observed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    /// Two bindings compared with `==` (or field by field)
    Comparison {
        /// Plural noun for what was compared, e.g. "people"
        subject: String,

        /// Semantics of the compared aggregate, `None` for scalars
        semantics: Option<Semantics>,

        /// Outcome the semantics guarantee
        expected: Outcome,

        /// Outcome the comparison produced
        observed: Outcome,
    },

    /// A value read back after some assignment or mutation
    Observation {
        /// Binding or field path, e.g. "p1.age"
        label: String,

        /// Value the semantics guarantee
        expected: String,

        /// Value actually read
        observed: String,
    },
}

impl Finding {
    /// Record a comparison
    pub fn comparison(
        subject: impl Into<String>,
        semantics: Option<Semantics>,
        expected: Outcome,
        equal: bool,
    ) -> Self {
        Finding::Comparison {
            subject: subject.into(),
            semantics,
            expected,
            observed: Outcome::of(equal),
        }
    }

    /// Record an observed value
    pub fn observation(
        label: impl Into<String>,
        expected: impl fmt::Display,
        observed: impl fmt::Display,
    ) -> Self {
        Finding::Observation {
            label: label.into(),
            expected: expected.to_string(),
            observed: observed.to_string(),
        }
    }

    /// Whether the observed outcome matches the expected one
    pub fn holds(&self) -> bool {
        match self {
            Finding::Comparison {
                expected, observed, ..
            } => expected == observed,
            Finding::Observation {
                expected, observed, ..
            } => expected == observed,
        }
    }

    /// The console line for this finding
    pub fn line(&self) -> String {
        match self {
            Finding::Comparison {
                subject, observed, ..
            } => format!("These two {} are {}", subject, observed),
            Finding::Observation {
                label, observed, ..
            } => format!("{} = {}", label, observed),
        }
    }

    fn violation(&self, step: &str) -> DemoError {
        let (check, expected, observed) = match self {
            Finding::Comparison {
                subject,
                expected,
                observed,
                ..
            } => (
                format!("comparison of {}", subject),
                expected.to_string(),
                observed.to_string(),
            ),
            Finding::Observation {
                label,
                expected,
                observed,
            } => (label.clone(), expected.clone(), observed.clone()),
        };
        DemoError::ContractViolation {
            step: step.to_string(),
            check,
            expected,
            observed,
        }
    }
}

/// A named group of findings produced by one part of the tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Stable identifier, e.g. "reference_aliasing"
    pub name: String,

    /// Short description of what the step demonstrates
    pub title: String,

    /// Findings in the order they were made
    pub findings: Vec<Finding>,
}

impl Step {
    /// Create an empty step
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            findings: Vec::new(),
        }
    }

    /// Add a finding (builder pattern)
    pub fn with(mut self, finding: Finding) -> Self {
        self.findings.push(finding);
        self
    }
}

/// Everything one run of the tour observed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Steps in execution order
    pub steps: Vec<Step>,
}

impl Report {
    /// Look up a step by name
    pub fn step(&self, name: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.name == name)
    }

    /// All findings in execution order
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.steps.iter().flat_map(|s| s.findings.iter())
    }

    /// Console lines in execution order
    pub fn lines(&self) -> Vec<String> {
        self.findings().map(Finding::line).collect()
    }

    /// Check every finding against what its semantics guarantee.
    ///
    /// Returns the first mismatch as [`DemoError::ContractViolation`].
    pub fn verify(&self) -> Result<()> {
        for step in &self.steps {
            if let Some(bad) = step.findings.iter().find(|f| !f.holds()) {
                return Err(bad.violation(&step.name));
            }
        }
        Ok(())
    }

    /// Render the report for the console.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.lines().join("\n")),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Equal.to_string(), "equal");
        assert_eq!(Outcome::NotEqual.to_string(), "not equal");
        assert_eq!(Outcome::of(true), Outcome::Equal);
        assert!(!Outcome::of(false).is_equal());
    }

    #[test]
    fn test_comparison_line() {
        let f = Finding::comparison("integers", None, Outcome::Equal, true);
        assert_eq!(f.line(), "These two integers are equal");
        assert!(f.holds());
    }

    #[test]
    fn test_observation_line() {
        let f = Finding::observation("p1.age", 23, 23);
        assert_eq!(f.line(), "p1.age = 23");
        assert!(f.holds());
    }

    #[test]
    fn test_verify_reports_first_violation() {
        let report = Report {
            steps: vec![
                Step::new("ok", "fine").with(Finding::observation("x", 5, 5)),
                Step::new("broken", "not fine").with(Finding::comparison(
                    "people",
                    Some(Semantics::SharedByHandle),
                    Outcome::NotEqual,
                    true,
                )),
            ],
        };

        match report.verify() {
            Err(DemoError::ContractViolation {
                step,
                expected,
                observed,
                ..
            }) => {
                assert_eq!(step, "broken");
                assert_eq!(expected, "not equal");
                assert_eq!(observed, "equal");
            }
            other => panic!("Expected ContractViolation, got {:?}", other),
        }
    }

    #[test]
    fn test_render_text() {
        let report = Report {
            steps: vec![Step::new("scalar_copy", "copy")
                .with(Finding::observation("x", 5, 5))
                .with(Finding::observation("y", 6, 6))],
        };
        assert_eq!(report.render(OutputFormat::Text).unwrap(), "x = 5\ny = 6");
    }

    #[test]
    fn test_step_lookup() {
        let report = Report {
            steps: vec![Step::new("a", "first"), Step::new("b", "second")],
        };
        assert_eq!(report.step("b").map(|s| s.title.as_str()), Some("second"));
        assert!(report.step("c").is_none());
    }
}
