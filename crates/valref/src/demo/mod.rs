//! The demonstration routine
//!
//! A straight-line sequence of construct → compare → report steps. The
//! first six follow the classic value-versus-reference walkthrough; the
//! rest extend it to records and to value aggregates that hold handles.

mod report;
mod steps;

pub use report::{Finding, Outcome, Report, Step};

use tracing::{debug, info};

use crate::context::DemoContext;

/// Steps in the order the tour runs them
const STEPS: &[fn() -> Step] = &[
    steps::scalar_equality,
    steps::reference_equality,
    steps::scalar_copy,
    steps::reference_aliasing,
    steps::value_copy,
    steps::record_equality,
    steps::record_with,
    steps::weather_shallow_copy,
    steps::weather_equality,
];

/// Run the whole tour and collect what it observed.
///
/// Running never fails; use [`Report::verify`] to check the findings
/// against the semantics each aggregate guarantees.
///
/// # Example
///
/// ```
/// use valref::{demo, DemoContext};
///
/// let report = demo::run(&DemoContext::new());
/// report.verify().unwrap();
/// assert_eq!(report.lines()[0], "These two integers are equal");
/// ```
pub fn run(ctx: &DemoContext) -> Report {
    let mut report = Report::default();

    for step_fn in STEPS {
        let step = step_fn();
        debug!(step = %step.name, findings = step.findings.len(), "{}", step.title);

        if ctx.trace {
            for finding in &step.findings {
                let semantics = match finding {
                    Finding::Comparison {
                        semantics: Some(s), ..
                    } => s.label(),
                    Finding::Comparison { .. } => "scalar",
                    Finding::Observation { .. } => "observation",
                };
                info!(
                    step = %step.name,
                    semantics,
                    holds = finding.holds(),
                    "{}",
                    finding.line()
                );
            }
        }

        report.steps.push(step);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_executes_every_step_in_order() {
        let report = run(&DemoContext::new());
        let names: Vec<&str> = report.steps.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "scalar_equality",
                "reference_equality",
                "scalar_copy",
                "reference_aliasing",
                "value_copy",
                "record_equality",
                "record_with",
                "weather_shallow_copy",
                "weather_equality",
            ]
        );
    }

    #[test]
    fn test_traced_run_matches_plain_run() {
        let plain = run(&DemoContext::new());
        let traced = run(&DemoContext::new().traced());
        assert_eq!(plain, traced);
    }
}
