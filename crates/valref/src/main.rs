//! Valref - walks through value, reference and record semantics.
//!
//! This is the entry point for the `valref` binary.
//!
//! # Usage
//!
//! ```bash
//! # Print the tour
//! valref
//!
//! # Machine-readable report
//! valref --format json
//!
//! # Log each step to stderr
//! valref -vv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: log filter, overrides `-v`

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use valref::{demo, DemoContext, OutputFormat};

/// Show how value, reference and record aggregates behave under
/// comparison, assignment and mutation.
#[derive(Debug, Parser)]
#[command(name = "valref")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print findings without checking them
    #[arg(long)]
    no_verify: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Run configuration selected by the arguments.
    fn context(&self) -> DemoContext {
        let mut ctx = DemoContext::with_format(self.format);
        if self.no_verify {
            ctx = ctx.without_verify();
        }
        if self.verbose > 0 {
            ctx = ctx.traced();
        }
        ctx
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = cli.context();
    let report = demo::run(&ctx);
    tracing::info!(steps = report.steps.len(), "tour complete");

    if ctx.verify {
        report
            .verify()
            .context("tour findings contradict the aggregates' semantics")?;
    }

    let output = report
        .render(ctx.format)
        .context("failed to render report")?;
    println!("{}", output);

    Ok(())
}

/// Default log level for a `-v` count; `RUST_LOG` overrides it.
fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_tracing(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
