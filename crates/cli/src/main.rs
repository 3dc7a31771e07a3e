// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod clock;
mod input;
mod render;

use casetrack::{MatterAssessment, PortfolioReport, SlaConfigSet, assess_portfolio};
use casetrack_domain::parse_date;
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use color_eyre::eyre::{Result, WrapErr, eyre};
use std::path::PathBuf;
use time::Date;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

use crate::input::{Snapshot, load_snapshot};

/// casetrack - SLA, deadline and timeline report for a matter snapshot
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON snapshot (`sla_configs` and `matters`), or `-` for stdin
    #[arg(short, long)]
    input: PathBuf,

    /// Report as of this date (YYYY-MM-DD) instead of the current date
    #[arg(long, value_parser = parse_date)]
    today: Option<Date>,

    /// IANA timezone used to determine the current date
    #[arg(long, default_value = "UTC")]
    timezone: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Show the timeline of a single matter
    #[arg(long = "case")]
    case_id: Option<String>,

    /// Exit with an error if any matter could not be assessed
    #[arg(long)]
    strict: bool,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn resolve_today(&self) -> Result<Date> {
        self.today.map_or_else(|| clock::today_in(&self.timezone), Ok)
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // RUST_LOG wins over -v/-q when set
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(args.log_level().into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let today: Date = args.resolve_today()?;
    info!(%today, timezone = %args.timezone, "Resolved report date");

    let snapshot: Snapshot = load_snapshot(&args.input)?;
    let configs: SlaConfigSet =
        SlaConfigSet::from_configs(snapshot.sla_configs).wrap_err("Invalid SLA configuration")?;

    let report: PortfolioReport = assess_portfolio(&snapshot.matters, &configs, today);

    let output: String = match &args.case_id {
        Some(case_id) => {
            let assessment: &MatterAssessment = report
                .assessments
                .iter()
                .find(|a| &a.case_id == case_id)
                .ok_or_else(|| eyre!("No assessed matter with case id '{case_id}'"))?;
            match args.format {
                OutputFormat::Text => render::render_timeline(assessment)?,
                OutputFormat::Json => serde_json::to_string_pretty(assessment)?,
            }
        }
        None => match args.format {
            OutputFormat::Text => render::render_portfolio(&report)?,
            OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        },
    };
    println!("{}", output.trim_end());

    if !report.failures.is_empty() {
        for failure in &report.failures {
            error!(case_id = %failure.case_id, "{}", failure.error);
        }
        if args.strict {
            return Err(eyre!(
                "{} matter(s) could not be assessed",
                report.failures.len()
            ));
        }
    }

    Ok(())
}
