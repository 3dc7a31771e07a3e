// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering of reports.

use casetrack::{MatterAssessment, PortfolioReport};
use std::fmt::{self, Write};

/// Renders the portfolio report as a plain-text dashboard.
///
/// # Errors
///
/// Returns an error if formatting fails.
pub fn render_portfolio(report: &PortfolioReport) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_portfolio(&mut out, report)?;
    Ok(out)
}

/// Renders one matter's timeline, as shown in the timeline view.
///
/// # Errors
///
/// Returns an error if formatting fails.
pub fn render_timeline(assessment: &MatterAssessment) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_timeline(&mut out, assessment)?;
    Ok(out)
}

fn write_portfolio(out: &mut impl Write, report: &PortfolioReport) -> fmt::Result {
    let d = &report.deadlines;
    let s = &report.sla;

    writeln!(out, "Matters as of {}", report.today)?;
    writeln!(out)?;
    writeln!(
        out,
        "Deadlines: Overdue {} | This Week {} | Upcoming {} | No Deadline {} (closed: {})",
        d.overdue, d.this_week, d.upcoming, d.no_deadline, d.excluded
    )?;
    writeln!(
        out,
        "SLA:       Within SLA {} | At Risk {} | Critical {} | Overdue {} | Completed {}",
        s.within_sla, s.at_risk, s.critical, s.overdue, s.completed
    )?;
    if s.stale > 0 {
        writeln!(out, "           {} stored SLA status value(s) out of date", s.stale)?;
    }
    writeln!(out)?;

    writeln!(
        out,
        "{:<12} {:<36} {:>5} {:<11} {:<12} {:>7}",
        "Case", "Status", "Days", "SLA", "Deadline", "Pending"
    )?;
    for assessment in &report.assessments {
        writeln!(
            out,
            "{:<12} {:<36} {:>5} {:<11} {:<12} {:>7}",
            assessment.case_id,
            assessment.status.as_str(),
            assessment.days_in_process,
            assessment.sla_tier.as_str(),
            assessment.deadline_bucket.map_or("-", |b| b.as_str()),
            assessment.query_pending_total(),
        )?;
    }

    if !report.failures.is_empty() {
        writeln!(out)?;
        writeln!(out, "Not assessed:")?;
        for failure in &report.failures {
            writeln!(out, "  {}", failure.error)?;
        }
    }

    Ok(())
}

fn write_timeline(out: &mut impl Write, assessment: &MatterAssessment) -> fmt::Result {
    writeln!(out, "{} - {}", assessment.case_id, assessment.title)?;
    writeln!(
        out,
        "Status: {} | {} days in process | {}",
        assessment.status, assessment.days_in_process, assessment.sla_tier
    )?;
    writeln!(out)?;

    if assessment.timeline.is_empty() {
        return writeln!(out, "No stages recorded.");
    }

    for event in &assessment.timeline {
        writeln!(
            out,
            "{}  {:<26} +{}d",
            event.date, event.label, event.days_since_previous
        )?;
    }

    if let Some(days) = assessment.days_since_last_event {
        writeln!(out)?;
        writeln!(out, "{days} days since last event")?;
    }

    Ok(())
}
