//! Resolve command: where an instant falls in the Daily Office.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use tracing::{debug, info_span};

use office_daily::{DailyOffice, ResolvedMoment};

use crate::cli::ResolveArgs;
use crate::config;
use crate::convert::{self, OutputFormat};

/// Run the resolve command.
pub fn run(args: ResolveArgs) -> Result<()> {
    let _cmd = info_span!("resolve").entered();
    let config = config::load(args.config.as_deref())?;

    let format = convert::parse_format(args.format.as_deref().unwrap_or(&config.output.format))?;
    let instant = match args.at.as_deref() {
        Some(at) => convert::parse_instant(at)?,
        None => Local::now().naive_local(),
    };
    let (days_before, days_after) = convert::resolve_window(&args, &config);
    debug!(%instant, days_before, days_after, "resolving");

    let office = DailyOffice::new();
    let moments = office
        .resolve_span(instant, days_before, days_after)
        .with_context(|| format!("failed to resolve {instant}"))?;

    match format {
        OutputFormat::Text => print!("{}", render_text(&moments, instant)),
        OutputFormat::Json => {
            let json = if moments.len() == 1 {
                serde_json::to_string_pretty(&moments[0])
            } else {
                serde_json::to_string_pretty(&moments)
            }
            .context("failed to serialize result")?;
            println!("{json}");
        }
    }
    Ok(())
}

/// Renders one block per moment, marking the queried instant.
fn render_text(moments: &[ResolvedMoment], instant: NaiveDateTime) -> String {
    let mut out = String::new();
    for (i, moment) in moments.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let marker = if moment.instant == instant { " *" } else { "" };
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{}{marker}", moment.instant.format("%A %Y-%m-%d %H:%M"));
        let _ = writeln!(out, "  {}", moment.cycle_year.title());
        let _ = writeln!(out, "  {}, {}", moment.season, moment.week_label);
        let _ = writeln!(out, "  {}", moment.day_label);
        let _ = writeln!(out, "  {}", moment.canonical_hour.title());
    }
    out
}
