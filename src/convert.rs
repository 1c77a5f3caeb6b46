//! Pure conversion functions: config and flag strings -> engine arguments.

use anyhow::{Result, bail};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::cli::ResolveArgs;
use crate::config::OfficeConfig;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Parses an output format name.
pub fn parse_format(s: &str) -> Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => bail!("unknown output format: {other:?}"),
    }
}

/// Parses an ISO-8601 local date-time, or a bare date taken at noon.
pub fn parse_instant(s: &str) -> Result<NaiveDateTime> {
    for pattern in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(instant) = NaiveDateTime::parse_from_str(s, pattern) {
            return Ok(instant);
        }
    }
    if let (Ok(date), Some(noon)) = (
        NaiveDate::parse_from_str(s, "%Y-%m-%d"),
        NaiveTime::from_hms_opt(12, 0, 0),
    ) {
        return Ok(date.and_time(noon));
    }
    bail!("invalid instant: {s:?} (expected YYYY-MM-DDTHH:MM[:SS] or YYYY-MM-DD)")
}

/// Days before and after the instant; flags override the config file.
pub fn resolve_window(args: &ResolveArgs, config: &OfficeConfig) -> (u32, u32) {
    (
        args.before.unwrap_or(config.span.days_before),
        args.after.unwrap_or(config.span.days_after),
    )
}
