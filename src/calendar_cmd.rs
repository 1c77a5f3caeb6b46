//! Calendar command: list the observances of one civil year.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::info_span;

use office_calendar::{Observance, Slot};
use office_daily::LiturgicalYear;

use crate::cli::CalendarArgs;
use crate::convert::{self, OutputFormat};

#[derive(Serialize)]
struct CalendarListing<'a> {
    year: i32,
    easter: NaiveDate,
    first_proper: u8,
    observances: Vec<&'a Observance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unavailable: Option<Vec<&'a Slot>>,
}

/// Run the calendar command.
pub fn run(args: CalendarArgs) -> Result<()> {
    let _cmd = info_span!("calendar", year = args.year).entered();
    let format = convert::parse_format(&args.format)?;
    let year = LiturgicalYear::build(args.year)
        .with_context(|| format!("failed to build calendar for {}", args.year))?;
    let listing = listing(&year, args.all);

    match format {
        OutputFormat::Text => print!("{}", render_text(&listing)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&listing).context("failed to serialize calendar")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn listing(year: &LiturgicalYear, all: bool) -> CalendarListing<'_> {
    let calendar = year.calendar();
    CalendarListing {
        year: calendar.year(),
        easter: calendar.easter(),
        first_proper: year.seasons().first_proper(),
        observances: calendar.observances().collect(),
        unavailable: all.then(|| calendar.unavailable()),
    }
}

fn render_text(listing: &CalendarListing<'_>) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(
        out,
        "{}: Easter {}, first Proper {}",
        listing.year, listing.easter, listing.first_proper
    );
    let mut previous = None;
    for observance in &listing.observances {
        let date = observance.date();
        let superseded = if previous == Some(date) { " (superseded)" } else { "" };
        let eve = if observance.is_eve() { " (evening)" } else { "" };
        let _ = writeln!(
            out,
            "{}  {:<17}  {}{eve}{superseded}",
            date.format("%a %Y-%m-%d"),
            observance.rank().to_string(),
            observance.display_name()
        );
        previous = Some(date);
    }
    if let Some(unavailable) = &listing.unavailable {
        let _ = writeln!(out, "\nNot kept in {}:", listing.year);
        for slot in unavailable {
            let _ = writeln!(out, "{}  {}", slot.date().format("%a %Y-%m-%d"), slot.symbolic_name());
        }
    }
    out
}
