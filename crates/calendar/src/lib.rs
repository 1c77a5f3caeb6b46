//! # office-calendar
//!
//! Easter computus and the per-year feast calendar of the Daily Office.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["year"] -->|"easter()"| B["Easter Day"]
//!     A -->|"fixed table"| C["fixed observances"]
//!     B -->|"moveable table"| D["moveable slots"]
//!     C --> E["FeastCalendar"]
//!     D --> E
//!     E -->|".by_date()"| F["principal Observance"]
//!     E -->|".by_name()"| G["Slot"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use office_calendar::{FeastCalendar, Lookup, easter};
//!
//! assert_eq!(easter(2024)?, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
//!
//! let calendar = FeastCalendar::build(2024)?;
//! let palm = calendar.by_name("PALM_SUNDAY")?;       // Slot::Available
//! let proper = calendar.by_name("PROPER_3")?;        // Slot::Unavailable in 2024
//! let today = calendar.lookup(Lookup::ByDate(date))?; // principal observance, if any
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `easter` | Gregorian computus |
//! | `date` | Checked date arithmetic and Sunday anchoring |
//! | `observance` | Observance, rank and name-index slot types |
//! | `names` | Symbolic names other crates anchor on |
//! | `fixed` | Fixed-date feasts and eves |
//! | `moveable` | Easter- and Christmas-anchored feasts, Epiphany Sundays, Propers |
//! | `feast_calendar` | Per-year calendar with date and name indices |
//! | `sequence` | Civil date sequences |
//! | `error` | Error types |

mod date;
mod easter;
mod error;
mod feast_calendar;
mod fixed;
mod moveable;
pub mod names;
mod observance;
mod sequence;

pub use date::{shift, ymd};
pub use easter::easter;
pub use error::CalendarError;
pub use feast_calendar::{FeastCalendar, Lookup};
pub use observance::{Observance, Rank, Slot};
pub use sequence::year_days;
