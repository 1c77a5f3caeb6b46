//! # office-daily
//!
//! Resolves an instant of local civil time to its place in the Daily
//! Office: lectionary year, season, week, day and canonical hour.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["instant"] -->|"year"| B["CalendarCache"]
//!     B -->|"Arc"| C["LiturgicalYear"]
//!     C -->|"SeasonTable"| D["season, week"]
//!     C -->|"advent_sunday"| E["cycle year"]
//!     C -->|"FeastCalendar"| F["day label"]
//!     A -->|"nearest_hour()"| G["canonical hour"]
//!     D --> H["ResolvedMoment"]
//!     E --> H
//!     F --> H
//!     G --> H
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use office_daily::{DailyOffice, resolve};
//!
//! // One-off query
//! let moment = resolve(instant)?;
//!
//! // Repeated queries share built years
//! let office = DailyOffice::new();
//! let days = office.resolve_span(instant, 1, 1)?; // yesterday, today, tomorrow
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `office` | `DailyOffice` and the free `resolve` function |
//! | `year` | One year's feast calendar and season table |
//! | `cache` | Per-year memo shared across threads |
//! | `moment` | The resolved result |
//! | `day` | Day labels and the evening cutover for eves |
//! | `hour` | Canonical hours and nearest-hour selection |
//! | `error` | Error types |

mod cache;
mod day;
mod error;
mod hour;
mod moment;
mod office;
mod year;

pub use cache::CalendarCache;
pub use day::{day_label, weekday_name};
pub use error::OfficeError;
pub use hour::{CanonicalHour, nearest_hour};
pub use moment::ResolvedMoment;
pub use office::{DailyOffice, resolve};
pub use year::LiturgicalYear;
