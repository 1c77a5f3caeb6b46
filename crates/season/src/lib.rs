//! # office-season
//!
//! Season, week and lectionary-cycle classification over a
//! [`FeastCalendar`](office_calendar::FeastCalendar).
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["FeastCalendar"] -->|"first_proper()"| B["first Proper"]
//!     A -->|"SeasonTable::new()"| C["SeasonTable"]
//!     B --> C
//!     C -->|".season_and_week(instant)"| D["(Season, Week)"]
//!     C -->|".advent_sunday()"| E["cycle_year()"]
//! ```
//!
//! Evening rules are consulted before the boundary lists: after 18:00 on
//! Christmas Eve the season is already Christmas, and after 18:00 on the
//! Eve of the Epiphany it is already Epiphany.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `season` | `Season` and `Week` labels |
//! | `table` | Per-year boundary lists and classification |
//! | `proper` | First kept Proper of the year |
//! | `evening` | The 18:00 evening cutover |
//! | `cycle` | Lectionary year One/Two |
//! | `error` | Error types |

mod cycle;
mod error;
mod evening;
mod proper;
mod season;
mod table;

pub use cycle::{CycleYear, cycle_year};
pub use error::SeasonError;
pub use evening::{EVENING_CUTOVER_SECS, is_evening};
pub use proper::{DEFAULT_FIRST_PROPER, first_proper};
pub use season::{Season, Week};
pub use table::{Boundary, SeasonTable, season_and_week};
