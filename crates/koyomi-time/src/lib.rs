//! # koyomi-time
//!
//! Date, era, solar-term, zodiac and holiday-calendar types.
//!
//! Everything here is a pure function of its inputs: results are built fresh
//! on every call and no state is shared between calls, so any item may be used
//! from several threads at once.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `HolidayCalendar` trait and `DayKind`.
pub mod calendar;

/// Concrete holiday calendars.
pub mod calendars;

/// `Date` type.
pub mod date;

/// Japanese era names.
pub mod era;

/// `HolidayMap`: day-of-month → label.
pub mod holiday_map;

/// `Month`: month of the year.
pub mod month;

/// `MonthGrid`: Sunday-first week rows of a month.
pub mod month_grid;

/// The 24 solar terms.
pub mod solar_term;

/// `Weekday`: day of the week.
pub mod weekday;

/// Sexagenary year names and traditional month names.
pub mod zodiac;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{DayKind, HolidayCalendar};
pub use calendars::japan::Japan;
pub use date::Date;
pub use era::{era_of, wareki_date, wareki_year, Era, PRE_MEIJI};
pub use holiday_map::HolidayMap;
pub use month::Month;
pub use month_grid::MonthGrid;
pub use solar_term::{term_on, terms_for_year, SolarTerm, SolarTerms};
pub use weekday::Weekday;
pub use zodiac::{lunar_month_name, zodiac};
