//! `Date` type.
//!
//! Dates are proleptic Gregorian and are stored as a serial number of days.
//!
//! # Serial number convention
//! * Serial 1 = January 1, year 1 (a Monday).
//! * The valid date range is 0001-01-01 to 9999-12-31.
//!
//! Weekdays and day differences therefore reduce to integer arithmetic on the
//! serial; no calendar object is consulted.

use koyomi_core::errors::{Error, Result};
use koyomi_core::{ensure, Year};

use crate::month::Month;
use crate::weekday::Weekday;

/// A calendar date represented as a serial number.
///
/// A `Date` is only ever produced by validating constructors, so every value
/// is a real calendar day.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, year 1.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(3_652_059);

    /// First supported year.
    pub const MIN_YEAR: Year = 1;

    /// Last supported year.
    pub const MAX_YEAR: Year = 9999;

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    pub fn from_serial(serial: i32) -> Result<Self> {
        ensure!(
            (Self::MIN.0..=Self::MAX.0).contains(&serial),
            "serial {serial} out of range [{}, {}]",
            Self::MIN.0,
            Self::MAX.0
        );
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`] unless the triple names a real
    /// proleptic Gregorian day between years 1 and 9999.
    pub fn from_ymd(year: Year, month: u8, day: u8) -> Result<Self> {
        let invalid = Error::InvalidDate { year, month, day };
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) || !(1..=12).contains(&month) {
            return Err(invalid);
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(invalid);
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year.
    pub fn year(&self) -> Year {
        ymd_from_serial(self.0).0
    }

    /// Return the month.
    pub fn month(&self) -> Month {
        let m = ymd_from_serial(self.0).1;
        Month::ALL[m as usize - 1]
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return `(year, month, day)` in one decomposition.
    pub fn ymd(&self) -> (Year, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let (y, _, _) = ymd_from_serial(self.0);
        (self.0 - serial_from_ymd(y, 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        weekday_of_serial(self.0)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        Self::from_serial(self.0 + n)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }

    /// Return the *n*-th occurrence of `weekday` in `year`/`month`.
    ///
    /// For example, `nth_weekday(3, Weekday::Monday, 2024, Month::September)`
    /// returns the third Monday of September 2024 (2024-09-16).
    ///
    /// # Errors
    /// Returns an error if `n` is zero or larger than the number of such
    /// weekdays in the month.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: Year, month: Month) -> Result<Self> {
        ensure!(n >= 1, "nth_weekday: n must be >= 1");
        let first = Date::from_ymd(year, month.number(), 1)?;
        let skip = (weekday.index() as i32 - first.weekday().index() as i32).rem_euclid(7);
        let day = 1 + skip + 7 * (n as i32 - 1);
        ensure!(
            day <= month.days_in(year) as i32,
            "nth_weekday: {n}-th {weekday} does not exist in {year}-{:02}",
            month.number()
        );
        Date::from_ymd(year, month.number(), day as u8)
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

impl std::str::FromStr for Date {
    type Err = Error;

    /// Parse an ISO `YYYY-MM-DD` string.
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(Error::Precondition(format!("expected YYYY-MM-DD, got {s:?}")));
        };
        let parse_err = |_| Error::Precondition(format!("expected YYYY-MM-DD, got {s:?}"));
        Date::from_ymd(
            y.parse().map_err(parse_err)?,
            m.parse().map_err(parse_err)?,
            d.parse().map_err(parse_err)?,
        )
    }
}

impl TryFrom<String> for Date {
    type Error = Error;
    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Date> for String {
    fn from(d: Date) -> String {
        d.to_string()
    }
}

// ── Calendar helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: Year) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
///
/// `month` must lie in 1–12.
pub fn days_in_month(year: Year, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

/// Weekday of an arbitrary (year, month, day), without validating the triple.
///
/// Used by the holiday rules, which only ever pass days they have already
/// bounded to the month.
pub(crate) fn weekday_of(year: Year, month: u8, day: u8) -> Weekday {
    weekday_of_serial(serial_from_ymd(year, month, day))
}

fn weekday_of_serial(serial: i32) -> Weekday {
    // Serial 1 (0001-01-01) is a Monday.
    match (serial - 1).rem_euclid(7) {
        0 => Weekday::Monday,
        1 => Weekday::Tuesday,
        2 => Weekday::Wednesday,
        3 => Weekday::Thursday,
        4 => Weekday::Friday,
        5 => Weekday::Saturday,
        _ => Weekday::Sunday,
    }
}

/// Days in all years strictly before `year`.
fn days_before_year(year: Year) -> i32 {
    let y = year - 1;
    y * 365 + y / 4 - y / 100 + y / 400
}

/// Convert (year, month, day) to a serial number.
fn serial_from_ymd(year: Year, month: u8, day: u8) -> i32 {
    let mut serial = days_before_year(year);
    serial += MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (Year, u8, u8) {
    // 146_097 days per 400-year cycle; the estimate is off by at most one.
    let mut y = ((serial as i64 * 400) / 146_097) as Year + 1;
    loop {
        if serial <= days_before_year(y) {
            y -= 1;
        } else if serial > days_before_year(y + 1) {
            y += 1;
        } else {
            break;
        }
    }
    let mut remaining = serial - days_before_year(y);
    let mut m = 1u8;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────
