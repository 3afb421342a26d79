//! `Koyomi`: the query surface used by calendar views.
//!
//! Per-day queries take a [`Date`], which is valid by construction; per-month
//! queries take a raw month number and validate it.  `Koyomi` holds no state,
//! so one value (or many) can serve any number of threads.

use koyomi_core::errors::{Error, Result};
use koyomi_core::Year;
use koyomi_time::{
    era, solar_term, zodiac, Date, DayKind, Era, HolidayCalendar, HolidayMap, Japan, Month,
    MonthGrid, SolarTerms,
};
use tracing::trace;

/// Everything the date-detail view shows about one day.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayDetail {
    /// The day described.
    pub date: Date,
    /// Holiday label, or `None` on an ordinary day.
    pub holiday: Option<String>,
    /// Stem-branch name of the year.
    pub zodiac: String,
    /// Traditional month name.
    pub month_name: String,
    /// Era date, e.g. `令和6年5月1日`.
    pub wareki: String,
    /// Solar term falling on the day, or `""`.
    pub solar_term: String,
    /// Display class of the day.
    pub kind: DayKind,
}

/// Japanese calendar queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct Koyomi {
    calendar: Japan,
}

impl Koyomi {
    /// Create the façade.
    pub fn new() -> Self {
        Self::default()
    }

    /// Holiday labels of `year`/`month`.
    ///
    /// # Errors
    /// [`Error::InvalidMonth`] for a month outside 1–12,
    /// [`Error::InvalidDate`] for a year outside 1–9999.
    pub fn holidays(&self, year: Year, month: u8) -> Result<HolidayMap> {
        let month = Month::try_from(month)?;
        check_year(year, month)?;
        Ok(self.calendar.holidays(year, month))
    }

    /// Name of the solar term on `date`, or `""`.
    pub fn term_on(&self, date: Date) -> &'static str {
        solar_term::term_on(date)
    }

    /// Era year label of `date`, e.g. `令和6年` or `明治以前`.
    pub fn era_string(&self, date: Date) -> String {
        era::wareki_year(date)
    }

    /// Era in force on `date`, `None` before Meiji.
    pub fn era_of(&self, date: Date) -> Option<Era> {
        Era::of(date)
    }

    /// Stem-branch name of `year`.
    pub fn zodiac(&self, year: Year) -> String {
        zodiac::zodiac(year)
    }

    /// Traditional name of `month` (1–12).
    pub fn lunar_month_name(&self, month: u8) -> Result<&'static str> {
        Ok(zodiac::lunar_month_name(Month::try_from(month)?))
    }

    /// The 24 solar terms of `year`.
    pub fn solar_terms(&self, year: Year) -> SolarTerms {
        SolarTerms::for_year(year)
    }

    /// Sunday-first week rows of `year`/`month`.
    pub fn month_grid(&self, year: Year, month: u8) -> Result<MonthGrid> {
        let month = Month::try_from(month)?;
        check_year(year, month)?;
        Ok(MonthGrid::new(year, month))
    }

    /// Display class of `date`.
    pub fn day_kind(&self, date: Date) -> DayKind {
        self.calendar.day_kind(date)
    }

    /// Everything the date-detail view shows about `date`.
    pub fn day_detail(&self, date: Date) -> DayDetail {
        let holidays = self.calendar.holidays(date.year(), date.month());
        let holiday = holidays.get(date.day_of_month()).map(str::to_owned);
        let kind = self.calendar.day_kind(date);
        trace!(%date, ?holiday, "day detail");
        DayDetail {
            date,
            holiday,
            zodiac: zodiac::zodiac(date.year()),
            month_name: zodiac::lunar_month_name(date.month()).to_owned(),
            wareki: era::wareki_date(date),
            solar_term: solar_term::term_on(date).to_owned(),
            kind,
        }
    }
}

fn check_year(year: Year, month: Month) -> Result<()> {
    if (Date::MIN_YEAR..=Date::MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(Error::InvalidDate {
            year,
            month: month.number(),
            day: 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_input() {
        let k = Koyomi::new();
        assert_eq!(k.holidays(2024, 13), Err(Error::InvalidMonth(13)));
        assert!(matches!(
            k.holidays(0, 1),
            Err(Error::InvalidDate { year: 0, .. })
        ));
        assert!(k.lunar_month_name(0).is_err());
    }

    #[test]
    fn detail_of_enthronement_day() {
        let d = Koyomi::new().day_detail(Date::from_ymd(2019, 5, 1).unwrap());
        assert_eq!(d.holiday.as_deref(), Some("新天皇即位日"));
        assert_eq!(d.wareki, "令和元年5月1日");
        assert_eq!(d.zodiac, "己亥");
        assert_eq!(d.month_name, "皐月");
        assert_eq!(d.kind, DayKind::SundayOrHoliday);
    }
}
