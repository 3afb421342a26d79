//! `HolidayCalendar` trait.
//!
//! A holiday calendar produces the holiday labels of any month; the per-date
//! queries are derived from that month map.

use koyomi_core::errors::Result;
use koyomi_core::Year;

use crate::date::Date;
use crate::holiday_map::HolidayMap;
use crate::month::Month;
use crate::weekday::Weekday;

/// How a day is shown in the month view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayKind {
    /// Monday–Friday with no holiday.
    Weekday,
    /// Saturday with no holiday.
    Saturday,
    /// Sunday, or any day carrying a holiday label.
    SundayOrHoliday,
}

/// A calendar of named holidays.
pub trait HolidayCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Japan"`).
    fn name(&self) -> &str;

    /// Holiday labels of `year`/`month`, built fresh on every call.
    fn holidays(&self, year: Year, month: Month) -> HolidayMap;

    /// Label of the holiday on `date`, if any.
    fn holiday_name(&self, date: Date) -> Option<String> {
        self.holidays(date.year(), date.month())
            .get(date.day_of_month())
            .map(str::to_owned)
    }

    /// Return `true` if `date` carries a holiday label.
    fn is_holiday(&self, date: Date) -> bool {
        self.holidays(date.year(), date.month())
            .contains(date.day_of_month())
    }

    /// Return `true` if `date` is neither a weekend nor a holiday.
    fn is_business_day(&self, date: Date) -> bool {
        !date.weekday().is_weekend() && !self.is_holiday(date)
    }

    /// Classify `date` for display.
    fn day_kind(&self, date: Date) -> DayKind {
        match date.weekday() {
            Weekday::Sunday => DayKind::SundayOrHoliday,
            _ if self.is_holiday(date) => DayKind::SundayOrHoliday,
            Weekday::Saturday => DayKind::Saturday,
            _ => DayKind::Weekday,
        }
    }

    /// All labelled days in the inclusive range `[from, to]`.
    fn holidays_between(&self, from: Date, to: Date) -> Result<Vec<(Date, String)>> {
        let mut out = Vec::new();
        let mut d = from;
        let mut cached: Option<(Year, Month, HolidayMap)> = None;
        while d <= to {
            let (y, m) = (d.year(), d.month());
            if !matches!(&cached, Some((cy, cm, _)) if *cy == y && *cm == m) {
                cached = Some((y, m, self.holidays(y, m)));
            }
            if let Some((_, _, map)) = &cached {
                if let Some(label) = map.get(d.day_of_month()) {
                    out.push((d, label.to_owned()));
                }
            }
            if d == to {
                break;
            }
            d = d.add_days(1)?;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every first of the month is a holiday.
    #[derive(Debug)]
    struct FirstOfMonth;

    impl HolidayCalendar for FirstOfMonth {
        fn name(&self) -> &str {
            "FirstOfMonth"
        }

        fn holidays(&self, _year: Year, _month: Month) -> HolidayMap {
            let mut map = HolidayMap::new();
            map.insert(1, "first");
            map
        }
    }

    fn date(y: Year, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn derived_queries() {
        let cal = FirstOfMonth;
        // 2024-05-01 is a Wednesday
        assert!(cal.is_holiday(date(2024, 5, 1)));
        assert!(!cal.is_business_day(date(2024, 5, 1)));
        assert!(cal.is_business_day(date(2024, 5, 2)));
        assert_eq!(cal.holiday_name(date(2024, 5, 1)).as_deref(), Some("first"));
        assert_eq!(cal.day_kind(date(2024, 5, 1)), DayKind::SundayOrHoliday);
        assert_eq!(cal.day_kind(date(2024, 5, 4)), DayKind::Saturday);
        assert_eq!(cal.day_kind(date(2024, 5, 5)), DayKind::SundayOrHoliday);
        assert_eq!(cal.day_kind(date(2024, 5, 6)), DayKind::Weekday);
    }

    #[test]
    fn range_crosses_months() {
        let cal = FirstOfMonth;
        let found = cal
            .holidays_between(date(2024, 1, 15), date(2024, 4, 1))
            .unwrap();
        let days: Vec<Date> = found.iter().map(|(d, _)| *d).collect();
        assert_eq!(days, vec![date(2024, 2, 1), date(2024, 3, 1), date(2024, 4, 1)]);
    }
}
