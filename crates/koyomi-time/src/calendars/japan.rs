//! Japan holiday calendar.
//!
//! Labels follow the national holiday law as amended over time, with the
//! pre-war ceremonial name kept on a second line where a modern holiday
//! replaced one (`"建国記念の日\n紀元節"`).

use koyomi_core::Year;
use tracing::{debug, warn};

use crate::calendar::HolidayCalendar;
use crate::date::weekday_of;
use crate::era::Era;
use crate::holiday_map::HolidayMap;
use crate::month::Month;
use crate::month_grid::MonthGrid;
use crate::solar_term::{SolarTerm, SolarTerms};
use crate::weekday::Weekday;

/// Appended to a holiday label to mark the following substitute day.
pub const SUBSTITUTE_SUFFIX: &str = "\u{3000}振替休日";

/// Label of the Golden Week substitute day (May 6).
pub const SUBSTITUTE_HOLIDAY: &str = "振替休日";

/// Label of a day sandwiched between two holidays.
pub const NATIONAL_HOLIDAY: &str = "国民の休日";

/// First year in which a Sunday holiday moves to the following Monday.
pub const SUBSTITUTE_SINCE: Year = 1973;

/// Japan holiday calendar.
///
/// The following holidays are produced, each within the years it existed:
/// * New Year's Day (Jan 1)
/// * Coming of Age Day (Jan 15 1948–1999, 2nd Monday otherwise)
/// * Kigensetsu / National Foundation Day (Feb 11, until 1948 and from 1967)
/// * Emperor's Birthday (Apr 29 in Showa, Dec 23 in Heisei, Feb 23 in Reiwa)
/// * Vernal and Autumnal Equinox Day (solar terms 春分 / 秋分)
/// * Greenery Day / Showa Day (Apr 29 from 1990)
/// * Constitution Memorial Day, May 4, Children's Day (from 1948)
/// * Marine Day (Jul 20 1996–2002, 3rd Monday from 2003)
/// * Mountain Day (Aug 11, from 2016)
/// * Respect for the Aged Day (Sep 15 1966–2002, 3rd Monday from 2003)
/// * Health and Sports Day / Sports Day (Oct 10 1966–1999, 2nd Monday after)
/// * Culture Day and Labour Thanksgiving Day (Nov 3, Nov 23)
///
/// From 1973 a holiday falling on a Sunday also marks the next day with the
/// [`SUBSTITUTE_SUFFIX`].  The Tokyo Olympics moves of 2020/2021 and the 2019
/// enthronement days are pinned explicitly.
#[derive(Debug, Clone, Copy, Default)]
pub struct Japan;

impl HolidayCalendar for Japan {
    fn name(&self) -> &str {
        "Japan"
    }

    #[tracing::instrument(level = "trace", skip(self))]
    fn holidays(&self, year: Year, month: Month) -> HolidayMap {
        let mut rules = MonthRules::new(year, month);
        match month {
            Month::January => rules.january(),
            Month::February => rules.february(),
            Month::March => rules.march(),
            Month::April => rules.april(),
            Month::May => rules.may(),
            Month::June => {}
            Month::July => rules.july(),
            Month::August => rules.august(),
            Month::September => rules.september(),
            Month::October => rules.october(),
            Month::November => rules.november(),
            Month::December => rules.december(),
        }
        rules.map
    }
}

/// Per-call accumulator for one month.  Later insertions on the same day
/// replace earlier ones, so rule order below is significant.
struct MonthRules {
    year: Year,
    month: Month,
    last_day: u8,
    map: HolidayMap,
}

impl MonthRules {
    fn new(year: Year, month: Month) -> Self {
        Self {
            year,
            month,
            last_day: month.days_in(year),
            map: HolidayMap::new(),
        }
    }

    // ── Primitive rules ───────────────────────────────────────────────────────

    fn fixed(&mut self, day: u8, label: &str) {
        self.map.insert(day, label);
    }

    /// Record `label` on `day`; from 1973 a Sunday also marks `day + 1`.
    fn with_substitute(&mut self, day: u8, label: &str) {
        if day == 0 || day > self.last_day {
            warn!(
                year = self.year,
                month = self.month.number(),
                day,
                label,
                "holiday outside month skipped"
            );
            return;
        }
        self.map.insert(day, label);
        if self.year >= SUBSTITUTE_SINCE
            && weekday_of(self.year, self.month.number(), day) == Weekday::Sunday
            && day < self.last_day
        {
            self.map.insert(day + 1, format!("{label}{SUBSTITUTE_SUFFIX}"));
        }
    }

    /// Record `label` on the `week`-th `weekday` of the month.
    ///
    /// The grid is Sunday first, so its first row only contains a Monday when
    /// the 1st is a Sunday or Monday; otherwise the row index is shifted by one.
    fn happy_monday(&mut self, week: u8, weekday: Weekday, label: &str) -> Option<u8> {
        let grid = MonthGrid::new(self.year, self.month);
        let first = weekday_of(self.year, self.month.number(), 1).index();
        let mut week = week;
        if first > 0 && first < 6 {
            week += 1;
        }
        let day = grid.cell(week as usize - 1, weekday)?;
        self.map.insert(day, label);
        Some(day)
    }

    /// Equinox holiday on the day of `term`, with the substitute rule.
    fn equinox(&mut self, term: SolarTerm, label: &str) -> Option<u8> {
        let terms = SolarTerms::for_year(self.year);
        let Some(day) = terms.day_in_month(term) else {
            warn!(
                year = self.year,
                term = term.name(),
                raw_day = terms.day(term),
                "solar term outside its month; equinox holiday skipped"
            );
            return None;
        };
        self.with_substitute(day, label);
        Some(day)
    }

    fn era_on(&self, day: u8) -> Option<Era> {
        Era::of_ymd(self.year, self.month.number(), day)
    }

    // ── Months ────────────────────────────────────────────────────────────────

    fn january(&mut self) {
        self.with_substitute(1, "元日");
        if (1948..2000).contains(&self.year) {
            self.with_substitute(15, "成人の日（小正月）");
        } else {
            self.happy_monday(2, Weekday::Monday, "成人の日");
        }
    }

    fn february(&mut self) {
        if self.year <= 1948 {
            self.with_substitute(11, "紀元節");
        } else if self.year >= 1967 {
            self.with_substitute(11, "建国記念の日\n紀元節");
        }
        if self.era_on(23) == Some(Era::Reiwa) {
            self.with_substitute(23, "天皇誕生日\n天長節");
        }
    }

    fn march(&mut self) {
        let label = if self.year <= 1948 {
            "春季皇霊祭"
        } else {
            "春分の日\n春季皇霊祭"
        };
        self.equinox(SolarTerm::VernalEquinox, label);
    }

    fn april(&mut self) {
        if self.year <= Era::Showa.start_year() {
            return;
        }
        // The Showa Emperor's birthday label runs through the transition year.
        let label = if self.year <= Era::Heisei.start_year() {
            "天皇誕生日\n天長節"
        } else if self.year < 2007 {
            "みどりの日"
        } else {
            "昭和の日"
        };
        self.with_substitute(29, label);
        if self.year == Era::Reiwa.start_year() {
            debug!(year = self.year, "enthronement: April 30 national holiday");
            self.fixed(30, NATIONAL_HOLIDAY);
        }
    }

    fn may(&mut self) {
        if self.year < 1948 {
            return;
        }
        self.fixed(3, "憲法記念日");
        self.fixed(5, "こどもの日");
        if self.year < 1988 {
            return;
        }
        if self.year < 2007 {
            self.fixed(4, "みどりの日");
        } else {
            self.fixed(4, NATIONAL_HOLIDAY);
            if self.year == Era::Reiwa.start_year() {
                debug!(year = self.year, "enthronement: May 1-2 holidays");
                self.fixed(1, "新天皇即位日");
                self.fixed(2, NATIONAL_HOLIDAY);
            }
        }
        let golden_week_sunday =
            (3..=5).any(|d| weekday_of(self.year, 5, d) == Weekday::Sunday);
        if self.year >= SUBSTITUTE_SINCE && golden_week_sunday {
            self.fixed(6, SUBSTITUTE_HOLIDAY);
        }
    }

    fn july(&mut self) {
        if self.year < 1996 {
            return;
        }
        match self.year {
            1996..=2002 => self.with_substitute(20, "海の日"),
            2020 => {
                debug!(year = self.year, "Olympic reschedule: Marine Day and Sports Day");
                self.fixed(23, "海の日");
                self.fixed(24, "スポーツの日");
            }
            2021 => {
                debug!(year = self.year, "Olympic reschedule: Marine Day and Sports Day");
                self.fixed(22, "海の日");
                self.fixed(23, "スポーツの日");
            }
            _ => {
                self.happy_monday(3, Weekday::Monday, "海の日");
            }
        }
    }

    fn august(&mut self) {
        if self.year < 2016 {
            return;
        }
        let day = match self.year {
            2020 => 10,
            2021 => 8,
            _ => 11,
        };
        if day != 11 {
            debug!(year = self.year, day, "Olympic reschedule: Mountain Day");
        }
        self.with_substitute(day, "山の日");
    }

    fn september(&mut self) {
        let label = if self.year <= 1948 {
            "秋季皇霊祭"
        } else {
            "秋分の日\n秋季皇霊祭"
        };
        let equinox = self.equinox(SolarTerm::AutumnalEquinox, label);
        if self.year < 1966 {
            return;
        }
        if self.year < 2003 {
            self.with_substitute(15, "敬老の日");
            return;
        }
        let aged = self.happy_monday(3, Weekday::Monday, "敬老の日");
        if let (Some(aged), Some(equinox)) = (aged, equinox) {
            if aged.abs_diff(equinox) == 2 {
                let between = aged.min(equinox) + 1;
                debug!(year = self.year, day = between, "national holiday between two holidays");
                self.fixed(between, NATIONAL_HOLIDAY);
            }
        }
    }

    fn october(&mut self) {
        if self.year < 1966 {
            return;
        }
        match self.year {
            1966..=1999 => self.with_substitute(10, "体育の日"),
            2000..=2019 => {
                self.happy_monday(2, Weekday::Monday, "体育の日");
                if self.year == Era::Reiwa.start_year() {
                    debug!(year = self.year, "enthronement ceremony holiday");
                    self.fixed(22, "即位礼正殿の儀");
                }
            }
            2020 | 2021 => {
                debug!(year = self.year, "Olympic reschedule: no Sports Day in October");
            }
            _ => {
                self.happy_monday(2, Weekday::Monday, "スポーツの日");
            }
        }
    }

    fn november(&mut self) {
        let (culture, labour) = if self.year < 1948 {
            ("明治節", "新嘗祭")
        } else {
            ("文化の日\n明治節", "勤労感謝の日\n新嘗祭")
        };
        self.with_substitute(3, culture);
        self.with_substitute(23, labour);
    }

    fn december(&mut self) {
        if self.era_on(23) == Some(Era::Heisei) {
            self.with_substitute(23, "天皇誕生日\n天長節");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holidays(y: Year, m: Month) -> Vec<(u8, String)> {
        Japan
            .holidays(y, m)
            .iter()
            .map(|(d, l)| (d, l.to_owned()))
            .collect()
    }

    fn h(entries: &[(u8, &str)]) -> Vec<(u8, String)> {
        entries.iter().map(|&(d, l)| (d, l.to_owned())).collect()
    }

    #[test]
    fn new_year_2023_substitute() {
        // 2023-01-01 is a Sunday
        assert_eq!(
            holidays(2023, Month::January),
            h(&[(1, "元日"), (2, "元日\u{3000}振替休日"), (9, "成人の日")])
        );
    }

    #[test]
    fn coming_of_age_before_happy_monday() {
        assert_eq!(
            holidays(1960, Month::January),
            h(&[(1, "元日"), (15, "成人の日（小正月）")])
        );
    }

    #[test]
    fn no_substitute_before_1973() {
        // 1968-02-11 is a Sunday
        assert_eq!(
            holidays(1968, Month::February),
            h(&[(11, "建国記念の日\n紀元節")])
        );
    }

    #[test]
    fn happy_monday_first_day_tuesday() {
        // 2024-10-01 is a Tuesday; the 2nd Monday is Oct 14.
        assert_eq!(holidays(2024, Month::October), h(&[(14, "スポーツの日")]));
    }

    #[test]
    fn happy_monday_first_day_sunday_and_monday() {
        // 2023-01-01 is a Sunday → 2nd Monday Jan 9; 2024-01-01 is a Monday → Jan 8.
        assert!(Japan.holidays(2023, Month::January).contains(9));
        assert_eq!(Japan.holidays(2024, Month::January).get(8), Some("成人の日"));
    }

    #[test]
    fn june_is_empty() {
        assert!(Japan.holidays(2024, Month::June).is_empty());
    }

    #[test]
    fn out_of_range_equinox_is_skipped() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
        // The autumnal equinox formula yields September 32 in year 1000.
        assert!(Japan.holidays(1000, Month::September).is_empty());
        // Year 3000 drifts but still lands inside March.
        assert!(Japan.holidays(3000, Month::March).contains(13));
    }
}
