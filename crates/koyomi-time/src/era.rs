//! Japanese era names (*wareki*).
//!
//! The modern eras are looked up from their start dates, newest first.  A
//! date before the start of Meiji has no era and renders as the fixed
//! `明治以前` ("before Meiji") label.

use koyomi_core::Year;

use crate::date::Date;

/// Label used for dates before the start of Meiji.
pub const PRE_MEIJI: &str = "明治以前";

/// A modern Japanese era, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Era {
    /// 明治, from 1868-10-23.
    Meiji,
    /// 大正, from 1912-07-30.
    Taisho,
    /// 昭和, from 1926-12-25.
    Showa,
    /// 平成, from 1989-01-08.
    Heisei,
    /// 令和, from 2019-05-01.
    Reiwa,
}

impl Era {
    /// All eras, newest first (the lookup order).
    pub const ALL: [Era; 5] = [Era::Reiwa, Era::Heisei, Era::Showa, Era::Taisho, Era::Meiji];

    /// `(year, month, day)` on which the era begins.
    pub const fn start_ymd(&self) -> (Year, u8, u8) {
        match self {
            Era::Reiwa => (2019, 5, 1),
            Era::Heisei => (1989, 1, 8),
            Era::Showa => (1926, 12, 25),
            Era::Taisho => (1912, 7, 30),
            Era::Meiji => (1868, 10, 23),
        }
    }

    /// Year in which the era begins.
    pub const fn start_year(&self) -> Year {
        self.start_ymd().0
    }

    /// First day of the era.
    pub fn start(&self) -> Date {
        let (y, m, d) = self.start_ymd();
        Date::from_ymd(y, m, d).unwrap_or(Date::MIN)
    }

    /// Era name in kanji.
    pub fn name(&self) -> &'static str {
        match self {
            Era::Meiji => "明治",
            Era::Taisho => "大正",
            Era::Showa => "昭和",
            Era::Heisei => "平成",
            Era::Reiwa => "令和",
        }
    }

    /// Era in force on `date`, or `None` before Meiji.
    pub fn of(date: Date) -> Option<Era> {
        let (y, m, d) = date.ymd();
        Self::of_ymd(y, m, d)
    }

    /// Era in force on an unvalidated `(year, month, day)`, newest first.
    pub fn of_ymd(year: Year, month: u8, day: u8) -> Option<Era> {
        Self::ALL
            .into_iter()
            .find(|era| era.start_ymd() <= (year, month, day))
    }

    /// Era year of `date` within this era (1 for the first year).
    pub fn year_of(&self, date: Date) -> Year {
        date.year() - self.start_year() + 1
    }
}

impl std::fmt::Display for Era {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Era in force on `date`, or `None` before Meiji.
pub fn era_of(date: Date) -> Option<Era> {
    Era::of(date)
}

/// Era year label, e.g. `令和6年`; the first year of an era is `元年`.
///
/// Dates before Meiji yield [`PRE_MEIJI`].
pub fn wareki_year(date: Date) -> String {
    match Era::of(date) {
        Some(era) => match era.year_of(date) {
            1 => format!("{era}元年"),
            n => format!("{era}{n}年"),
        },
        None => PRE_MEIJI.to_string(),
    }
}

/// Full era date label, e.g. `令和元年5月1日`.
pub fn wareki_date(date: Date) -> String {
    let (_, m, d) = date.ymd();
    format!("{}{m}月{d}日", wareki_year(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: Year, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn boundaries() {
        assert_eq!(era_of(date(2019, 5, 1)), Some(Era::Reiwa));
        assert_eq!(era_of(date(2019, 4, 30)), Some(Era::Heisei));
        assert_eq!(era_of(date(1989, 1, 7)), Some(Era::Showa));
        assert_eq!(era_of(date(1868, 10, 22)), None);
        assert_eq!(era_of(date(1868, 10, 23)), Some(Era::Meiji));
    }

    #[test]
    fn first_year_is_gannen() {
        assert_eq!(wareki_year(date(2019, 5, 1)), "令和元年");
        assert_eq!(wareki_year(date(2019, 4, 30)), "平成31年");
        assert_eq!(wareki_year(date(1926, 12, 25)), "昭和元年");
    }

    #[test]
    fn starts_are_ordered() {
        for pair in Era::ALL.windows(2) {
            assert!(pair[0].start() > pair[1].start());
            assert!(pair[0] > pair[1]);
        }
    }
}
