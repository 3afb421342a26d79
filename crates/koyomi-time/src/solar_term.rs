//! The 24 solar terms (*nijūshi sekki*).
//!
//! Term dates come from a linear approximation rather than an ephemeris.
//! Each term carries a base day `d`, a per-year slope `a` and a year shift;
//! for year `y` with `n = y + shift - 1900` the day of the term's month is
//!
//! ```text
//! day = trunc(d + a * n) - trunc(n / 4)
//! ```
//!
//! with truncation toward zero.  The coefficients track the published dates
//! closely between 1900 and 2100.  Every term yields a calendar day for years
//! 1041 to 2499; outside that span the raw value may not be a day of the month
//! at all, in which case [`SolarTerms::date`] returns `None`.

use koyomi_core::Year;

use crate::date::{days_in_month, Date};
use crate::month::Month;

/// One of the 24 solar terms, in annual order starting from 小寒.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolarTerm {
    /// 小寒
    MinorCold,
    /// 大寒
    MajorCold,
    /// 立春
    StartOfSpring,
    /// 雨水
    RainWater,
    /// 啓蟄
    AwakeningOfInsects,
    /// 春分
    VernalEquinox,
    /// 清明
    ClearAndBright,
    /// 穀雨
    GrainRain,
    /// 立夏
    StartOfSummer,
    /// 小満
    GrainFull,
    /// 芒種
    GrainInEar,
    /// 夏至
    SummerSolstice,
    /// 小暑
    MinorHeat,
    /// 大暑
    MajorHeat,
    /// 立秋
    StartOfAutumn,
    /// 処暑
    EndOfHeat,
    /// 白露
    WhiteDew,
    /// 秋分
    AutumnalEquinox,
    /// 寒露
    ColdDew,
    /// 霜降
    FrostDescent,
    /// 立冬
    StartOfWinter,
    /// 小雪
    MinorSnow,
    /// 大雪
    MajorSnow,
    /// 冬至
    WinterSolstice,
}

/// Coefficients of one term: month, base day, slope, year shift.
struct TermCoefficients {
    month: u8,
    d: f64,
    a: f64,
    delta_year: i32,
}

const fn coeff(month: u8, d: f64, a: f64, delta_year: i32) -> TermCoefficients {
    TermCoefficients {
        month,
        d,
        a,
        delta_year,
    }
}

/// Indexed by `SolarTerm as usize`.
const COEFFICIENTS: [TermCoefficients; 24] = [
    coeff(1, 6.3811, 0.242778, -1),
    coeff(1, 21.1046, 0.242765, -1),
    coeff(2, 4.8693, 0.242713, -1),
    coeff(2, 19.7062, 0.242627, -1),
    coeff(3, 6.3968, 0.242512, 0),
    coeff(3, 21.4471, 0.242377, 0),
    coeff(4, 5.6280, 0.242231, 0),
    coeff(4, 20.9375, 0.242083, 0),
    coeff(5, 6.3771, 0.241945, 0),
    coeff(5, 21.9300, 0.241825, 0),
    coeff(6, 6.5733, 0.241731, 0),
    coeff(6, 22.2747, 0.241669, 1),
    coeff(7, 8.0091, 0.241642, 0),
    coeff(7, 23.7317, 0.241654, 0),
    coeff(8, 8.4102, 0.241703, 0),
    coeff(8, 24.0125, 0.241786, 0),
    coeff(9, 8.5186, 0.241898, 0),
    coeff(9, 23.8896, 0.242032, 0),
    coeff(10, 9.1414, 0.242179, 0),
    coeff(10, 24.2487, 0.242328, 0),
    coeff(11, 8.2396, 0.242469, 0),
    coeff(11, 23.1189, 0.242592, 0),
    coeff(12, 7.9152, 0.242689, 0),
    coeff(12, 22.6587, 0.242752, 0),
];

impl SolarTerm {
    /// All terms in annual order.
    pub const ALL: [SolarTerm; 24] = [
        SolarTerm::MinorCold,
        SolarTerm::MajorCold,
        SolarTerm::StartOfSpring,
        SolarTerm::RainWater,
        SolarTerm::AwakeningOfInsects,
        SolarTerm::VernalEquinox,
        SolarTerm::ClearAndBright,
        SolarTerm::GrainRain,
        SolarTerm::StartOfSummer,
        SolarTerm::GrainFull,
        SolarTerm::GrainInEar,
        SolarTerm::SummerSolstice,
        SolarTerm::MinorHeat,
        SolarTerm::MajorHeat,
        SolarTerm::StartOfAutumn,
        SolarTerm::EndOfHeat,
        SolarTerm::WhiteDew,
        SolarTerm::AutumnalEquinox,
        SolarTerm::ColdDew,
        SolarTerm::FrostDescent,
        SolarTerm::StartOfWinter,
        SolarTerm::MinorSnow,
        SolarTerm::MajorSnow,
        SolarTerm::WinterSolstice,
    ];

    /// Kanji name of the term.
    pub fn name(&self) -> &'static str {
        match self {
            SolarTerm::MinorCold => "小寒",
            SolarTerm::MajorCold => "大寒",
            SolarTerm::StartOfSpring => "立春",
            SolarTerm::RainWater => "雨水",
            SolarTerm::AwakeningOfInsects => "啓蟄",
            SolarTerm::VernalEquinox => "春分",
            SolarTerm::ClearAndBright => "清明",
            SolarTerm::GrainRain => "穀雨",
            SolarTerm::StartOfSummer => "立夏",
            SolarTerm::GrainFull => "小満",
            SolarTerm::GrainInEar => "芒種",
            SolarTerm::SummerSolstice => "夏至",
            SolarTerm::MinorHeat => "小暑",
            SolarTerm::MajorHeat => "大暑",
            SolarTerm::StartOfAutumn => "立秋",
            SolarTerm::EndOfHeat => "処暑",
            SolarTerm::WhiteDew => "白露",
            SolarTerm::AutumnalEquinox => "秋分",
            SolarTerm::ColdDew => "寒露",
            SolarTerm::FrostDescent => "霜降",
            SolarTerm::StartOfWinter => "立冬",
            SolarTerm::MinorSnow => "小雪",
            SolarTerm::MajorSnow => "大雪",
            SolarTerm::WinterSolstice => "冬至",
        }
    }

    /// Look a term up by its kanji name.
    pub fn from_name(name: &str) -> Option<SolarTerm> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    /// Month the term falls in.
    pub fn month(&self) -> Month {
        Month::ALL[self.coefficients().month as usize - 1]
    }

    fn coefficients(&self) -> &'static TermCoefficients {
        &COEFFICIENTS[*self as usize]
    }

    /// Raw formula day for `year`; not guaranteed to be a day of the month.
    pub fn raw_day(&self, year: Year) -> i32 {
        let c = self.coefficients();
        let n = (year + c.delta_year - 1900) as f64;
        // `as` truncates toward zero for both terms.
        (c.d + c.a * n) as i32 - (n / 4.0) as i32
    }
}

impl std::fmt::Display for SolarTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The solar terms of a single year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolarTerms {
    year: Year,
    days: [i32; 24],
}

impl SolarTerms {
    /// Compute all 24 terms for `year`.
    pub fn for_year(year: Year) -> Self {
        let mut days = [0i32; 24];
        for (slot, term) in days.iter_mut().zip(SolarTerm::ALL) {
            *slot = term.raw_day(year);
        }
        Self { year, days }
    }

    /// Year the table was computed for.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Raw formula day of `term`.
    pub fn day(&self, term: SolarTerm) -> i32 {
        self.days[term as usize]
    }

    /// Day of `term` if it is a calendar day of the term's month.
    pub fn day_in_month(&self, term: SolarTerm) -> Option<u8> {
        let day = self.day(term);
        let month = term.month().number();
        (1..=days_in_month(self.year, month) as i32)
            .contains(&day)
            .then_some(day as u8)
    }

    /// Date of `term`, or `None` when the formula leaves the month.
    pub fn date(&self, term: SolarTerm) -> Option<Date> {
        let day = self.day_in_month(term)?;
        Date::from_ymd(self.year, term.month().number(), day).ok()
    }

    /// Iterate over `(term, date)` in annual order.
    pub fn iter(&self) -> impl Iterator<Item = (SolarTerm, Option<Date>)> + '_ {
        SolarTerm::ALL.into_iter().map(|t| (t, self.date(t)))
    }

    /// The term falling on `date`, if any.
    pub fn term_on(&self, date: Date) -> Option<SolarTerm> {
        if date.year() != self.year {
            return None;
        }
        SolarTerm::ALL
            .into_iter()
            .find(|&t| self.date(t) == Some(date))
    }
}

/// Compute all 24 terms for `year`.
pub fn terms_for_year(year: Year) -> SolarTerms {
    SolarTerms::for_year(year)
}

/// Name of the solar term falling on `date`, or `""` if none does.
pub fn term_on(date: Date) -> &'static str {
    SolarTerms::for_year(date.year())
        .term_on(date)
        .map_or("", |t| t.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vernal_equinox_2024() {
        let terms = terms_for_year(2024);
        assert_eq!(terms.date(SolarTerm::VernalEquinox), Date::from_ymd(2024, 3, 20).ok());
        assert_eq!(terms.day_in_month(SolarTerm::AutumnalEquinox), Some(22));
    }

    #[test]
    fn names_roundtrip() {
        for t in SolarTerm::ALL {
            assert_eq!(SolarTerm::from_name(t.name()), Some(t));
        }
        assert_eq!(SolarTerm::from_name("立冬"), Some(SolarTerm::StartOfWinter));
        assert_eq!(SolarTerm::from_name("元日"), None);
    }

    #[test]
    fn two_terms_per_month() {
        for m in Month::ALL {
            assert_eq!(SolarTerm::ALL.iter().filter(|t| t.month() == m).count(), 2);
        }
    }

    #[test]
    fn truncates_toward_zero_before_1900() {
        // n = -33 for 小寒 in 1868: trunc(6.3811 - 8.0117) = -1, trunc(-8.25) = -8.
        assert_eq!(SolarTerm::MinorCold.raw_day(1868), 7);
    }

    #[test]
    fn out_of_range_year_has_no_date() {
        let terms = terms_for_year(3000);
        assert!(terms.day(SolarTerm::MinorCold) < 1);
        assert_eq!(terms.date(SolarTerm::MinorCold), None);
    }
}
