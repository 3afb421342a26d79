//! Sexagenary year names (*eto*) and traditional month names.

use koyomi_core::Year;

use crate::month::Month;

/// Heavenly stems keyed by `year % 10` (so 4 → 甲, 0 → 庚).
const STEMS: [&str; 10] = ["庚", "辛", "壬", "癸", "甲", "乙", "丙", "丁", "戊", "己"];

/// Earthly branches keyed by `year % 12` (so 4 → 子, 0 → 申).
const BRANCHES: [&str; 12] = [
    "申", "酉", "戌", "亥", "子", "丑", "寅", "卯", "辰", "巳", "午", "未",
];

/// Traditional month names, January first.
const MONTH_NAMES: [&str; 12] = [
    "睦月", "如月", "弥生", "卯月", "皐月", "水無月", "文月", "葉月", "長月", "神無月", "霜月", "師走",
];

/// Stem-branch name of `year`, e.g. `甲辰` for 2024.
pub fn zodiac(year: Year) -> String {
    let stem = STEMS[year.rem_euclid(10) as usize];
    let branch = BRANCHES[year.rem_euclid(12) as usize];
    format!("{stem}{branch}")
}

/// Traditional name of `month`, e.g. `睦月` for January.
pub fn lunar_month_name(month: Month) -> &'static str {
    MONTH_NAMES[month.number() as usize - 1]
}
