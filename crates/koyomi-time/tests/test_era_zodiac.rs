//! Era conversion, year names and month names.

use koyomi_time::{
    era_of, lunar_month_name, wareki_date, wareki_year, zodiac, Date, Era, Month, PRE_MEIJI,
};

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn era_lookup() {
    assert_eq!(era_of(date(2019, 5, 1)), Some(Era::Reiwa));
    assert_eq!(era_of(date(1868, 1, 1)), None);
    assert_eq!(era_of(date(1912, 7, 29)), Some(Era::Meiji));
    assert_eq!(era_of(date(1912, 7, 30)), Some(Era::Taisho));
    assert_eq!(era_of(date(1926, 12, 24)), Some(Era::Taisho));
    assert_eq!(era_of(date(1926, 12, 25)), Some(Era::Showa));
    assert_eq!(era_of(date(1989, 1, 8)), Some(Era::Heisei));
}

#[test]
fn wareki_year_labels() {
    let cases = [
        ((2019, 5, 1), "令和元年"),
        ((2019, 4, 30), "平成31年"),
        ((2024, 6, 1), "令和6年"),
        ((1989, 1, 7), "昭和64年"),
        ((1989, 1, 8), "平成元年"),
        ((1912, 7, 30), "大正元年"),
        ((1926, 12, 25), "昭和元年"),
        ((1868, 10, 23), "明治元年"),
        ((1868, 1, 1), PRE_MEIJI),
        ((1, 1, 1), PRE_MEIJI),
    ];
    for ((y, m, d), expected) in cases {
        assert_eq!(wareki_year(date(y, m, d)), expected, "{y}-{m:02}-{d:02}");
    }
}

#[test]
fn wareki_full_date() {
    assert_eq!(wareki_date(date(2024, 11, 3)), "令和6年11月3日");
    assert_eq!(wareki_date(date(1800, 2, 1)), "明治以前2月1日");
}

#[test]
fn era_metadata() {
    assert_eq!(Era::Reiwa.name(), "令和");
    assert_eq!(Era::Heisei.start(), date(1989, 1, 8));
    assert_eq!(Era::Showa.year_of(date(1988, 12, 31)), 63);
}

#[test]
fn zodiac_years() {
    let cases = [
        (2024, "甲辰"),
        (2023, "癸卯"),
        (2000, "庚辰"),
        (1868, "戊辰"),
        (1984, "甲子"),
        (2019, "己亥"),
        (2020, "庚子"),
    ];
    for (year, expected) in cases {
        assert_eq!(zodiac(year), expected, "{year}");
        assert_eq!(zodiac(year).chars().count(), 2);
    }
}

#[test]
fn month_names() {
    let names: Vec<&str> = Month::ALL.into_iter().map(lunar_month_name).collect();
    assert_eq!(
        names,
        ["睦月", "如月", "弥生", "卯月", "皐月", "水無月", "文月", "葉月", "長月", "神無月", "霜月", "師走"]
    );
    assert_eq!(Month::May.wafu_name(), "皐月");
}
