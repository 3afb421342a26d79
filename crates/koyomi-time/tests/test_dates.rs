//! `Date`, `Weekday` and `MonthGrid` behaviour.

use koyomi_time::date::{days_in_month, is_leap_year};
use koyomi_time::{Date, Month, MonthGrid, Weekday};
use proptest::prelude::*;

#[test]
fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2100));
    assert_eq!(days_in_month(2024, 2), 29);
    assert_eq!(days_in_month(2023, 2), 28);
}

#[test]
fn known_weekdays() {
    let cases = [
        ((1868, 10, 23), Weekday::Friday),
        ((1989, 1, 8), Weekday::Sunday),
        ((2019, 5, 1), Weekday::Wednesday),
        ((2024, 9, 22), Weekday::Sunday),
    ];
    for ((y, m, d), wd) in cases {
        assert_eq!(Date::from_ymd(y, m, d).unwrap().weekday(), wd, "{y}-{m}-{d}");
    }
}

#[test]
fn grid_for_july_2021() {
    // 2021-07-01 is a Thursday
    let g = MonthGrid::new(2021, Month::July);
    assert_eq!(g.rows()[0], [0, 0, 0, 0, 1, 2, 3]);
    assert_eq!(g.cell(3, Weekday::Thursday), Some(22));
    assert_eq!(g.rows().len(), 5);
}

#[test]
fn grid_with_six_rows() {
    // 2023-12-01 is a Friday and December has 31 days.
    let g = MonthGrid::new(2023, Month::December);
    assert_eq!(g.rows().len(), 6);
    assert_eq!(g.rows()[5], [31, 0, 0, 0, 0, 0, 0]);
}

proptest! {
    #[test]
    fn ymd_roundtrip(y in 1i32..=9999, m in 1u8..=12, d in 1u8..=31) {
        match Date::from_ymd(y, m, d) {
            Ok(date) => {
                prop_assert!(d <= days_in_month(y, m));
                prop_assert_eq!(date.ymd(), (y, m, d));
                prop_assert_eq!(Date::from_serial(date.serial()).unwrap(), date);
            }
            Err(_) => prop_assert!(d > days_in_month(y, m)),
        }
    }

    #[test]
    fn consecutive_days_advance_weekday(serial in 1i32..3_652_059) {
        let a = Date::from_serial(serial).unwrap();
        let b = a.add_days(1).unwrap();
        prop_assert_eq!((a.weekday().index() + 1) % 7, b.weekday().index());
        prop_assert_eq!(b - a, 1);
    }

    #[test]
    fn grid_lists_every_day_once(y in 1868i32..=2100, m in 1u8..=12) {
        let month = Month::from_number(m).unwrap();
        let g = MonthGrid::new(y, month);
        let days: Vec<u8> = g.rows().iter().flatten().copied().filter(|&d| d != 0).collect();
        let expected: Vec<u8> = (1..=month.days_in(y)).collect();
        prop_assert_eq!(days, expected);
        for row in g.rows() {
            for (col, &d) in row.iter().enumerate() {
                if d != 0 {
                    let wd = Date::from_ymd(y, m, d).unwrap().weekday();
                    prop_assert_eq!(wd.sunday_column(), col);
                }
            }
        }
    }
}
