//! # koyomi
//!
//! Japanese calendar engine: national holidays since 1868, the 24 solar terms,
//! era (*wareki*) names, sexagenary year names and traditional month names.
//!
//! This crate is a **façade** that re-exports the workspace crates and adds
//! [`Koyomi`], the query surface a calendar view talks to.
//!
//! ## Quick start
//!
//! ```rust
//! use koyomi::{Date, Koyomi};
//!
//! let k = Koyomi::new();
//! let july = k.holidays(2021, 7).unwrap();
//! assert_eq!(july.get(22), Some("海の日"));
//! let day = Date::from_ymd(2019, 5, 1).unwrap();
//! assert_eq!(k.era_string(day), "令和元年");
//! assert_eq!(k.zodiac(2024), "甲辰");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use koyomi_core as core;

/// Date, era, solar-term, zodiac and holiday-calendar types.
pub use koyomi_time as time;

/// The `Koyomi` query surface and `DayDetail`.
pub mod facade;

pub use facade::{DayDetail, Koyomi};
pub use koyomi_core::{Error, Result};
pub use koyomi_time::{
    Date, DayKind, Era, HolidayCalendar, HolidayMap, Japan, Month, MonthGrid, SolarTerm,
    SolarTerms, Weekday,
};
