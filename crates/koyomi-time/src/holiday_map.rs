//! `HolidayMap`: holiday labels of one month, keyed by day of month.

use std::collections::BTreeMap;

/// Holiday labels of a single month, keyed by day of month.
///
/// A day carries at most one label; inserting twice keeps the later label.
/// Days absent from the map are ordinary days.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct HolidayMap {
    entries: BTreeMap<u8, String>,
}

impl HolidayMap {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `label` on `day`, replacing any earlier label.
    pub fn insert(&mut self, day: u8, label: impl Into<String>) {
        self.entries.insert(day, label.into());
    }

    /// Label of `day`, if it is a holiday.
    pub fn get(&self, day: u8) -> Option<&str> {
        self.entries.get(&day).map(String::as_str)
    }

    /// `true` if `day` is a holiday.
    pub fn contains(&self, day: u8) -> bool {
        self.entries.contains_key(&day)
    }

    /// Holiday days in ascending order.
    pub fn days(&self) -> impl Iterator<Item = u8> + '_ {
        self.entries.keys().copied()
    }

    /// `(day, label)` pairs in ascending day order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> + '_ {
        self.entries.iter().map(|(&d, l)| (d, l.as_str()))
    }

    /// Number of holidays.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if the month has no holidays.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a HolidayMap {
    type Item = (&'a u8, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, u8, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl From<HolidayMap> for BTreeMap<u8, String> {
    fn from(map: HolidayMap) -> Self {
        map.entries
    }
}
