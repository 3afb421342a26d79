//! `MonthGrid`: the Sunday-first week rows of a month.
//!
//! Each row holds seven cells, Sunday first.  Cells outside the month are `0`.
//! A month spans four to six rows.

use koyomi_core::Year;

use crate::date::weekday_of;
use crate::month::Month;
use crate::weekday::Weekday;

/// Week rows of a single month, Sunday first, `0` for padding cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    year: Year,
    month: Month,
    rows: Vec<[u8; 7]>,
}

impl MonthGrid {
    /// Build the grid for `year`/`month`.
    pub fn new(year: Year, month: Month) -> Self {
        let first = weekday_of(year, month.number(), 1);
        let last = month.days_in(year);

        let mut rows = Vec::with_capacity(6);
        let mut row = [0u8; 7];
        let mut col = first.sunday_column();
        for day in 1..=last {
            row[col] = day;
            col += 1;
            if col == 7 {
                rows.push(row);
                row = [0u8; 7];
                col = 0;
            }
        }
        if col != 0 {
            rows.push(row);
        }
        Self { year, month, rows }
    }

    /// The year this grid was built for.
    pub fn year(&self) -> Year {
        self.year
    }

    /// The month this grid was built for.
    pub fn month(&self) -> Month {
        self.month
    }

    /// The week rows.
    pub fn rows(&self) -> &[[u8; 7]] {
        &self.rows
    }

    /// Cell at `row` (0-based) in the column of `weekday`.
    ///
    /// Returns `None` if the row does not exist or the cell is padding.
    pub fn cell(&self, row: usize, weekday: Weekday) -> Option<u8> {
        self.rows
            .get(row)
            .map(|r| r[weekday.sunday_column()])
            .filter(|&d| d != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn september_2024_starts_on_sunday() {
        let g = MonthGrid::new(2024, Month::September);
        assert_eq!(g.rows().len(), 5);
        assert_eq!(g.rows()[0], [1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(g.rows()[4], [29, 30, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn february_2015_fits_four_rows() {
        // 2015-02-01 is a Sunday and the month has 28 days.
        let g = MonthGrid::new(2015, Month::February);
        assert_eq!(g.rows().len(), 4);
        assert_eq!(g.cell(3, Weekday::Saturday), Some(28));
    }

    #[test]
    fn padding_cells_are_none() {
        // 2024-10-01 is a Tuesday.
        let g = MonthGrid::new(2024, Month::October);
        assert_eq!(g.cell(0, Weekday::Monday), None);
        assert_eq!(g.cell(0, Weekday::Tuesday), Some(1));
        assert_eq!(g.cell(9, Weekday::Tuesday), None);
    }
}
