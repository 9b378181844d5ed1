//! Type definitions and constants for month grids.

use std::fmt;

use chrono::NaiveDate;
use clap::ValueEnum;

use crate::error::GridError;

/// A (year, month) pair identifying which month a grid represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarPosition {
    pub year: i32,
    pub month: u32,
}

impl CalendarPosition {
    /// Create a position, rejecting months outside 1..=12 and years outside
    /// [`MIN_YEAR`]..=[`MAX_YEAR`].
    pub fn new(year: i32, month: u32) -> Result<Self, GridError> {
        if !(1..=MONTHS_PER_YEAR).contains(&month) {
            return Err(GridError::InvalidMonth { month });
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(GridError::InvalidYear {
                year,
                min: MIN_YEAR,
                max: MAX_YEAR,
            });
        }
        Ok(CalendarPosition { year, month })
    }

    /// The month after this one, wrapping December into January of the next year.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidYear`] when stepping past [`MAX_YEAR`].
    pub fn next(self) -> Result<Self, GridError> {
        let next = crate::calendar::next_month_position(self.year, self.month)?;
        Self::new(next.year, next.month)
    }

    /// The month before this one, wrapping January into December of the previous year.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ZeroMonth`] for month 0 and [`GridError::InvalidYear`]
    /// when stepping past [`MIN_YEAR`].
    pub fn prev(self) -> Result<Self, GridError> {
        let prev = crate::calendar::prev_month_position(self.year, self.month)?;
        Self::new(prev.year, prev.month)
    }
}

impl fmt::Display for CalendarPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year, pad_two(self.month))
    }
}

/// Which month a grid cell is drawn from, relative to the grid's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellOrigin {
    /// Trailing days of the previous month filling the first week.
    Previous,
    /// Days of the month the grid represents.
    Current,
    /// Leading days of the next month filling the last week.
    Next,
}

/// Rendering of a single cell label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CellFormat {
    /// `DD-MM-YYYY`
    #[default]
    Full,
    /// `DD`
    Day,
}

/// The resolved date for one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub origin: CellOrigin,
}

impl CellDate {
    /// Render the cell label in the given format.
    pub fn label(&self, format: CellFormat) -> String {
        match format {
            CellFormat::Full => format!(
                "{}-{}-{}",
                pad_two(self.day),
                pad_two(self.month),
                self.year
            ),
            CellFormat::Day => pad_two(self.day),
        }
    }

    /// Convert to a chrono date. `None` if chrono cannot represent it.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl fmt::Display for CellDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label(CellFormat::Full))
    }
}

/// Rows of formatted cell labels, one row per week, Sunday first.
pub type Grid = Vec<Vec<String>>;

/// Zero-pad to two characters: prepend `'0'` and keep the last two characters.
pub fn pad_two(value: u32) -> String {
    let padded = format!("0{}", value);
    padded[padded.len() - 2..].to_string()
}

pub const DAYS_PER_WEEK: usize = 7;
pub const MONTHS_PER_YEAR: u32 = 12;

// Grids borrow days from the neighbouring years, which must fit in i32
pub const MIN_YEAR: i32 = i32::MIN + 1;
pub const MAX_YEAR: i32 = i32::MAX - 1;

// Month-length bases before the long-month / leap-day adjustment
pub const FEBRUARY: u32 = 2;
pub const FEBRUARY_BASE_DAYS: u32 = 28;
pub const MONTH_BASE_DAYS: u32 = 30;

// Long months are odd before August and even from August on
pub const LONG_MONTH_PIVOT: u32 = 8;

// Year range accepted on the command line, as in util-linux cal
pub const MIN_CLI_YEAR: i32 = 1;
pub const MAX_CLI_YEAR: i32 = 9999;
