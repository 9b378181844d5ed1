//! Week-aligned month grid generator.
//!
//! Features:
//! - Gregorian leap-year and month-length arithmetic
//! - Sunday-first grids backfilled from the adjacent months
//! - `DD-MM-YYYY` or `DD` cell labels
//! - Month navigation that keeps the grid in sync with its position

pub mod args;
pub mod calendar;
pub mod error;
pub mod formatter;
pub mod grid;
pub mod logging;
pub mod types;

pub use calendar::{
    days_in_month, first_day_of_month, is_leap_year, is_long_month, next_month_position,
    prev_month_position,
};
pub use error::GridError;
pub use grid::CalendarGrid;
pub use types::{CalendarPosition, CellDate, CellFormat, CellOrigin, Grid, pad_two};
