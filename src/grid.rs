//! Month grid state and the week-aligned layout algorithm.

use tracing::debug;

use crate::calendar::{
    days_in_month, first_day_of_month, is_leap_year, next_month_position, prev_month_position,
};
use crate::error::GridError;
use crate::types::{CalendarPosition, CellDate, CellFormat, CellOrigin, DAYS_PER_WEEK, Grid};

/// A month position together with the grid derived from it.
///
/// Every mutation regenerates the grid before returning, so [`grid`](Self::grid)
/// and [`cells`](Self::cells) always describe [`position`](Self::position).
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarGrid {
    position: CalendarPosition,
    format: CellFormat,
    start_weekday: usize,
    cells: Vec<Vec<CellDate>>,
    grid: Grid,
}

impl CalendarGrid {
    /// Build the grid for `(year, month)` with `DD-MM-YYYY` labels.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidMonth`] if `month` is outside 1..=12 and
    /// [`GridError::InvalidYear`] if `year` is outside
    /// [`MIN_YEAR`](crate::types::MIN_YEAR)..=[`MAX_YEAR`](crate::types::MAX_YEAR).
    pub fn new(year: i32, month: u32) -> Result<Self, GridError> {
        Self::with_format(year, month, CellFormat::default())
    }

    /// Build the grid for `(year, month)` with the given label format.
    pub fn with_format(year: i32, month: u32, format: CellFormat) -> Result<Self, GridError> {
        let position = CalendarPosition::new(year, month)?;
        let (start_weekday, cells) = layout(position)?;
        let grid = render(&cells, format);
        Ok(CalendarGrid {
            position,
            format,
            start_weekday,
            cells,
            grid,
        })
    }

    pub fn position(&self) -> CalendarPosition {
        self.position
    }

    pub fn year(&self) -> i32 {
        self.position.year
    }

    pub fn month(&self) -> u32 {
        self.position.month
    }

    pub fn format(&self) -> CellFormat {
        self.format
    }

    /// Column of the month's first day (0 = Sunday).
    pub fn start_weekday(&self) -> usize {
        self.start_weekday
    }

    pub fn row_count(&self) -> usize {
        self.grid.len()
    }

    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.position.year)
    }

    /// The cached grid of labels. Never recomputed on read.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The resolved dates behind [`grid`](Self::grid), same shape.
    pub fn cells(&self) -> &[Vec<CellDate>] {
        &self.cells
    }

    pub fn next_position(&self) -> Result<CalendarPosition, GridError> {
        self.position.next()
    }

    pub fn prev_position(&self) -> Result<CalendarPosition, GridError> {
        self.position.prev()
    }

    /// Advance one month, bumping the year after December.
    ///
    /// Fails with [`GridError::InvalidYear`] past the last supported year,
    /// leaving the state untouched.
    pub fn next_month(&mut self) -> Result<(), GridError> {
        let next = self.next_position()?;
        self.reposition(next)
    }

    /// Step back one month, dropping the year before January.
    ///
    /// Fails with [`GridError::InvalidYear`] before the first supported year,
    /// leaving the state untouched.
    pub fn prev_month(&mut self) -> Result<(), GridError> {
        let prev = self.prev_position()?;
        self.reposition(prev)
    }

    /// Jump to `(year, month)`. On error the current state is kept.
    pub fn set_month(&mut self, year: i32, month: u32) -> Result<(), GridError> {
        let position = CalendarPosition::new(year, month)?;
        self.reposition(position)
    }

    fn reposition(&mut self, position: CalendarPosition) -> Result<(), GridError> {
        let (start_weekday, cells) = layout(position)?;
        let grid = render(&cells, self.format);

        self.position = position;
        self.start_weekday = start_weekday;
        self.cells = cells;
        self.grid = grid;
        debug!(%position, rows = self.grid.len(), "regenerated grid");
        Ok(())
    }
}

/// Lay out the cells of a month, Sunday first, backfilling from adjacent months.
///
/// Returns the first day's column alongside the rows of cells. The neighbouring
/// months may lie one year outside the supported range, so they are derived
/// with the overflow-checked helpers rather than [`CalendarPosition::next`].
fn layout(position: CalendarPosition) -> Result<(usize, Vec<Vec<CellDate>>), GridError> {
    let CalendarPosition { year, month } = position;

    let start = first_day_of_month(year, month).num_days_from_sunday() as usize;
    let day_count = days_in_month(year, month) as usize;
    let cell_count = (start + day_count).div_ceil(DAYS_PER_WEEK) * DAYS_PER_WEEK;

    let prev = prev_month_position(year, month)?;
    let next = next_month_position(year, month)?;
    let leading_start = days_in_month(prev.year, prev.month) as usize - start + 1;

    let mut rows: Vec<Vec<CellDate>> = Vec::with_capacity(cell_count / DAYS_PER_WEEK);

    for i in 0..cell_count {
        let (day, month, year, origin) = if i < start {
            (leading_start + i, prev.month, prev.year, CellOrigin::Previous)
        } else if i < start + day_count {
            (i - start + 1, month, year, CellOrigin::Current)
        } else {
            (i - start - day_count + 1, next.month, next.year, CellOrigin::Next)
        };

        if i % DAYS_PER_WEEK == 0 {
            rows.push(Vec::with_capacity(DAYS_PER_WEEK));
        }
        if let Some(row) = rows.last_mut() {
            row.push(CellDate {
                day: day as u32,
                month,
                year,
                origin,
            });
        }
    }

    Ok((start, rows))
}

fn render(cells: &[Vec<CellDate>], format: CellFormat) -> Grid {
    cells
        .iter()
        .map(|row| row.iter().map(|cell| cell.label(format)).collect())
        .collect()
}
