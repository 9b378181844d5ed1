//! Month-name parsing and plain-text output of grids.

use chrono::Month;

use crate::grid::CalendarGrid;

/// Parse month from string: numeric 1-12, or an English name either in full
/// or as its three-letter abbreviation, in any case.
pub fn parse_month(s: &str) -> Option<u32> {
    if let Ok(n) = s.parse::<u32>() {
        return (1..=12).contains(&n).then_some(n);
    }
    s.parse::<Month>().ok().map(|m| m.number_from_month())
}

/// Format the grid as lines, one week per line, cells separated by a space.
///
/// With `header`, the first line is the `YYYY-MM` position.
pub fn format_grid_lines(grid: &CalendarGrid, header: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(grid.row_count() + 1);

    if header {
        lines.push(grid.position().to_string());
    }

    lines.extend(grid.grid().iter().map(|row| row.join(" ")));
    lines
}

/// Print the grid to stdout.
pub fn print_grid(grid: &CalendarGrid, header: bool) {
    for line in format_grid_lines(grid, header) {
        println!("{}", line);
    }
}
