//! Command-line argument parsing using clap.
//!
//! Positional arguments follow util-linux cal convention: `[month] [year]`

use chrono::Datelike;
use clap::{ArgAction, Parser, ValueHint};
use tracing::{debug, info};

use crate::error::GridError;
use crate::formatter::parse_month;
use crate::grid::CalendarGrid;
use crate::types::{CalendarPosition, CellFormat, MAX_CLI_YEAR, MIN_CLI_YEAR};

/// Environment variable overriding today's date (`YYYY-MM-DD`).
pub const TEST_TIME_ENV: &str = "CALGRID_TEST_TIME";

#[derive(Parser, Debug)]
#[command(name = "calgrid")]
#[command(about = "Prints the week-aligned date grid of a month", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Cell label format.
    #[arg(
        short = 'f',
        long,
        default_value = "full",
        help_heading = "Grid options",
        value_name = "format"
    )]
    pub format: CellFormat,

    /// Move this many months forward before printing.
    #[arg(
        short = 'n',
        long = "next",
        default_value_t = 0,
        help_heading = "Navigation",
        value_name = "num"
    )]
    pub next: u32,

    /// Move this many months backward before printing.
    #[arg(
        short = 'p',
        long = "prev",
        default_value_t = 0,
        help_heading = "Navigation",
        value_name = "num"
    )]
    pub prev: u32,

    /// Print the YYYY-MM position above the grid.
    #[arg(short = 'H', long, help_heading = "Output options")]
    pub header: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long, action = ArgAction::Count, help_heading = "Output options")]
    pub verbose: u8,

    /// Month (1-12 or name), or a 4-digit year when given alone.
    #[arg(index = 1, default_value = None, value_name = "month", value_hint = ValueHint::Other)]
    pub month_arg: Option<String>,

    /// Year (1-9999).
    #[arg(index = 2, default_value = None, value_name = "year", value_hint = ValueHint::Other)]
    pub year_arg: Option<String>,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Print the date grid of a month, Sunday first.

Without any arguments, use the current month.

Examples:
  calgrid              Grid of the current month
  calgrid 2 2024       Grid of February 2024
  calgrid feb          Grid of February this year
  calgrid 2024         Grid of the current month in 2024
  calgrid -f day       Day numbers only
  calgrid -n 3 -H      Three months ahead, with a position header";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

/// Get today's date, respecting CALGRID_TEST_TIME environment variable for testing.
pub fn get_today_date() -> chrono::NaiveDate {
    if let Ok(test_time) = std::env::var(TEST_TIME_ENV)
        && let Ok(date) = chrono::NaiveDate::parse_from_str(&test_time, "%Y-%m-%d")
    {
        return date;
    }
    chrono::Local::now().date_naive()
}

fn parse_year(s: &str) -> Result<i32, GridError> {
    let year = s
        .parse::<i32>()
        .map_err(|_| GridError::InvalidArgument(format!("Invalid year: {}", s)))?;
    if !(MIN_CLI_YEAR..=MAX_CLI_YEAR).contains(&year) {
        return Err(GridError::InvalidYear {
            year,
            min: MIN_CLI_YEAR,
            max: MAX_CLI_YEAR,
        });
    }
    Ok(year)
}

/// Resolve the grid position from positional arguments.
///
/// Argument patterns:
/// - no args: current month
/// - 1 arg: year (4 digits) or month (1-2 digits or name)
/// - 2 args: month year
pub fn get_display_position(args: &Args) -> Result<CalendarPosition, GridError> {
    let today = get_today_date();

    match (args.month_arg.as_deref(), args.year_arg.as_deref()) {
        (None, None) => CalendarPosition::new(today.year(), today.month()),
        (Some(val), None) => {
            if let Ok(num) = val.parse::<i32>()
                && (1000..=MAX_CLI_YEAR).contains(&num)
            {
                return CalendarPosition::new(num, today.month());
            }
            let month = parse_month(val)
                .ok_or_else(|| GridError::InvalidArgument(format!("Invalid argument: {}", val)))?;
            CalendarPosition::new(today.year(), month)
        }
        (Some(month_str), Some(year_str)) => {
            let month = parse_month(month_str).ok_or_else(|| {
                GridError::InvalidArgument(format!("Invalid month: {}", month_str))
            })?;
            let year = parse_year(year_str)?;
            CalendarPosition::new(year, month)
        }
        (None, Some(_)) => Err(GridError::InvalidArgument(
            "Invalid argument combination".to_string(),
        )),
    }
}

/// Build the grid requested on the command line, navigation applied.
pub fn build_grid(args: &Args) -> Result<CalendarGrid, GridError> {
    let position = get_display_position(args)?;
    info!(%position, format = ?args.format, "building grid");

    let mut grid = CalendarGrid::with_format(position.year, position.month, args.format)?;

    for _ in 0..args.next {
        grid.next_month()?;
    }
    for _ in 0..args.prev {
        grid.prev_month()?;
    }
    debug!(from = %position, to = %grid.position(), "navigation applied");

    Ok(grid)
}
