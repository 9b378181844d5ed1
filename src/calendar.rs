//! Stateless Gregorian date arithmetic backing the month grid.
//!
//! Month-taking helpers are permissive: they do not reject months outside
//! 1..=12 and simply apply their arithmetic. The exceptions are
//! [`prev_month_position`], which refuses month 0, and the two position
//! helpers refusing a year step that leaves the `i32` range.

use chrono::Weekday;
use tracing::trace;

use crate::error::GridError;
use crate::types::{
    CalendarPosition, FEBRUARY, FEBRUARY_BASE_DAYS, LONG_MONTH_PIVOT, MONTH_BASE_DAYS,
    MONTHS_PER_YEAR,
};

/// Check if a year is a leap year under the Gregorian rule.
pub fn is_leap_year(year: i32) -> bool {
    // Divisible by 4, except centuries unless divisible by 400
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Check if a month has 31 days, ignoring February.
///
/// Months before August are long when odd, months from August on are long
/// when even.
pub fn is_long_month(month: u32) -> bool {
    if month < LONG_MONTH_PIVOT {
        month % 2 == 1
    } else {
        month % 2 == 0
    }
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let base = if month == FEBRUARY {
        FEBRUARY_BASE_DAYS
    } else {
        MONTH_BASE_DAYS
    };

    if is_long_month(month) || (month == FEBRUARY && is_leap_year(year)) {
        base + 1
    } else {
        base
    }
}

/// Position of the month after `(year, month)`. Only December bumps the year.
///
/// # Errors
///
/// Returns [`GridError::InvalidYear`] when the step would leave the `i32` range.
pub fn next_month_position(year: i32, month: u32) -> Result<CalendarPosition, GridError> {
    let year = year
        .checked_add((month / MONTHS_PER_YEAR) as i32)
        .ok_or(GridError::InvalidYear {
            year,
            min: i32::MIN,
            max: i32::MAX - 1,
        })?;
    Ok(CalendarPosition {
        year,
        month: month % MONTHS_PER_YEAR + 1,
    })
}

/// Position of the month before `(year, month)`. Only January drops the year.
///
/// # Errors
///
/// Returns [`GridError::ZeroMonth`] when `month` is 0, and
/// [`GridError::InvalidYear`] when the step would leave the `i32` range.
pub fn prev_month_position(year: i32, month: u32) -> Result<CalendarPosition, GridError> {
    match month {
        0 => Err(GridError::ZeroMonth),
        1 => {
            let prev_year = year.checked_sub(1).ok_or(GridError::InvalidYear {
                year,
                min: i32::MIN + 1,
                max: i32::MAX,
            })?;
            Ok(CalendarPosition {
                year: prev_year,
                month: MONTHS_PER_YEAR,
            })
        }
        _ => Ok(CalendarPosition {
            year,
            month: month - 1,
        }),
    }
}

/// Calculate the weekday of the 1st of a month using Zeller's congruence.
///
/// Uses the proleptic Gregorian calendar for every `i32` year, negative years
/// included. Computed in `i64` so the January/February year shift cannot overflow.
pub fn first_day_of_month(year: i32, month: u32) -> Weekday {
    let m = i64::from(if month < 3 { month + 12 } else { month });
    let q: i64 = 1;
    let year_i = if month < 3 {
        i64::from(year) - 1
    } else {
        i64::from(year)
    };
    let k: i64 = year_i.rem_euclid(100);
    let j: i64 = year_i.div_euclid(100);

    let h = (q + (13 * (m + 1)) / 5 + k + k / 4 + j.div_euclid(4) - 2 * j).rem_euclid(7);
    trace!(year, month, h, "zeller");

    // h: 0=Sat, 1=Sun, 2=Mon, 3=Tue, 4=Wed, 5=Thu, 6=Fri
    match h {
        0 => Weekday::Sat,
        1 => Weekday::Sun,
        2 => Weekday::Mon,
        3 => Weekday::Tue,
        4 => Weekday::Wed,
        5 => Weekday::Thu,
        _ => Weekday::Fri,
    }
}
