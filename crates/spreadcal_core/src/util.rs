//! Stateless parsing and date helpers shared by the layout engine and CLI.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::conf::{
    N_MONTHS_PER_YEAR, N_YEAR_MAX, N_YEAR_MIN, TUP_MONTH_NAMES, TUP_WEEKDAY_NAMES,
};
use crate::spec::{CalendarError, Result};

////////////////////////////////////////////////////////////////////////////////
// #region Validation

/// Check that `year` lies within the supported range.
pub fn validate_year(year: i32) -> Result<i32> {
    if !(N_YEAR_MIN..=N_YEAR_MAX).contains(&year) {
        return Err(CalendarError::InvalidYear(year.to_string()));
    }
    Ok(year)
}

/// Check that `month` is a month number 1-12.
pub fn validate_month(month: u32) -> Result<u32> {
    if !(1..=N_MONTHS_PER_YEAR as u32).contains(&month) {
        return Err(CalendarError::InvalidMonth(month.to_string()));
    }
    Ok(month)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Parsing

/// Parse a year argument.
pub fn parse_year(txt: &str) -> Result<i32> {
    let year = txt
        .trim()
        .parse::<i32>()
        .map_err(|_| CalendarError::InvalidYear(txt.to_string()))?;
    validate_year(year).map_err(|_| CalendarError::InvalidYear(txt.to_string()))
}

/// Parse a month from its English name, 3-letter abbreviation or number.
///
/// Matching is case-insensitive: `"Apr"`, `"april"` and `"4"` all give 4.
pub fn parse_month(txt: &str) -> Result<u32> {
    let value = txt.trim();
    if let Ok(n_month) = value.parse::<u32>() {
        return validate_month(n_month).map_err(|_| CalendarError::InvalidMonth(txt.to_string()));
    }
    TUP_MONTH_NAMES
        .iter()
        .position(|name| is_name_or_abbr(value, name))
        .map(|n_idx| n_idx as u32 + 1)
        .ok_or_else(|| CalendarError::InvalidMonth(txt.to_string()))
}

/// Parse a weekday from its English name or 3-letter abbreviation.
pub fn parse_weekday(txt: &str) -> Result<Weekday> {
    let value = txt.trim();
    TUP_WEEKDAY_NAMES
        .iter()
        .position(|name| is_name_or_abbr(value, name))
        .and_then(|n_idx| Weekday::try_from(n_idx as u8).ok())
        .ok_or_else(|| CalendarError::InvalidWeekday(txt.to_string()))
}

/// Normalize a `#RRGGBB` fill color (leading `#` optional) to upper case.
pub fn parse_hex_color(txt: &str) -> Result<String> {
    let value = txt.trim();
    let digits = value.strip_prefix('#').unwrap_or(value);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CalendarError::InvalidColor(txt.to_string()));
    }
    Ok(format!("#{}", digits.to_ascii_uppercase()))
}

fn is_name_or_abbr(value: &str, name: &str) -> bool {
    value.eq_ignore_ascii_case(name) || (value.len() == 3 && value.eq_ignore_ascii_case(&name[..3]))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region DateArithmetic

/// First day of `year`-`month`.
pub fn derive_first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    validate_month(month)?;
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| CalendarError::InvalidYear(year.to_string()))
}

/// Number of days in `year`-`month`, leap years included.
pub fn derive_days_in_month(year: i32, month: u32) -> Result<u32> {
    let first = derive_first_of_month(year, month)?;
    let (n_year_next, n_month_next) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let last = NaiveDate::from_ymd_opt(n_year_next, n_month_next, 1)
        .and_then(|date| date.pred_opt())
        .ok_or_else(|| CalendarError::InvalidYear(year.to_string()))?;
    Ok(last.day() - first.day() + 1)
}

/// Month sequence starting at `start_month` and wrapping past December.
pub fn derive_month_order(start_month: u32) -> Result<Vec<u32>> {
    validate_month(start_month)?;
    let n_months = N_MONTHS_PER_YEAR as u32;
    Ok((0..n_months)
        .map(|n_offset| (start_month - 1 + n_offset) % n_months + 1)
        .collect())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
