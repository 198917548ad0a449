//! Calendar constants and default presets.

use chrono::Weekday;

/// Smallest accepted calendar year.
pub const N_YEAR_MIN: i32 = 1;
/// Largest accepted calendar year.
pub const N_YEAR_MAX: i32 = 9_999;
/// Number of months laid out per year sheet.
pub const N_MONTHS_PER_YEAR: usize = 12;
/// Number of weekday columns per week row.
pub const N_DAYS_PER_WEEK: usize = 7;
/// Longest possible month length.
pub const N_DAYS_PER_MONTH_MAX: usize = 31;

/// Separator used when more than one holiday falls on the same date.
pub const C_HOLIDAY_NAME_SEPARATOR: &str = "; ";

/// English month names, January first.
pub const TUP_MONTH_NAMES: [&str; N_MONTHS_PER_YEAR] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English weekday names, Monday first.
pub const TUP_WEEKDAY_NAMES: [&str; N_DAYS_PER_WEEK] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Weekend days used when none are configured.
pub const TUP_DEFAULT_WEEKENDS: [Weekday; 2] = [Weekday::Sat, Weekday::Sun];

/// Default first month of a sheet.
pub const N_DEFAULT_START_MONTH: u32 = 1;
