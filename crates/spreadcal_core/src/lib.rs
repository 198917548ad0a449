//! `spreadcal_core` v1:
//! Calendar layout and classification kernel.
//!
//! - `conf`     : constants and default presets
//! - `spec`     : data models, request and errors
//! - `util`     : parsing and date helpers
//! - `layout`   : year/month grid construction
//! - `classify` : weekend/holiday fill resolution
pub mod classify;
pub mod conf;
pub mod layout;
pub mod spec;
pub mod util;

pub use classify::{classify, classify_year, resolve_day_class};
pub use conf::{N_DAYS_PER_MONTH_MAX, N_MONTHS_PER_YEAR, TUP_MONTH_NAMES, TUP_WEEKDAY_NAMES};
pub use layout::{build_month, build_year};
pub use spec::{
    CalendarError, EnumDayClass, EnumOutputFormat, Result, SpecCalendarRequest,
    SpecCalendarWriteOptions, SpecDayCell, SpecHolidaySet, SpecMonthGrid, SpecWeekRow,
    SpecWeekendDays, SpecYearSheet,
};
pub use util::{
    derive_days_in_month, derive_month_order, parse_hex_color, parse_month, parse_weekday,
    parse_year, validate_month, validate_year,
};
