//! Calendar specification models and top-level error types.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use thiserror::Error;

use crate::conf::{
    C_HOLIDAY_NAME_SEPARATOR, N_DAYS_PER_WEEK, N_DEFAULT_START_MONTH, TUP_DEFAULT_WEEKENDS,
    TUP_MONTH_NAMES,
};

////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Every failure the calendar pipeline can surface to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// Year is not a number or is outside the supported range.
    #[error("'{0}' is not a valid year")]
    InvalidYear(String),
    /// Month is not a known name/abbreviation or is outside 1-12.
    #[error("'{0}' is not a valid month abbreviation or name")]
    InvalidMonth(String),
    /// Weekend day is not a known day name/abbreviation.
    #[error("'{0}' is not a valid day abbreviation or name")]
    InvalidWeekday(String),
    /// Country is unknown to the holiday provider.
    #[error("country '{0}' not available")]
    UnknownCountry(String),
    /// Region does not belong to the resolved country.
    #[error("region '{region}' not available{}", describe_region_scope(.country))]
    UnknownRegion {
        /// Requested region code.
        region: String,
        /// Resolved country code, when one could be resolved.
        country: Option<String>,
    },
    /// Output format is unknown or has no serializer.
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),
    /// Malformed fill color override.
    #[error("'{0}' is not a valid #RRGGBB color")]
    InvalidColor(String),
    /// Spreadsheet could not be serialized or saved.
    #[error("failed to write {}: {message}", .path.display())]
    ExportWrite {
        /// Output file path.
        path: PathBuf,
        /// Underlying serializer/IO error text.
        message: String,
    },
}

fn describe_region_scope(country: &Option<String>) -> String {
    match country {
        Some(code) => format!(" for country '{code}'"),
        None => " (no country could be resolved)".to_string(),
    }
}

/// Shorthand result used across the calendar crates.
pub type Result<T, E = CalendarError> = std::result::Result<T, E>;

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region EnumsInit

/// Fill classification of one day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnumDayClass {
    /// Working day, no fill.
    #[default]
    Plain,
    /// Configured weekend day.
    Weekend,
    /// National or regional holiday.
    Holiday,
}

/// Spreadsheet container written by the exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnumOutputFormat {
    /// Office Open XML workbook (`.xlsx`).
    #[default]
    Excel,
    /// Apple Numbers document (`.numbers`).
    Numbers,
}

impl EnumOutputFormat {
    /// File name used when no output path is given.
    pub fn default_file_name(self) -> &'static str {
        match self {
            Self::Excel => "calendar.xlsx",
            Self::Numbers => "calendar.numbers",
        }
    }

    /// Lower-case name as accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excel => "excel",
            Self::Numbers => "numbers",
        }
    }
}

impl fmt::Display for EnumOutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnumOutputFormat {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "excel" | "xlsx" => Ok(Self::Excel),
            "numbers" => Ok(Self::Numbers),
            _ => Err(CalendarError::UnsupportedFormat(s.to_string())),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region WeekendDays

/// Set of weekdays treated as non-working days.
///
/// Stored as a 7-bit mask, bit 0 being Monday.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpecWeekendDays {
    bits: u8,
}

impl SpecWeekendDays {
    /// Set with no weekend days.
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Build from weekday values; repeats collapse.
    pub fn from_weekdays<I>(weekdays: I) -> Self
    where
        I: IntoIterator<Item = Weekday>,
    {
        let mut days = Self::empty();
        for weekday in weekdays {
            days.insert(weekday);
        }
        days
    }

    /// Build from weekday indices (0 = Monday ... 6 = Sunday).
    pub fn from_indices(indices: &[u8]) -> Result<Self> {
        let mut days = Self::empty();
        for n_idx in indices {
            let weekday = Weekday::try_from(*n_idx)
                .map_err(|_| CalendarError::InvalidWeekday(n_idx.to_string()))?;
            days.insert(weekday);
        }
        Ok(days)
    }

    /// Add one weekday.
    pub fn insert(&mut self, weekday: Weekday) {
        self.bits |= 1 << weekday.num_days_from_monday();
    }

    /// Whether `weekday` is a weekend day.
    pub fn contains(&self, weekday: Weekday) -> bool {
        self.bits & (1 << weekday.num_days_from_monday()) != 0
    }

    /// Whether no weekday is a weekend day.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Weekend days in Monday-first order.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        (0..N_DAYS_PER_WEEK as u8)
            .filter_map(|n_idx| Weekday::try_from(n_idx).ok())
            .filter(|weekday| self.contains(*weekday))
    }

    /// Weekend days as indices (0 = Monday).
    pub fn indices(&self) -> Vec<u8> {
        self.iter()
            .map(|weekday| weekday.num_days_from_monday() as u8)
            .collect()
    }
}

impl Default for SpecWeekendDays {
    fn default() -> Self {
        Self::from_weekdays(TUP_DEFAULT_WEEKENDS)
    }
}

impl fmt::Debug for SpecWeekendDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region HolidaySet

/// Holiday names by date for one (year, country, region).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecHolidaySet {
    dict_names: BTreeMap<NaiveDate, String>,
}

impl SpecHolidaySet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a holiday; a second name on the same date is appended.
    pub fn insert(&mut self, date: NaiveDate, name: impl Into<String>) {
        let name = name.into();
        match self.dict_names.get_mut(&date) {
            Some(existing) => {
                if !existing.split(C_HOLIDAY_NAME_SEPARATOR).any(|n| n == name) {
                    existing.push_str(C_HOLIDAY_NAME_SEPARATOR);
                    existing.push_str(&name);
                }
            }
            None => {
                self.dict_names.insert(date, name);
            }
        }
    }

    /// Holiday name on `date`, if any.
    pub fn get(&self, date: NaiveDate) -> Option<&str> {
        self.dict_names.get(&date).map(String::as_str)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dict_names.contains_key(&date)
    }

    pub fn len(&self) -> usize {
        self.dict_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dict_names.is_empty()
    }
}

impl FromIterator<(NaiveDate, String)> for SpecHolidaySet {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, String)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (date, name) in iter {
            set.insert(date, name);
        }
        set
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region LayoutModels

/// One calendar date with its grid position and fill classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecDayCell {
    /// Calendar date.
    pub date: NaiveDate,
    /// Weekday column, 0 = Monday.
    pub column: usize,
    /// Week row within the month, 0-based.
    pub row: usize,
    /// Fill classification.
    pub class_day: EnumDayClass,
    /// Holiday name, set only for holiday cells.
    pub label: Option<String>,
}

impl SpecDayCell {
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Day of month, 1-based.
    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

/// One week row; `None` slots are placeholders outside the month.
pub type SpecWeekRow = [Option<SpecDayCell>; N_DAYS_PER_WEEK];

/// Week-row layout of one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecMonthGrid {
    /// Calendar year.
    pub year: i32,
    /// Month number, 1-12.
    pub month: u32,
    /// Week rows, Monday-first.
    pub weeks: Vec<SpecWeekRow>,
}

impl SpecMonthGrid {
    /// English month name.
    pub fn name(&self) -> &'static str {
        TUP_MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Day cells in date order.
    pub fn days(&self) -> impl Iterator<Item = &SpecDayCell> + '_ {
        self.weeks.iter().flat_map(|week| week.iter().flatten())
    }

    pub fn days_mut(&mut self) -> impl Iterator<Item = &mut SpecDayCell> + '_ {
        self.weeks.iter_mut().flat_map(|week| week.iter_mut().flatten())
    }

    /// Number of days in the month.
    pub fn n_days(&self) -> usize {
        self.days().count()
    }

    /// Cell for day-of-month `day`.
    pub fn day(&self, day: u32) -> Option<&SpecDayCell> {
        self.days().find(|cell| cell.day() == day)
    }
}

/// A full year laid out as one spreadsheet tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecYearSheet {
    /// Calendar year.
    pub year: i32,
    /// Month the sheet starts with.
    pub start_month: u32,
    /// Twelve months in display order.
    pub months: Vec<SpecMonthGrid>,
}

impl SpecYearSheet {
    /// Tab name for this sheet.
    pub fn sheet_name(&self) -> String {
        self.year.to_string()
    }

    /// All day cells in display order.
    pub fn days(&self) -> impl Iterator<Item = &SpecDayCell> + '_ {
        self.months.iter().flat_map(SpecMonthGrid::days)
    }

    /// Cell for `date`, if the date belongs to this sheet.
    pub fn cell(&self, date: NaiveDate) -> Option<&SpecDayCell> {
        self.months
            .iter()
            .find(|grid| grid.year == date.year() && grid.month == date.month())
            .and_then(|grid| grid.day(date.day()))
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Request

/// Rendering options passed to the export backend.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecCalendarWriteOptions {
    /// Attach holiday names to holiday cells as notes.
    pub if_holiday_notes: bool,
    /// Weekend fill override, `#RRGGBB`.
    pub weekend_bg_color: Option<String>,
    /// Holiday fill override, `#RRGGBB`.
    pub holiday_bg_color: Option<String>,
}

/// Fully resolved calendar generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecCalendarRequest {
    /// Years in request order, each producing one sheet.
    pub years: Vec<i32>,
    /// First month of each sheet.
    pub start_month: u32,
    /// Weekend days.
    pub weekend_days: SpecWeekendDays,
    /// Holiday country code.
    pub country: Option<String>,
    /// Holiday subdivision code within `country`.
    pub region: Option<String>,
    /// Shade holidays that fall on weekend days as weekends.
    pub if_suppress_holiday_weekends: bool,
    /// Output file.
    pub path_file_out: PathBuf,
    /// Output container format.
    pub format: EnumOutputFormat,
    /// Backend rendering options.
    pub write_options: SpecCalendarWriteOptions,
}

impl Default for SpecCalendarRequest {
    fn default() -> Self {
        let format = EnumOutputFormat::default();
        Self {
            years: vec![],
            start_month: N_DEFAULT_START_MONTH,
            weekend_days: SpecWeekendDays::default(),
            country: None,
            region: None,
            if_suppress_holiday_weekends: false,
            path_file_out: PathBuf::from(format.default_file_name()),
            format,
            write_options: SpecCalendarWriteOptions::default(),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn weekend_days_default_is_saturday_and_sunday() {
        let days = SpecWeekendDays::default();
        assert_eq!(days.indices(), vec![5, 6]);
        assert!(days.contains(Weekday::Sat));
        assert!(!days.contains(Weekday::Fri));
    }

    #[test]
    fn weekend_days_from_indices_rejects_out_of_range() {
        assert_eq!(
            SpecWeekendDays::from_indices(&[4, 7]),
            Err(CalendarError::InvalidWeekday("7".to_string()))
        );
        let days = SpecWeekendDays::from_indices(&[4, 4, 5]).expect("valid indices");
        assert_eq!(days.iter().collect::<Vec<_>>(), vec![Weekday::Fri, Weekday::Sat]);
        assert!(SpecWeekendDays::empty().is_empty());
    }

    #[test]
    fn holiday_set_joins_names_on_same_date() {
        let mut holidays = SpecHolidaySet::new();
        holidays.insert(date(2024, 12, 25), "Christmas Day");
        holidays.insert(date(2024, 12, 25), "Christmas Day");
        holidays.insert(date(2024, 12, 25), "Feast");
        assert_eq!(holidays.len(), 1);
        assert_eq!(holidays.get(date(2024, 12, 25)), Some("Christmas Day; Feast"));
        assert_eq!(holidays.get(date(2024, 12, 24)), None);
    }

    #[test]
    fn output_format_parses_and_names_default_file() {
        assert_eq!("Excel".parse::<EnumOutputFormat>(), Ok(EnumOutputFormat::Excel));
        assert_eq!("numbers".parse::<EnumOutputFormat>(), Ok(EnumOutputFormat::Numbers));
        assert!(matches!(
            "pdf".parse::<EnumOutputFormat>(),
            Err(CalendarError::UnsupportedFormat(_))
        ));
        assert_eq!(EnumOutputFormat::Numbers.default_file_name(), "calendar.numbers");
    }

    #[test]
    fn unknown_region_message_mentions_missing_country() {
        let err = CalendarError::UnknownRegion {
            region: "XX".to_string(),
            country: None,
        };
        assert_eq!(
            err.to_string(),
            "region 'XX' not available (no country could be resolved)"
        );
        let err = CalendarError::UnknownRegion {
            region: "XX".to_string(),
            country: Some("US".to_string()),
        };
        assert_eq!(err.to_string(), "region 'XX' not available for country 'US'");
    }
}
