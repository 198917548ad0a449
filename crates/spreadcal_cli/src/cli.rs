//! Command-line argument model.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Create whole-year spreadsheet calendars with weekends and holidays shaded.
#[derive(Parser, Debug, Clone)]
#[command(name = "spreadsheet-calendar", version, about, long_about = None)]
pub struct Cli {
    /// List available country codes and exit
    #[arg(long)]
    pub list_countries: bool,

    /// List available regions in the selected country and exit
    #[arg(long)]
    pub list_regions: bool,

    /// Don't color weekends with holidays
    #[arg(long)]
    pub no_holiday_weekends: bool,

    /// Spreadsheet output format (numbers, excel)
    #[arg(long, default_value = "excel")]
    pub format: String,

    /// Start month for calendar
    #[arg(long, value_name = "month", default_value = "Jan")]
    pub start_month: String,

    /// Days to highlight as weekends (default: Sat, Sun)
    #[arg(long, value_name = "day", num_args = 0.., action = ArgAction::Append)]
    pub weekend: Option<Vec<String>>,

    /// Output file (default: calendar.xlsx / calendar.numbers)
    #[arg(short, long, value_name = "filename")]
    pub output: Option<PathBuf>,

    /// Country to use for national holidays (default: from locale)
    #[arg(long, value_name = "country")]
    pub country: Option<String>,

    /// State, province or other subdivision within a country
    #[arg(long, value_name = "region")]
    pub region: Option<String>,

    /// Attach holiday names to holiday cells as notes
    #[arg(long)]
    pub holiday_notes: bool,

    /// Weekend fill color as #RRGGBB
    #[arg(long, value_name = "HEX")]
    pub weekend_color: Option<String>,

    /// Holiday fill color as #RRGGBB
    #[arg(long, value_name = "HEX")]
    pub holiday_color: Option<String>,

    /// More log output (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Years to generate a calendar for (default: current year)
    #[arg(value_name = "year")]
    pub years: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["spreadsheet-calendar"]).expect("parse");
        assert_eq!(cli.format, "excel");
        assert_eq!(cli.start_month, "Jan");
        assert_eq!(cli.weekend, None);
        assert!(cli.years.is_empty());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.no_holiday_weekends);
    }

    #[test]
    fn weekend_takes_several_values_and_repeats() {
        let cli = Cli::try_parse_from([
            "spreadsheet-calendar",
            "2024",
            "--weekend",
            "Fri",
            "Sat",
            "--weekend",
            "Sun",
        ])
        .expect("parse");
        assert_eq!(
            cli.weekend,
            Some(vec!["Fri".to_string(), "Sat".to_string(), "Sun".to_string()])
        );
        assert_eq!(cli.years, vec!["2024".to_string()]);
    }

    #[test]
    fn bare_weekend_flag_means_no_weekend_days() {
        let cli = Cli::try_parse_from(["spreadsheet-calendar", "--weekend", "--country", "US"])
            .expect("parse");
        assert_eq!(cli.weekend, Some(vec![]));
        assert_eq!(cli.country.as_deref(), Some("US"));
    }

    #[test]
    fn full_flag_set() {
        let cli = Cli::try_parse_from([
            "spreadsheet-calendar",
            "-vv",
            "--format",
            "numbers",
            "--start-month",
            "Apr",
            "-o",
            "out.xlsx",
            "--region",
            "NY",
            "--holiday-notes",
            "--holiday-color",
            "#FF0000",
            "2024",
            "2025",
        ])
        .expect("parse");
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.format, "numbers");
        assert_eq!(cli.output, Some(PathBuf::from("out.xlsx")));
        assert!(cli.holiday_notes);
        assert_eq!(cli.holiday_color.as_deref(), Some("#FF0000"));
        assert_eq!(cli.years, vec!["2024".to_string(), "2025".to_string()]);
    }

    #[test]
    fn version_flag_is_recognized() {
        let err = Cli::try_parse_from(["spreadsheet-calendar", "-V"]).expect_err("version exits");
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
