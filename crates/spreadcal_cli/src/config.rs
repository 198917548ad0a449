//! Resolution of command-line values into a validated request.
//!
//! Every check happens here, before any sheet is built.

use chrono::{Datelike, Local};
use spreadcal_core::{
    CalendarError, EnumOutputFormat, Result, SpecCalendarRequest, SpecCalendarWriteOptions,
    SpecWeekendDays, parse_hex_color, parse_month, parse_weekday, parse_year,
};
use spreadcal_holidays::{SpecCountry, find_country, find_region};
use spreadcal_io::validate_output_format;

use crate::cli::Cli;

/// Locale variables consulted for the default country, highest priority first.
pub const TUP_LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

////////////////////////////////////////////////////////////////////////////////
// #region Context

/// Process state the resolution depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecResolveContext {
    /// First non-empty locale variable value, e.g. `en_GB.UTF-8`.
    pub locale: Option<String>,
    /// Year used when none is given.
    pub year_default: i32,
}

impl SpecResolveContext {
    /// Capture the locale and current year from the running process.
    pub fn from_env() -> Self {
        Self {
            locale: read_locale(|name| std::env::var(name).ok()),
            year_default: Local::now().year(),
        }
    }
}

/// First non-empty value among [`TUP_LOCALE_VARS`].
pub fn read_locale<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    TUP_LOCALE_VARS
        .iter()
        .filter_map(|name| lookup(*name))
        .find(|value| !value.trim().is_empty())
}

/// Territory of a POSIX locale name: `en_GB.UTF-8` gives `GB`.
pub fn derive_locale_territory(locale: &str) -> Option<String> {
    let c_name = locale.split(['.', '@']).next()?;
    let (_, territory) = c_name.split_once('_')?;
    if territory.len() == 2 && territory.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(territory.to_ascii_uppercase())
    } else {
        None
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Resolution

/// What one invocation should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumCliAction {
    ListCountries,
    ListRegions(&'static SpecCountry),
    Generate(SpecCalendarRequest),
}

/// Decide the action and validate everything it needs.
pub fn resolve_action(cli: &Cli, ctx: &SpecResolveContext) -> Result<EnumCliAction> {
    if cli.list_countries {
        return Ok(EnumCliAction::ListCountries);
    }
    if cli.list_regions {
        let country = resolve_country(cli.country.as_deref(), ctx.locale.as_deref(), None)?;
        return Ok(EnumCliAction::ListRegions(country));
    }
    resolve_request(cli, ctx).map(EnumCliAction::Generate)
}

/// Country from `--country`, else from the locale territory.
///
/// When neither yields a country and a region was requested, the region is
/// reported as unresolvable.
pub fn resolve_country(
    country: Option<&str>,
    locale: Option<&str>,
    region: Option<&str>,
) -> Result<&'static SpecCountry> {
    if let Some(country) = country {
        return find_country(country);
    }
    match locale.and_then(derive_locale_territory) {
        Some(territory) => find_country(&territory),
        None => Err(match region {
            Some(region) => CalendarError::UnknownRegion {
                region: region.to_string(),
                country: None,
            },
            None => CalendarError::UnknownCountry(locale.unwrap_or("C").to_string()),
        }),
    }
}

/// Resolve the generation request.
pub fn resolve_request(cli: &Cli, ctx: &SpecResolveContext) -> Result<SpecCalendarRequest> {
    let years = resolve_years(&cli.years, ctx.year_default)?;
    let start_month = parse_month(&cli.start_month)?;
    let weekend_days = match &cli.weekend {
        Some(l_days) => SpecWeekendDays::from_weekdays(
            l_days
                .iter()
                .map(|day| parse_weekday(day))
                .collect::<Result<Vec<_>>>()?,
        ),
        None => SpecWeekendDays::default(),
    };
    let format = validate_output_format(cli.format.parse::<EnumOutputFormat>()?)?;
    let write_options = SpecCalendarWriteOptions {
        if_holiday_notes: cli.holiday_notes,
        weekend_bg_color: cli.weekend_color.as_deref().map(parse_hex_color).transpose()?,
        holiday_bg_color: cli.holiday_color.as_deref().map(parse_hex_color).transpose()?,
    };

    let country = resolve_country(
        cli.country.as_deref(),
        ctx.locale.as_deref(),
        cli.region.as_deref(),
    )?;
    let region = cli
        .region
        .as_deref()
        .map(|region| find_region(country, region))
        .transpose()?;

    let request = SpecCalendarRequest {
        years,
        start_month,
        weekend_days,
        country: Some(country.code.to_string()),
        region: region.map(|region| region.code.to_string()),
        if_suppress_holiday_weekends: cli.no_holiday_weekends,
        path_file_out: cli
            .output
            .clone()
            .unwrap_or_else(|| format.default_file_name().into()),
        format,
        write_options,
    };
    tracing::info!(
        years = ?request.years,
        start_month = request.start_month,
        weekend_days = ?request.weekend_days.indices(),
        country = country.code,
        region = ?request.region,
        path = %request.path_file_out.display(),
        "Configuration resolved."
    );
    Ok(request)
}

/// Parse years, defaulting to `year_default`; repeats keep the first position.
fn resolve_years(l_years: &[String], year_default: i32) -> Result<Vec<i32>> {
    if l_years.is_empty() {
        return Ok(vec![year_default]);
    }
    let mut l_out: Vec<i32> = Vec::with_capacity(l_years.len());
    for txt in l_years {
        let year = parse_year(txt)?;
        if !l_out.contains(&year) {
            l_out.push(year);
        }
    }
    Ok(l_out)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
