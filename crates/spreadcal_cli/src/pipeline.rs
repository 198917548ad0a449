//! Build, classify and export the requested years.

use spreadcal_core::{
    Result, SpecCalendarRequest, SpecHolidaySet, SpecYearSheet, build_year, classify_year,
};
use spreadcal_holidays::{HolidayProvider, RuleHolidayProvider};
use spreadcal_io::export;

/// Year sheets for `request`, classified against `provider` (no holidays when `None`).
pub fn build_sheets(
    request: &SpecCalendarRequest,
    provider: Option<&dyn HolidayProvider>,
) -> Result<Vec<SpecYearSheet>> {
    let mut l_sheets = Vec::with_capacity(request.years.len());
    for &year in &request.years {
        let sheet = build_year(year, request.start_month, &request.weekend_days)?;
        let holidays = provider
            .map(|provider| provider.holidays(year))
            .unwrap_or_else(SpecHolidaySet::new);
        tracing::debug!(year, n_holidays = holidays.len(), "Year built.");
        l_sheets.push(classify_year(
            sheet,
            &request.weekend_days,
            &holidays,
            request.if_suppress_holiday_weekends,
        ));
    }
    Ok(l_sheets)
}

/// Generate and save the calendar described by `request`.
pub fn run_request(request: &SpecCalendarRequest) -> Result<()> {
    let provider = request
        .country
        .as_deref()
        .map(|country| RuleHolidayProvider::new(country, request.region.as_deref()))
        .transpose()?;
    let sheets = build_sheets(
        request,
        provider.as_ref().map(|provider| provider as &dyn HolidayProvider),
    )?;
    export(
        &sheets,
        request.format,
        &request.path_file_out,
        &request.write_options,
    )
}
