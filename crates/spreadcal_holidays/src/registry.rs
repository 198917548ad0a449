//! Country/region lookup and holiday-set construction.

use spreadcal_core::{CalendarError, Result, SpecHolidaySet};

use crate::country::COUNTRIES;
use crate::rule::derive_holiday_set;
use crate::spec::{SpecCountry, SpecRegion};

////////////////////////////////////////////////////////////////////////////////
// #region Registry

/// Supported countries, sorted by code.
pub fn list_countries() -> &'static [SpecCountry] {
    COUNTRIES
}

/// Find a country by ISO code or English name (case-insensitive).
pub fn find_country(query: &str) -> Result<&'static SpecCountry> {
    let query_norm = query.trim();
    COUNTRIES
        .iter()
        .find(|country| {
            country.code.eq_ignore_ascii_case(query_norm)
                || country.name.eq_ignore_ascii_case(query_norm)
        })
        .ok_or_else(|| CalendarError::UnknownCountry(query.to_string()))
}

/// Find a subdivision of `country` by code (case-insensitive).
pub fn find_region(country: &'static SpecCountry, query: &str) -> Result<&'static SpecRegion> {
    let query_norm = query.trim();
    country
        .regions
        .iter()
        .find(|region| region.code.eq_ignore_ascii_case(query_norm))
        .ok_or_else(|| CalendarError::UnknownRegion {
            region: query.to_string(),
            country: Some(country.code.to_string()),
        })
}

/// Holidays of `country` (optionally narrowed to `region`) in `year`.
pub fn country_holidays(
    year: i32,
    country: &SpecCountry,
    region: Option<&SpecRegion>,
) -> SpecHolidaySet {
    let holidays_extra = match region {
        Some(region) => region.holidays,
        None => country.holidays_no_region,
    };
    let holidays = derive_holiday_set(year, &[country.holidays, holidays_extra]);
    tracing::debug!(
        year,
        country = country.code,
        region = region.map(|r| r.code),
        n_holidays = holidays.len(),
        "Holiday set derived."
    );
    holidays
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Provider

/// Source of holiday names for one year.
pub trait HolidayProvider {
    fn holidays(&self, year: i32) -> SpecHolidaySet;
}

/// Provider backed by the built-in rule tables.
#[derive(Debug, Clone, Copy)]
pub struct RuleHolidayProvider {
    country: &'static SpecCountry,
    region: Option<&'static SpecRegion>,
}

impl RuleHolidayProvider {
    /// Resolve `country` and an optional `region` of it.
    pub fn new(country: &str, region: Option<&str>) -> Result<Self> {
        let country = find_country(country)?;
        let region = region.map(|code| find_region(country, code)).transpose()?;
        Ok(Self { country, region })
    }
}

impl HolidayProvider for RuleHolidayProvider {
    fn holidays(&self, year: i32) -> SpecHolidaySet {
        country_holidays(year, self.country, self.region)
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn countries_are_sorted_by_code() {
        let l_codes: Vec<&str> = list_countries().iter().map(|c| c.code).collect();
        let mut l_sorted = l_codes.clone();
        l_sorted.sort_unstable();
        assert_eq!(l_codes, l_sorted);
        for country in list_countries() {
            let l_regions: Vec<&str> = country.regions.iter().map(|r| r.code).collect();
            let mut l_regions_sorted = l_regions.clone();
            l_regions_sorted.sort_unstable();
            assert_eq!(l_regions, l_regions_sorted, "{}", country.code);
        }
    }

    #[test]
    fn find_country_by_code_or_name() {
        assert_eq!(find_country("us").expect("US").code, "US");
        assert_eq!(find_country("United Kingdom").expect("GB").code, "GB");
        assert_eq!(find_country(" de ").expect("DE").name, "Germany");
        assert_eq!(
            find_country("XX"),
            Err(CalendarError::UnknownCountry("XX".to_string()))
        );
    }

    #[test]
    fn find_region_is_scoped_to_country() {
        let country = find_country("US").expect("US");
        assert_eq!(find_region(country, "ny").expect("NY").name, "New York");
        assert_eq!(
            find_region(country, "SCT"),
            Err(CalendarError::UnknownRegion {
                region: "SCT".to_string(),
                country: Some("US".to_string()),
            })
        );
        let country = find_country("FR").expect("FR");
        assert!(find_region(country, "IDF").is_err());
    }

    #[test]
    fn us_holidays_2024() {
        let provider = RuleHolidayProvider::new("US", None).expect("provider");
        let holidays = provider.holidays(2024);
        assert_eq!(holidays.get(date(2024, 12, 25)), Some("Christmas Day"));
        assert_eq!(holidays.get(date(2024, 7, 4)), Some("Independence Day"));
        assert_eq!(holidays.get(date(2024, 11, 28)), Some("Thanksgiving"));
        assert!(!holidays.contains(date(2024, 12, 26)));
        assert_eq!(holidays.len(), 11);
    }

    #[test]
    fn us_region_adds_state_holidays() {
        let provider = RuleHolidayProvider::new("us", Some("tx")).expect("provider");
        assert_eq!(provider.region.map(|r| r.code), Some("TX"));
        let holidays = provider.holidays(2024);
        assert_eq!(holidays.get(date(2024, 3, 2)), Some("Texas Independence Day"));
        assert_eq!(holidays.get(date(2024, 12, 25)), Some("Christmas Day"));
    }

    #[test]
    fn juneteenth_shares_date_in_texas() {
        let provider = RuleHolidayProvider::new("US", Some("TX")).expect("provider");
        let holidays = provider.holidays(2024);
        assert_eq!(
            holidays.get(date(2024, 6, 19)),
            Some("Juneteenth National Independence Day; Emancipation Day In Texas")
        );
    }

    #[test]
    fn gb_regions_differ_on_easter_monday() {
        let country = find_country("GB").expect("GB");
        let national = country_holidays(2024, country, None);
        assert_eq!(national.get(date(2024, 4, 1)), Some("Easter Monday"));

        let scotland = find_region(country, "SCT").expect("SCT");
        let holidays = country_holidays(2024, country, Some(scotland));
        assert!(!holidays.contains(date(2024, 4, 1)));
        assert_eq!(holidays.get(date(2024, 1, 2)), Some("New Year Holiday"));
        assert_eq!(holidays.get(date(2024, 3, 29)), Some("Good Friday"));
    }

    #[test]
    fn gb_christmas_observed_2022() {
        let country = find_country("GB").expect("GB");
        let holidays = country_holidays(2022, country, None);
        assert_eq!(holidays.get(date(2022, 12, 25)), Some("Christmas Day"));
        assert_eq!(holidays.get(date(2022, 12, 26)), Some("Boxing Day"));
        assert_eq!(
            holidays.get(date(2022, 12, 27)),
            Some("Christmas Day (observed)")
        );
    }

    #[test]
    fn de_reformation_anniversary() {
        let country = find_country("DE").expect("DE");
        assert!(country_holidays(2017, country, None).contains(date(2017, 10, 31)));
        assert!(!country_holidays(2018, country, None).contains(date(2018, 10, 31)));
        let saxony = find_region(country, "SN").expect("SN");
        let holidays = country_holidays(2024, country, Some(saxony));
        assert_eq!(
            holidays.get(date(2024, 11, 20)),
            Some("Repentance and Prayer Day")
        );
    }

    #[test]
    fn nz_mondayised_waitangi_day() {
        let country = find_country("New Zealand").expect("NZ");
        // 2021-02-06 is a Saturday.
        let holidays = country_holidays(2021, country, None);
        assert_eq!(
            holidays.get(date(2021, 2, 8)),
            Some("Waitangi Day (observed)")
        );
        // 2010-02-06 is a Saturday, before Mondayisation.
        let holidays = country_holidays(2010, country, None);
        assert!(!holidays.contains(date(2010, 2, 8)));
    }
}
