//! Country and region listings.

use spreadcal_holidays::{SpecCountry, list_countries};

/// `CC: Name` per supported country, sorted by code.
pub fn list_country_lines() -> Vec<String> {
    list_countries()
        .iter()
        .map(|country| format!("{}: {}", country.code, country.name))
        .collect()
}

/// Subdivision codes of `country`, one per line.
pub fn list_region_lines(country: &SpecCountry) -> Vec<String> {
    country
        .regions
        .iter()
        .map(|region| region.code.to_string())
        .collect()
}
