//! France public holidays.

use crate::spec::{SpecCountry, SpecHoliday};

const HOLIDAYS: &[SpecHoliday] = &[
    SpecHoliday::fixed("New Year's Day", 1, 1),
    SpecHoliday::easter("Easter Monday", 1),
    SpecHoliday::fixed("Labor Day", 5, 1).since(1919),
    SpecHoliday::fixed("Victory Day", 5, 8).since(1982),
    SpecHoliday::easter("Ascension Day", 39),
    SpecHoliday::easter("Whit Monday", 50),
    SpecHoliday::fixed("National Day", 7, 14).since(1880),
    SpecHoliday::fixed("Assumption Day", 8, 15),
    SpecHoliday::fixed("All Saints' Day", 11, 1),
    SpecHoliday::fixed("Armistice Day", 11, 11).since(1919),
    SpecHoliday::fixed("Christmas Day", 12, 25),
];

pub(crate) const FRANCE: SpecCountry = SpecCountry {
    code: "FR",
    name: "France",
    holidays: HOLIDAYS,
    holidays_no_region: &[],
    regions: &[],
};
