//! Ireland public holidays.

use chrono::Weekday;

use crate::spec::{EnumNthWeekday, SpecCountry, SpecHoliday};

const HOLIDAYS: &[SpecHoliday] = &[
    SpecHoliday::fixed("New Year's Day", 1, 1).since(1975),
    SpecHoliday::nth("Saint Brigid's Day", EnumNthWeekday::First, Weekday::Mon, 2).since(2023),
    SpecHoliday::fixed("Saint Patrick's Day", 3, 17),
    SpecHoliday::easter("Easter Monday", 1),
    SpecHoliday::nth("May Day", EnumNthWeekday::First, Weekday::Mon, 5).since(1994),
    SpecHoliday::nth("June Bank Holiday", EnumNthWeekday::First, Weekday::Mon, 6),
    SpecHoliday::nth("August Bank Holiday", EnumNthWeekday::First, Weekday::Mon, 8),
    SpecHoliday::nth("October Bank Holiday", EnumNthWeekday::Last, Weekday::Mon, 10).since(1977),
    SpecHoliday::fixed("Christmas Day", 12, 25),
    SpecHoliday::fixed("Saint Stephen's Day", 12, 26),
    SpecHoliday::once("Day of Remembrance and Recognition", 2022, 3, 18),
];

pub(crate) const IRELAND: SpecCountry = SpecCountry {
    code: "IE",
    name: "Ireland",
    holidays: HOLIDAYS,
    holidays_no_region: &[],
    regions: &[],
};
