//! New Zealand public holidays.

use chrono::Weekday;

use crate::spec::{EnumNthWeekday, EnumObservance, SpecCountry, SpecHoliday};

const HOLIDAYS: &[SpecHoliday] = &[
    SpecHoliday::observed("New Year's Day", 1, 1, EnumObservance::NextWorkday),
    SpecHoliday::observed("Day after New Year's Day", 1, 2, EnumObservance::NextWorkday),
    // Waitangi and Anzac Day are only "Mondayised" since 2014.
    SpecHoliday::fixed("Waitangi Day", 2, 6).between(1974, 2013),
    SpecHoliday::observed("Waitangi Day", 2, 6, EnumObservance::NextWorkday).since(2014),
    SpecHoliday::easter("Good Friday", -2),
    SpecHoliday::easter("Easter Monday", 1),
    SpecHoliday::fixed("Anzac Day", 4, 25).until(2013),
    SpecHoliday::observed("Anzac Day", 4, 25, EnumObservance::NextWorkday).since(2014),
    SpecHoliday::nth("Queen's Birthday", EnumNthWeekday::First, Weekday::Mon, 6)
        .between(1952, 2022),
    SpecHoliday::nth("King's Birthday", EnumNthWeekday::First, Weekday::Mon, 6).since(2023),
    SpecHoliday::nth("Labour Day", EnumNthWeekday::Fourth, Weekday::Mon, 10).since(1910),
    SpecHoliday::observed("Christmas Day", 12, 25, EnumObservance::NextWorkday),
    SpecHoliday::observed("Boxing Day", 12, 26, EnumObservance::NextWorkday),
    SpecHoliday::once("Queen Elizabeth II Memorial Day", 2022, 9, 26),
];

pub(crate) const NEW_ZEALAND: SpecCountry = SpecCountry {
    code: "NZ",
    name: "New Zealand",
    holidays: HOLIDAYS,
    holidays_no_region: &[],
    regions: &[],
};
