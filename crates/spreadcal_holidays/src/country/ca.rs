//! Canada federal and provincial holidays.

use chrono::Weekday;

use crate::spec::{EnumNthWeekday, EnumObservance, SpecCountry, SpecHoliday, SpecRegion};

const HOLIDAYS: &[SpecHoliday] = &[
    SpecHoliday::observed("New Year's Day", 1, 1, EnumObservance::NextWorkday),
    SpecHoliday::easter("Good Friday", -2),
    SpecHoliday::observed("Canada Day", 7, 1, EnumObservance::SundayToMonday).since(1983),
    SpecHoliday::observed("Dominion Day", 7, 1, EnumObservance::SundayToMonday).until(1982),
    SpecHoliday::nth("Labour Day", EnumNthWeekday::First, Weekday::Mon, 9).since(1894),
    SpecHoliday::observed(
        "National Day for Truth and Reconciliation",
        9,
        30,
        EnumObservance::NextWorkday,
    )
    .since(2021),
    SpecHoliday::observed("Christmas Day", 12, 25, EnumObservance::NextWorkday),
];

const VICTORIA_DAY: SpecHoliday =
    SpecHoliday::on_or_before("Victoria Day", Weekday::Mon, 5, 24).since(1953);
const THANKSGIVING: SpecHoliday =
    SpecHoliday::nth("Thanksgiving", EnumNthWeekday::Second, Weekday::Mon, 10).since(1957);
const REMEMBRANCE_DAY: SpecHoliday =
    SpecHoliday::observed("Remembrance Day", 11, 11, EnumObservance::NextWorkday).since(1931);

const REGIONS: &[SpecRegion] = &[
    SpecRegion {
        code: "AB",
        name: "Alberta",
        holidays: &[
            SpecHoliday::nth("Family Day", EnumNthWeekday::Third, Weekday::Mon, 2).since(1990),
            VICTORIA_DAY,
            THANKSGIVING,
            REMEMBRANCE_DAY,
        ],
    },
    SpecRegion {
        code: "BC",
        name: "British Columbia",
        holidays: &[
            SpecHoliday::nth("Family Day", EnumNthWeekday::Second, Weekday::Mon, 2)
                .between(2013, 2018),
            SpecHoliday::nth("Family Day", EnumNthWeekday::Third, Weekday::Mon, 2).since(2019),
            VICTORIA_DAY,
            SpecHoliday::nth("British Columbia Day", EnumNthWeekday::First, Weekday::Mon, 8)
                .since(1974),
            THANKSGIVING,
            REMEMBRANCE_DAY,
        ],
    },
    SpecRegion {
        code: "ON",
        name: "Ontario",
        holidays: &[
            SpecHoliday::nth("Family Day", EnumNthWeekday::Third, Weekday::Mon, 2).since(2008),
            VICTORIA_DAY,
            SpecHoliday::nth("Civic Holiday", EnumNthWeekday::First, Weekday::Mon, 8),
            THANKSGIVING,
            SpecHoliday::observed("Boxing Day", 12, 26, EnumObservance::NextWorkday),
        ],
    },
    SpecRegion {
        code: "QC",
        name: "Quebec",
        holidays: &[
            SpecHoliday::on_or_before("National Patriots' Day", Weekday::Mon, 5, 24).since(2003),
            SpecHoliday::observed("Saint Jean Baptiste Day", 6, 24, EnumObservance::SundayToMonday)
                .since(1925),
            THANKSGIVING,
        ],
    },
];

pub(crate) const CANADA: SpecCountry = SpecCountry {
    code: "CA",
    name: "Canada",
    holidays: HOLIDAYS,
    holidays_no_region: &[],
    regions: REGIONS,
};
