//! United Kingdom bank holidays.

use chrono::Weekday;

use crate::spec::{EnumNthWeekday, EnumObservance, SpecCountry, SpecHoliday, SpecRegion};

const HOLIDAYS: &[SpecHoliday] = &[
    SpecHoliday::observed("New Year's Day", 1, 1, EnumObservance::NextWorkday).since(1974),
    SpecHoliday::easter("Good Friday", -2),
    // May Day moved to VE Day in 1995 and 2020.
    SpecHoliday::nth("May Day", EnumNthWeekday::First, Weekday::Mon, 5).between(1978, 1994),
    SpecHoliday::once("May Day", 1995, 5, 8),
    SpecHoliday::nth("May Day", EnumNthWeekday::First, Weekday::Mon, 5).between(1996, 2019),
    SpecHoliday::once("May Day", 2020, 5, 8),
    SpecHoliday::nth("May Day", EnumNthWeekday::First, Weekday::Mon, 5).since(2021),
    // Spring bank holiday moved for the 2002, 2012 and 2022 jubilees.
    SpecHoliday::nth("Spring Bank Holiday", EnumNthWeekday::Last, Weekday::Mon, 5)
        .between(1971, 2001),
    SpecHoliday::once("Spring Bank Holiday", 2002, 6, 4),
    SpecHoliday::nth("Spring Bank Holiday", EnumNthWeekday::Last, Weekday::Mon, 5)
        .between(2003, 2011),
    SpecHoliday::once("Spring Bank Holiday", 2012, 6, 4),
    SpecHoliday::nth("Spring Bank Holiday", EnumNthWeekday::Last, Weekday::Mon, 5)
        .between(2013, 2021),
    SpecHoliday::once("Spring Bank Holiday", 2022, 6, 2),
    SpecHoliday::nth("Spring Bank Holiday", EnumNthWeekday::Last, Weekday::Mon, 5).since(2023),
    SpecHoliday::observed("Christmas Day", 12, 25, EnumObservance::NextWorkday),
    SpecHoliday::observed("Boxing Day", 12, 26, EnumObservance::NextWorkday),
    SpecHoliday::once("Wedding of Charles and Diana", 1981, 7, 29),
    SpecHoliday::once("Millennium Celebrations", 1999, 12, 31),
    SpecHoliday::once("Golden Jubilee of Elizabeth II", 2002, 6, 3),
    SpecHoliday::once("Wedding of William and Catherine", 2011, 4, 29),
    SpecHoliday::once("Diamond Jubilee of Elizabeth II", 2012, 6, 5),
    SpecHoliday::once("Platinum Jubilee of Elizabeth II", 2022, 6, 3),
    SpecHoliday::once("State Funeral of Queen Elizabeth II", 2022, 9, 19),
    SpecHoliday::once("Coronation of Charles III", 2023, 5, 8),
];

const ENGLAND_WALES: &[SpecHoliday] = &[
    SpecHoliday::easter("Easter Monday", 1),
    SpecHoliday::nth("Late Summer Bank Holiday", EnumNthWeekday::Last, Weekday::Mon, 8).since(1971),
];

const REGIONS: &[SpecRegion] = &[
    SpecRegion {
        code: "ENG",
        name: "England",
        holidays: ENGLAND_WALES,
    },
    SpecRegion {
        code: "NIR",
        name: "Northern Ireland",
        holidays: &[
            SpecHoliday::observed("Saint Patrick's Day", 3, 17, EnumObservance::NextWorkday),
            SpecHoliday::easter("Easter Monday", 1),
            SpecHoliday::observed("Battle of the Boyne", 7, 12, EnumObservance::NextWorkday),
            SpecHoliday::nth("Late Summer Bank Holiday", EnumNthWeekday::Last, Weekday::Mon, 8)
                .since(1971),
        ],
    },
    SpecRegion {
        code: "SCT",
        name: "Scotland",
        holidays: &[
            SpecHoliday::observed("New Year Holiday", 1, 2, EnumObservance::NextWorkday),
            SpecHoliday::nth("Summer Bank Holiday", EnumNthWeekday::First, Weekday::Mon, 8),
            SpecHoliday::observed("Saint Andrew's Day", 11, 30, EnumObservance::NextWorkday)
                .since(2006),
        ],
    },
    SpecRegion {
        code: "WLS",
        name: "Wales",
        holidays: ENGLAND_WALES,
    },
];

pub(crate) const UNITED_KINGDOM: SpecCountry = SpecCountry {
    code: "GB",
    name: "United Kingdom",
    holidays: HOLIDAYS,
    holidays_no_region: ENGLAND_WALES,
    regions: REGIONS,
};
