//! Australia national and state holidays.

use chrono::Weekday;

use crate::spec::{EnumNthWeekday, EnumObservance, SpecCountry, SpecHoliday, SpecRegion};

const HOLIDAYS: &[SpecHoliday] = &[
    SpecHoliday::observed("New Year's Day", 1, 1, EnumObservance::NextWorkday),
    SpecHoliday::observed("Australia Day", 1, 26, EnumObservance::NextWorkday).since(1935),
    SpecHoliday::easter("Good Friday", -2),
    SpecHoliday::easter("Easter Monday", 1),
    SpecHoliday::fixed("Anzac Day", 4, 25).since(1921),
    SpecHoliday::observed("Christmas Day", 12, 25, EnumObservance::NextWorkday),
    SpecHoliday::observed("Boxing Day", 12, 26, EnumObservance::NextWorkday),
    SpecHoliday::once("National Day of Mourning for Queen Elizabeth II", 2022, 9, 22),
];

const EASTER_SATURDAY: SpecHoliday = SpecHoliday::easter("Easter Saturday", -1);
const EASTER_SUNDAY: SpecHoliday = SpecHoliday::easter("Easter Sunday", 0);
const QUEENS_BIRTHDAY_JUNE: SpecHoliday =
    SpecHoliday::nth("Queen's Birthday", EnumNthWeekday::Second, Weekday::Mon, 6).until(2022);
const KINGS_BIRTHDAY_JUNE: SpecHoliday =
    SpecHoliday::nth("King's Birthday", EnumNthWeekday::Second, Weekday::Mon, 6).since(2023);

const REGIONS: &[SpecRegion] = &[
    SpecRegion {
        code: "ACT",
        name: "Australian Capital Territory",
        holidays: &[
            EASTER_SATURDAY,
            EASTER_SUNDAY,
            SpecHoliday::nth("Canberra Day", EnumNthWeekday::Second, Weekday::Mon, 3).since(2008),
            SpecHoliday::on_or_after("Reconciliation Day", Weekday::Mon, 5, 27).since(2018),
            QUEENS_BIRTHDAY_JUNE,
            KINGS_BIRTHDAY_JUNE,
            SpecHoliday::nth("Labour Day", EnumNthWeekday::First, Weekday::Mon, 10),
        ],
    },
    SpecRegion {
        code: "NSW",
        name: "New South Wales",
        holidays: &[
            EASTER_SATURDAY,
            EASTER_SUNDAY,
            QUEENS_BIRTHDAY_JUNE,
            KINGS_BIRTHDAY_JUNE,
            SpecHoliday::nth("Labour Day", EnumNthWeekday::First, Weekday::Mon, 10),
        ],
    },
    SpecRegion {
        code: "QLD",
        name: "Queensland",
        holidays: &[
            EASTER_SATURDAY,
            EASTER_SUNDAY,
            SpecHoliday::nth("Labour Day", EnumNthWeekday::First, Weekday::Mon, 5),
            SpecHoliday::nth("Queen's Birthday", EnumNthWeekday::First, Weekday::Mon, 10)
                .between(2016, 2022),
            SpecHoliday::nth("King's Birthday", EnumNthWeekday::First, Weekday::Mon, 10)
                .since(2023),
        ],
    },
    SpecRegion {
        code: "VIC",
        name: "Victoria",
        holidays: &[
            SpecHoliday::nth("Labour Day", EnumNthWeekday::Second, Weekday::Mon, 3),
            EASTER_SATURDAY,
            EASTER_SUNDAY,
            QUEENS_BIRTHDAY_JUNE,
            KINGS_BIRTHDAY_JUNE,
            SpecHoliday::nth("Melbourne Cup Day", EnumNthWeekday::First, Weekday::Tue, 11),
        ],
    },
    SpecRegion {
        code: "WA",
        name: "Western Australia",
        holidays: &[
            SpecHoliday::nth("Labour Day", EnumNthWeekday::First, Weekday::Mon, 3),
            SpecHoliday::nth("Western Australia Day", EnumNthWeekday::First, Weekday::Mon, 6),
        ],
    },
];

pub(crate) const AUSTRALIA: SpecCountry = SpecCountry {
    code: "AU",
    name: "Australia",
    holidays: HOLIDAYS,
    holidays_no_region: &[],
    regions: REGIONS,
};
