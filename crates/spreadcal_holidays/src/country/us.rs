//! United States federal and state holidays.

use chrono::Weekday;

use crate::spec::{EnumNthWeekday, EnumObservance, SpecCountry, SpecHoliday, SpecRegion};

const HOLIDAYS: &[SpecHoliday] = &[
    SpecHoliday::observed("New Year's Day", 1, 1, EnumObservance::NearestWeekday),
    SpecHoliday::nth("Martin Luther King Jr. Day", EnumNthWeekday::Third, Weekday::Mon, 1)
        .since(1986),
    SpecHoliday::fixed("Washington's Birthday", 2, 22).until(1970),
    SpecHoliday::nth("Washington's Birthday", EnumNthWeekday::Third, Weekday::Mon, 2).since(1971),
    SpecHoliday::fixed("Memorial Day", 5, 30).until(1970),
    SpecHoliday::nth("Memorial Day", EnumNthWeekday::Last, Weekday::Mon, 5).since(1971),
    SpecHoliday::observed(
        "Juneteenth National Independence Day",
        6,
        19,
        EnumObservance::NearestWeekday,
    )
    .since(2021),
    SpecHoliday::observed("Independence Day", 7, 4, EnumObservance::NearestWeekday),
    SpecHoliday::nth("Labor Day", EnumNthWeekday::First, Weekday::Mon, 9).since(1894),
    SpecHoliday::nth("Columbus Day", EnumNthWeekday::Second, Weekday::Mon, 10).since(1971),
    SpecHoliday::observed("Veterans Day", 11, 11, EnumObservance::NearestWeekday).since(1938),
    SpecHoliday::nth("Thanksgiving", EnumNthWeekday::Fourth, Weekday::Thu, 11).since(1942),
    SpecHoliday::observed("Christmas Day", 12, 25, EnumObservance::NearestWeekday),
];

const REGIONS: &[SpecRegion] = &[
    SpecRegion {
        code: "CA",
        name: "California",
        holidays: &[
            SpecHoliday::observed("Cesar Chavez Day", 3, 31, EnumObservance::SundayToMonday)
                .since(1995),
            SpecHoliday::on_or_after("Day After Thanksgiving", Weekday::Fri, 11, 23).since(1975),
        ],
    },
    SpecRegion {
        code: "DC",
        name: "District of Columbia",
        holidays: &[
            SpecHoliday::observed("Emancipation Day", 4, 16, EnumObservance::NearestWeekday)
                .since(2005),
        ],
    },
    SpecRegion {
        code: "HI",
        name: "Hawaii",
        holidays: &[
            SpecHoliday::observed(
                "Prince Jonah Kuhio Kalanianaole Day",
                3,
                26,
                EnumObservance::NearestWeekday,
            )
            .since(1949),
            SpecHoliday::observed("Kamehameha Day", 6, 11, EnumObservance::NearestWeekday)
                .since(1872),
            SpecHoliday::nth("Statehood Day", EnumNthWeekday::Third, Weekday::Fri, 8).since(1959),
        ],
    },
    SpecRegion {
        code: "MA",
        name: "Massachusetts",
        holidays: &[
            SpecHoliday::nth("Patriots' Day", EnumNthWeekday::Third, Weekday::Mon, 4).since(1969),
        ],
    },
    SpecRegion {
        code: "NY",
        name: "New York",
        holidays: &[SpecHoliday::fixed("Lincoln's Birthday", 2, 12)],
    },
    SpecRegion {
        code: "TX",
        name: "Texas",
        holidays: &[
            SpecHoliday::fixed("Texas Independence Day", 3, 2),
            SpecHoliday::fixed("San Jacinto Day", 4, 21),
            SpecHoliday::fixed("Emancipation Day In Texas", 6, 19).since(1980),
            SpecHoliday::fixed("Lyndon Baines Johnson Day", 8, 27).since(1973),
            SpecHoliday::on_or_after("Friday After Thanksgiving", Weekday::Fri, 11, 23),
        ],
    },
];

pub(crate) const UNITED_STATES: SpecCountry = SpecCountry {
    code: "US",
    name: "United States",
    holidays: HOLIDAYS,
    holidays_no_region: &[],
    regions: REGIONS,
};
