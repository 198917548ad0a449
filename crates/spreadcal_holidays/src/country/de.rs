//! Germany federal and state holidays.

use crate::spec::{SpecCountry, SpecHoliday, SpecRegion};

const HOLIDAYS: &[SpecHoliday] = &[
    SpecHoliday::fixed("New Year's Day", 1, 1),
    SpecHoliday::easter("Good Friday", -2),
    SpecHoliday::easter("Easter Monday", 1),
    SpecHoliday::fixed("Labor Day", 5, 1),
    SpecHoliday::easter("Ascension Day", 39),
    SpecHoliday::easter("Whit Monday", 50),
    SpecHoliday::fixed("German Unity Day", 10, 3).since(1990),
    SpecHoliday::once("Reformation Day", 2017, 10, 31),
    SpecHoliday::fixed("Christmas Day", 12, 25),
    SpecHoliday::fixed("Second Day of Christmas", 12, 26),
];

const EPIPHANY: SpecHoliday = SpecHoliday::fixed("Epiphany", 1, 6);
const CORPUS_CHRISTI: SpecHoliday = SpecHoliday::easter("Corpus Christi", 60);
const ALL_SAINTS_DAY: SpecHoliday = SpecHoliday::fixed("All Saints' Day", 11, 1);
const REFORMATION_DAY: SpecHoliday = SpecHoliday::fixed("Reformation Day", 10, 31);
const REFORMATION_DAY_SINCE_2018: SpecHoliday = REFORMATION_DAY.since(2018);
const WOMENS_DAY: SpecHoliday = SpecHoliday::fixed("International Women's Day", 3, 8);

const REGIONS: &[SpecRegion] = &[
    SpecRegion {
        code: "BB",
        name: "Brandenburg",
        holidays: &[
            SpecHoliday::easter("Easter Sunday", 0),
            SpecHoliday::easter("Whit Sunday", 49),
            REFORMATION_DAY,
        ],
    },
    SpecRegion {
        code: "BE",
        name: "Berlin",
        holidays: &[WOMENS_DAY.since(2019)],
    },
    SpecRegion {
        code: "BW",
        name: "Baden-Württemberg",
        holidays: &[EPIPHANY, CORPUS_CHRISTI, ALL_SAINTS_DAY],
    },
    SpecRegion {
        code: "BY",
        name: "Bavaria",
        holidays: &[EPIPHANY, CORPUS_CHRISTI, ALL_SAINTS_DAY],
    },
    SpecRegion {
        code: "HB",
        name: "Bremen",
        holidays: &[REFORMATION_DAY_SINCE_2018],
    },
    SpecRegion {
        code: "HE",
        name: "Hesse",
        holidays: &[CORPUS_CHRISTI],
    },
    SpecRegion {
        code: "HH",
        name: "Hamburg",
        holidays: &[REFORMATION_DAY_SINCE_2018],
    },
    SpecRegion {
        code: "MV",
        name: "Mecklenburg-Vorpommern",
        holidays: &[REFORMATION_DAY, WOMENS_DAY.since(2023)],
    },
    SpecRegion {
        code: "NI",
        name: "Lower Saxony",
        holidays: &[REFORMATION_DAY_SINCE_2018],
    },
    SpecRegion {
        code: "NW",
        name: "North Rhine-Westphalia",
        holidays: &[CORPUS_CHRISTI, ALL_SAINTS_DAY],
    },
    SpecRegion {
        code: "RP",
        name: "Rhineland-Palatinate",
        holidays: &[CORPUS_CHRISTI, ALL_SAINTS_DAY],
    },
    SpecRegion {
        code: "SH",
        name: "Schleswig-Holstein",
        holidays: &[REFORMATION_DAY_SINCE_2018],
    },
    SpecRegion {
        code: "SL",
        name: "Saarland",
        holidays: &[
            CORPUS_CHRISTI,
            SpecHoliday::fixed("Assumption Day", 8, 15),
            ALL_SAINTS_DAY,
        ],
    },
    SpecRegion {
        code: "SN",
        name: "Saxony",
        holidays: &[
            REFORMATION_DAY,
            SpecHoliday::on_or_before("Repentance and Prayer Day", chrono::Weekday::Wed, 11, 22)
                .since(1995),
        ],
    },
    SpecRegion {
        code: "ST",
        name: "Saxony-Anhalt",
        holidays: &[EPIPHANY, REFORMATION_DAY],
    },
    SpecRegion {
        code: "TH",
        name: "Thuringia",
        holidays: &[
            REFORMATION_DAY,
            SpecHoliday::fixed("World Children's Day", 9, 20).since(2019),
        ],
    },
];

pub(crate) const GERMANY: SpecCountry = SpecCountry {
    code: "DE",
    name: "Germany",
    holidays: HOLIDAYS,
    holidays_no_region: &[],
    regions: REGIONS,
};
