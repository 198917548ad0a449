//! `spreadcal_holidays` v1:
//! Rule-table holiday provider.
//!
//! - `spec`     : rule, holiday, region and country models
//! - `rule`     : rule evaluation (Easter, nth weekday, observed shifts)
//! - `registry` : country/region lookup and `HolidayProvider`
mod country;
pub mod registry;
pub mod rule;
pub mod spec;

pub use registry::{
    HolidayProvider, RuleHolidayProvider, country_holidays, find_country, find_region,
    list_countries,
};
pub use rule::{derive_easter_sunday, derive_holiday_set};
pub use spec::{
    EnumHolidayRule, EnumNthWeekday, EnumObservance, SpecCountry, SpecHoliday, SpecRegion,
};
