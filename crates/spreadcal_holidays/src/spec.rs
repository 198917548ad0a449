//! Holiday rule models and country/region tables.

use chrono::Weekday;

////////////////////////////////////////////////////////////////////////////////
// #region EnumsInit

/// Which occurrence of a weekday within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumNthWeekday {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

/// How a holiday falling on Saturday/Sunday is observed on a working day.
///
/// Observed days are added next to the actual date, named `"<name> (observed)"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumObservance {
    /// No observed day.
    #[default]
    None,
    /// Saturday moves to Friday, Sunday to Monday.
    NearestWeekday,
    /// Sunday moves to Monday; Saturday is not observed.
    SundayToMonday,
    /// Moves forward to the next Monday-Friday date that is not already a
    /// holiday.
    NextWorkday,
}

/// Date rule of one holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumHolidayRule {
    /// Same month/day every year.
    Fixed {
        month: u32,
        day: u32,
        observance: EnumObservance,
    },
    /// N-th (or last) `weekday` of `month`.
    NthWeekday {
        month: u32,
        weekday: Weekday,
        nth: EnumNthWeekday,
    },
    /// First `weekday` on or after `month`/`day`.
    WeekdayOnOrAfter { month: u32, day: u32, weekday: Weekday },
    /// Last `weekday` on or before `month`/`day`.
    WeekdayOnOrBefore { month: u32, day: u32, weekday: Weekday },
    /// Offset in days from Western Easter Sunday.
    EasterOffset(i64),
    /// A one-off date.
    Once { year: i32, month: u32, day: u32 },
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region HolidayTables

/// One named holiday with its date rule and effective years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecHoliday {
    /// English display name.
    pub name: &'static str,
    /// Date rule.
    pub rule: EnumHolidayRule,
    /// First year the rule applies (inclusive).
    pub year_first: Option<i32>,
    /// Last year the rule applies (inclusive).
    pub year_last: Option<i32>,
}

impl SpecHoliday {
    /// Holiday on the same date every year.
    pub const fn fixed(name: &'static str, month: u32, day: u32) -> Self {
        Self::from_rule(
            name,
            EnumHolidayRule::Fixed {
                month,
                day,
                observance: EnumObservance::None,
            },
        )
    }

    /// Fixed-date holiday with an observed working day.
    pub const fn observed(
        name: &'static str,
        month: u32,
        day: u32,
        observance: EnumObservance,
    ) -> Self {
        Self::from_rule(
            name,
            EnumHolidayRule::Fixed {
                month,
                day,
                observance,
            },
        )
    }

    pub const fn nth(
        name: &'static str,
        nth: EnumNthWeekday,
        weekday: Weekday,
        month: u32,
    ) -> Self {
        Self::from_rule(
            name,
            EnumHolidayRule::NthWeekday {
                month,
                weekday,
                nth,
            },
        )
    }

    pub const fn on_or_after(name: &'static str, weekday: Weekday, month: u32, day: u32) -> Self {
        Self::from_rule(
            name,
            EnumHolidayRule::WeekdayOnOrAfter {
                month,
                day,
                weekday,
            },
        )
    }

    pub const fn on_or_before(
        name: &'static str,
        weekday: Weekday,
        month: u32,
        day: u32,
    ) -> Self {
        Self::from_rule(
            name,
            EnumHolidayRule::WeekdayOnOrBefore {
                month,
                day,
                weekday,
            },
        )
    }

    pub const fn easter(name: &'static str, offset_days: i64) -> Self {
        Self::from_rule(name, EnumHolidayRule::EasterOffset(offset_days))
    }

    pub const fn once(name: &'static str, year: i32, month: u32, day: u32) -> Self {
        Self::from_rule(name, EnumHolidayRule::Once { year, month, day })
    }

    /// Restrict to years `>= year`.
    pub const fn since(self, year: i32) -> Self {
        Self {
            year_first: Some(year),
            ..self
        }
    }

    /// Restrict to years `<= year`.
    pub const fn until(self, year: i32) -> Self {
        Self {
            year_last: Some(year),
            ..self
        }
    }

    /// Restrict to `first..=last`.
    pub const fn between(self, first: i32, last: i32) -> Self {
        self.since(first).until(last)
    }

    /// Whether the rule is in force in `year`.
    pub fn applies_to(&self, year: i32) -> bool {
        self.year_first.is_none_or(|first| year >= first)
            && self.year_last.is_none_or(|last| year <= last)
    }

    const fn from_rule(name: &'static str, rule: EnumHolidayRule) -> Self {
        Self {
            name,
            rule,
            year_first: None,
            year_last: None,
        }
    }
}

/// Subdivision (state, province, nation) with holidays on top of the
/// country-wide ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecRegion {
    /// Subdivision code, e.g. `"CA"` in the US or `"SCT"` in GB.
    pub code: &'static str,
    /// English subdivision name.
    pub name: &'static str,
    /// Region-only holidays.
    pub holidays: &'static [SpecHoliday],
}

/// Country with country-wide holidays and supported subdivisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecCountry {
    /// ISO 3166-1 alpha-2 code.
    pub code: &'static str,
    /// English short name.
    pub name: &'static str,
    /// Holidays observed everywhere in the country.
    pub holidays: &'static [SpecHoliday],
    /// Holidays applied only when no region is selected.
    pub holidays_no_region: &'static [SpecHoliday],
    /// Supported subdivisions, sorted by code.
    pub regions: &'static [SpecRegion],
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_bounds_are_inclusive() {
        let holiday = SpecHoliday::fixed("Test", 1, 1).between(2000, 2002);
        assert!(!holiday.applies_to(1999));
        assert!(holiday.applies_to(2000));
        assert!(holiday.applies_to(2002));
        assert!(!holiday.applies_to(2003));
        assert!(SpecHoliday::fixed("Open", 1, 1).applies_to(1));
    }
}
