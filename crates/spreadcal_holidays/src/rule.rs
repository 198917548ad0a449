//! Holiday rule evaluation.

use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use spreadcal_core::SpecHolidaySet;

use crate::spec::{EnumHolidayRule, EnumNthWeekday, EnumObservance, SpecHoliday};

/// Western (Gregorian) Easter Sunday of `year`.
///
/// Anonymous Gregorian computus (Meeus/Jones/Butcher).
pub fn derive_easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

/// Date of `nth` `weekday` in `year`-`month`.
pub fn derive_nth_weekday(
    year: i32,
    month: u32,
    weekday: Weekday,
    nth: EnumNthWeekday,
) -> Option<NaiveDate> {
    let n = match nth {
        EnumNthWeekday::First => 1,
        EnumNthWeekday::Second => 2,
        EnumNthWeekday::Third => 3,
        EnumNthWeekday::Fourth => 4,
        EnumNthWeekday::Last => {
            let (n_year_next, n_month_next) = if month == 12 {
                (year + 1, 1)
            } else {
                (year, month + 1)
            };
            let date_last = NaiveDate::from_ymd_opt(n_year_next, n_month_next, 1)?.pred_opt()?;
            return derive_weekday_on_or_before(date_last, weekday);
        }
    };
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, n)
}

fn derive_weekday_on_or_after(date: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let n_ahead = (7 + weekday.num_days_from_monday() - date.weekday().num_days_from_monday()) % 7;
    date.checked_add_days(Days::new(u64::from(n_ahead)))
}

fn derive_weekday_on_or_before(date: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let n_back = (7 + date.weekday().num_days_from_monday() - weekday.num_days_from_monday()) % 7;
    date.checked_sub_days(Days::new(u64::from(n_back)))
}

/// Actual date of `holiday` in `year`, before any observance shift.
///
/// `None` when the rule is not in force that year or names an impossible
/// date.
pub fn derive_holiday_date(holiday: &SpecHoliday, year: i32) -> Option<NaiveDate> {
    if !holiday.applies_to(year) {
        return None;
    }
    match holiday.rule {
        EnumHolidayRule::Fixed { month, day, .. } => NaiveDate::from_ymd_opt(year, month, day),
        EnumHolidayRule::NthWeekday {
            month,
            weekday,
            nth,
        } => derive_nth_weekday(year, month, weekday, nth),
        EnumHolidayRule::WeekdayOnOrAfter {
            month,
            day,
            weekday,
        } => derive_weekday_on_or_after(NaiveDate::from_ymd_opt(year, month, day)?, weekday),
        EnumHolidayRule::WeekdayOnOrBefore {
            month,
            day,
            weekday,
        } => derive_weekday_on_or_before(NaiveDate::from_ymd_opt(year, month, day)?, weekday),
        EnumHolidayRule::EasterOffset(n_offset) => {
            let easter = derive_easter_sunday(year)?;
            if n_offset >= 0 {
                easter.checked_add_days(Days::new(n_offset.unsigned_abs()))
            } else {
                easter.checked_sub_days(Days::new(n_offset.unsigned_abs()))
            }
        }
        EnumHolidayRule::Once {
            year: n_year,
            month,
            day,
        } => {
            if n_year == year {
                NaiveDate::from_ymd_opt(year, month, day)
            } else {
                None
            }
        }
    }
}

fn is_saturday_or_sunday(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn derive_observed_date(
    date: NaiveDate,
    observance: EnumObservance,
    set_dates_taken: &BTreeSet<NaiveDate>,
) -> Option<NaiveDate> {
    match (observance, date.weekday()) {
        (EnumObservance::None, _) => None,
        (EnumObservance::NearestWeekday, Weekday::Sat) => date.pred_opt(),
        (EnumObservance::NearestWeekday, Weekday::Sun) => date.succ_opt(),
        (EnumObservance::SundayToMonday, Weekday::Sun) => date.succ_opt(),
        (EnumObservance::NextWorkday, Weekday::Sat | Weekday::Sun) => {
            let mut candidate = date.succ_opt()?;
            while is_saturday_or_sunday(candidate) || set_dates_taken.contains(&candidate) {
                candidate = candidate.succ_opt()?;
            }
            Some(candidate)
        }
        _ => None,
    }
}

/// Evaluate `holiday_groups` (country-wide first, then region) for `year`.
///
/// Rules are evaluated for the neighbouring years too so an observed day that
/// crosses a year boundary (e.g. New Year's Day on a Saturday observed on
/// Dec 31) lands in the right year. Observed days are assigned in table
/// order; a `NextWorkday` shift skips dates already taken by another holiday.
pub fn derive_holiday_set(year: i32, holiday_groups: &[&[SpecHoliday]]) -> SpecHolidaySet {
    let mut l_actual: Vec<(NaiveDate, &SpecHoliday)> = Vec::new();
    for n_year in [year - 1, year, year + 1] {
        for holidays in holiday_groups {
            for holiday in holidays.iter() {
                if let Some(date) = derive_holiday_date(holiday, n_year) {
                    l_actual.push((date, holiday));
                }
            }
        }
    }

    let mut set_dates_taken: BTreeSet<NaiveDate> =
        l_actual.iter().map(|(date, _)| *date).collect();
    let mut l_observed: Vec<(NaiveDate, String)> = Vec::new();
    for (date, holiday) in &l_actual {
        let EnumHolidayRule::Fixed { observance, .. } = holiday.rule else {
            continue;
        };
        if let Some(date_observed) = derive_observed_date(*date, observance, &set_dates_taken) {
            set_dates_taken.insert(date_observed);
            l_observed.push((date_observed, format!("{} (observed)", holiday.name)));
        }
    }

    l_actual
        .into_iter()
        .map(|(date, holiday)| (date, holiday.name.to_string()))
        .chain(l_observed)
        .filter(|(date, _)| date.year() == year)
        .collect()
}
