//! Weekend/holiday fill classification.

use crate::spec::{EnumDayClass, SpecDayCell, SpecHolidaySet, SpecWeekendDays, SpecYearSheet};

/// Resolve the fill class of one date.
///
/// A holiday wins over a weekend unless `if_suppress_holiday_weekends` is
/// set and the date is also a weekend day.
pub fn resolve_day_class(
    if_is_holiday: bool,
    if_is_weekend: bool,
    if_suppress_holiday_weekends: bool,
) -> EnumDayClass {
    match (if_is_holiday, if_is_weekend) {
        (true, true) if if_suppress_holiday_weekends => EnumDayClass::Weekend,
        (true, _) => EnumDayClass::Holiday,
        (false, true) => EnumDayClass::Weekend,
        (false, false) => EnumDayClass::Plain,
    }
}

/// Classify one day cell against the weekend days and holidays.
///
/// The returned cell carries the holiday name as `label` only when it is
/// classified `Holiday`.
pub fn classify(
    cell: SpecDayCell,
    weekend_days: &SpecWeekendDays,
    holidays: &SpecHolidaySet,
    if_suppress_holiday_weekends: bool,
) -> SpecDayCell {
    let holiday_name = holidays.get(cell.date);
    let class_day = resolve_day_class(
        holiday_name.is_some(),
        weekend_days.contains(cell.weekday()),
        if_suppress_holiday_weekends,
    );
    let label = match class_day {
        EnumDayClass::Holiday => holiday_name.map(str::to_string),
        EnumDayClass::Weekend | EnumDayClass::Plain => None,
    };
    SpecDayCell {
        class_day,
        label,
        ..cell
    }
}

/// Classify every cell of a laid-out year.
pub fn classify_year(
    mut sheet: SpecYearSheet,
    weekend_days: &SpecWeekendDays,
    holidays: &SpecHolidaySet,
    if_suppress_holiday_weekends: bool,
) -> SpecYearSheet {
    for grid in &mut sheet.months {
        for week in &mut grid.weeks {
            for slot in week.iter_mut() {
                if let Some(cell) = slot.take() {
                    *slot = Some(classify(
                        cell,
                        weekend_days,
                        holidays,
                        if_suppress_holiday_weekends,
                    ));
                }
            }
        }
    }
    sheet
}
