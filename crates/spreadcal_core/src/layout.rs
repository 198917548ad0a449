//! Year and month layout engine.

use chrono::Datelike;

use crate::conf::N_DAYS_PER_WEEK;
use crate::spec::{
    EnumDayClass, Result, SpecDayCell, SpecMonthGrid, SpecWeekRow, SpecWeekendDays,
    SpecYearSheet,
};
use crate::util::{
    derive_days_in_month, derive_first_of_month, derive_month_order, validate_month,
    validate_year,
};

/// Lay out one year as twelve month grids.
///
/// Months are emitted starting at `start_month` and wrap past December, all
/// within `year`. Each day cell starts out `Weekend` or `Plain` depending on
/// `weekend_days`; holidays are applied later by
/// [`crate::classify::classify_year`].
///
/// Fails with `InvalidYear` / `InvalidMonth` before any cell is built.
pub fn build_year(
    year: i32,
    start_month: u32,
    weekend_days: &SpecWeekendDays,
) -> Result<SpecYearSheet> {
    validate_year(year)?;
    validate_month(start_month)?;

    let l_months = derive_month_order(start_month)?
        .into_iter()
        .map(|month| build_month(year, month, weekend_days))
        .collect::<Result<Vec<_>>>()?;

    Ok(SpecYearSheet {
        year,
        start_month,
        months: l_months,
    })
}

/// Lay out one month as Monday-first week rows.
///
/// The first row is left-padded with `None` so day 1 lands in its weekday
/// column; the last row is right-padded to a full week.
pub fn build_month(
    year: i32,
    month: u32,
    weekend_days: &SpecWeekendDays,
) -> Result<SpecMonthGrid> {
    let date_first = derive_first_of_month(year, month)?;
    let n_days = derive_days_in_month(year, month)? as usize;
    let n_col_first = date_first.weekday().num_days_from_monday() as usize;
    let n_weeks = (n_col_first + n_days).div_ceil(N_DAYS_PER_WEEK);

    let mut l_weeks: Vec<SpecWeekRow> = (0..n_weeks).map(|_| Default::default()).collect();
    for date in date_first.iter_days().take(n_days) {
        let n_slot = n_col_first + date.day0() as usize;
        let (row, column) = (n_slot / N_DAYS_PER_WEEK, n_slot % N_DAYS_PER_WEEK);
        let class_day = if weekend_days.contains(date.weekday()) {
            EnumDayClass::Weekend
        } else {
            EnumDayClass::Plain
        };
        l_weeks[row][column] = Some(SpecDayCell {
            date,
            column,
            row,
            class_day,
            label: None,
        });
    }

    Ok(SpecMonthGrid {
        year,
        month,
        weeks: l_weeks,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::{NaiveDate, Weekday};

    use super::*;
    use crate::spec::CalendarError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn build_year_covers_every_date_exactly_once() {
        for year in [1900, 2000, 2023, 2024, 2100] {
            let sheet = build_year(year, 1, &SpecWeekendDays::default()).expect("build year");
            assert_eq!(sheet.months.len(), 12);

            let l_dates: Vec<NaiveDate> = sheet.days().map(|cell| cell.date).collect();
            let set_dates: BTreeSet<NaiveDate> = l_dates.iter().copied().collect();
            assert_eq!(l_dates.len(), set_dates.len(), "duplicates in {year}");

            let l_expected: Vec<NaiveDate> = date(year, 1, 1)
                .iter_days()
                .take_while(|d| d.year() == year)
                .collect();
            assert_eq!(l_dates, l_expected, "gaps in {year}");
        }
    }

    #[test]
    fn start_month_rotates_months_cyclically() {
        let weekend_days = SpecWeekendDays::default();
        let sheet_jan = build_year(2024, 1, &weekend_days).expect("build year");
        for start_month in 1..=12u32 {
            let sheet = build_year(2024, start_month, &weekend_days).expect("build year");
            let mut l_rotated = sheet_jan.months.clone();
            l_rotated.rotate_left(start_month as usize - 1);
            assert_eq!(sheet.months, l_rotated);
            assert_eq!(sheet.months[0].month, start_month);
        }
    }

    #[test]
    fn initial_classification_follows_weekend_days() {
        let sheet = build_year(2024, 1, &SpecWeekendDays::default()).expect("build year");
        let cell_mon = sheet.cell(date(2024, 1, 1)).expect("jan 1");
        assert_eq!(cell_mon.weekday(), Weekday::Mon);
        assert_eq!(cell_mon.class_day, EnumDayClass::Plain);
        let cell_sat = sheet.cell(date(2024, 1, 6)).expect("jan 6");
        assert_eq!(cell_sat.class_day, EnumDayClass::Weekend);
        assert!(sheet.days().all(|cell| cell.label.is_none()));
    }

    #[test]
    fn month_grid_pads_first_week_to_weekday_column() {
        // 2024-09-01 is a Sunday: six leading placeholders, six week rows.
        let grid = build_month(2024, 9, &SpecWeekendDays::default()).expect("build month");
        assert_eq!(grid.weeks.len(), 6);
        assert!(grid.weeks[0][..6].iter().all(Option::is_none));
        let cell_first = grid.weeks[0][6].as_ref().expect("sep 1");
        assert_eq!((cell_first.row, cell_first.column), (0, 6));
        let cell_last = grid.day(30).expect("sep 30");
        assert_eq!((cell_last.row, cell_last.column), (5, 0));
        assert_eq!(grid.n_days(), 30);
        assert_eq!(grid.name(), "September");
    }

    #[test]
    fn february_without_padding_fits_four_weeks() {
        // 2021-02-01 is a Monday and the month has 28 days.
        let grid = build_month(2021, 2, &SpecWeekendDays::default()).expect("build month");
        assert_eq!(grid.weeks.len(), 4);
        assert!(grid.weeks.iter().all(|week| week.iter().all(Option::is_some)));
    }

    #[test]
    fn build_year_rejects_invalid_input() {
        let weekend_days = SpecWeekendDays::default();
        assert_eq!(
            build_year(2024, 13, &weekend_days),
            Err(CalendarError::InvalidMonth("13".to_string()))
        );
        assert_eq!(
            build_year(0, 1, &weekend_days),
            Err(CalendarError::InvalidYear("0".to_string()))
        );
    }
}
