//! Stateless helper utilities used by the XLSX writer kernel.

use std::collections::BTreeSet;

use spreadcal_core::{EnumDayClass, N_DAYS_PER_MONTH_MAX, SpecMonthGrid};

use crate::conf::{EnumFmtKey, N_COL_DAY_FIRST, N_LEN_EXCEL_SHEET_NAME_MAX, TUP_EXCEL_ILLEGAL};
use crate::spec::SpecDaySlot;

////////////////////////////////////////////////////////////////////////////////
// #region SheetNames

/// Replace Excel-illegal characters and cap the length.
pub fn sanitize_sheet_name(name: &str, replace_to: &str) -> String {
    let mut c_name = name.to_string();
    for c_illegal in TUP_EXCEL_ILLEGAL {
        c_name = c_name.replace(c_illegal, replace_to);
    }
    c_name = c_name.trim().to_string();
    if c_name.is_empty() {
        c_name = "Sheet".to_string();
    }

    c_name.chars().take(N_LEN_EXCEL_SHEET_NAME_MAX).collect()
}

/// Return `name`, or `name__N` with the smallest free `N >= 2`, and record it.
pub fn derive_unique_sheet_name(name: &str, set_names_existing: &mut BTreeSet<String>) -> String {
    if !set_names_existing.contains(name) {
        set_names_existing.insert(name.to_string());
        return name.to_string();
    }

    let base_name: String = name
        .chars()
        .take(usize::max(1, N_LEN_EXCEL_SHEET_NAME_MAX - 3))
        .collect();

    let mut n_idx = 2usize;
    loop {
        let candidate: String = format!("{base_name}__{n_idx}")
            .chars()
            .take(N_LEN_EXCEL_SHEET_NAME_MAX)
            .collect();
        if !set_names_existing.contains(&candidate) {
            set_names_existing.insert(candidate.clone());
            return candidate;
        }
        n_idx += 1;
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region MonthRows

/// Plan the 31 day columns of one month row.
///
/// Days past the month length get [`EnumFmtKey::EmptyDay`]. Notes carry the
/// holiday label and are only planned when `if_holiday_notes` is set.
pub fn plan_month_slots(grid: &SpecMonthGrid, if_holiday_notes: bool) -> Vec<SpecDaySlot> {
    let mut l_slots: Vec<SpecDaySlot> = (0..N_DAYS_PER_MONTH_MAX)
        .map(|n_offset| SpecDaySlot {
            col_idx: N_COL_DAY_FIRST + n_offset,
            fmt_key: EnumFmtKey::EmptyDay,
            note: None,
        })
        .collect();

    for cell in grid.days() {
        let Some(slot) = l_slots.get_mut(cell.day() as usize - 1) else {
            continue;
        };
        slot.fmt_key = EnumFmtKey::from_day_class(cell.class_day);
        if if_holiday_notes && cell.class_day == EnumDayClass::Holiday {
            slot.note = cell.label.clone();
        }
    }
    l_slots
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use spreadcal_core::{SpecHolidaySet, SpecWeekendDays, build_month, classify};

    use super::*;

    #[test]
    fn sanitize_sheet_name_replaces_illegal_and_caps_length() {
        assert_eq!(sanitize_sheet_name("2024/25", "_"), "2024_25");
        assert_eq!(sanitize_sheet_name("  ", "_"), "Sheet");
        let c_long = "x".repeat(40);
        assert_eq!(sanitize_sheet_name(&c_long, "_").chars().count(), 31);
    }

    #[test]
    fn unique_sheet_names_get_numeric_suffix() {
        let mut set_names = BTreeSet::new();
        assert_eq!(derive_unique_sheet_name("2024", &mut set_names), "2024");
        assert_eq!(derive_unique_sheet_name("2024", &mut set_names), "2024__2");
        assert_eq!(derive_unique_sheet_name("2024", &mut set_names), "2024__3");
        assert_eq!(derive_unique_sheet_name("2025", &mut set_names), "2025");
    }

    #[test]
    fn short_month_pads_with_empty_days() {
        let grid = build_month(2023, 2, &SpecWeekendDays::default()).expect("grid");
        let l_slots = plan_month_slots(&grid, false);
        assert_eq!(l_slots.len(), 31);
        assert_eq!(l_slots[0].col_idx, 3);
        assert_eq!(l_slots[30].col_idx, 33);
        // 2023-02-04 is a Saturday.
        assert_eq!(l_slots[3].fmt_key, EnumFmtKey::Weekend);
        assert_eq!(l_slots[0].fmt_key, EnumFmtKey::MonthDay);
        assert!(l_slots[28..].iter().all(|s| s.fmt_key == EnumFmtKey::EmptyDay));
    }

    #[test]
    fn holiday_notes_follow_option() {
        let weekend_days = SpecWeekendDays::default();
        let date = NaiveDate::from_ymd_opt(2024, 12, 25).expect("valid date");
        let holidays: SpecHolidaySet = [(date, "Christmas Day".to_string())].into_iter().collect();
        let mut grid = build_month(2024, 12, &weekend_days).expect("grid");
        for cell in grid.days_mut() {
            *cell = classify(cell.clone(), &weekend_days, &holidays, false);
        }

        let l_slots = plan_month_slots(&grid, true);
        assert_eq!(l_slots[24].fmt_key, EnumFmtKey::Holiday);
        assert_eq!(l_slots[24].note.as_deref(), Some("Christmas Day"));
        assert_eq!(l_slots.iter().filter(|s| s.note.is_some()).count(), 1);

        let l_slots = plan_month_slots(&grid, false);
        assert!(l_slots.iter().all(|s| s.note.is_none()));
    }
}
