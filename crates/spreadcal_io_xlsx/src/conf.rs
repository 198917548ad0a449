//! XLSX constants and default style preset factories.

use std::collections::BTreeMap;

use spreadcal_core::{EnumDayClass, SpecCalendarWriteOptions};

use crate::spec::SpecCellFormat;

/// Excel sheet name maximum length.
pub const N_LEN_EXCEL_SHEET_NAME_MAX: usize = 31;
/// Characters not allowed in sheet names.
pub const TUP_EXCEL_ILLEGAL: [&str; 7] = ["*", ":", "?", "/", "\\", "[", "]"];

/// Row holding the `1`..`31` day numbers.
pub const N_ROW_DAY_NUMBERS: usize = 0;
/// Row of the first displayed month.
pub const N_ROW_MONTH_FIRST: usize = 1;
/// Column holding the merged year label.
pub const N_COL_YEAR: usize = 0;
/// Column holding the month names.
pub const N_COL_MONTH: usize = 1;
/// Spacer column between month names and days.
pub const N_COL_GAP: usize = 2;
/// Column of day 1.
pub const N_COL_DAY_FIRST: usize = 3;

/// Rows that receive the fixed row height.
pub const N_ROWS_SIZED: usize = 14;
/// Row height in pixels.
pub const N_PX_ROW_HEIGHT: u16 = 30;
/// Widths of the year, month and spacer columns in pixels.
pub const TUP_PX_COL_WIDTHS_LEADING: [u16; 3] = [40, 60, 20];
/// Width of each day column in pixels.
pub const N_PX_COL_WIDTH_DAY: u16 = 30;

/// Fixed document creation date, so identical calendars save identical bytes.
pub const TUP_DOC_CREATED_YMD: (u16, u8, u8) = (2000, 1, 1);

pub const N_FONT_SIZE_DEFAULT: i64 = 10;
pub const C_BG_COLOR_WEEKEND: &str = "#929292";
pub const C_BG_COLOR_HOLIDAY: &str = "#000000";

/// Canonical format preset keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EnumFmtKey {
    /// Merged year label.
    Year,
    /// Month name.
    Month,
    /// `1`..`31` header cells.
    DayNumber,
    /// Ordinary day.
    MonthDay,
    /// Weekend day.
    Weekend,
    /// Holiday.
    Holiday,
    /// Borderless spacer.
    Empty,
    /// Slot past the end of a short month.
    EmptyDay,
}

impl EnumFmtKey {
    /// Preset used for a day of the given classification.
    pub fn from_day_class(class_day: EnumDayClass) -> Self {
        match class_day {
            EnumDayClass::Plain => Self::MonthDay,
            EnumDayClass::Weekend => Self::Weekend,
            EnumDayClass::Holiday => Self::Holiday,
        }
    }
}

/// Build default named format presets used by [`crate::writer::CalendarXlsxWriter`].
pub fn derive_default_calendar_formats() -> BTreeMap<EnumFmtKey, SpecCellFormat> {
    let cfg_base_fmt_spec = SpecCellFormat {
        border: Some(1),
        ..Default::default()
    };
    let cfg_text_fmt_spec = cfg_base_fmt_spec.with_(SpecCellFormat {
        font_size: Some(N_FONT_SIZE_DEFAULT),
        valign: Some("vcenter".to_string()),
        ..Default::default()
    });

    let mut dict_fmt = BTreeMap::new();
    dict_fmt.insert(EnumFmtKey::MonthDay, cfg_base_fmt_spec.clone());
    dict_fmt.insert(
        EnumFmtKey::Weekend,
        cfg_base_fmt_spec.with_(SpecCellFormat {
            bg_color: Some(C_BG_COLOR_WEEKEND.to_string()),
            ..Default::default()
        }),
    );
    dict_fmt.insert(
        EnumFmtKey::Holiday,
        cfg_base_fmt_spec.with_(SpecCellFormat {
            bg_color: Some(C_BG_COLOR_HOLIDAY.to_string()),
            ..Default::default()
        }),
    );
    dict_fmt.insert(
        EnumFmtKey::Year,
        cfg_text_fmt_spec.with_(SpecCellFormat {
            bold: Some(true),
            align: Some("center".to_string()),
            ..Default::default()
        }),
    );
    dict_fmt.insert(
        EnumFmtKey::Month,
        cfg_text_fmt_spec.with_(SpecCellFormat {
            align: Some("left".to_string()),
            ..Default::default()
        }),
    );
    dict_fmt.insert(
        EnumFmtKey::DayNumber,
        cfg_text_fmt_spec.with_(SpecCellFormat {
            align: Some("center".to_string()),
            ..Default::default()
        }),
    );
    dict_fmt.insert(
        EnumFmtKey::Empty,
        SpecCellFormat {
            border: Some(0),
            ..Default::default()
        },
    );
    dict_fmt.insert(
        EnumFmtKey::EmptyDay,
        SpecCellFormat {
            right: Some(0),
            bottom: Some(0),
            ..Default::default()
        },
    );

    dict_fmt
}

/// Default presets with the fill overrides of `write_options` applied.
pub fn derive_calendar_formats(
    write_options: &SpecCalendarWriteOptions,
) -> BTreeMap<EnumFmtKey, SpecCellFormat> {
    let mut dict_fmt = derive_default_calendar_formats();
    let l_overrides = [
        (EnumFmtKey::Weekend, &write_options.weekend_bg_color),
        (EnumFmtKey::Holiday, &write_options.holiday_bg_color),
    ];
    for (fmt_key, bg_color) in l_overrides {
        if let (Some(bg_color), Some(fmt)) = (bg_color, dict_fmt.get_mut(&fmt_key)) {
            *fmt = fmt.with_(SpecCellFormat {
                bg_color: Some(bg_color.clone()),
                ..Default::default()
            });
        }
    }
    dict_fmt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_presets_cover_every_key() {
        let dict_fmt = derive_default_calendar_formats();
        assert_eq!(dict_fmt.len(), 8);
        assert_eq!(
            dict_fmt[&EnumFmtKey::Weekend].bg_color.as_deref(),
            Some(C_BG_COLOR_WEEKEND)
        );
        assert_eq!(dict_fmt[&EnumFmtKey::Year].bold, Some(true));
        assert_eq!(dict_fmt[&EnumFmtKey::Year].font_size, Some(10));
        assert_eq!(dict_fmt[&EnumFmtKey::Empty].border, Some(0));
        assert_eq!(dict_fmt[&EnumFmtKey::EmptyDay].border, None);
        assert_eq!(dict_fmt[&EnumFmtKey::EmptyDay].right, Some(0));
    }

    #[test]
    fn color_overrides_touch_only_fills() {
        let options = SpecCalendarWriteOptions {
            holiday_bg_color: Some("#FF0000".to_string()),
            ..Default::default()
        };
        let dict_fmt = derive_calendar_formats(&options);
        let fmt_holiday = &dict_fmt[&EnumFmtKey::Holiday];
        assert_eq!(fmt_holiday.bg_color.as_deref(), Some("#FF0000"));
        assert_eq!(fmt_holiday.border, Some(1));
        assert_eq!(
            dict_fmt[&EnumFmtKey::Weekend].bg_color.as_deref(),
            Some(C_BG_COLOR_WEEKEND)
        );
    }

    #[test]
    fn day_class_maps_to_preset() {
        assert_eq!(
            EnumFmtKey::from_day_class(EnumDayClass::Plain),
            EnumFmtKey::MonthDay
        );
        assert_eq!(
            EnumFmtKey::from_day_class(EnumDayClass::Holiday),
            EnumFmtKey::Holiday
        );
    }
}
