//! XLSX writer kernel that renders year sheets into a year-planner workbook.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use rust_xlsxwriter::{
    DocProperties, ExcelDateTime, Format, FormatAlign, FormatBorder, Note, Workbook, Worksheet,
    XlsxError,
};
use spreadcal_core::{
    EnumDayClass, N_DAYS_PER_MONTH_MAX, SpecCalendarWriteOptions, SpecMonthGrid, SpecYearSheet,
};

use crate::conf::{
    EnumFmtKey, N_COL_DAY_FIRST, N_COL_GAP, N_COL_MONTH, N_COL_YEAR, N_PX_COL_WIDTH_DAY,
    N_PX_ROW_HEIGHT, N_ROW_DAY_NUMBERS, N_ROW_MONTH_FIRST, N_ROWS_SIZED, TUP_DOC_CREATED_YMD,
    TUP_PX_COL_WIDTHS_LEADING, derive_calendar_formats,
};
use crate::spec::{SpecCellFormat, SpecSheetReport, SpecXlsxReport};
use crate::util::{derive_unique_sheet_name, plan_month_slots, sanitize_sheet_name};

/// Stateful workbook writer.
pub struct CalendarXlsxWriter {
    path_file_out: PathBuf,
    workbook: Workbook,
    dict_fmt: BTreeMap<EnumFmtKey, Format>,
    write_options: SpecCalendarWriteOptions,
    set_sheet_names_existing: BTreeSet<String>,
    report: SpecXlsxReport,
    if_closed: bool,
}

impl CalendarXlsxWriter {
    /// Create writer bound to output path and rendering options.
    ///
    /// The workbook is buffered in memory until [`Self::close`] is called.
    pub fn new(path_file_out: PathBuf, write_options: SpecCalendarWriteOptions) -> Self {
        let dict_fmt = derive_calendar_formats(&write_options)
            .iter()
            .map(|(fmt_key, spec)| (*fmt_key, derive_rust_xlsx_format(spec)))
            .collect();
        Self {
            path_file_out,
            workbook: derive_workbook(),
            dict_fmt,
            write_options,
            set_sheet_names_existing: BTreeSet::new(),
            report: SpecXlsxReport::default(),
            if_closed: false,
        }
    }

    /// Return snapshot of the sheets written so far.
    pub fn report(&self) -> SpecXlsxReport {
        self.report.clone()
    }

    /// Flush workbook to disk. Idempotent.
    pub fn close(&mut self) -> Result<(), String> {
        if self.if_closed {
            return Ok(());
        }
        self.workbook
            .save(&self.path_file_out)
            .map_err(derive_xlsx_error_text)?;
        self.if_closed = true;
        tracing::debug!(path = %self.path_file_out.display(), "Workbook saved.");
        Ok(())
    }

    /// Render one year as a new tab.
    pub fn write_year_sheet(&mut self, sheet: &SpecYearSheet) -> Result<(), String> {
        if self.if_closed {
            return Err("workbook already closed".to_string());
        }

        let sheet_name_raw = sheet.sheet_name();
        let sheet_name_clean = sanitize_sheet_name(&sheet_name_raw, "_");
        let sheet_name =
            derive_unique_sheet_name(&sheet_name_clean, &mut self.set_sheet_names_existing);
        if sheet_name != sheet_name_raw {
            self.report
                .warn(format!("sheet {sheet_name_raw:?} renamed to {sheet_name:?}"));
        }

        let worksheet = self.workbook.add_worksheet();
        worksheet
            .set_name(sheet_name.as_str())
            .map_err(derive_xlsx_error_text)?;

        set_planner_dimensions(worksheet)?;
        write_day_number_row(worksheet, &self.dict_fmt)?;
        for (n_offset, grid) in sheet.months.iter().enumerate() {
            write_month_row(
                worksheet,
                N_ROW_MONTH_FIRST + n_offset,
                grid,
                &self.dict_fmt,
                self.write_options.if_holiday_notes,
            )?;
        }
        write_year_label(worksheet, sheet, &self.dict_fmt)?;

        let n_weekend_days = sheet
            .days()
            .filter(|cell| cell.class_day == EnumDayClass::Weekend)
            .count();
        let n_holidays = sheet
            .days()
            .filter(|cell| cell.class_day == EnumDayClass::Holiday)
            .count();
        tracing::debug!(
            sheet = %sheet_name,
            n_weekend_days,
            n_holidays,
            "Year sheet rendered."
        );
        self.report.sheets.push(SpecSheetReport {
            sheet_name,
            year: sheet.year,
            n_weekend_days,
            n_holidays,
        });
        Ok(())
    }
}

fn derive_workbook() -> Workbook {
    let mut workbook = Workbook::new();
    let (n_year, n_month, n_day) = TUP_DOC_CREATED_YMD;
    if let Ok(dt_created) = ExcelDateTime::from_ymd(n_year, n_month, n_day) {
        workbook.set_properties(&DocProperties::new().set_creation_datetime(&dt_created));
    }
    workbook
}

fn set_planner_dimensions(worksheet: &mut Worksheet) -> Result<(), String> {
    for row_idx in 0..N_ROWS_SIZED {
        worksheet
            .set_row_height_pixels(cast_row_num(row_idx)?, N_PX_ROW_HEIGHT)
            .map_err(derive_xlsx_error_text)?;
    }
    for (col_idx, n_px) in TUP_PX_COL_WIDTHS_LEADING.iter().enumerate() {
        worksheet
            .set_column_width_pixels(cast_col_num(col_idx)?, *n_px)
            .map_err(derive_xlsx_error_text)?;
    }
    for n_offset in 0..N_DAYS_PER_MONTH_MAX {
        worksheet
            .set_column_width_pixels(
                cast_col_num(N_COL_DAY_FIRST + n_offset)?,
                N_PX_COL_WIDTH_DAY,
            )
            .map_err(derive_xlsx_error_text)?;
    }
    Ok(())
}

fn write_day_number_row(
    worksheet: &mut Worksheet,
    dict_fmt: &BTreeMap<EnumFmtKey, Format>,
) -> Result<(), String> {
    let fmt_empty = derive_preset(dict_fmt, EnumFmtKey::Empty)?;
    for col_idx in [N_COL_YEAR, N_COL_MONTH, N_COL_GAP] {
        worksheet
            .write_blank(cast_row_num(N_ROW_DAY_NUMBERS)?, cast_col_num(col_idx)?, fmt_empty)
            .map_err(derive_xlsx_error_text)?;
    }

    let fmt_day_number = derive_preset(dict_fmt, EnumFmtKey::DayNumber)?;
    for n_offset in 0..N_DAYS_PER_MONTH_MAX {
        worksheet
            .write_number_with_format(
                cast_row_num(N_ROW_DAY_NUMBERS)?,
                cast_col_num(N_COL_DAY_FIRST + n_offset)?,
                (n_offset + 1) as f64,
                fmt_day_number,
            )
            .map_err(derive_xlsx_error_text)?;
    }
    Ok(())
}

fn write_month_row(
    worksheet: &mut Worksheet,
    row_idx: usize,
    grid: &SpecMonthGrid,
    dict_fmt: &BTreeMap<EnumFmtKey, Format>,
    if_holiday_notes: bool,
) -> Result<(), String> {
    let row_num = cast_row_num(row_idx)?;
    worksheet
        .write_string_with_format(
            row_num,
            cast_col_num(N_COL_MONTH)?,
            grid.name(),
            derive_preset(dict_fmt, EnumFmtKey::Month)?,
        )
        .map_err(derive_xlsx_error_text)?;
    worksheet
        .write_blank(
            row_num,
            cast_col_num(N_COL_GAP)?,
            derive_preset(dict_fmt, EnumFmtKey::Empty)?,
        )
        .map_err(derive_xlsx_error_text)?;

    for slot in plan_month_slots(grid, if_holiday_notes) {
        let col_num = cast_col_num(slot.col_idx)?;
        worksheet
            .write_blank(row_num, col_num, derive_preset(dict_fmt, slot.fmt_key)?)
            .map_err(derive_xlsx_error_text)?;
        if let Some(text) = slot.note {
            let note = Note::new(text).add_author_prefix(false);
            worksheet
                .insert_note(row_num, col_num, &note)
                .map_err(derive_xlsx_error_text)?;
        }
    }
    Ok(())
}

fn write_year_label(
    worksheet: &mut Worksheet,
    sheet: &SpecYearSheet,
    dict_fmt: &BTreeMap<EnumFmtKey, Format>,
) -> Result<(), String> {
    if sheet.months.is_empty() {
        return Ok(());
    }
    let row_idx_last = N_ROW_MONTH_FIRST + sheet.months.len() - 1;
    let fmt_year = derive_preset(dict_fmt, EnumFmtKey::Year)?;
    let year_text = sheet.year.to_string();
    if row_idx_last > N_ROW_MONTH_FIRST {
        worksheet
            .merge_range(
                cast_row_num(N_ROW_MONTH_FIRST)?,
                cast_col_num(N_COL_YEAR)?,
                cast_row_num(row_idx_last)?,
                cast_col_num(N_COL_YEAR)?,
                &year_text,
                fmt_year,
            )
            .map_err(derive_xlsx_error_text)?;
    } else {
        worksheet
            .write_string_with_format(
                cast_row_num(N_ROW_MONTH_FIRST)?,
                cast_col_num(N_COL_YEAR)?,
                &year_text,
                fmt_year,
            )
            .map_err(derive_xlsx_error_text)?;
    }
    Ok(())
}

fn derive_preset(
    dict_fmt: &BTreeMap<EnumFmtKey, Format>,
    fmt_key: EnumFmtKey,
) -> Result<&Format, String> {
    dict_fmt
        .get(&fmt_key)
        .ok_or_else(|| format!("missing format preset: {fmt_key:?}"))
}

fn derive_rust_xlsx_format(spec: &SpecCellFormat) -> Format {
    let mut format = Format::new();

    if let Some(val) = spec.font_size {
        format = format.set_font_size(val as f64);
    }
    if spec.bold.unwrap_or(false) {
        format = format.set_bold();
    }

    if let Some(val) = &spec.align
        && let Some(align) = derive_format_align(val)
    {
        format = format.set_align(align);
    }
    if let Some(val) = &spec.valign
        && let Some(align) = derive_format_align(val)
    {
        format = format.set_align(align);
    }

    if let Some(val) = &spec.bg_color {
        format = format.set_background_color(val.as_str());
    }

    if let Some(val) = spec.border {
        format = format.set_border(derive_format_border(val));
    }
    if let Some(val) = spec.top {
        format = format.set_border_top(derive_format_border(val));
    }
    if let Some(val) = spec.bottom {
        format = format.set_border_bottom(derive_format_border(val));
    }
    if let Some(val) = spec.left {
        format = format.set_border_left(derive_format_border(val));
    }
    if let Some(val) = spec.right {
        format = format.set_border_right(derive_format_border(val));
    }

    format
}

fn derive_format_border(border: i64) -> FormatBorder {
    match border {
        1 => FormatBorder::Thin,
        2 => FormatBorder::Medium,
        3 => FormatBorder::Dashed,
        4 => FormatBorder::Dotted,
        5 => FormatBorder::Thick,
        6 => FormatBorder::Double,
        7 => FormatBorder::Hair,
        _ => FormatBorder::None,
    }
}

fn derive_format_align(align: &str) -> Option<FormatAlign> {
    let value = align.trim().to_ascii_lowercase();
    match value.as_str() {
        "general" => Some(FormatAlign::General),
        "left" => Some(FormatAlign::Left),
        "center" => Some(FormatAlign::Center),
        "right" => Some(FormatAlign::Right),
        "top" => Some(FormatAlign::Top),
        "bottom" => Some(FormatAlign::Bottom),
        "vcenter" | "vertical_center" => Some(FormatAlign::VerticalCenter),
        _ => None,
    }
}

fn cast_row_num(value: usize) -> Result<u32, String> {
    u32::try_from(value).map_err(|_| format!("row index overflow: {value}"))
}

fn cast_col_num(value: usize) -> Result<u16, String> {
    u16::try_from(value).map_err(|_| format!("column index overflow: {value}"))
}

fn derive_xlsx_error_text(err: XlsxError) -> String {
    format!("xlsx write error: {err}")
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::Read;
    use std::path::Path;

    use calamine::{Data, Reader, Xlsx, open_workbook};
    use chrono::NaiveDate;
    use spreadcal_core::{SpecHolidaySet, SpecWeekendDays, build_year, classify_year};

    use super::*;

    fn read_xlsx_part(path: &Path, name: &str) -> String {
        let mut archive = zip::ZipArchive::new(File::open(path).expect("open")).expect("zip");
        let mut text = String::new();
        archive
            .by_name(name)
            .expect("part")
            .read_to_string(&mut text)
            .expect("read part");
        text
    }

    fn read_attr<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
        let n_pos = tag.find(&format!("{name}=\""))? + name.len() + 2;
        tag[n_pos..].split('"').next()
    }

    /// Solid fill color of `cell_ref`, resolved through its cell style.
    fn derive_cell_fill(styles_xml: &str, sheet_xml: &str, cell_ref: &str) -> Option<String> {
        let n_pos = sheet_xml.find(&format!("<c r=\"{cell_ref}\""))?;
        let cell_tag = sheet_xml[n_pos..].split('>').next()?;
        let n_xf: usize = read_attr(cell_tag, "s")?.parse().ok()?;

        let xfs = styles_xml.split("<cellXfs").nth(1)?.split("</cellXfs>").next()?;
        let xf_tag = xfs.split("<xf ").nth(n_xf + 1)?;
        let n_fill: usize = read_attr(xf_tag, "fillId")?.parse().ok()?;

        let fills = styles_xml.split("<fills").nth(1)?.split("</fills>").next()?;
        let fill = fills.split("<fill>").nth(n_fill + 1)?;
        read_attr(fill, "rgb").map(str::to_string)
    }

    fn build_sheet(year: i32, start_month: u32) -> SpecYearSheet {
        let weekend_days = SpecWeekendDays::default();
        let date = NaiveDate::from_ymd_opt(year, 12, 25).expect("valid date");
        let holidays: SpecHolidaySet = [(date, "Christmas Day".to_string())].into_iter().collect();
        let sheet = build_year(year, start_month, &weekend_days).expect("sheet");
        classify_year(sheet, &weekend_days, &holidays, false)
    }

    #[test]
    fn writes_one_tab_per_year_and_saves_on_close() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path_file_out = dir.path().join("calendar.xlsx");
        let mut writer = CalendarXlsxWriter::new(
            path_file_out.clone(),
            SpecCalendarWriteOptions {
                if_holiday_notes: true,
                ..Default::default()
            },
        );

        writer.write_year_sheet(&build_sheet(2024, 1)).expect("2024");
        writer.write_year_sheet(&build_sheet(2025, 4)).expect("2025");
        assert!(!path_file_out.exists());

        writer.close().expect("close");
        assert!(path_file_out.metadata().expect("metadata").len() > 0);
        writer.close().expect("second close is a no-op");

        let report = writer.report();
        let l_names: Vec<&str> = report.sheets.iter().map(|s| s.sheet_name.as_str()).collect();
        assert_eq!(l_names, vec!["2024", "2025"]);
        // 2024: 104 weekend days, Christmas on a Wednesday.
        assert_eq!(report.sheets[0].n_weekend_days, 104);
        assert_eq!(report.sheets[0].n_holidays, 1);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn duplicate_year_gets_suffixed_tab() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut writer = CalendarXlsxWriter::new(
            dir.path().join("calendar.xlsx"),
            SpecCalendarWriteOptions::default(),
        );
        writer.write_year_sheet(&build_sheet(2024, 1)).expect("first");
        writer.write_year_sheet(&build_sheet(2024, 1)).expect("second");

        let report = writer.report();
        assert_eq!(report.sheets[1].sheet_name, "2024__2");
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut writer = CalendarXlsxWriter::new(
            dir.path().join("missing").join("calendar.xlsx"),
            SpecCalendarWriteOptions::default(),
        );
        writer.write_year_sheet(&build_sheet(2024, 1)).expect("sheet");
        let err = writer.close().expect_err("save must fail");
        assert!(err.starts_with("xlsx write error:"), "{err}");
    }

    #[test]
    fn write_after_close_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut writer = CalendarXlsxWriter::new(
            dir.path().join("calendar.xlsx"),
            SpecCalendarWriteOptions::default(),
        );
        writer.write_year_sheet(&build_sheet(2024, 1)).expect("sheet");
        writer.close().expect("close");
        assert!(writer.write_year_sheet(&build_sheet(2025, 1)).is_err());
    }

    #[test]
    fn saved_workbook_reads_back_with_tabs_values_and_fills() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path_file_out = dir.path().join("calendar.xlsx");
        let mut writer =
            CalendarXlsxWriter::new(path_file_out.clone(), SpecCalendarWriteOptions::default());
        writer.write_year_sheet(&build_sheet(2024, 1)).expect("2024");
        writer.write_year_sheet(&build_sheet(2025, 4)).expect("2025");
        writer.close().expect("close");

        let mut workbook: Xlsx<_> = open_workbook(&path_file_out).expect("open workbook");
        assert_eq!(workbook.sheet_names(), vec!["2024".to_string(), "2025".to_string()]);

        let range = workbook.worksheet_range("2024").expect("2024 range");
        assert_eq!(range.get_value((0, 3)), Some(&Data::Float(1.0)));
        assert_eq!(range.get_value((0, 33)), Some(&Data::Float(31.0)));
        assert_eq!(range.get_value((1, 0)), Some(&Data::String("2024".to_string())));
        assert_eq!(range.get_value((1, 1)), Some(&Data::String("January".to_string())));
        assert_eq!(range.get_value((12, 1)), Some(&Data::String("December".to_string())));

        let range = workbook.worksheet_range("2025").expect("2025 range");
        assert_eq!(range.get_value((1, 1)), Some(&Data::String("April".to_string())));
        assert_eq!(range.get_value((12, 1)), Some(&Data::String("March".to_string())));

        // Row 13 is December of 2024: AA = Tue 24th, AB = Wed 25th, AE = Sat 28th.
        let styles_xml = read_xlsx_part(&path_file_out, "xl/styles.xml");
        let sheet_xml = read_xlsx_part(&path_file_out, "xl/worksheets/sheet1.xml");
        assert_eq!(
            derive_cell_fill(&styles_xml, &sheet_xml, "AB13").as_deref(),
            Some("FF000000")
        );
        assert_eq!(
            derive_cell_fill(&styles_xml, &sheet_xml, "AE13").as_deref(),
            Some("FF929292")
        );
        assert_eq!(derive_cell_fill(&styles_xml, &sheet_xml, "AA13"), None);
    }

    #[test]
    fn holiday_color_override_reaches_saved_fill() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path_file_out = dir.path().join("calendar.xlsx");
        let mut writer = CalendarXlsxWriter::new(
            path_file_out.clone(),
            SpecCalendarWriteOptions {
                holiday_bg_color: Some("#FF0000".to_string()),
                ..Default::default()
            },
        );
        writer.write_year_sheet(&build_sheet(2024, 1)).expect("2024");
        writer.close().expect("close");

        let styles_xml = read_xlsx_part(&path_file_out, "xl/styles.xml");
        let sheet_xml = read_xlsx_part(&path_file_out, "xl/worksheets/sheet1.xml");
        assert_eq!(
            derive_cell_fill(&styles_xml, &sheet_xml, "AB13").as_deref(),
            Some("FFFF0000")
        );
        assert_eq!(
            derive_cell_fill(&styles_xml, &sheet_xml, "AE13").as_deref(),
            Some("FF929292")
        );
    }
}
