//! `spreadcal_io_xlsx` v1:
//! Rust-side XLSX calendar kernel.
//!
//! - `conf`   : constants and default style presets
//! - `spec`   : cell formats, day slots and reports
//! - `util`   : pure helper functions
//! - `writer` : year-planner workbook writer
pub mod conf;
pub mod spec;
pub mod util;
pub mod writer;

pub use conf::{
    EnumFmtKey, N_LEN_EXCEL_SHEET_NAME_MAX, TUP_EXCEL_ILLEGAL, derive_calendar_formats,
    derive_default_calendar_formats,
};
pub use spec::{SpecCellFormat, SpecDaySlot, SpecSheetReport, SpecXlsxReport};
pub use util::{plan_month_slots, sanitize_sheet_name};
pub use writer::CalendarXlsxWriter;
