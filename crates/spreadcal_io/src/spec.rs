//! Backend trait shared by every output format.

use std::path::Path;

use spreadcal_core::{EnumOutputFormat, Result, SpecCalendarWriteOptions, SpecYearSheet};

/// Serializer for one spreadsheet container format.
pub trait CalendarBackend {
    /// Format this backend produces.
    fn format(&self) -> EnumOutputFormat;

    /// Write `sheets` as tabs of one document at `path_file_out`, replacing
    /// any existing file. Nothing is written when any sheet fails.
    fn write_sheets(
        &self,
        sheets: &[SpecYearSheet],
        path_file_out: &Path,
        write_options: &SpecCalendarWriteOptions,
    ) -> Result<()>;
}
