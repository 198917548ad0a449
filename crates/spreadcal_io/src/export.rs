//! One-call export entry point.

use std::path::Path;

use spreadcal_core::{EnumOutputFormat, Result, SpecCalendarWriteOptions, SpecYearSheet};

use crate::backend::derive_backend;

/// Write `sheets` to `path_file_out` in `format`, one tab per sheet in order.
pub fn export(
    sheets: &[SpecYearSheet],
    format: EnumOutputFormat,
    path_file_out: &Path,
    write_options: &SpecCalendarWriteOptions,
) -> Result<()> {
    let backend = derive_backend(format)?;
    backend.write_sheets(sheets, path_file_out, write_options)?;
    tracing::info!(
        path = %path_file_out.display(),
        format = %format,
        n_sheets = sheets.len(),
        "Calendar saved."
    );
    Ok(())
}
