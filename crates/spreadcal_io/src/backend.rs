//! Concrete backends and format-to-backend selection.

use std::path::Path;

use spreadcal_core::{
    CalendarError, EnumOutputFormat, Result, SpecCalendarWriteOptions, SpecYearSheet,
};
use spreadcal_io_xlsx::CalendarXlsxWriter;

use crate::spec::CalendarBackend;

/// `.xlsx` backend on top of [`CalendarXlsxWriter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxBackend;

impl CalendarBackend for XlsxBackend {
    fn format(&self) -> EnumOutputFormat {
        EnumOutputFormat::Excel
    }

    fn write_sheets(
        &self,
        sheets: &[SpecYearSheet],
        path_file_out: &Path,
        write_options: &SpecCalendarWriteOptions,
    ) -> Result<()> {
        let derive_export_error = |message: String| CalendarError::ExportWrite {
            path: path_file_out.to_path_buf(),
            message,
        };

        let mut writer =
            CalendarXlsxWriter::new(path_file_out.to_path_buf(), write_options.clone());
        for sheet in sheets {
            writer.write_year_sheet(sheet).map_err(derive_export_error)?;
        }
        writer.close().map_err(derive_export_error)?;

        for warning in writer.report().warnings {
            tracing::warn!("{warning}");
        }
        Ok(())
    }
}

/// Fail early for formats without a serializer.
pub fn validate_output_format(format: EnumOutputFormat) -> Result<EnumOutputFormat> {
    derive_backend(format).map(|_| format)
}

/// Backend for `format`.
///
/// No Apple Numbers (IWA) writer is available, so `Numbers` is reported as
/// unsupported.
pub fn derive_backend(format: EnumOutputFormat) -> Result<Box<dyn CalendarBackend>> {
    match format {
        EnumOutputFormat::Excel => Ok(Box::new(XlsxBackend)),
        EnumOutputFormat::Numbers => Err(CalendarError::UnsupportedFormat(
            format.as_str().to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excel_has_backend_numbers_does_not() {
        let backend = derive_backend(EnumOutputFormat::Excel).expect("xlsx backend");
        assert_eq!(backend.format(), EnumOutputFormat::Excel);
        assert_eq!(
            validate_output_format(EnumOutputFormat::Numbers).err(),
            Some(CalendarError::UnsupportedFormat("numbers".to_string()))
        );
    }
}
