//! `spreadcal_io` v1:
//! Output-format dispatch for calendar workbooks.
//!
//! - `spec`    : `CalendarBackend` trait
//! - `backend` : concrete backends and format selection
//! - `export`  : one-call export entry point
pub mod backend;
pub mod export;
pub mod spec;

pub use backend::{XlsxBackend, derive_backend, validate_output_format};
pub use export::export;
pub use spec::CalendarBackend;
