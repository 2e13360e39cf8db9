//! Business logic services.

pub mod generation;
pub mod upstream;
pub mod workbook;

pub use generation::{GeneratedWorkbook, WorkbookGenerator};
pub use upstream::{GenerationService, HttpGenerationService};
pub use workbook::{SHEET_NAME, XLSX_CONTENT_TYPE, render_workbook};
