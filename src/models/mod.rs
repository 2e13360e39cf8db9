//! Domain models and DTOs.

pub mod generation;
pub mod history;
pub mod payload;
pub mod test_case;

pub use generation::{
    GenerateQuery, GenerateRequest, GenerationResult, ResponseFormat, default_summary,
    workbook_file_name,
};
pub use history::TicketHistory;
pub use payload::{ExtractedRecords, PayloadShape, extract_records, extract_summary};
pub use test_case::{COLUMN_HEADERS, DEFAULT_TYPE, TabularRow, TestCaseRecord, build_rows};
