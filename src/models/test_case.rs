//! Test case records as produced upstream, and the fixed row layout they map to.

use serde_json::Value as JsonValue;

/// Classification used when the upstream record carries no `type`.
pub const DEFAULT_TYPE: &str = "Positive";

/// Field aliases, checked in order; the first non-empty value wins.
const ID_FIELDS: &[&str] = &["TestCaseId", "testCaseId"];
const DESCRIPTION_FIELDS: &[&str] = &["Test", "description"];
const EXPECTED_FIELDS: &[&str] = &["Expected_Result"];
const TYPE_FIELDS: &[&str] = &["type"];

/// One upstream test case.
///
/// The upstream shape is loose: fields are optional, names vary in case,
/// and entries that are not objects are treated as records with every
/// field missing.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCaseRecord(JsonValue);

impl TestCaseRecord {
    pub fn new(value: JsonValue) -> Self {
        Self(value)
    }

    pub fn test_case_id(&self) -> Option<String> {
        self.first_of(ID_FIELDS)
    }

    pub fn description(&self) -> Option<String> {
        self.first_of(DESCRIPTION_FIELDS)
    }

    pub fn expected_result(&self) -> Option<String> {
        self.first_of(EXPECTED_FIELDS)
    }

    pub fn case_type(&self) -> Option<String> {
        self.first_of(TYPE_FIELDS)
    }

    fn first_of(&self, keys: &[&str]) -> Option<String> {
        let object = self.0.as_object()?;
        keys.iter()
            .filter_map(|key| object.get(*key))
            .find_map(text_value)
    }
}

/// Strings and numbers count as present; empty strings, null, booleans and
/// nested structures do not.
fn text_value(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) if !s.is_empty() => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Column headers, in output order.
pub const COLUMN_HEADERS: [&str; 7] = [
    "Sr.No",
    "Testcase_ID",
    "TEST",
    "Expected Result",
    "Actual Result",
    "Status",
    "Type",
];

/// One row of the generated sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabularRow {
    /// 1-based position in the upstream array.
    pub sr_no: u32,
    pub test_case_id: String,
    pub test: String,
    pub expected_result: String,
    /// Filled in by a tester after execution.
    pub actual_result: String,
    /// Filled in by a tester after execution.
    pub status: String,
    pub case_type: String,
}

impl TabularRow {
    /// Map a record at 1-based `position` onto the row layout.
    pub fn from_record(position: u32, record: &TestCaseRecord) -> Self {
        Self {
            sr_no: position,
            test_case_id: record
                .test_case_id()
                .unwrap_or_else(|| format!("TC-0{}", position)),
            test: record.description().unwrap_or_default(),
            expected_result: record.expected_result().unwrap_or_default(),
            actual_result: String::new(),
            status: String::new(),
            case_type: record
                .case_type()
                .unwrap_or_else(|| DEFAULT_TYPE.to_string()),
        }
    }

    /// Text cells after the sequence number, in column order.
    pub fn text_cells(&self) -> [&str; 6] {
        [
            &self.test_case_id,
            &self.test,
            &self.expected_result,
            &self.actual_result,
            &self.status,
            &self.case_type,
        ]
    }
}

/// Build rows in input order. No sorting, filtering or deduplication.
pub fn build_rows(records: &[TestCaseRecord]) -> Vec<TabularRow> {
    records
        .iter()
        .zip(1u32..)
        .map(|(record, position)| TabularRow::from_record(position, record))
        .collect()
}
