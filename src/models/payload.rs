//! Upstream response payloads.
//!
//! The generation service has answered with several layouts over time. Each
//! known layout is a [`PayloadShape`]; matchers run in [`PayloadShape::PRECEDENCE`]
//! order and the first one that yields an array wins.

use serde_json::Value as JsonValue;

use super::test_case::TestCaseRecord;

/// Recognized layouts of the record array inside an upstream response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadShape {
    /// `[ {...}, {...} ]`
    BareArray,
    /// `{ "data": { "testCases": [...] } }`
    DataTestCases,
    /// `{ "data": [ { "testCases": [...] }, ... ] }`, first element only
    DataArrayTestCases,
    /// `{ "testCases": [...] }`, as returned for stored results
    TopLevelTestCases,
}

impl PayloadShape {
    pub const PRECEDENCE: [PayloadShape; 4] = [
        PayloadShape::BareArray,
        PayloadShape::DataTestCases,
        PayloadShape::DataArrayTestCases,
        PayloadShape::TopLevelTestCases,
    ];

    /// Return the record array if `payload` has this shape.
    pub fn match_records(self, payload: &JsonValue) -> Option<&Vec<JsonValue>> {
        match self {
            PayloadShape::BareArray => payload.as_array(),
            PayloadShape::DataTestCases => payload
                .get("data")
                .filter(|data| data.is_object())?
                .get("testCases")?
                .as_array(),
            PayloadShape::DataArrayTestCases => payload
                .get("data")?
                .as_array()?
                .first()?
                .get("testCases")?
                .as_array(),
            PayloadShape::TopLevelTestCases => payload.get("testCases")?.as_array(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadShape::BareArray => "bare_array",
            PayloadShape::DataTestCases => "data.testCases",
            PayloadShape::DataArrayTestCases => "data[0].testCases",
            PayloadShape::TopLevelTestCases => "testCases",
        }
    }
}

impl std::fmt::Display for PayloadShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record array pulled out of an upstream payload.
#[derive(Debug, Clone)]
pub struct ExtractedRecords {
    pub shape: PayloadShape,
    /// The array exactly as the upstream sent it.
    pub raw: Vec<JsonValue>,
    pub records: Vec<TestCaseRecord>,
}

/// Run the shape matchers in precedence order.
pub fn extract_records(payload: &JsonValue) -> Option<ExtractedRecords> {
    PayloadShape::PRECEDENCE.iter().find_map(|shape| {
        let array = shape.match_records(payload)?;
        Some(ExtractedRecords {
            shape: *shape,
            raw: array.clone(),
            records: array.iter().cloned().map(TestCaseRecord::new).collect(),
        })
    })
}

/// Summary text from `summary` or `message`, looked up at the top level,
/// then under `data`, then under `data[0]`.
pub fn extract_summary(payload: &JsonValue) -> Option<String> {
    let data = payload.get("data");
    let first = data.and_then(JsonValue::as_array).and_then(|a| a.first());

    [Some(payload), data.filter(|d| d.is_object()), first]
        .into_iter()
        .flatten()
        .flat_map(|scope| ["summary", "message"].map(|key| scope.get(key)))
        .flatten()
        .find_map(|value| value.as_str().filter(|s| !s.trim().is_empty()))
        .map(str::to_string)
}
