// src/report/normalizer.rs
//! Turns a `/reports/{id}` response body into a typed report
//!
//! The generator stores the model output as text, usually wrapped in a
//! markdown code fence. Only the first record of the response is consulted.

use serde_json::Value;

use super::error::ReportError;
use super::schema::NormalizedReport;

const FENCE_OPEN: &str = "```json";
const FENCE_CLOSE: &str = "```";

/// Shortest cleaned payload worth handing to the JSON parser.
pub const MIN_PAYLOAD_CHARS: usize = 5;

/// Extract, clean, parse and project the report carried by `body`.
pub fn normalize(body: &Value) -> Result<NormalizedReport, ReportError> {
    let raw = raw_payload(body).ok_or(ReportError::NotFound)?;
    normalize_payload(raw)
}

/// Same as [`normalize`], starting from the embedded payload text.
pub fn normalize_payload(raw: &str) -> Result<NormalizedReport, ReportError> {
    if raw.is_empty() {
        return Err(ReportError::NotFound);
    }

    let cleaned = strip_fence(raw);
    if cleaned.chars().count() < MIN_PAYLOAD_CHARS {
        return Err(ReportError::InvalidFormat);
    }

    let parsed: Value = serde_json::from_str(&cleaned).map_err(ReportError::ParseFailure)?;
    Ok(NormalizedReport::project(parsed))
}

/// Language declared on the first record, if any.
pub fn declared_language(body: &Value) -> Option<&str> {
    first_record(body)?.get("language")?.as_str()
}

fn first_record(body: &Value) -> Option<&Value> {
    body.get("data")?.as_array()?.first()
}

fn raw_payload(body: &Value) -> Option<&str> {
    first_record(body)?.pointer("/ai_output/raw")?.as_str()
}

/// Remove the first opening fence and then the first closing fence.
///
/// Later fences are left alone.
fn strip_fence(raw: &str) -> String {
    let without_open = raw.replacen(FENCE_OPEN, "", 1);
    without_open.replacen(FENCE_CLOSE, "", 1).trim().to_string()
}
