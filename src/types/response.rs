// src/types/response.rs

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Message shown when a failed create call carries no usable detail.
pub const GENERIC_FAILURE: &str = "Something went wrong!";

// ===== GET /reports =====

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportListResponse {
    #[serde(default)]
    pub data: Vec<ReportSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    #[serde(default, deserialize_with = "id_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub tob: Option<String>,
}

// ===== POST /generate-report =====

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratedReport {
    #[serde(default, deserialize_with = "id_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Error body of a rejected create call: `detail` is either a plain string or
/// a list of `{ msg }` validation entries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<ErrorDetail>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Items(Vec<ErrorItem>),
    Other(Value),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorItem {
    #[serde(default)]
    pub msg: Option<String>,
}

impl ErrorBody {
    /// Parse a failure body; anything unreadable yields an empty detail.
    pub fn parse(text: &str) -> Self {
        serde_json::from_str(text).unwrap_or_default()
    }

    /// User-facing messages, never empty.
    pub fn messages(&self) -> Vec<String> {
        let messages: Vec<String> = match &self.detail {
            Some(ErrorDetail::Message(msg)) => vec![msg.clone()],
            Some(ErrorDetail::Items(items)) => {
                items.iter().filter_map(|item| item.msg.clone()).collect()
            }
            Some(ErrorDetail::Other(_)) | None => Vec::new(),
        };

        let messages: Vec<String> = messages
            .into_iter()
            .filter(|m| !m.trim().is_empty())
            .collect();
        if messages.is_empty() {
            vec![GENERIC_FAILURE.to_string()]
        } else {
            messages
        }
    }
}

/// Accept ids stored either as strings or as numbers.
fn id_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_as_string() {
        let body = ErrorBody::parse(r#"{"detail": "OpenRouter call failed: timeout"}"#);
        assert_eq!(body.messages(), vec!["OpenRouter call failed: timeout"]);
    }

    #[test]
    fn test_detail_as_list() {
        let body = ErrorBody::parse(
            r#"{"detail": [{"loc": ["body", "dob"], "msg": "invalid date"}, {"msg": "field required"}]}"#,
        );
        assert_eq!(body.messages(), vec!["invalid date", "field required"]);
    }

    #[test]
    fn test_unusable_detail_falls_back() {
        for text in ["", "not json", "{}", r#"{"detail": 12}"#, r#"{"detail": [{}]}"#, r#"{"detail": ""}"#] {
            assert_eq!(ErrorBody::parse(text).messages(), vec![GENERIC_FAILURE], "{text}");
        }
    }

    #[test]
    fn test_list_accepts_numeric_and_missing_ids() {
        let list: ReportListResponse = serde_json::from_str(
            r#"{"success": true, "count": 3, "data": [
                {"id": 7, "name": "Asha", "dob": "1990-04-12", "tob": "06:45"},
                {"id": "a1b2", "name": "Ravi"},
                {"name": "No id"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(list.data[0].id.as_deref(), Some("7"));
        assert_eq!(list.data[1].id.as_deref(), Some("a1b2"));
        assert_eq!(list.data[1].dob, None);
        assert_eq!(list.data[2].id, None);
    }

    #[test]
    fn test_list_without_data_is_empty() {
        let list: ReportListResponse = serde_json::from_str("{}").unwrap();
        assert!(list.data.is_empty());
    }
}
