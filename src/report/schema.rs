// src/report/schema.rs
//! Typed shape of a generated report
//!
//! The model's output is free-form JSON, so every field is declared with a
//! lenient deserializer: a value of the wrong shape becomes "absent" for that
//! field alone and never fails the surrounding record.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizedReport {
    #[serde(deserialize_with = "lenient::section")]
    pub basic_details: BasicDetails,
    #[serde(deserialize_with = "lenient::text")]
    pub personality: Option<String>,
    #[serde(deserialize_with = "lenient::section")]
    pub career: Career,
    #[serde(deserialize_with = "lenient::section")]
    pub avoid: Avoid,
    #[serde(deserialize_with = "lenient::text")]
    pub marriage: Option<String>,
    #[serde(deserialize_with = "lenient::list_or_scalar")]
    pub remedies: Vec<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicDetails {
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub date_of_birth: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub time_of_birth: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub place_of_birth: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Career {
    #[serde(deserialize_with = "lenient::list")]
    pub top_5: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Avoid {
    #[serde(deserialize_with = "lenient::list")]
    pub colors: Vec<String>,
    #[serde(deserialize_with = "lenient::list")]
    pub habits: Vec<String>,
    #[serde(deserialize_with = "lenient::list")]
    pub industries: Vec<String>,
}

impl NormalizedReport {
    /// Project an already-parsed JSON value onto the report shape.
    ///
    /// Never fails. Anything that is not an object projects to an empty report.
    pub fn project(value: Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        Self::deserialize(value).unwrap_or_default()
    }
}

/// Display text of a scalar, or `None` when the value counts as empty.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

mod lenient {
    use super::*;

    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(scalar_text(&value))
    }

    pub fn list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Array(items) => items.iter().filter_map(scalar_text).collect(),
            _ => Vec::new(),
        })
    }

    /// Like [`list`], but a bare scalar counts as a one-element list.
    pub fn list_or_scalar<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Array(items) => items.iter().filter_map(scalar_text).collect(),
            other => scalar_text(&other).into_iter().collect(),
        })
    }

    pub fn section<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + serde::de::DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        if !value.is_object() {
            return Ok(T::default());
        }
        Ok(serde_json::from_value(value).unwrap_or_default())
    }
}
