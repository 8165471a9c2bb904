// src/report/error.rs
//! Failure classification for loading a single report

use thiserror::Error;

/// Everything that can keep a report view from showing a report.
///
/// `Display` yields the fixed user-facing message only. Detail carried by a
/// variant is for logs and never reaches the page.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("No report found for this ID.")]
    NotFound,

    #[error("Invalid report format.")]
    InvalidFormat,

    #[error("Failed to parse report.")]
    ParseFailure(#[source] serde_json::Error),

    #[error("Error fetching report.")]
    NetworkFailure { detail: String },
}

impl ReportError {
    pub fn network(detail: impl Into<String>) -> Self {
        Self::NetworkFailure {
            detail: detail.into(),
        }
    }

    /// Stable short code used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::ParseFailure(_) => "PARSE_FAILURE",
            Self::NetworkFailure { .. } => "NETWORK_FAILURE",
        }
    }

    /// Text shown to the end user.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_hide_detail() {
        let err = ReportError::network("connection refused at 10.0.0.1:8000");
        assert_eq!(err.user_message(), "Error fetching report.");
        assert_eq!(err.code(), "NETWORK_FAILURE");

        let parse = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = ReportError::ParseFailure(parse);
        assert_eq!(err.user_message(), "Failed to parse report.");
    }

    #[test]
    fn test_each_variant_has_distinct_message() {
        let parse = serde_json::from_str::<serde_json::Value>("}").unwrap_err();
        let messages = [
            ReportError::NotFound.user_message(),
            ReportError::InvalidFormat.user_message(),
            ReportError::ParseFailure(parse).user_message(),
            ReportError::network("x").user_message(),
        ];
        for (i, a) in messages.iter().enumerate() {
            for b in messages.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
