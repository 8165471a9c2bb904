// src/types/request.rs

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::report::Language;

/// Body of `POST /generate-report`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateReportRequest {
    pub name: String,
    pub dob: String,
    pub tob: String,
    pub pob: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

impl GenerateReportRequest {
    /// Build a request from raw form input, trimming every field.
    ///
    /// A language that is blank or not supported is dropped and the backend
    /// default applies.
    pub fn from_input(name: &str, dob: &str, tob: &str, pob: &str, language: Option<&str>) -> Self {
        Self {
            name: name.trim().to_string(),
            dob: dob.trim().to_string(),
            tob: tob.trim().to_string(),
            pob: pob.trim().to_string(),
            language: language.and_then(Language::parse),
        }
    }

    /// Check the fields the generator needs. Returns every problem found.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.name.is_empty() {
            errors.push("Name is required".to_string());
        }

        if self.dob.is_empty() {
            errors.push("Date of birth is required".to_string());
        } else if NaiveDate::parse_from_str(&self.dob, "%Y-%m-%d").is_err() {
            errors.push("Date of birth must be YYYY-MM-DD".to_string());
        }

        if self.tob.is_empty() {
            errors.push("Time of birth is required".to_string());
        } else if NaiveTime::parse_from_str(&self.tob, "%H:%M").is_err() {
            errors.push("Time of birth must be HH:MM".to_string());
        }

        if self.pob.is_empty() {
            errors.push("Place of birth is required".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> GenerateReportRequest {
        GenerateReportRequest::from_input("Asha", "1990-04-12", "06:45", "Surat", None)
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_blank_fields_are_reported_together() {
        let request = GenerateReportRequest::from_input(" ", "", "", "  ", None);
        let errors = request.validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[0], "Name is required");
    }

    #[test]
    fn test_date_and_time_formats() {
        let mut request = valid();
        request.dob = "12/04/1990".to_string();
        request.tob = "6.45pm".to_string();
        let errors = request.validate().unwrap_err();
        assert_eq!(
            errors,
            vec!["Date of birth must be YYYY-MM-DD", "Time of birth must be HH:MM"]
        );
    }

    #[test]
    fn test_language_is_optional_on_the_wire() {
        let body = serde_json::to_value(valid()).unwrap();
        assert!(body.get("language").is_none());
        assert_eq!(body["pob"], "Surat");

        let request =
            GenerateReportRequest::from_input("Asha", "1990-04-12", "06:45", "Surat", Some("Hindi"));
        let body = serde_json::to_value(request).unwrap();
        assert_eq!(body["language"], "hindi");

        let request =
            GenerateReportRequest::from_input("Asha", "1990-04-12", "06:45", "Surat", Some(""));
        assert_eq!(request.language, None);
    }
}
