// src/report/mod.rs
//! Report payload normalization and rendering
//!
//! Everything in here is pure: callers fetch the response body, this module
//! turns it into something safe to show.

pub mod date_format;
pub mod display;
pub mod error;
pub mod labels;
pub mod normalizer;
pub mod schema;
pub mod text;

pub use date_format::format_date;
pub use display::{render, DisplayTree, Fact, Section, SectionBody};
pub use error::ReportError;
pub use labels::{resolve_labels, LabelSet, Language};
pub use normalizer::{declared_language, normalize};
pub use schema::NormalizedReport;
pub use text::render_text;

/// A normalized report together with the language it declared.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedReport {
    pub language: Language,
    pub report: NormalizedReport,
}

impl LoadedReport {
    /// Normalize a `/reports/{id}` body and resolve its declared language.
    pub fn from_body(body: &serde_json::Value) -> Result<Self, ReportError> {
        let report = normalize(body)?;
        let language = Language::resolve(declared_language(body));
        Ok(Self { language, report })
    }

    pub fn labels(&self) -> &'static LabelSet {
        self.language.labels()
    }

    pub fn display(&self) -> DisplayTree {
        render(&self.report, self.labels())
    }
}
