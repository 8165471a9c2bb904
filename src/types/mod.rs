// src/types/mod.rs
//! Wire types for the reports API

pub mod request;
pub mod response;

pub use request::GenerateReportRequest;
pub use response::{ErrorBody, GeneratedReport, ReportListResponse, ReportSummary};
