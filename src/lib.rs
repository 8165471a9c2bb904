//! Astrovaani report viewer
//!
//! Fetches AI-generated astrology reports from the reports API, normalizes the
//! model output into a typed record and renders it in English, Hindi or
//! Gujarati, either as HTML pages or on the terminal.

pub mod cli;
pub mod core;
pub mod report;
pub mod types;
pub mod web;

pub use report::{normalize, render, resolve_labels, ReportError};
pub use web::start_web_server;
