// src/core/service_client.rs
//! HTTP client for the reports API

use anyhow::{Context, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::core::ServiceConfig;
use crate::report::{LoadedReport, ReportError};
use crate::types::{ErrorBody, GenerateReportRequest, GeneratedReport, ReportListResponse, ReportSummary};

const REPORTS_ENDPOINT: &str = "/reports";
const GENERATE_ENDPOINT: &str = "/generate-report";

/// Everything except the RFC 3986 unreserved characters.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Clone)]
pub struct ReportsClient {
    client: reqwest::Client,
    base_url: String,
}

impl ReportsClient {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn report_url(&self, id: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_url,
            REPORTS_ENDPOINT,
            utf8_percent_encode(id, PATH_SEGMENT)
        )
    }

    /// `GET /reports/{id}`, returning the raw body for normalization.
    ///
    /// The API answers an unknown id with an error status and a JSON
    /// `detail` body. Any JSON body is returned regardless of status so the
    /// normalizer classifies it; only transport failures and non-JSON bodies
    /// are `NetworkFailure`.
    pub async fn fetch_report(&self, id: &str) -> Result<Value, ReportError> {
        let url = self.report_url(id);
        info!("Fetching report: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ReportError::network(format!("GET {} failed: {}", url, e)))?;

        let status = response.status();
        debug!("Response status: {}", status);

        let text = response
            .text()
            .await
            .map_err(|e| ReportError::network(format!("Reading body from {} failed: {}", url, e)))?;

        if !status.is_success() {
            warn!("Reports API returned {} for {}: {}", status, url, text);
        }

        serde_json::from_str::<Value>(&text).map_err(|e| {
            ReportError::network(format!("HTTP {}, undecodable body from {}: {}", status, url, e))
        })
    }

    /// Fetch, normalize and resolve the language of one report.
    pub async fn load_report(&self, id: &str) -> Result<LoadedReport, ReportError> {
        let body = self.fetch_report(id).await?;
        let loaded = LoadedReport::from_body(&body);
        match &loaded {
            Ok(report) => info!("Loaded report {} ({})", id, report.language),
            Err(e) => warn!("Report {} could not be normalized: {} ({:?})", id, e.code(), e),
        }
        loaded
    }

    /// `GET /reports`
    pub async fn list_reports(&self) -> Result<Vec<ReportSummary>, ReportError> {
        let url = format!("{}{}", self.base_url, REPORTS_ENDPOINT);
        info!("Listing reports: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ReportError::network(format!("GET {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!("Reports API returned {} for {}: {}", status, url, error_text);
            return Err(ReportError::network(format!("HTTP {}: {}", status, error_text)));
        }

        let list: ReportListResponse = response
            .json()
            .await
            .map_err(|e| ReportError::network(format!("Undecodable list from {}: {}", url, e)))?;

        info!("Received {} reports", list.data.len());
        Ok(list.data)
    }

    /// `POST /generate-report`
    ///
    /// The error side carries user-facing messages taken from the API's
    /// `detail`, or a generic message when the call never got an answer.
    pub async fn generate_report(
        &self,
        request: &GenerateReportRequest,
    ) -> Result<GeneratedReport, Vec<String>> {
        let url = format!("{}{}", self.base_url, GENERATE_ENDPOINT);
        info!("Requesting report generation for {}", request.name);

        let response = match self.client.post(&url).json(request).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("POST {} failed: {}", url, e);
                return Err(ErrorBody::default().messages());
            }
        };

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if status.is_success() {
            let generated: GeneratedReport = serde_json::from_str(&text).unwrap_or_else(|e| {
                warn!("Report created but response was not understood: {}", e);
                GeneratedReport::default()
            });
            info!(
                "Report generated: id={}",
                generated.id.as_deref().unwrap_or("unknown")
            );
            Ok(generated)
        } else {
            error!("Report generation failed with status {}: {}", status, text);
            Err(ErrorBody::parse(&text).messages())
        }
    }
}
