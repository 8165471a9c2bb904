// src/web/types.rs

use rocket::FromForm;

use crate::core::ReportsClient;
use crate::types::GenerateReportRequest;
use crate::web::pages::{FormValues, PageRenderer};

/// Shared state handed to every route.
pub struct WebState {
    pub client: ReportsClient,
    pub pages: PageRenderer,
}

#[derive(Debug, FromForm)]
pub struct CreateReportForm {
    pub name: Option<String>,
    pub dob: Option<String>,
    pub tob: Option<String>,
    pub pob: Option<String>,
    pub language: Option<String>,
}

impl CreateReportForm {
    pub fn values(&self) -> FormValues {
        FormValues {
            name: self.name.clone().unwrap_or_default(),
            dob: self.dob.clone().unwrap_or_default(),
            tob: self.tob.clone().unwrap_or_default(),
            pob: self.pob.clone().unwrap_or_default(),
            language: self.language.clone(),
        }
    }

    pub fn to_request(&self) -> GenerateReportRequest {
        let values = self.values();
        GenerateReportRequest::from_input(
            &values.name,
            &values.dob,
            &values.tob,
            &values.pob,
            values.language.as_deref(),
        )
    }
}
