// src/web/handlers/report_handlers.rs
//! List, detail and create pages

use rocket::Either;
use rocket::http::Status;
use rocket::response::content::RawHtml;
use rocket::response::Redirect;
use rocket::State;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::core::{load_into, FetchState, ReportView};
use crate::report::{render, resolve_labels};
use crate::web::pages::FormValues;
use crate::web::types::{CreateReportForm, WebState};

const LIST_FAILURE: &str = "Error fetching reports.";

fn page(result: anyhow::Result<String>) -> Result<RawHtml<String>, Status> {
    result.map(RawHtml).map_err(|e| {
        error!("Page rendering failed: {:#}", e);
        Status::InternalServerError
    })
}

pub async fn report_list_handler(state: &State<WebState>) -> Result<RawHtml<String>, Status> {
    match state.client.list_reports().await {
        Ok(reports) => page(state.pages.report_list(&reports, None)),
        Err(e) => {
            warn!("Report list unavailable: {} ({:?})", e.code(), e);
            page(state.pages.report_list(&[], Some(LIST_FAILURE)))
        }
    }
}

pub async fn report_detail_handler(
    id: &str,
    state: &State<WebState>,
) -> Result<RawHtml<String>, Status> {
    let view = Mutex::new(ReportView::default());
    let client = &state.client;
    load_into(&view, id, |id| async move { client.load_report(&id).await }).await;

    let view = view.into_inner();
    match view.state() {
        FetchState::Ready {
            report,
            labels,
            language,
        } => page(state.pages.report_detail(&render(report, labels), *language)),
        FetchState::Error(message) => page(state.pages.report_error(message, resolve_labels(None))),
        FetchState::Loading => {
            error!("Report view for {} never completed", id);
            Err(Status::InternalServerError)
        }
    }
}

pub async fn create_form_handler(state: &State<WebState>) -> Result<RawHtml<String>, Status> {
    page(state.pages.create_form(&FormValues::default(), &[]))
}

pub async fn create_submit_handler(
    form: CreateReportForm,
    state: &State<WebState>,
) -> Result<Either<Redirect, RawHtml<String>>, Status> {
    let request = form.to_request();

    if let Err(errors) = request.validate() {
        info!("Create form rejected: {} problem(s)", errors.len());
        return page(state.pages.create_form(&form.values(), &errors)).map(Either::Right);
    }

    match state.client.generate_report(&request).await {
        Ok(_) => Ok(Either::Left(Redirect::to("/astrology"))),
        Err(errors) => page(state.pages.create_form(&form.values(), &errors)).map(Either::Right),
    }
}
