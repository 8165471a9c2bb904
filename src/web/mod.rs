// src/web/mod.rs
//! Web front end: server-rendered report list, detail and create pages

pub mod handlers;
pub mod pages;
pub mod types;

pub use pages::PageRenderer;
pub use types::*;

use anyhow::Result;
use rocket::Either;
use rocket::figment::Figment;
use rocket::form::Form;
use rocket::http::Status;
use rocket::response::content::RawHtml;
use rocket::response::Redirect;
use rocket::{catchers, get, post, routes, Build, Rocket, State};
use tracing::info;

use crate::core::{ConfigManager, ReportsClient};

#[get("/")]
pub async fn index(state: &State<WebState>) -> Result<RawHtml<String>, Status> {
    handlers::report_list_handler(state).await
}

#[get("/astrology")]
pub async fn report_list(state: &State<WebState>) -> Result<RawHtml<String>, Status> {
    handlers::report_list_handler(state).await
}

#[get("/astrology/create")]
pub async fn create_form(state: &State<WebState>) -> Result<RawHtml<String>, Status> {
    handlers::create_form_handler(state).await
}

#[post("/astrology/create", data = "<form>")]
pub async fn create_submit(
    form: Form<CreateReportForm>,
    state: &State<WebState>,
) -> Result<Either<Redirect, RawHtml<String>>, Status> {
    handlers::create_submit_handler(form.into_inner(), state).await
}

#[get("/astrology/<id>", rank = 2)]
pub async fn report_detail(id: &str, state: &State<WebState>) -> Result<RawHtml<String>, Status> {
    handlers::report_detail_handler(id, state).await
}

#[get("/health")]
pub async fn health() -> &'static str {
    handlers::health_handler().await
}

#[rocket::catch(404)]
pub fn not_found() -> RawHtml<&'static str> {
    RawHtml(r#"<!doctype html><p>Page not found.</p><a href="/">← Back to Reports</a>"#)
}

#[rocket::catch(500)]
pub fn internal_error() -> RawHtml<&'static str> {
    RawHtml(r#"<!doctype html><p>Something went wrong.</p><a href="/">← Back to Reports</a>"#)
}

pub fn build_rocket(figment: Figment, state: WebState) -> Rocket<Build> {
    rocket::custom(figment)
        .manage(state)
        .register("/", catchers![not_found, internal_error])
        .mount(
            "/",
            routes![
                index,
                report_list,
                create_form,
                create_submit,
                report_detail,
                health,
            ],
        )
}

pub async fn start_web_server(config: &ConfigManager) -> Result<()> {
    let state = WebState {
        client: ReportsClient::new(&config.service)?,
        pages: PageRenderer::new()?,
    };

    let figment = rocket::Config::figment()
        .merge(("address", "0.0.0.0"))
        .merge(("port", config.server.port));

    info!("Starting Astrovaani report viewer");
    info!("Reports API: {}", config.service.api_base_url);
    info!("Server: http://0.0.0.0:{}", config.server.port);

    build_rocket(figment, state)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Web server failed: {}", e))?;

    Ok(())
}
