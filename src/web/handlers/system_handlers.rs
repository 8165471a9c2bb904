// src/web/handlers/system_handlers.rs

use tracing::debug;

pub async fn health_handler() -> &'static str {
    debug!("Health check");
    "OK"
}
