// src/core/mod.rs
//! Configuration, API access and view state shared by the CLI and the web front end

pub mod config_manager;
pub mod service_client;
pub mod view_state;

pub use config_manager::{ConfigManager, ServerConfig, ServiceConfig};
pub use service_client::ReportsClient;
pub use view_state::{load_into, FetchState, LoadTicket, ReportView};
