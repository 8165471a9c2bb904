// src/cli.rs
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::core::{load_into, ConfigManager, FetchState, ReportView, ReportsClient};
use crate::report::{format_date, render, render_text};
use crate::types::GenerateReportRequest;
use crate::web::{start_web_server, PageRenderer};

#[derive(Parser)]
#[command(name = "astrovaani")]
#[command(about = "View and request AI astrology reports")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Reports API base URL (overrides ASTRO_API_URL and config.yaml)
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the web front end
    Serve,
    /// List stored reports
    List,
    /// Show one report
    Show {
        id: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Request a new report
    Create {
        #[arg(long)]
        name: String,
        /// Date of birth, YYYY-MM-DD
        #[arg(long)]
        dob: String,
        /// Time of birth, HH:MM
        #[arg(long)]
        tob: String,
        /// Place of birth
        #[arg(long)]
        pob: String,
        /// english, hindi or gujarati
        #[arg(long)]
        language: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
}

pub async fn handle_command(command: Command, config: ConfigManager) -> Result<()> {
    match command {
        Command::Serve => start_web_server(&config).await,
        Command::List => {
            let client = ReportsClient::new(&config.service)?;
            let reports = match client.list_reports().await {
                Ok(reports) => reports,
                Err(e) => {
                    error!("Listing reports failed: {}", e);
                    anyhow::bail!("Error fetching reports.");
                }
            };

            if reports.is_empty() {
                println!("No reports found. Generate one to get started.");
                return Ok(());
            }
            for report in reports {
                println!(
                    "{}  {} • {}  [{}]",
                    report.name.as_deref().unwrap_or_default(),
                    format_date(report.dob.as_deref()),
                    report.tob.as_deref().unwrap_or_default(),
                    report.id.as_deref().unwrap_or("-"),
                );
            }
            Ok(())
        }
        Command::Show { id, format } => {
            let client = ReportsClient::new(&config.service)?;
            let view = Mutex::new(ReportView::default());
            load_into(&view, &id, |id| {
                let client = client.clone();
                async move { client.load_report(&id).await }
            })
            .await;

            let view = view.into_inner();
            match view.state() {
                FetchState::Ready {
                    report,
                    labels,
                    language,
                } => {
                    let tree = render(report, labels);
                    let output = match format {
                        OutputFormat::Text => render_text(&tree),
                        OutputFormat::Json => serde_json::to_string_pretty(&tree)?,
                        OutputFormat::Html => PageRenderer::new()?.report_detail(&tree, *language)?,
                    };
                    println!("{}", output);
                    Ok(())
                }
                FetchState::Error(message) => anyhow::bail!("{}", message),
                FetchState::Loading => anyhow::bail!("Report {} did not finish loading", id),
            }
        }
        Command::Create {
            name,
            dob,
            tob,
            pob,
            language,
        } => {
            let request =
                GenerateReportRequest::from_input(&name, &dob, &tob, &pob, language.as_deref());
            if let Err(errors) = request.validate() {
                anyhow::bail!("{}", errors.join("; "));
            }

            let client = ReportsClient::new(&config.service)?;
            match client.generate_report(&request).await {
                Ok(generated) => {
                    info!("Report created for {}", request.name);
                    println!(
                        "✓ Report created for {} (id: {})",
                        request.name,
                        generated.id.as_deref().unwrap_or("unknown")
                    );
                    Ok(())
                }
                Err(errors) => anyhow::bail!("{}", errors.join("; ")),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show_with_format() {
        let cli = Cli::try_parse_from(["astrovaani", "show", "42", "--format", "json"]).unwrap();
        match cli.command {
            Command::Show { id, format } => {
                assert_eq!(id, "42");
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn test_api_url_is_global() {
        let cli = Cli::try_parse_from(["astrovaani", "list", "--api-url", "http://x"]).unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://x"));
    }

    #[test]
    fn test_create_requires_birth_details() {
        assert!(Cli::try_parse_from(["astrovaani", "create", "--name", "Asha"]).is_err());
    }
}
