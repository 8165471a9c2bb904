// src/core/view_state.rs
//! Load lifecycle of a single report view
//!
//! Every load gets a generation number. A response that arrives after a newer
//! load has started is dropped instead of overwriting the newer state.

use std::future::Future;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::report::{LabelSet, Language, LoadedReport, NormalizedReport, ReportError};

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Error(String),
    Ready {
        report: NormalizedReport,
        labels: &'static LabelSet,
        language: Language,
    },
}

/// Proof that a load was started; hand it back with the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    report_id: String,
}

impl LoadTicket {
    pub fn report_id(&self) -> &str {
        &self.report_id
    }
}

/// The generation guard only matters for a view that outlives one load, such
/// as a client that re-requests while a previous response is in flight. Per
/// request views in the web handlers and CLI run a single load.
#[derive(Debug)]
pub struct ReportView {
    generation: u64,
    report_id: Option<String>,
    state: FetchState,
}

impl Default for ReportView {
    fn default() -> Self {
        Self {
            generation: 0,
            report_id: None,
            state: FetchState::Loading,
        }
    }
}

impl ReportView {
    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn report_id(&self) -> Option<&str> {
        self.report_id.as_deref()
    }

    /// Start loading `report_id`. Any load still in flight becomes stale.
    pub fn begin(&mut self, report_id: &str) -> LoadTicket {
        self.generation += 1;
        self.report_id = Some(report_id.to_string());
        self.state = FetchState::Loading;
        debug!("Report view load #{} started for {}", self.generation, report_id);

        LoadTicket {
            generation: self.generation,
            report_id: report_id.to_string(),
        }
    }

    /// Apply the outcome of the load identified by `ticket`.
    ///
    /// Returns `false` when the ticket is stale and the outcome was dropped.
    pub fn complete(
        &mut self,
        ticket: LoadTicket,
        outcome: Result<LoadedReport, ReportError>,
    ) -> bool {
        if ticket.generation != self.generation {
            warn!(
                "Dropping stale response for report {} (load #{}, current #{})",
                ticket.report_id, ticket.generation, self.generation
            );
            return false;
        }

        self.state = match outcome {
            Ok(loaded) => FetchState::Ready {
                labels: loaded.labels(),
                language: loaded.language,
                report: loaded.report,
            },
            Err(e) => FetchState::Error(e.user_message()),
        };
        true
    }
}

/// Run one load against a shared view: begin, fetch without holding the
/// lock, then complete.
pub async fn load_into<F, Fut>(view: &Mutex<ReportView>, report_id: &str, fetch: F) -> bool
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<LoadedReport, ReportError>>,
{
    let ticket = view.lock().await.begin(report_id);
    let outcome = fetch(ticket.report_id().to_string()).await;
    view.lock().await.complete(ticket, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::resolve_labels;
    use serde_json::json;
    use tokio::sync::oneshot;

    fn loaded(personality: &str) -> LoadedReport {
        LoadedReport {
            language: Language::Hindi,
            report: NormalizedReport::project(json!({ "personality": personality })),
        }
    }

    #[test]
    fn test_completion_sets_ready() {
        let mut view = ReportView::default();
        let ticket = view.begin("a");
        assert_eq!(view.state(), &FetchState::Loading);

        assert!(view.complete(ticket, Ok(loaded("kind"))));
        match view.state() {
            FetchState::Ready { report, labels, language } => {
                assert_eq!(report.personality.as_deref(), Some("kind"));
                assert_eq!(*labels, resolve_labels(Some("hindi")));
                assert_eq!(*language, Language::Hindi);
            }
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn test_error_shows_fixed_message() {
        let mut view = ReportView::default();
        let ticket = view.begin("a");
        view.complete(ticket, Err(ReportError::network("dns failure")));
        assert_eq!(view.state(), &FetchState::Error("Error fetching report.".into()));
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut view = ReportView::default();
        let first = view.begin("a");
        let second = view.begin("b");

        assert!(view.complete(second, Ok(loaded("second"))));
        assert!(!view.complete(first, Ok(loaded("first"))));

        assert_eq!(view.report_id(), Some("b"));
        match view.state() {
            FetchState::Ready { report, .. } => {
                assert_eq!(report.personality.as_deref(), Some("second"))
            }
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn test_stale_error_does_not_clobber_loading() {
        let mut view = ReportView::default();
        let first = view.begin("a");
        let _second = view.begin("b");
        assert!(!view.complete(first, Err(ReportError::NotFound)));
        assert_eq!(view.state(), &FetchState::Loading);
    }

    #[tokio::test]
    async fn test_out_of_order_responses_keep_latest() {
        let view = Mutex::new(ReportView::default());
        let (tx_a, rx_a) = oneshot::channel::<Result<LoadedReport, ReportError>>();
        let (tx_b, rx_b) = oneshot::channel::<Result<LoadedReport, ReportError>>();

        let load_a = load_into(&view, "a", |_| async move {
            rx_a.await.unwrap_or(Err(ReportError::NotFound))
        });
        let load_b = load_into(&view, "b", |_| async move {
            rx_b.await.unwrap_or(Err(ReportError::NotFound))
        });
        let driver = async {
            tokio::task::yield_now().await;
            let _ = tx_b.send(Ok(loaded("from b")));
            tokio::task::yield_now().await;
            let _ = tx_a.send(Ok(loaded("from a")));
        };

        let (applied_a, applied_b, ()) = tokio::join!(biased; load_a, load_b, driver);
        assert!(!applied_a);
        assert!(applied_b);

        let view = view.lock().await;
        assert_eq!(view.report_id(), Some("b"));
        match view.state() {
            FetchState::Ready { report, .. } => {
                assert_eq!(report.personality.as_deref(), Some("from b"))
            }
            other => panic!("unexpected state {other:?}"),
        }
    }
}
