use std::sync::Arc;

use crate::auth::AuthStore;
use crate::config::Config;
use crate::insights::CandidateAnalyzer;
use crate::jobs::JobStore;
use crate::notify::Notifier;
use crate::pipeline::CandidateStore;

/// Shared application state injected into route handlers via Axum extractors.
/// The stores are the system's whole data layer — in-memory mocks, nothing
/// durable behind them.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub auth: AuthStore,
    pub jobs: JobStore,
    pub candidates: CandidateStore,
    pub notifier: Notifier,
    /// Pluggable insight backend. Default: MockAnalyzer.
    #[allow(dead_code)]
    pub analyzer: Arc<dyn CandidateAnalyzer>,
}
