use chrono::NaiveDate;
use loan_decision::config::DecisionConfig;
use loan_decision::decision::{Clock, DecisionEngine, FixedClock, SystemClock};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Shared by decision handlers. The engine carries no per-request state.
#[derive(Clone)]
pub(crate) struct DecisionState {
    pub(crate) engine: Arc<DecisionEngine>,
    pub(crate) clock: Arc<dyn Clock>,
}

impl DecisionState {
    pub(crate) fn new(engine: Arc<DecisionEngine>, clock: Arc<dyn Clock>) -> Self {
        Self { engine, clock }
    }

    pub(crate) fn from_config(config: &DecisionConfig) -> Self {
        Self::new(Arc::new(DecisionEngine::default()), clock_for(config.evaluation_date))
    }
}

pub(crate) fn clock_for(evaluation_date: Option<NaiveDate>) -> Arc<dyn Clock> {
    match evaluation_date {
        Some(date) => Arc::new(FixedClock(date)),
        None => Arc::new(SystemClock),
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
