//! Prometheus wiring for the matcher's metrics hook.

use std::sync::Arc;
use std::time::Duration;

use matcher::{set_match_metrics, MatchMetrics};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Forwards analysis observations to the `metrics` facade.
#[derive(Debug, Default)]
pub struct PrometheusMatchMetrics;

impl MatchMetrics for PrometheusMatchMetrics {
    fn record_analysis(&self, latency: Duration, suspected_copy: bool, equal_tokens: usize) {
        let verdict = if suspected_copy { "copy" } else { "original" };
        metrics::counter!("verbatim_analyses_total", "verdict" => verdict).increment(1);
        metrics::histogram!("verbatim_analysis_seconds").record(latency.as_secs_f64());
        metrics::histogram!("verbatim_equal_tokens").record(equal_tokens as f64);
    }
}

/// Installs the process-wide Prometheus recorder and routes matcher
/// observations into it.
///
/// Only one recorder can be installed per process; a second call fails.
pub fn install_prometheus() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    set_match_metrics(Some(Arc::new(PrometheusMatchMetrics)));
    Ok(handle)
}
