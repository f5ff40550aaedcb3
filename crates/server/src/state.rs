use crate::config::ServerConfig;
use crate::error::ServerResult;
use matcher::Matcher;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Matcher instance (shared across requests)
    pub matcher: Arc<Matcher>,

    /// Prometheus handle, present when a recorder was installed
    pub metrics: Option<PrometheusHandle>,
}

impl ServerState {
    /// Create new server state
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let matcher = Arc::new(Matcher::new(config.matcher.clone())?);

        Ok(Self {
            config: Arc::new(config),
            matcher,
            metrics: None,
        })
    }

    /// Attach a Prometheus handle for the `/metrics` endpoint
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
