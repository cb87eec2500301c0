use anyhow::Context;
use axum::http::HeaderValue;
use completion_client::CompletionClient;
use planner_core::{Config, PlannerError};
use std::sync::Arc;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: CompletionClient,
    pub allowed_origins: Vec<HeaderValue>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client =
            CompletionClient::new(&config).context("failed to build completion HTTP client")?;
        let allowed_origins = config
            .allowed_origins
            .iter()
            .map(|o| {
                HeaderValue::from_str(o).map_err(|_| PlannerError::InvalidOrigin(o.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            config: Arc::new(config),
            client,
            allowed_origins,
        })
    }
}
