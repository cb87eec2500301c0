pub mod generate;
pub mod normalize;
pub mod serve;

use clap::Args;
use planner_core::config::{parse_origin_list, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use planner_core::{Config, NormalizationMode};
use std::time::Duration;

// ---------------------------------------------------------------------------
// Shared configuration flags
// ---------------------------------------------------------------------------

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// API key for the completion endpoint
    #[arg(long, env = "MISTRAL_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Chat-completion endpoint URL
    #[arg(long, env = "PLANNER_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// How model output is normalized: passthrough, plain_text, sections, json
    #[arg(long, env = "PLANNER_MODE", default_value = "json")]
    pub mode: NormalizationMode,

    /// Timeout for the outbound completion call, in seconds
    #[arg(long, env = "PLANNER_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Comma-separated CORS allow-list (default: local React app and hosted frontend)
    #[arg(long, env = "PLANNER_ALLOWED_ORIGINS")]
    pub allowed_origins: Option<String>,
}

impl ConfigArgs {
    pub fn into_config(self) -> planner_core::Result<Config> {
        let mut builder = Config::builder(self.api_key)
            .api_url(self.api_url)
            .mode(self.mode)
            .request_timeout(Duration::from_secs(self.timeout_secs));
        if let Some(raw) = self.allowed_origins.as_deref() {
            let origins = parse_origin_list(raw);
            if !origins.is_empty() {
                builder = builder.allowed_origins(origins);
            }
        }
        builder.build()
    }
}
