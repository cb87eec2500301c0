use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("MISTRAL_API_KEY is missing: set it in the environment or a .env file")]
    MissingApiKey,

    #[error("invalid normalization mode '{0}': expected passthrough, plain_text, sections or json")]
    InvalidMode(String),

    #[error("invalid CORS origin: {0}")]
    InvalidOrigin(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
