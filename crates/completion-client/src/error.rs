use thiserror::Error;

/// Anything that prevents a completion from being fetched. The request
/// handler turns every variant into the same generic 500 response.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("HTTP error talking to completion endpoint: {0}")]
    Http(#[from] reqwest::Error),

    #[error("completion endpoint returned a body that is not JSON: {0}")]
    Decode(#[source] serde_json::Error),
}
