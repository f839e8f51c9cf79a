//! Remote expansion failures

/// Why the remote path was abandoned; always recovered by local expansion
#[derive(Debug, thiserror::Error)]
pub enum ExpandError {
    #[error("language model request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("language model returned HTTP {0}")]
    Status(u16),
    #[error("language model response has no text content")]
    MissingContent,
    #[error("no JSON object found in language model response")]
    NoJson,
    #[error("invalid expansion JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
