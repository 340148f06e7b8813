use reqwest::StatusCode;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("invalid difficulty '{item}': {source}")]
    InvalidDifficulty {
        item: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request to {endpoint} failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("malformed response (HTTP {status}): {source}")]
    MalformedResponse {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },
    #[error("response (HTTP {status}) has no campaign_id")]
    MissingCampaignId { status: StatusCode },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Submit(#[from] SubmitError),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders `err` followed by each underlying cause not already part of the
/// message, e.g. `request to ... failed: ...: Connection refused`.
pub fn render_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        let text = inner.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        cause = inner.source();
    }
    message
}
