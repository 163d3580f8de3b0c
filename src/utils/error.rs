use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("transport failure for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} failed with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("the server response from {url} was not a valid JSON document: {source}")]
    MalformedResponse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no quote record found for member '{member}'")]
    MissingMemberData { member: String },

    #[error("sentiment response for member '{member}' has no numeric result.polarity field")]
    MissingScoreField { member: String },

    #[error("invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl PipelineError {
    /// Pipeline stage the error originated from, used in run diagnostics.
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineError::Transport { .. }
            | PipelineError::HttpStatus { .. }
            | PipelineError::MalformedResponse { .. } => "transport",
            PipelineError::MissingMemberData { .. } => "quote-resolution",
            PipelineError::MissingScoreField { .. } => "sentiment-scoring",
            PipelineError::InvalidConfigValue { .. } => "configuration",
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
