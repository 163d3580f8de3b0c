use crate::core::client::RemoteClient;
use crate::domain::ports::SentimentApi;
use crate::utils::error::{PipelineError, Result};
use async_trait::async_trait;

/// Sentiment scoring backed by the sentim API. Submits `{"text": ...}` and
/// reads `result.polarity` from the response; everything else is ignored.
pub struct SentimentService {
    client: RemoteClient,
    endpoint: String,
}

impl SentimentService {
    pub fn new(client: RemoteClient, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl SentimentApi for SentimentService {
    async fn score(&self, text: &str) -> Result<f64> {
        let body = serde_json::json!({ "text": text });
        let value = self.client.post_json(&self.endpoint, &body).await?;

        value
            .pointer("/result/polarity")
            .and_then(serde_json::Value::as_f64)
            .ok_or_else(|| PipelineError::MissingScoreField {
                member: String::new(),
            })
    }
}
