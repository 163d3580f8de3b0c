use crate::core::client::RemoteClient;
use crate::core::sanitize::sanitize_quote;
use crate::domain::model::House;
use crate::domain::ports::QuoteApi;
use crate::utils::error::{PipelineError, Result};
use async_trait::async_trait;
use serde::Deserialize;

/// One entry of the per-member quote payload. The API returns an array of
/// these; only the first is consumed.
#[derive(Debug, Deserialize)]
struct QuoteRecord {
    quotes: Vec<String>,
}

/// Quotes API backed by the remote house/character endpoints.
pub struct QuoteService {
    client: RemoteClient,
    api_base: String,
}

impl QuoteService {
    pub fn new(client: RemoteClient, api_base: impl Into<String>) -> Self {
        Self {
            client,
            api_base: api_base.into(),
        }
    }

    fn houses_url(&self) -> String {
        format!("{}/houses", self.api_base.trim_end_matches('/'))
    }

    fn character_url(&self, slug: &str) -> String {
        format!("{}/character/{}", self.api_base.trim_end_matches('/'), slug)
    }
}

#[async_trait]
impl QuoteApi for QuoteService {
    async fn houses(&self) -> Result<Vec<House>> {
        let url = self.houses_url();
        let value = self.client.fetch_json(&url).await?;

        // Parses as JSON but not as the houses shape: still a malformed response.
        serde_json::from_value(value)
            .map_err(|source| PipelineError::MalformedResponse { url, source })
    }

    async fn member_quote(&self, slug: &str) -> Result<String> {
        let value = self.client.fetch_json(&self.character_url(slug)).await?;

        let records: Vec<QuoteRecord> =
            serde_json::from_value(value).map_err(|_| PipelineError::MissingMemberData {
                member: slug.to_string(),
            })?;

        let first = records
            .into_iter()
            .next()
            .ok_or_else(|| PipelineError::MissingMemberData {
                member: slug.to_string(),
            })?;

        Ok(sanitize_quote(&first.quotes.join(" ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::time::Duration;

    fn service(server: &MockServer) -> QuoteService {
        QuoteService::new(
            RemoteClient::new(Duration::from_secs(5)),
            server.url("/v1"),
        )
    }

    #[tokio::test]
    async fn test_houses_deserializes_directory() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/v1/houses");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {"slug": "stark", "members": [{"slug": "ned"}, {"slug": "jon"}]},
                    {"slug": "lannister", "members": [{"slug": "tyrion"}]}
                ]));
        });

        let houses = service(&server).houses().await.unwrap();

        api_mock.assert();
        assert_eq!(houses.len(), 2);
        assert_eq!(houses[0].slug, "stark");
        assert_eq!(houses[0].members.len(), 2);
        assert_eq!(houses[1].members[0].slug, "tyrion");
    }

    #[tokio::test]
    async fn test_houses_wrong_shape_is_malformed_response() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v1/houses");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"unexpected": true}));
        });

        let err = service(&server).houses().await.unwrap_err();

        assert!(matches!(err, PipelineError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_member_quote_joins_and_sanitizes_first_record() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/v1/character/jon");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {"quotes": ["Winter is coming!!", "#north remembers"]},
                    {"quotes": ["ignored second record"]}
                ]));
        });

        let quote = service(&server).member_quote("jon").await.unwrap();

        api_mock.assert();
        assert_eq!(quote, "Winter is coming north remembers");
    }

    #[tokio::test]
    async fn test_member_quote_empty_payload_is_missing_member_data() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v1/character/ghost");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([]));
        });

        let err = service(&server).member_quote("ghost").await.unwrap_err();

        match err {
            PipelineError::MissingMemberData { member } => assert_eq!(member, "ghost"),
            other => panic!("expected MissingMemberData, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_member_quote_may_be_empty_string() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v1/character/hodor");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([{"quotes": ["!?#"]}]));
        });

        let quote = service(&server).member_quote("hodor").await.unwrap();

        assert_eq!(quote, "");
    }
}
