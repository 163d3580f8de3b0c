use crate::utils::error::{PipelineError, Result};
use reqwest::Client;
use std::time::Duration;

/// Thin JSON transport over reqwest. Buffers the full body before parsing so
/// a malformed payload is distinguishable from a dropped connection.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    client: Client,
}

impl RemoteClient {
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client }
    }

    pub async fn fetch_json(&self, url: &str) -> Result<serde_json::Value> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| PipelineError::Transport {
                url: url.to_string(),
                source,
            })?;
        self.read_json(url, response).await
    }

    pub async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<serde_json::Value> {
        tracing::debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|source| PipelineError::Transport {
                url: url.to_string(),
                source,
            })?;
        self.read_json(url, response).await
    }

    async fn read_json(&self, url: &str, response: reqwest::Response) -> Result<serde_json::Value> {
        let status = response.status();
        tracing::debug!("{} responded with status {}", url, status);

        if !status.is_success() {
            return Err(PipelineError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| PipelineError::Transport {
                url: url.to_string(),
                source,
            })?;

        serde_json::from_str(&body).map_err(|source| PipelineError::MalformedResponse {
            url: url.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client() -> RemoteClient {
        RemoteClient::new(Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_fetch_json_parses_body() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/houses");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([{"slug": "stark"}]));
        });

        let value = client().fetch_json(&server.url("/houses")).await.unwrap();

        api_mock.assert();
        assert_eq!(value[0]["slug"], "stark");
    }

    #[tokio::test]
    async fn test_fetch_json_rejects_invalid_json() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/broken");
            then.status(200).body("<html>not json</html>");
        });

        let err = client().fetch_json(&server.url("/broken")).await.unwrap_err();

        assert!(matches!(err, PipelineError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_fetch_json_surfaces_http_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/missing");
            then.status(404);
        });

        let err = client().fetch_json(&server.url("/missing")).await.unwrap_err();

        match err {
            PipelineError::HttpStatus { status, .. } => {
                assert_eq!(status, reqwest::StatusCode::NOT_FOUND)
            }
            other => panic!("expected HttpStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_json_connection_refused_is_transport() {
        // Port 1 is never listening.
        let err = client().fetch_json("http://127.0.0.1:1/").await.unwrap_err();

        assert!(matches!(err, PipelineError::Transport { .. }));
    }

    #[tokio::test]
    async fn test_post_json_sends_body_and_content_type() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/score")
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"text": "hello"}));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"result": {"polarity": 0.5}}));
        });

        let value = client()
            .post_json(&server.url("/score"), &serde_json::json!({"text": "hello"}))
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(value["result"]["polarity"], 0.5);
    }
}
