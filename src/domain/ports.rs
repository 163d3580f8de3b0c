use crate::domain::model::House;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Read side of the quotes API: the house directory and per-member quotes.
#[async_trait]
pub trait QuoteApi: Send + Sync {
    async fn houses(&self) -> Result<Vec<House>>;

    /// The member's first quote record, joined and sanitized. May be empty.
    async fn member_quote(&self, slug: &str) -> Result<String>;
}

/// Scoring side: submits text, returns its sentiment polarity.
#[async_trait]
pub trait SentimentApi: Send + Sync {
    async fn score(&self, text: &str) -> Result<f64>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base(&self) -> &str;
    fn sentiment_endpoint(&self) -> &str;
    fn concurrent_requests(&self) -> usize;
    fn request_timeout(&self) -> Duration;
}
