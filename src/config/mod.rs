use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "house-sentiment")]
#[command(about = "Ranks houses by the average sentiment polarity of their members' quotes")]
pub struct CliConfig {
    #[arg(long, default_value = "https://game-of-thrones-quotes.herokuapp.com/v1")]
    pub api_base: String,

    #[arg(long, default_value = "https://sentim-api.herokuapp.com/api/v1/")]
    pub sentiment_endpoint: String,

    #[arg(long, default_value = "8")]
    pub concurrent_requests: usize,

    #[arg(long, default_value = "30")]
    pub timeout_seconds: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn sentiment_endpoint(&self) -> &str {
        &self.sentiment_endpoint
    }

    fn concurrent_requests(&self) -> usize {
        self.concurrent_requests
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base", &self.api_base)?;
        validate_url("sentiment_endpoint", &self.sentiment_endpoint)?;
        validate_positive_number("concurrent_requests", self.concurrent_requests, 1)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds as usize, 1)?;
        Ok(())
    }
}
