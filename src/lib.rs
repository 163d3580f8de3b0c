pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::client::RemoteClient;
pub use crate::core::pipeline::SentimentPipeline;
pub use crate::core::quotes::QuoteService;
pub use crate::core::sentiment::SentimentService;
pub use crate::utils::error::{PipelineError, Result};
