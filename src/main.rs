use clap::Parser;
use house_sentiment::core::ConfigProvider;
use house_sentiment::utils::{logger, validation::Validate};
use house_sentiment::{CliConfig, QuoteService, RemoteClient, SentimentPipeline, SentimentService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting house-sentiment run");
    if config.verbose {
        tracing::debug!("Config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let client = RemoteClient::new(config.request_timeout());
    let quotes = QuoteService::new(client.clone(), config.api_base.clone());
    let sentiment = SentimentService::new(client, config.sentiment_endpoint.clone());
    let pipeline = SentimentPipeline::new(quotes, sentiment, config.concurrent_requests);

    match pipeline.run().await {
        Ok(ranking) => {
            tracing::info!("Run completed, {} houses ranked", ranking.len());
            let pairs: Vec<(&str, f64)> = ranking
                .iter()
                .map(|score| (score.house.as_str(), score.average_polarity))
                .collect();
            println!("{}", serde_json::to_string_pretty(&pairs)?);
        }
        Err(e) => {
            tracing::error!("Run failed during {}: {}", e.stage(), e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
