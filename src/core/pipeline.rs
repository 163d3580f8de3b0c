use crate::core::aggregate::rank_houses;
use crate::domain::model::{HouseScore, Member};
use crate::domain::ports::{QuoteApi, SentimentApi};
use crate::utils::error::{PipelineError, Result};
use futures::stream::{self, StreamExt, TryStreamExt};

/// Fan-out/fan-in orchestrator: houses -> per-member resolve+score -> group
/// -> mean -> ascending ranking. All-or-nothing: the first member failure
/// aborts the run and no ranking is produced.
pub struct SentimentPipeline<Q: QuoteApi, S: SentimentApi> {
    quotes: Q,
    sentiment: S,
    concurrency: usize,
}

impl<Q: QuoteApi, S: SentimentApi> SentimentPipeline<Q, S> {
    pub fn new(quotes: Q, sentiment: S, concurrency: usize) -> Self {
        Self {
            quotes,
            sentiment,
            concurrency: concurrency.max(1),
        }
    }

    pub async fn run(&self) -> Result<Vec<HouseScore>> {
        tracing::info!("Fetching house directory");
        let houses = self.quotes.houses().await?;

        let work: Vec<(String, String)> = houses
            .iter()
            .flat_map(|house| {
                house
                    .members
                    .iter()
                    .map(|member| (house.slug.clone(), member.slug.clone()))
            })
            .collect();

        tracing::info!(
            "Resolving and scoring {} members across {} houses ({} concurrent requests)",
            work.len(),
            houses.len(),
            self.concurrency
        );

        // Full barrier: try_collect waits for every member (or bails on the
        // first error, dropping in-flight siblings).
        let members: Vec<Member> = stream::iter(work)
            .map(|(house, slug)| self.resolve_and_score(house, slug))
            .buffer_unordered(self.concurrency)
            .try_collect()
            .await?;

        tracing::info!("Scored {} members, ranking houses", members.len());
        Ok(rank_houses(&members))
    }

    /// One unit of concurrent work: fetch and sanitize the member's quote,
    /// then score it. Owns its inputs, writes nothing shared.
    async fn resolve_and_score(&self, house: String, slug: String) -> Result<Member> {
        let quote = self.quotes.member_quote(&slug).await.inspect_err(|e| {
            tracing::error!(member = %slug, house = %house, stage = e.stage(), "{}", e);
        })?;
        tracing::debug!(member = %slug, "Resolved quote ({} chars)", quote.len());

        let polarity = self
            .sentiment
            .score(&quote)
            .await
            .map_err(|e| match e {
                // The scorer does not know which member the text belongs to.
                PipelineError::MissingScoreField { .. } => {
                    PipelineError::MissingScoreField {
                        member: slug.clone(),
                    }
                }
                other => other,
            })
            .inspect_err(|e| {
                tracing::error!(member = %slug, house = %house, stage = e.stage(), "{}", e);
            })?;
        tracing::debug!(member = %slug, polarity, "Scored quote");

        Ok(Member {
            house,
            slug,
            quote,
            polarity,
        })
    }
}
