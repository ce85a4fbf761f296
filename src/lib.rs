// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod config;
pub mod ingest;
pub mod relevance;
pub mod render;
pub mod splice;

// ---- Re-exports for stable public API ----
pub use crate::config::UpdaterConfig;
pub use crate::ingest::types::{
    CandidateArticle, FeedProvider, FeedSource, Region, RegionBuckets, SelectedArticle,
};
pub use crate::relevance::KeywordMatcher;

use anyhow::{Context, Result};
use std::time::Duration;

use crate::ingest::providers::rss::RssFeedProvider;

/// What a single run did to the target document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Enough articles were selected and the grid was spliced in.
    Updated { total: usize },
    /// Below the minimum article count; the document was not touched.
    SkippedThreshold { total: usize },
    /// The anchor region was missing; the document was left unchanged.
    AnchorMissing,
}

/// One full production run: HTTP providers for every configured feed, then
/// [`refresh_document`].
pub async fn run_update(cfg: &UpdaterConfig) -> Result<RefreshOutcome> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(cfg.http_timeout_secs))
        .build()
        .context("building http client")?;

    let providers: Vec<Box<dyn FeedProvider>> = cfg
        .feeds
        .iter()
        .cloned()
        .map(|source| {
            Box::new(RssFeedProvider::over_http(source, client.clone())) as Box<dyn FeedProvider>
        })
        .collect();

    refresh_document(cfg, &providers).await
}

/// Fetch, filter, and conditionally rewrite the target document. Split out
/// from [`run_update`] so tests can drive it with fixture providers.
pub async fn refresh_document(
    cfg: &UpdaterConfig,
    providers: &[Box<dyn FeedProvider>],
) -> Result<RefreshOutcome> {
    let matcher = KeywordMatcher::new(&cfg.keywords);
    let buckets = ingest::run_once(providers, &matcher, cfg.per_source_limit).await;

    let total = buckets.total();
    tracing::info!(total, "relevant articles selected");

    if total < cfg.min_total_articles {
        tracing::info!(
            total,
            min = cfg.min_total_articles,
            "not enough articles, keeping current content"
        );
        return Ok(RefreshOutcome::SkippedThreshold { total });
    }

    let grid = render::render_grid(&buckets);
    if splice::update_document(&cfg.target_path, &grid)? {
        Ok(RefreshOutcome::Updated { total })
    } else {
        Ok(RefreshOutcome::AnchorMissing)
    }
}
