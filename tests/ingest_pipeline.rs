// tests/ingest_pipeline.rs
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use studio_blog_updater::ingest;
use studio_blog_updater::{CandidateArticle, FeedProvider, FeedSource, KeywordMatcher, Region};

struct MockProvider {
    source: FeedSource,
    items: Vec<CandidateArticle>,
}

impl MockProvider {
    fn boxed(label: &str, region: Region, titles: &[&str]) -> Box<dyn FeedProvider> {
        let items = titles
            .iter()
            .enumerate()
            .map(|(i, title)| CandidateArticle {
                title: title.to_string(),
                summary: String::new(),
                link: format!("https://{label}.test/{i}"),
            })
            .collect();
        Box::new(MockProvider {
            source: FeedSource {
                url: format!("https://{label}.test/feed"),
                label: label.to_string(),
                region,
            },
            items,
        })
    }
}

#[async_trait]
impl FeedProvider for MockProvider {
    async fn fetch_latest(&self) -> Result<Vec<CandidateArticle>> {
        Ok(self.items.clone())
    }

    fn source(&self) -> &FeedSource {
        &self.source
    }
}

struct FailingProvider {
    source: FeedSource,
}

#[async_trait]
impl FeedProvider for FailingProvider {
    async fn fetch_latest(&self) -> Result<Vec<CandidateArticle>> {
        Err(anyhow!("connection refused"))
    }

    fn source(&self) -> &FeedSource {
        &self.source
    }
}

#[tokio::test]
async fn failing_source_contributes_nothing_and_does_not_abort() {
    let failing = Box::new(FailingProvider {
        source: FeedSource {
            url: "https://down.test/feed".to_string(),
            label: "Down".to_string(),
            region: Region::Mx,
        },
    }) as Box<dyn FeedProvider>;
    let healthy = MockProvider::boxed(
        "healthy",
        Region::Us,
        &["influencer news one", "influencer news two"],
    );

    let matcher = KeywordMatcher::new(["influencer"]);
    let buckets = ingest::run_once(&[failing, healthy], &matcher, 3).await;

    assert_eq!(buckets.region(Region::Mx).len(), 0);
    assert_eq!(buckets.region(Region::Us).len(), 2);
    assert_eq!(buckets.total(), 2);
}

#[tokio::test]
async fn region_concatenates_sources_then_caps() {
    // Two global sources with three relevant entries each; the region cap of
    // four keeps all of the first source and only one from the second.
    let first = MockProvider::boxed(
        "first",
        Region::Global,
        &["influencer a1", "influencer a2", "influencer a3"],
    );
    let second = MockProvider::boxed(
        "second",
        Region::Global,
        &["influencer b1", "influencer b2", "influencer b3"],
    );

    let matcher = KeywordMatcher::new(["influencer"]);
    let buckets = ingest::run_once(&[first, second], &matcher, 3).await;

    let global = buckets.region(Region::Global);
    assert_eq!(global.len(), 4);
    assert_eq!(global[0].source_label, "first");
    assert_eq!(global[3].source_label, "second");
    assert_eq!(global[3].title, "influencer b1");
}

#[tokio::test]
async fn irrelevant_entries_are_filtered_out() {
    let provider = MockProvider::boxed(
        "mixed",
        Region::Mx,
        &[
            "city council meeting notes",
            "influencer campaign results",
            "weather outlook",
        ],
    );

    let matcher = KeywordMatcher::new(["influencer"]);
    let buckets = ingest::run_once(&[provider], &matcher, 3).await;

    let mx = buckets.region(Region::Mx);
    assert_eq!(mx.len(), 1);
    assert_eq!(mx[0].title, "influencer campaign results");
}
