// src/ingest/types.rs
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Geographic bucket a feed contributes to. Buckets render in declaration
/// order: Mexico, then USA, then Global.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Mx,
    Us,
    Global,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Mx, Region::Us, Region::Global];

    /// Human-readable label shown on each card.
    pub fn label(self) -> &'static str {
        match self {
            Region::Mx => "Mexico",
            Region::Us => "USA",
            Region::Global => "Global",
        }
    }

    /// Suffix of the `blog__card--*` CSS modifier class.
    pub fn css_suffix(self) -> &'static str {
        match self {
            Region::Mx => "mx",
            Region::Us => "us",
            Region::Global => "global",
        }
    }

    /// Hard cap on rendered articles for this region.
    pub fn cap(self) -> usize {
        match self {
            Region::Mx => 3,
            Region::Us => 3,
            Region::Global => 4,
        }
    }
}

/// One configured syndication feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSource {
    pub url: String,
    pub label: String,
    pub region: Region,
}

/// Raw entry as parsed from a feed, before relevance filtering.
/// Missing feed elements map to empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateArticle {
    pub title: String,
    pub summary: String,
    pub link: String,
}

/// An article that passed filtering. The title is already truncated and
/// HTML-escaped; link and title are guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedArticle {
    pub title: String,
    pub link: String,
    pub source_label: String,
    pub region: Region,
}

/// Selected articles grouped by region, in fetch order.
#[derive(Debug, Clone, Default)]
pub struct RegionBuckets {
    mx: Vec<SelectedArticle>,
    us: Vec<SelectedArticle>,
    global: Vec<SelectedArticle>,
}

impl RegionBuckets {
    pub fn extend(&mut self, region: Region, articles: Vec<SelectedArticle>) {
        self.bucket_mut(region).extend(articles);
    }

    pub fn region(&self, region: Region) -> &[SelectedArticle] {
        match region {
            Region::Mx => &self.mx,
            Region::Us => &self.us,
            Region::Global => &self.global,
        }
    }

    pub fn total(&self) -> usize {
        self.mx.len() + self.us.len() + self.global.len()
    }

    /// Enforce the per-region caps. Articles past a cap are dropped in
    /// arrival order, never reordered.
    pub fn truncate_to_caps(&mut self) {
        for region in Region::ALL {
            let cap = region.cap();
            self.bucket_mut(region).truncate(cap);
        }
    }

    fn bucket_mut(&mut self, region: Region) -> &mut Vec<SelectedArticle> {
        match region {
            Region::Mx => &mut self.mx,
            Region::Us => &mut self.us,
            Region::Global => &mut self.global,
        }
    }
}

#[async_trait::async_trait]
pub trait FeedProvider: Send + Sync {
    /// Retrieve the feed's current entries, newest first as published.
    async fn fetch_latest(&self) -> Result<Vec<CandidateArticle>>;

    /// The feed this provider was built from.
    fn source(&self) -> &FeedSource;
}
