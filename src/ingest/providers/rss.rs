// src/ingest/providers/rss.rs
use anyhow::{Context, Result};
use async_trait::async_trait;
use quick_xml::de::from_str;
use serde::Deserialize;

use crate::ingest::types::{CandidateArticle, FeedProvider, FeedSource};

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
    link: Option<String>,
    description: Option<String>,
}

/// RSS 2.0 provider for one configured [`FeedSource`]. Fetches over HTTP in
/// production; tests construct it from fixture XML instead.
pub struct RssFeedProvider {
    source: FeedSource,
    mode: Mode,
}

enum Mode {
    Http { client: reqwest::Client },
    Fixture(String),
}

impl RssFeedProvider {
    pub fn over_http(source: FeedSource, client: reqwest::Client) -> Self {
        Self {
            source,
            mode: Mode::Http { client },
        }
    }

    pub fn from_fixture(source: FeedSource, xml: &str) -> Self {
        Self {
            source,
            mode: Mode::Fixture(xml.to_string()),
        }
    }

    fn parse_items(&self, xml: &str) -> Result<Vec<CandidateArticle>> {
        let xml_clean = scrub_entities_for_xml(xml);
        let rss: Rss = from_str(&xml_clean)
            .with_context(|| format!("parsing rss feed from {}", self.source.label))?;

        Ok(rss
            .channel
            .items
            .into_iter()
            .map(|item| CandidateArticle {
                title: item.title.unwrap_or_default(),
                summary: item.description.unwrap_or_default(),
                link: item.link.unwrap_or_default(),
            })
            .collect())
    }
}

#[async_trait]
impl FeedProvider for RssFeedProvider {
    async fn fetch_latest(&self) -> Result<Vec<CandidateArticle>> {
        match &self.mode {
            Mode::Fixture(xml) => self.parse_items(xml),
            Mode::Http { client } => {
                let response = client
                    .get(&self.source.url)
                    .send()
                    .await
                    .with_context(|| format!("fetching feed {}", self.source.url))?;
                let response = response
                    .error_for_status()
                    .with_context(|| format!("feed {} returned an error status", self.source.url))?;
                let body = response
                    .text()
                    .await
                    .with_context(|| format!("reading feed body from {}", self.source.url))?;
                self.parse_items(&body)
            }
        }
    }

    fn source(&self) -> &FeedSource {
        &self.source
    }
}

/// Real-world feeds embed named HTML entities the XML parser rejects;
/// replace the common ones with plain text before deserializing.
fn scrub_entities_for_xml(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&ndash;", "-")
        .replace("&mdash;", "-")
        .replace("&hellip;", "...")
        .replace("&ldquo;", "\"")
        .replace("&rdquo;", "\"")
        .replace("&lsquo;", "'")
        .replace("&rsquo;", "'")
}
