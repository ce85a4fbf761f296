// src/config.rs
//! Configuration tables for the updater. The built-in defaults are the
//! production feed/keyword set; an optional TOML or JSON file overrides
//! them for testing or reconfiguration without a rebuild.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::ingest::types::{FeedSource, Region};

pub const ENV_CONFIG_PATH: &str = "BLOG_UPDATER_CONFIG_PATH";
pub const DEFAULT_TOML_PATH: &str = "config/blog_updater.toml";
pub const DEFAULT_JSON_PATH: &str = "config/blog_updater.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UpdaterConfig {
    /// Document rewritten in place. Relative paths resolve against the
    /// working directory the job runner uses.
    pub target_path: PathBuf,
    /// Below this total selected count the document is not touched at all;
    /// stale content beats sparse content.
    pub min_total_articles: usize,
    /// Relevant articles kept per feed. Each feed scans at most twice this
    /// many entries to allow for filtering loss.
    pub per_source_limit: usize,
    pub http_timeout_secs: u64,
    pub keywords: Vec<String>,
    pub feeds: Vec<FeedSource>,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            target_path: PathBuf::from("index.html"),
            min_total_articles: 5,
            per_source_limit: 3,
            http_timeout_secs: 30,
            keywords: default_keywords(),
            feeds: default_feeds(),
        }
    }
}

/// Bilingual (English + Spanish) influencer-marketing vocabulary.
fn default_keywords() -> Vec<String> {
    [
        "influencer",
        "creator",
        "content creator",
        "social media marketing",
        "tiktok",
        "instagram",
        "youtube",
        "brand partnership",
        "ugc",
        "micro-influencer",
        "nano-influencer",
        "influencer marketing",
        "creator economy",
        "brand ambassador",
        "sponsored content",
        "marketing de influencers",
        "creadores de contenido",
        "redes sociales",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

fn default_feeds() -> Vec<FeedSource> {
    let feed = |url: &str, label: &str, region: Region| FeedSource {
        url: url.to_string(),
        label: label.to_string(),
        region,
    };
    vec![
        feed("https://www.merca20.com/feed/", "Merca2.0", Region::Mx),
        feed(
            "https://www.adweek.com/category/influencers-creators/feed/",
            "Adweek",
            Region::Us,
        ),
        feed(
            "https://blog.hubspot.com/marketing/rss.xml",
            "HubSpot",
            Region::Us,
        ),
        feed(
            "https://influencermarketinghub.com/feed/",
            "Influencer Marketing Hub",
            Region::Global,
        ),
        feed(
            "https://sproutsocial.com/insights/feed/",
            "Sprout Social",
            Region::Global,
        ),
        feed("https://later.com/blog/feed/", "Later", Region::Global),
    ]
}

/// Load configuration from an explicit path. The extension picks the
/// format; anything that isn't `.json` is parsed as TOML.
pub fn load_from(path: &Path) -> Result<UpdaterConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading updater config from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    if ext == "json" {
        serde_json::from_str(&content)
            .with_context(|| format!("parsing json config {}", path.display()))
    } else {
        toml::from_str(&content).with_context(|| format!("parsing toml config {}", path.display()))
    }
}

/// Resolve configuration the usual way:
/// 1) $BLOG_UPDATER_CONFIG_PATH (must exist if set)
/// 2) config/blog_updater.toml
/// 3) config/blog_updater.json
/// 4) built-in defaults
pub fn load_default() -> Result<UpdaterConfig> {
    if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
        let pb = PathBuf::from(p);
        if !pb.exists() {
            return Err(anyhow!(
                "{} points to non-existent path {}",
                ENV_CONFIG_PATH,
                pb.display()
            ));
        }
        return load_from(&pb);
    }
    for candidate in [DEFAULT_TOML_PATH, DEFAULT_JSON_PATH] {
        let pb = PathBuf::from(candidate);
        if pb.exists() {
            return load_from(&pb);
        }
    }
    Ok(UpdaterConfig::default())
}
