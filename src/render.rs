// src/render.rs
//! Renders the selected articles into the blog-grid HTML fragment that gets
//! spliced into the page. Markup shape is load-bearing: the site CSS and the
//! progressive-reveal script key off these classes and data attributes.

use crate::ingest::types::{Region, RegionBuckets, SelectedArticle};

/// Reveal delay of the first card, in seconds.
const DELAY_START: f64 = 0.10;
/// Delay increment per card, applied across the whole grid.
const DELAY_STEP: f64 = 0.05;

/// Render the full grid: region comment headers in fixed order, cards in
/// bucket order, one monotonically increasing reveal delay across all
/// regions.
pub fn render_grid(buckets: &RegionBuckets) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut card_index = 0usize;

    for region in Region::ALL {
        parts.push(region_header(region).to_string());
        for article in buckets.region(region) {
            let delay = DELAY_START + DELAY_STEP * card_index as f64;
            parts.push(render_card(article, delay));
            card_index += 1;
        }
    }

    parts.join("\n")
}

fn region_header(region: Region) -> &'static str {
    match region {
        Region::Mx => "          <!-- Mexico -->",
        Region::Us => "\n          <!-- USA -->",
        Region::Global => "\n          <!-- Global -->",
    }
}

fn render_card(article: &SelectedArticle, delay: f64) -> String {
    format!(
        r#"          <article class="blog__card blog__card--{region}" data-animate="fade-up" data-delay="{delay:.2}">
            <span class="blog__region">{label}</span>
            <a href="{link}" target="_blank" rel="noopener" class="blog__link">
              <h3 class="blog__card-title">{title}</h3>
              <p class="blog__source">{source}</p>
            </a>
          </article>"#,
        region = article.region.css_suffix(),
        label = article.region.label(),
        link = article.link,
        title = article.title,
        source = article.source_label,
    )
}
