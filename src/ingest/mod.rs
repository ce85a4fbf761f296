// src/ingest/mod.rs
pub mod providers;
pub mod types;

use crate::ingest::types::{
    CandidateArticle, FeedProvider, FeedSource, RegionBuckets, SelectedArticle,
};
use crate::relevance::KeywordMatcher;

/// Maximum displayed title length, in characters. Longer titles are cut and
/// marked with an ellipsis before escaping.
pub const MAX_TITLE_CHARS: usize = 80;

const ELLIPSIS: &str = "...";

/// Normalize a raw feed title for display: truncate to [`MAX_TITLE_CHARS`]
/// characters (plus the ellipsis marker), then HTML-escape. Escaping runs
/// after the cut so a truncation boundary can never expose a raw `&`, `<`,
/// `>`, `"` or `'`.
pub fn display_title(raw: &str) -> String {
    let truncated: String = if raw.chars().count() > MAX_TITLE_CHARS {
        let mut cut: String = raw.chars().take(MAX_TITLE_CHARS).collect();
        cut.push_str(ELLIPSIS);
        cut
    } else {
        raw.to_string()
    };
    html_escape::encode_quoted_attribute(&truncated).into_owned()
}

/// Pick the first `limit` relevant candidates from one source, in feed order.
///
/// At most `2 × limit` candidates are examined, leaving headroom for
/// filtering loss; the early stop once the quota is full is an optimization
/// and produces the same first-N-in-order result as an exhaustive scan.
/// Candidates with an empty link or empty title never become selected
/// articles.
pub fn select_from_source(
    candidates: Vec<CandidateArticle>,
    source: &FeedSource,
    matcher: &KeywordMatcher,
    limit: usize,
) -> Vec<SelectedArticle> {
    let mut out = Vec::with_capacity(limit);
    for candidate in candidates.into_iter().take(limit * 2) {
        if out.len() >= limit {
            break;
        }
        if candidate.link.is_empty() || candidate.title.is_empty() {
            continue;
        }
        if !matcher.is_relevant(&candidate.title, &candidate.summary) {
            continue;
        }
        out.push(SelectedArticle {
            title: display_title(&candidate.title),
            link: candidate.link,
            source_label: source.label.clone(),
            region: source.region,
        });
    }
    out
}

/// Run the fetch + filter pipeline once over all providers, in configured
/// order, and return the capped per-region buckets.
///
/// A provider failure is recovered locally: it is logged and contributes
/// zero articles, so one bad feed never aborts the run.
pub async fn run_once(
    providers: &[Box<dyn FeedProvider>],
    matcher: &KeywordMatcher,
    per_source_limit: usize,
) -> RegionBuckets {
    let mut buckets = RegionBuckets::default();

    for provider in providers {
        let source = provider.source();
        let candidates = match provider.fetch_latest().await {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(
                    error = ?e,
                    source = source.label.as_str(),
                    url = source.url.as_str(),
                    "feed fetch failed, skipping source"
                );
                Vec::new()
            }
        };
        let picked = select_from_source(candidates, source, matcher, per_source_limit);
        tracing::debug!(
            source = source.label.as_str(),
            selected = picked.len(),
            "source processed"
        );
        buckets.extend(source.region, picked);
    }

    buckets.truncate_to_caps();
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::types::Region;

    fn source() -> FeedSource {
        FeedSource {
            url: "https://example.test/feed".to_string(),
            label: "Example".to_string(),
            region: Region::Mx,
        }
    }

    fn candidate(title: &str, link: &str) -> CandidateArticle {
        CandidateArticle {
            title: title.to_string(),
            summary: String::new(),
            link: link.to_string(),
        }
    }

    #[test]
    fn short_title_is_escaped_only() {
        assert_eq!(display_title("R&D for creators"), "R&amp;D for creators");
        assert_eq!(display_title("a < b"), "a &lt; b");
    }

    #[test]
    fn long_title_is_cut_at_80_chars_with_marker() {
        let raw = "x".repeat(95);
        let out = display_title(&raw);
        assert_eq!(out, format!("{}...", "x".repeat(80)));
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        // U+00E9 is two bytes in UTF-8; an 81-char title must still keep
        // exactly 80 characters.
        let raw = "\u{e9}".repeat(81);
        let out = display_title(&raw);
        assert_eq!(out, format!("{}...", "\u{e9}".repeat(80)));
    }

    #[test]
    fn truncation_cannot_bypass_escaping() {
        // The 80th kept character is '<'; it must come out escaped.
        let mut raw = "a".repeat(79);
        raw.push('<');
        raw.push_str(&"b".repeat(20));
        let out = display_title(&raw);
        assert_eq!(out, format!("{}&lt;...", "a".repeat(79)));
        assert!(!out.contains('<'));
    }

    #[test]
    fn selection_keeps_first_n_in_feed_order() {
        let matcher = KeywordMatcher::new(["influencer"]);
        let candidates = vec![
            candidate("influencer news 1", "https://e.test/1"),
            candidate("influencer news 2", "https://e.test/2"),
            candidate("influencer news 3", "https://e.test/3"),
            candidate("influencer news 4", "https://e.test/4"),
        ];
        let picked = select_from_source(candidates, &source(), &matcher, 3);
        assert_eq!(picked.len(), 3);
        assert_eq!(picked[0].link, "https://e.test/1");
        assert_eq!(picked[2].link, "https://e.test/3");
        assert_eq!(picked[0].source_label, "Example");
        assert_eq!(picked[0].region, Region::Mx);
    }

    #[test]
    fn selection_scans_at_most_twice_the_limit() {
        let matcher = KeywordMatcher::new(["influencer"]);
        // Relevant entries sit at positions 0, 5 and 7; with limit 3 only the
        // first 6 entries are examined, so position 7 is out of reach.
        let mut candidates = vec![candidate("influencer lead", "https://e.test/0")];
        for n in 1..5 {
            candidates.push(candidate("nothing here", &format!("https://e.test/{n}")));
        }
        candidates.push(candidate("influencer late", "https://e.test/5"));
        candidates.push(candidate("nothing here", "https://e.test/6"));
        candidates.push(candidate("influencer too late", "https://e.test/7"));

        let picked = select_from_source(candidates, &source(), &matcher, 3);
        assert_eq!(picked.len(), 2);
        assert_eq!(picked[1].link, "https://e.test/5");
    }

    #[test]
    fn selection_skips_empty_link_and_empty_title() {
        let matcher = KeywordMatcher::new(["influencer"]);
        let candidates = vec![
            candidate("influencer but no link", ""),
            CandidateArticle {
                title: String::new(),
                summary: "influencer summary carries the match".to_string(),
                link: "https://e.test/untitled".to_string(),
            },
            candidate("influencer ok", "https://e.test/ok"),
        ];
        let picked = select_from_source(candidates, &source(), &matcher, 3);
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].link, "https://e.test/ok");
    }
}
