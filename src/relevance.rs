// src/relevance.rs
//! Topical relevance gate: plain substring matching of a bilingual keyword
//! list against an article's title + summary.

/// Case-insensitive keyword matcher. Keywords are lowercased once at
/// construction; matching is substring containment with no word-boundary
/// requirement. A keyword embedded in a longer word still matches, which is
/// accepted behavior, not something to tighten.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    keywords: Vec<String>,
}

impl KeywordMatcher {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// True iff any keyword occurs in `title + " " + summary`, compared in
    /// lowercase.
    pub fn is_relevant(&self, title: &str, summary: &str) -> bool {
        let text = format!("{} {}", title, summary).to_lowercase();
        self.keywords.iter().any(|k| text.contains(k.as_str()))
    }
}
