// src/splice.rs
//! Anchored in-place replacement of the blog grid inside the target HTML
//! document. This is a pure text transform: the document is never parsed as
//! a DOM, so markup outside the anchor region is preserved byte for byte.

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use regex::{Captures, Regex};
use std::fs;
use std::path::Path;

/// Anchor: the grid's opening `div`, a lazy body, and the closing run of
/// container tags immediately before the CTA section comment. Group 1 and 3
/// are preserved verbatim by the replacement.
fn grid_anchor_re() -> &'static Regex {
    static RE: OnceCell<Regex> = OnceCell::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"(?s)(<div class="blog__grid" id="blog-articles">)\s*(.*?)\s*(</div>\s*</div>\s*</section>\s*<!-- =+\s*CTA FINAL)"#,
        )
        .expect("blog grid anchor regex")
    })
}

/// Replace the anchor region's body with `grid`, touching nothing else.
/// Returns `None` when the document has no anchor region; the caller must
/// then leave the file alone. At most one occurrence is replaced.
pub fn splice_grid(document: &str, grid: &str) -> Option<String> {
    let re = grid_anchor_re();
    if !re.is_match(document) {
        return None;
    }
    let replaced = re.replacen(document, 1, |caps: &Captures| {
        format!("{}\n{}\n        {}", &caps[1], grid, &caps[3])
    });
    Some(replaced.into_owned())
}

/// Read the target document, splice the grid in, and write it back.
/// Returns `Ok(false)` (document untouched) when the anchor is missing; a
/// missing or unreadable file is the one fatal condition.
pub fn update_document(path: &Path, grid: &str) -> Result<bool> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading target document {}", path.display()))?;

    match splice_grid(&content, grid) {
        Some(updated) => {
            fs::write(path, updated)
                .with_context(|| format!("writing target document {}", path.display()))?;
            Ok(true)
        }
        None => {
            tracing::warn!(
                path = %path.display(),
                "blog grid anchor not found, leaving document unchanged"
            );
            Ok(false)
        }
    }
}
