//! Title-based ranking over a parsed [`DocIndex`].
//!
//! Pure functions only: the engine never acquires or mutates indexes.

use crate::core::index::{DocIndex, Page};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Token equals the lower-cased title
pub const EXACT_SCORE: f32 = 5.0;

/// Title starts with the token
pub const PREFIX_SCORE: f32 = 3.0;

/// Token appears elsewhere in the title
pub const SUBSTRING_SCORE: f32 = 1.0;

/// A page and its accumulated relevance
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPage<'a> {
    pub page: &'a Page,
    pub score: f32,
}

/// Split a query into scoring tokens
///
/// Tokens are lower-cased and stop words dropped. When two or more
/// tokens survive, their concatenation is appended so that
/// "game object" also matches "gameobject".
pub fn tokenize(query: &str, stop_words: &BTreeSet<String>) -> Vec<String> {
    let mut tokens: Vec<String> = query
        .split_whitespace()
        .map(str::to_lowercase)
        .filter(|t| !stop_words.contains(t))
        .collect();

    if tokens.len() >= 2 {
        let compound = tokens.concat();
        tokens.push(compound);
    }

    tokens
}

/// Score one token against a lower-cased title
pub fn score_title(token: &str, title_lower: &str) -> f32 {
    if token.is_empty() {
        0.0
    } else if title_lower == token {
        EXACT_SCORE
    } else if title_lower.starts_with(token) {
        PREFIX_SCORE
    } else if title_lower.contains(token) {
        SUBSTRING_SCORE
    } else {
        0.0
    }
}

/// Rank pages against a free-text query
///
/// Results are ordered by score (highest first), ties broken by page id.
pub fn search<'a>(index: &'a DocIndex, query: &str, max_results: usize) -> Vec<ScoredPage<'a>> {
    let tokens = tokenize(query, index.stop_words());
    if tokens.is_empty() || max_results == 0 {
        return Vec::new();
    }

    let mut scored: Vec<ScoredPage<'a>> = index
        .pages()
        .iter()
        .filter_map(|page| {
            let title = page.title.to_lowercase();
            let score: f32 = tokens.iter().map(|t| score_title(t, &title)).sum();
            (score > 0.0).then_some(ScoredPage { page, score })
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.page.id.cmp(&b.page.id))
    });
    scored.truncate(max_results);
    scored
}

/// Pages whose title starts with `partial`, in page order
///
/// The prefix is compared case-insensitively after trimming surrounding
/// whitespace, so a blank `partial` yields no suggestions rather than
/// every page.
pub fn suggest<'a>(index: &'a DocIndex, partial: &str, max_results: usize) -> Vec<&'a Page> {
    let prefix = partial.trim().to_lowercase();
    if prefix.is_empty() {
        return Vec::new();
    }

    index
        .pages()
        .iter()
        .filter(|page| page.title.to_lowercase().starts_with(&prefix))
        .take(max_results)
        .collect()
}
