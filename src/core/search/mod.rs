//! Search over documentation indexes.
//!
//! - **engine**: pure ranking and completion over a parsed index
//! - **service**: facade that acquires indexes through the cache

pub mod engine;
mod service;

pub use engine::{ScoredPage, EXACT_SCORE, PREFIX_SCORE, SUBSTRING_SCORE};
pub use service::{
    fallback_suggestions, truncate_description, SearchService, COMMON_CLASSES, DESCRIPTION_LIMIT,
};
