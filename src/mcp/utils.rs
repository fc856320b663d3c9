//! MCP utility functions for token limit management and formatting
//!
//! This module provides constants and helper functions for keeping tool
//! output within MCP protocol token limits.

/// MCP protocol token limit (25,000 tokens)
///
/// This is the maximum number of tokens that can be returned in a single MCP response.
pub const MCP_TOKEN_LIMIT: usize = 25_000;

/// Maximum characters of article content returned by get_unity_api_doc
///
/// 20k chars is roughly 5k tokens, leaving room for the header and notes.
pub const ARTICLE_MAX_CHARS: usize = 20_000;

/// Build truncation warning message for an API article
///
/// # Arguments
/// * `shown_chars` - Number of characters actually displayed
/// * `total_chars` - Total number of characters in the article
/// * `url` - Page URL so the reader can open the full article
pub fn build_article_warning(shown_chars: usize, total_chars: usize, url: &str) -> String {
    let not_shown = total_chars.saturating_sub(shown_chars);
    let percent = if total_chars > 0 {
        (shown_chars as f64 / total_chars as f64) * 100.0
    } else {
        0.0
    };

    format!(
        "⚠️ ARTICLE TRUNCATED - SHOWING FIRST {ARTICLE_MAX_CHARS} CHARACTERS\n\n\
         Showing: Characters 1-{shown_chars} of {total_chars} total ({percent:.1}%)\n\
         Reason: Maximum display limit is {ARTICLE_MAX_CHARS} characters (MCP 25k token limit)\n\
         Not shown: {not_shown} characters\n\n\
         💡 SUGGESTIONS:\n\
         - Request a specific member with `member_name`\n\
         - Open the full page: {url}\n\n\
         ---\n\n"
    )
}

/// Note appended to output produced from an expired index
pub fn build_stale_note(version: &str) -> String {
    format!(
        "⚠️ STALE INDEX: refreshing the {version} index failed, results come from an \
         expired cached copy. Run `clear_unity_cache` and retry once the documentation \
         site is reachable.\n\n"
    )
}
