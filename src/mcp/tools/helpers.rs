//! Helper functions for MCP tools

use crate::core::services::Services;
use crate::core::version::{resolve_version, ResolvedVersion};
use crate::mcp::error::McpError;
use chrono::{DateTime, Utc};

/// Truncate text if it exceeds max characters
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    let total = text.chars().count();
    if total <= max_chars {
        return text.to_string();
    }

    // Truncate at character boundary
    let truncated: String = text.chars().take(max_chars).collect();
    format!(
        "{}...\n\n[Truncated {} chars]",
        truncated,
        total - max_chars
    )
}

/// Resolve the `version` argument of a tool call
pub fn resolve_tool_version(
    services: &Services,
    requested: Option<&str>,
) -> Result<ResolvedVersion, McpError> {
    resolve_version(requested, &services.config.versions).map_err(McpError::from)
}

/// "**Version:** 2022.3 (normalized from 2022.3.1f1)"
pub fn version_line(resolved: &ResolvedVersion) -> String {
    match resolved.note() {
        Some(note) => format!("**Version:** {} {}\n", resolved.version, note),
        None => format!("**Version:** {}\n", resolved.version),
    }
}

/// Human-readable age of a timestamp relative to `now`
pub fn format_age(fetched_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - fetched_at).num_minutes().max(0);
    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if minutes < 48 * 60 {
        format!("{}h ago", minutes / 60)
    } else {
        format!("{}d ago", minutes / (24 * 60))
    }
}
