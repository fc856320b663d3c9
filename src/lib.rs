//! unidocs - Unity Scripting API search for coding agents
//!
//! Downloads the search index that backs the Unity documentation site,
//! keeps it in a two-tier (memory + disk) cache and ranks API pages by
//! title. Documentation pages are fetched on demand and rendered as text.
//!
//! # Architecture
//!
//! The codebase is organized into three main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, xdg, version
//!   - fetch (documentation sources, HTTP)
//!   - index (model and `index.js` parser)
//!   - cache (memory + disk, single-flight refresh)
//!   - search (ranking engine and facade)
//!   - article (page URLs and HTML rendering)
//!   - services (unified service container)
//!
//! - **mcp**: MCP adapter (depends on core)
//!   - server, tools, protocol
//!
//! - **cli**: command-line adapter (depends on core)
//!
//! # Key Features
//!
//! - No script execution: the index payload is parsed block by block
//! - Exact / prefix / substring title ranking with stop words
//! - Expiring cache with stale fallback when the site is unreachable
//! - MCP server (7 tools) and a matching CLI

// Core domain logic (protocol-agnostic)
pub mod core;

// MCP (Model Context Protocol) adapter
pub mod mcp;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{DocsError, Result};
pub use core::services::Services;
pub use core::types::*;
