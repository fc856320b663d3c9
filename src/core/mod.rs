//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of transport protocols (MCP, CLI).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Request/response data structures
//! - **xdg**: XDG directory handling
//! - **version**: Documentation version normalization
//! - **fetch**: Documentation sources (HTTP)
//! - **index**: Index model and `index.js` parser
//! - **cache**: Memory + disk index cache
//! - **search**: Ranking engine and search facade
//! - **article**: API article URLs and HTML rendering
//! - **services**: Unified service container

pub mod article;
pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod index;
pub mod search;
pub mod services;
pub mod types;
pub mod version;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{DocsError, Result};
pub use services::Services;
