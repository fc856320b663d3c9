//! API article retrieval.
//!
//! Builds documentation URLs from class/member names, fetches the page
//! through a [`DocsSource`] and renders it as plain text.

pub mod html;

use crate::core::error::{DocsError, Result};
use crate::core::fetch::DocsSource;
use crate::core::index::MemberType;
use crate::core::types::{Article, ArticleRequest};
use std::sync::Arc;

/// Member page separator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// `Class.Member.html` (methods)
    Dot,
    /// `Class-member.html` (properties, constructors, fields)
    Hyphen,
}

/// Build the ScriptReference URL for a class or member page
pub fn article_url(
    base_url: &str,
    version: &str,
    class_name: &str,
    member_name: Option<&str>,
    separator: Separator,
) -> String {
    let class_name = class_name.trim();
    let page = match member_name.map(str::trim).filter(|m| !m.is_empty()) {
        Some(member) => match separator {
            Separator::Dot => format!("{class_name}.{member}.html"),
            Separator::Hyphen => format!("{class_name}-{member}.html"),
        },
        None => format!("{class_name}.html"),
    };

    format!(
        "{}/{}/Documentation/ScriptReference/{}",
        base_url.trim_end_matches('/'),
        version,
        page
    )
}

/// Candidate URLs for a request, in the order they should be tried
pub fn candidate_urls(base_url: &str, request: &ArticleRequest) -> Vec<String> {
    let member = request
        .member_name
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty());

    let build = |separator| {
        article_url(
            base_url,
            &request.version,
            &request.class_name,
            member,
            separator,
        )
    };

    match (member, request.member_type) {
        (None, _) => vec![build(Separator::Dot)],
        (Some(_), Some(hint)) if hint != MemberType::None => {
            let separator = if hint.uses_hyphen() {
                Separator::Hyphen
            } else {
                Separator::Dot
            };
            vec![build(separator)]
        }
        (Some(_), _) => vec![build(Separator::Dot), build(Separator::Hyphen)],
    }
}

/// Fetches and renders API articles
pub struct ArticleService {
    source: Arc<dyn DocsSource>,
}

impl ArticleService {
    pub fn new(source: Arc<dyn DocsSource>) -> Self {
        Self { source }
    }

    /// Fetch the article for a class or member
    ///
    /// Without a member-type hint the dot form is tried first, then the
    /// hyphen form.
    pub async fn fetch(&self, request: &ArticleRequest) -> Result<Article> {
        if request.class_name.trim().is_empty() {
            return Err(DocsError::InvalidQuery(
                "class_name cannot be empty".to_string(),
            ));
        }

        let candidates = candidate_urls(self.source.base_url(), request);
        let mut last_url = String::new();

        for url in candidates {
            tracing::debug!("Trying article URL {}", url);
            if let Some(page) = self.source.fetch_page(&url).await? {
                return Ok(html::extract_article(&page, &url));
            }
            last_url = url;
        }

        Err(DocsError::ArticleNotFound { url: last_url })
    }
}
