//! In-memory model of a parsed documentation search index.

use crate::core::error::ParseError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Kind of API member a page documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberType {
    Class,
    Property,
    Method,
    Constructor,
    Field,
    #[default]
    None,
}

/// Namespaces whose `Namespace.Type` pages document types, not methods
const NAMESPACE_PREFIXES: [&str; 7] = [
    "UnityEngine",
    "UnityEditor",
    "Unity",
    "System",
    "EditorSettings",
    "PlayerSettings",
    "BuildSettings",
];

/// Leading words that mark `Type.Member` pages as methods
const METHOD_PREFIXES: [&str; 24] = [
    "Get", "Set", "Add", "Remove", "Clear", "Contains", "Find", "Load", "Save", "Create",
    "Delete", "Update", "Is", "Has", "Can", "Should", "Try", "Move", "Rotate", "Transform",
    "Convert", "Parse", "ToString", "Equals",
];

impl MemberType {
    /// Map an index type code to a member type
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => MemberType::Class,
            1 => MemberType::Property,
            2 => MemberType::Method,
            3 => MemberType::Constructor,
            4 => MemberType::Field,
            _ => MemberType::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MemberType::Class => "class",
            MemberType::Property => "property",
            MemberType::Method => "method",
            MemberType::Constructor => "constructor",
            MemberType::Field => "field",
            MemberType::None => "none",
        }
    }

    /// Parse a user-supplied type hint ("property", "Method", ...)
    pub fn parse_hint(hint: &str) -> Option<Self> {
        match hint.trim().to_lowercase().as_str() {
            "class" => Some(MemberType::Class),
            "property" => Some(MemberType::Property),
            "method" => Some(MemberType::Method),
            "constructor" => Some(MemberType::Constructor),
            "field" => Some(MemberType::Field),
            _ => None,
        }
    }

    /// Whether member pages of this kind use `Type-member` URLs
    pub fn uses_hyphen(&self) -> bool {
        matches!(
            self,
            MemberType::Property | MemberType::Constructor | MemberType::Field
        )
    }

    /// Infer the member type from an upstream page name
    ///
    /// Upstream page names follow `Type`, `Type.Method`, `Type-property`
    /// and `Type-ctor` conventions.
    pub fn infer_from_name(name: &str) -> Self {
        if name.contains("-ctor") {
            return MemberType::Constructor;
        }

        if name.contains('-') {
            return MemberType::Property;
        }

        if !name.contains('.') {
            return MemberType::Class;
        }

        let parts: Vec<&str> = name.split('.').collect();
        if parts.len() == 2 {
            let (first, second) = (parts[0], parts[1]);
            let starts_upper = |s: &str| s.chars().next().is_some_and(char::is_uppercase);

            if NAMESPACE_PREFIXES.contains(&first) && starts_upper(second) {
                return MemberType::Class;
            }

            if starts_upper(first) && starts_upper(second) {
                if METHOD_PREFIXES.iter().any(|p| second.starts_with(p)) {
                    return MemberType::Method;
                }
                return MemberType::Class;
            }
        }

        MemberType::Method
    }
}

impl fmt::Display for MemberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single documentation page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Position in the page table
    pub id: usize,

    /// Canonical title (upstream page name)
    pub title: String,

    /// Human-facing title, when the index provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_title: Option<String>,

    /// Summary text from the page metadata table
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub member_type: MemberType,
}

impl Page {
    /// Title to show users
    pub fn display_name(&self) -> &str {
        self.display_title.as_deref().unwrap_or(&self.title)
    }

    /// Member type, falling back to name inference for untagged pages
    pub fn effective_member_type(&self) -> MemberType {
        match self.member_type {
            MemberType::None => MemberType::infer_from_name(&self.title),
            known => known,
        }
    }
}

/// A parsed search index for one documentation version
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocIndex {
    version: String,
    fetched_at: DateTime<Utc>,
    pages: Vec<Page>,
    postings: BTreeMap<String, Vec<usize>>,
    stop_words: BTreeSet<String>,
}

impl DocIndex {
    /// Build an index, checking that every posting points at a real page
    pub fn new(
        pages: Vec<Page>,
        postings: BTreeMap<String, Vec<usize>>,
        stop_words: BTreeSet<String>,
    ) -> Result<Self, ParseError> {
        let index = Self {
            version: String::new(),
            fetched_at: Utc::now(),
            pages,
            postings,
            stop_words,
        };
        index.validate()?;
        Ok(index)
    }

    /// Attach the version and acquisition time
    pub fn with_provenance(mut self, version: &str, fetched_at: DateTime<Utc>) -> Self {
        self.version = version.to_string();
        self.fetched_at = fetched_at;
        self
    }

    /// Check structural invariants (used after loading from disk)
    pub fn validate(&self) -> Result<(), ParseError> {
        for (position, page) in self.pages.iter().enumerate() {
            if page.id != position {
                return Err(ParseError::Malformed {
                    block: "pages",
                    message: format!("page at position {position} has id {}", page.id),
                });
            }
        }

        let page_count = self.pages.len();
        for (term, ids) in &self.postings {
            if let Some(&page) = ids.iter().find(|&&id| id >= page_count) {
                return Err(ParseError::PageOutOfRange {
                    term: term.clone(),
                    page,
                    page_count,
                });
            }
        }

        Ok(())
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, id: usize) -> Option<&Page> {
        self.pages.get(id)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Pages containing a term (case-insensitive)
    pub fn postings(&self, term: &str) -> &[usize] {
        self.postings
            .get(&term.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn stop_words(&self) -> &BTreeSet<String> {
        &self.stop_words
    }

    /// Case-insensitive stop-word membership
    pub fn is_stop_word(&self, term: &str) -> bool {
        self.stop_words.contains(&term.to_lowercase())
    }

    /// Whether the index was acquired longer ago than `window`
    pub fn is_stale(&self, now: DateTime<Utc>, window: chrono::Duration) -> bool {
        now.signed_duration_since(self.fetched_at) > window
    }

    /// Same pages, postings and stop words, regardless of provenance
    pub fn same_content(&self, other: &DocIndex) -> bool {
        self.pages == other.pages
            && self.postings == other.postings
            && self.stop_words == other.stop_words
    }
}
