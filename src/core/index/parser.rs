//! Parser for the upstream `index.js` search payload.
//!
//! The payload is script text containing four assignments
//! (`pages`, `info`, `common`, `searchIndex`), each a JSON literal that
//! may span several lines. Blocks are located by their assignment
//! prefix and decoded with serde_json; nothing is ever evaluated.

use super::model::{DocIndex, MemberType, Page};
use crate::core::error::ParseError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

const PAGES: &str = "pages";
const INFO: &str = "info";
const COMMON: &str = "common";
const SEARCH_INDEX: &str = "searchIndex";

static ASSIGNMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:var|let|const)\s+(pages|info|common|searchIndex)\s*=\s*")
        .expect("assignment pattern is valid")
});

/// Raw JSON values for each block, before shape checks
#[derive(Default)]
struct RawBlocks {
    pages: Option<Value>,
    info: Option<Value>,
    common: Option<Value>,
    search_index: Option<Value>,
}

impl RawBlocks {
    fn slot(&mut self, name: &str) -> (&'static str, &mut Option<Value>) {
        match name {
            PAGES => (PAGES, &mut self.pages),
            INFO => (INFO, &mut self.info),
            COMMON => (COMMON, &mut self.common),
            _ => (SEARCH_INDEX, &mut self.search_index),
        }
    }
}

/// Parse a raw payload into a [`DocIndex`]
///
/// Provenance (version, timestamp) is attached by the caller.
pub fn parse_index(raw: &[u8]) -> Result<DocIndex, ParseError> {
    let text = std::str::from_utf8(raw).map_err(|_| ParseError::InvalidEncoding)?;
    parse_index_str(text)
}

/// Parse payload text into a [`DocIndex`]
pub fn parse_index_str(text: &str) -> Result<DocIndex, ParseError> {
    let blocks = extract_blocks(text)?;

    let pages_value = blocks.pages.ok_or(ParseError::MissingBlock(PAGES))?;
    let info_value = blocks.info.ok_or(ParseError::MissingBlock(INFO))?;
    let common_value = blocks.common.ok_or(ParseError::MissingBlock(COMMON))?;
    let index_value = blocks
        .search_index
        .ok_or(ParseError::MissingBlock(SEARCH_INDEX))?;

    let mut pages = parse_pages(&pages_value)?;
    apply_info(&mut pages, &info_value)?;
    let stop_words = parse_common(&common_value)?;
    let postings = parse_search_index(&index_value)?;

    DocIndex::new(pages, postings, stop_words)
}

fn extract_blocks(text: &str) -> Result<RawBlocks, ParseError> {
    let mut blocks = RawBlocks::default();
    let mut pos = 0;

    // Resume after each decoded literal so assignment-like text inside
    // strings is never taken for a block
    while let Some(caps) = ASSIGNMENT.captures_at(text, pos) {
        let (Some(name), Some(whole)) = (caps.get(1), caps.get(0)) else {
            break;
        };
        let (block, slot) = blocks.slot(name.as_str());
        if slot.is_some() {
            return Err(ParseError::DuplicateBlock(block));
        }

        let start = whole.end();
        let mut stream = serde_json::Deserializer::from_str(&text[start..]).into_iter::<Value>();
        let value = match stream.next() {
            Some(Ok(value)) => value,
            Some(Err(e)) => return Err(malformed(block, e.to_string())),
            None => return Err(malformed(block, "missing value")),
        };
        *slot = Some(value);
        pos = start + stream.byte_offset();
    }

    Ok(blocks)
}

fn malformed(block: &'static str, message: impl Into<String>) -> ParseError {
    ParseError::Malformed {
        block,
        message: message.into(),
    }
}

fn parse_pages(value: &Value) -> Result<Vec<Page>, ParseError> {
    let entries = value
        .as_array()
        .ok_or_else(|| malformed(PAGES, "expected an array"))?;

    entries
        .iter()
        .enumerate()
        .map(|(id, entry)| {
            let fields = entry
                .as_array()
                .ok_or_else(|| malformed(PAGES, format!("entry {id} is not an array")))?;
            let title = fields
                .first()
                .and_then(Value::as_str)
                .ok_or_else(|| malformed(PAGES, format!("entry {id} has no title")))?;
            let display_title = fields
                .get(1)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string);

            Ok(Page {
                id,
                title: title.to_string(),
                display_title,
                description: String::new(),
                member_type: MemberType::None,
            })
        })
        .collect()
}

fn apply_info(pages: &mut [Page], value: &Value) -> Result<(), ParseError> {
    let rows = value
        .as_array()
        .ok_or_else(|| malformed(INFO, "expected an array"))?;

    if rows.len() > pages.len() {
        return Err(malformed(
            INFO,
            format!("{} rows for {} pages", rows.len(), pages.len()),
        ));
    }

    for (id, row) in rows.iter().enumerate() {
        let fields = row
            .as_array()
            .ok_or_else(|| malformed(INFO, format!("row {id} is not an array")))?;

        let page = &mut pages[id];
        if let Some(description) = fields.first().and_then(Value::as_str) {
            page.description = description.to_string();
        }
        page.member_type = fields
            .get(1)
            .and_then(Value::as_i64)
            .map(MemberType::from_code)
            .unwrap_or_default();
    }

    Ok(())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn parse_common(value: &Value) -> Result<BTreeSet<String>, ParseError> {
    let entries = value
        .as_object()
        .ok_or_else(|| malformed(COMMON, "expected an object"))?;

    Ok(entries
        .iter()
        .filter(|(_, marker)| is_truthy(marker))
        .map(|(term, _)| term.to_lowercase())
        .collect())
}

fn parse_search_index(value: &Value) -> Result<BTreeMap<String, Vec<usize>>, ParseError> {
    let entries = value
        .as_object()
        .ok_or_else(|| malformed(SEARCH_INDEX, "expected an object"))?;

    let mut postings: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (term, ids) in entries {
        let ids = ids.as_array().ok_or_else(|| {
            malformed(SEARCH_INDEX, format!("postings for '{term}' are not an array"))
        })?;

        let list = postings.entry(term.to_lowercase()).or_default();
        for id in ids {
            let id = id.as_u64().ok_or_else(|| {
                malformed(SEARCH_INDEX, format!("non-integer page id for '{term}'"))
            })?;
            list.push(id as usize);
        }
    }

    for list in postings.values_mut() {
        list.sort_unstable();
        list.dedup();
    }

    Ok(postings)
}
