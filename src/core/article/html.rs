//! Plain-text rendering of documentation pages.
//!
//! Pages are reduced with a handful of regular expressions and a small
//! balanced-tag scanner; no DOM is built.

use crate::core::types::Article;
use once_cell::sync::Lazy;
use regex::Regex;

const GENERIC_TITLE: &str = "Unity - Scripting API";
const FALLBACK_TITLE: &str = "Unity Documentation";

/// Classes of elements that carry site chrome rather than documentation
const CHROME_CLASSES: [&str; 16] = [
    "feedback",
    "feedback-form",
    "scrollToFeedback",
    "submission-success",
    "submission-failed",
    "version-switcher",
    "version-number",
    "otherversionscontent",
    "lang-switcher",
    "lang-list",
    "breadcrumb",
    "breadcrumbs",
    "toolbar",
    "header-wrapper",
    "navigation",
    "switch-link",
];

/// Lines containing these phrases belong to the feedback widget
const FEEDBACK_PHRASES: [&str; 6] = [
    "Leave feedback",
    "Suggest a change",
    "Thank you for helping us improve",
    "Submission failed",
    "Although we cannot accept all submissions",
    "Is something described here not working",
];

static H1: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<h1[^>]*>(.*?)</h1>").unwrap());
static TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").unwrap());
static NOISE_BLOCKS: Lazy<Vec<Regex>> = Lazy::new(|| {
    ["head", "script", "style", "noscript", "nav", "svg", "form"]
        .iter()
        .map(|tag| Regex::new(&format!(r"(?is)<{tag}\b[^>]*>.*?</{tag}>")).unwrap())
        .collect()
});
static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static PRE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<pre[^>]*>(.*?)</pre>").unwrap());
static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<h([1-6])[^>]*>(.*?)</h[1-6]>").unwrap());
static LIST_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<li\b[^>]*>").unwrap());
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<br\s*/?>|</(p|div|tr|table|ul|ol|li|section|dl|dt|dd)>").unwrap()
});
static CELL_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</t[dh]>").unwrap());
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]+>").unwrap());
static NUMERIC_ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&#(x[0-9a-fA-F]+|[0-9]+);").unwrap());
static SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t\u{a0}]+").unwrap());
static BLANK_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());
static OPEN_TAG_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^<([a-zA-Z][a-zA-Z0-9]*)").unwrap());

/// Render a documentation page as readable text
pub fn extract_article(html: &str, url: &str) -> Article {
    Article {
        title: extract_title(html),
        url: url.to_string(),
        content: extract_content(html),
    }
}

/// Page title from the first meaningful `<h1>`, then `<title>`
pub fn extract_title(html: &str) -> String {
    for caps in H1.captures_iter(html) {
        let text = inline_text(&caps[1]);
        if !text.is_empty() && text != GENERIC_TITLE && text.chars().count() < 100 {
            return text;
        }
    }

    if let Some(caps) = TITLE.captures(html) {
        let text = inline_text(&caps[1]);
        if let Some((_, name)) = text.rsplit_once(':') {
            let name = name.trim();
            if !name.is_empty() {
                return name.to_string();
            }
        }
    }

    FALLBACK_TITLE.to_string()
}

/// Main documentation text with headings, lists and code preserved
pub fn extract_content(html: &str) -> String {
    let mut body = main_block(html).to_string();

    body = COMMENT.replace_all(&body, "").into_owned();
    for pattern in NOISE_BLOCKS.iter() {
        body = pattern.replace_all(&body, "").into_owned();
    }
    body = remove_elements_with_classes(&body, &CHROME_CLASSES);

    // Code blocks are swapped for placeholders so later passes leave them alone
    let mut code_blocks: Vec<String> = Vec::new();
    body = PRE
        .replace_all(&body, |caps: &regex::Captures| {
            let code = decode_entities(&TAG.replace_all(&caps[1], ""));
            code_blocks.push(code.trim_matches('\n').to_string());
            format!("\n\u{0}{}\u{0}\n", code_blocks.len() - 1)
        })
        .into_owned();

    body = HEADING
        .replace_all(&body, |caps: &regex::Captures| {
            let level: usize = caps[1].parse().unwrap_or(1);
            format!("\n\n{} {}\n\n", "#".repeat(level), inline_text(&caps[2]))
        })
        .into_owned();
    body = LIST_ITEM.replace_all(&body, "\n- ").into_owned();
    body = LINE_BREAK.replace_all(&body, "\n").into_owned();
    body = CELL_END.replace_all(&body, " ").into_owned();
    body = TAG.replace_all(&body, "").into_owned();
    body = decode_entities(&body);

    let mut lines: Vec<String> = Vec::new();
    for line in body.lines() {
        if FEEDBACK_PHRASES.iter().any(|p| line.contains(p)) {
            continue;
        }
        let line = SPACES.replace_all(line, " ");
        lines.push(line.trim().to_string());
    }
    let mut text = BLANK_RUNS
        .replace_all(&lines.join("\n"), "\n\n")
        .trim()
        .to_string();

    for (i, code) in code_blocks.iter().enumerate() {
        text = text.replace(&format!("\u{0}{i}\u{0}"), &format!("```\n{code}\n```"));
    }

    text
}

/// The content wrapper if present, else the body, else everything
fn main_block(html: &str) -> &str {
    for marker in ["id=\"content-wrap\"", "class=\"content-block\"", "<body"] {
        if let Some(pos) = html.find(marker) {
            let start = html[..pos].rfind('<').unwrap_or(pos);
            return &html[start..];
        }
    }
    html
}

fn inline_text(fragment: &str) -> String {
    let stripped = TAG.replace_all(fragment, "");
    let decoded = decode_entities(&stripped);
    SPACES
        .replace_all(&decoded.replace('\n', " "), " ")
        .trim()
        .to_string()
}

/// Decode the named entities used by the docs plus numeric references
pub fn decode_entities(text: &str) -> String {
    let named = text
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'");

    let numeric = NUMERIC_ENTITY.replace_all(&named, |caps: &regex::Captures| {
        let code = &caps[1];
        let value = match code.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => code.parse().ok(),
        };
        value
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_default()
    });

    // Last, so "&amp;lt;" decodes to "&lt;" and not "<"
    numeric.replace("&amp;", "&")
}

/// Remove elements whose class list contains any of `classes`
fn remove_elements_with_classes(html: &str, classes: &[&str]) -> String {
    let pattern = format!(
        r#"(?i)<[a-zA-Z][a-zA-Z0-9]*\b[^>]*\bclass\s*=\s*"[^"]*\b({})\b[^"]*"[^>]*>"#,
        classes
            .iter()
            .map(|c| regex::escape(c))
            .collect::<Vec<_>>()
            .join("|")
    );
    let Ok(open_tag) = Regex::new(&pattern) else {
        return html.to_string();
    };

    let mut out = html.to_string();
    while let Some(m) = open_tag.find(&out) {
        let end = element_end(&out, m.start(), m.end());
        out.replace_range(m.start()..end, "");
    }
    out
}

/// Byte offset just past the element opened at `start`
fn element_end(html: &str, start: usize, open_end: usize) -> usize {
    let Some(name) = OPEN_TAG_NAME
        .captures(&html[start..open_end])
        .map(|c| c[1].to_ascii_lowercase())
    else {
        return open_end;
    };

    if html[start..open_end].ends_with("/>") {
        return open_end;
    }

    let lower = html.to_ascii_lowercase();
    let open = format!("<{name}");
    let close = format!("</{name}>");
    let mut depth = 1;
    let mut cursor = open_end;

    while depth > 0 {
        let next_open = lower[cursor..].find(&open).map(|i| i + cursor);
        let next_close = lower[cursor..].find(&close).map(|i| i + cursor);

        match (next_open, next_close) {
            (Some(o), Some(c)) if o < c => {
                depth += 1;
                cursor = o + open.len();
            }
            (_, Some(c)) => {
                depth -= 1;
                cursor = c + close.len();
            }
            (_, None) => return html.len(),
        }
    }

    cursor
}
