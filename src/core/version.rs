//! Documentation version handling.

use crate::core::config::VersionsConfig;
use crate::core::error::{DocsError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static MAJOR_MINOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4})\.(\d+)").unwrap());

/// Reduce a full release string to its documentation version
///
/// `6000.0.29f1` becomes `6000.0`; strings without a `YYYY.N` prefix are
/// returned unchanged (trimmed).
pub fn normalize_version(version: &str) -> String {
    let trimmed = version.trim();
    match MAJOR_MINOR.captures(trimmed) {
        Some(caps) => format!("{}.{}", &caps[1], &caps[2]),
        None => trimmed.to_string(),
    }
}

/// Whether a (possibly unnormalized) version is in the supported list
pub fn is_supported_version(version: &str, supported: &[String]) -> bool {
    let normalized = normalize_version(version);
    supported.iter().any(|v| *v == normalized)
}

/// A caller-supplied version after defaulting and normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    /// Documentation version passed to the core
    pub version: String,
    /// What the caller asked for, when normalization changed it
    pub requested: Option<String>,
}

impl ResolvedVersion {
    /// "(normalized from X)" when the version was rewritten
    pub fn note(&self) -> Option<String> {
        self.requested
            .as_ref()
            .map(|original| format!("(normalized from {original})"))
    }
}

/// Default, normalize and validate a requested version
pub fn resolve_version(
    requested: Option<&str>,
    versions: &VersionsConfig,
) -> Result<ResolvedVersion> {
    let raw = match requested.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => v,
        None => {
            return Ok(ResolvedVersion {
                version: versions.default.clone(),
                requested: None,
            })
        }
    };

    let version = normalize_version(raw);
    if !versions.supported.contains(&version) {
        return Err(DocsError::UnsupportedVersion {
            version: raw.to_string(),
            supported: versions.supported.clone(),
        });
    }

    let requested = (version != raw).then(|| raw.to_string());
    Ok(ResolvedVersion { version, requested })
}
