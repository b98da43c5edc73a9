//! DTCG schema dialect tag.

use serde::{Deserialize, Serialize};
use std::fmt;

const V2025_10_URL: &str = "https://www.designtokens.org/schemas/2025.10.json";

/// Which DTCG dialect a document or token was authored against.
///
/// `Unknown` exists for callers that want to represent "not yet
/// determined" before detection runs; [`crate::detector`] itself always
/// resolves to `Draft` as its final fallback and never returns `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Version {
    Unknown,
    Draft,
    V2025_10,
}

impl Version {
    /// Recognize a known `$schema` URL. Returns `None` for anything else,
    /// including a syntactically plausible but unrecognized URL.
    pub fn from_url(url: &str) -> Option<Self> {
        if url.trim() == V2025_10_URL {
            Some(Version::V2025_10)
        } else {
            None
        }
    }

    /// The stable URL for this version, if it has one (`Unknown` and
    /// `Draft` have no canonical `$schema` URL).
    pub fn to_url(self) -> Option<&'static str> {
        match self {
            Version::V2025_10 => Some(V2025_10_URL),
            _ => None,
        }
    }

    /// Parse a human-readable label: `"draft"`, `"v2025.10"`, `"2025.10"`,
    /// `"2025"`, with `_`/`.` used interchangeably and case folded.
    pub fn parse_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_lowercase().replace('_', ".");
        let normalized = normalized.strip_prefix('v').unwrap_or(&normalized);
        match normalized {
            "draft" => Some(Version::Draft),
            "2025.10" | "2025" => Some(Version::V2025_10),
            _ => None,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Version::Unknown => "unknown",
            Version::Draft => "draft",
            Version::V2025_10 => "v2025.10",
        };
        write!(f, "{s}")
    }
}

impl Default for Version {
    fn default() -> Self {
        Version::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_url_recognizes_stable_url() {
        assert_eq!(Version::from_url(V2025_10_URL), Some(Version::V2025_10));
        assert_eq!(Version::from_url("https://example.com/other.json"), None);
    }

    #[test]
    fn round_trips_through_url() {
        assert_eq!(
            Version::from_url(Version::V2025_10.to_url().unwrap()),
            Some(Version::V2025_10)
        );
    }

    #[test]
    fn parse_label_variants() {
        assert_eq!(Version::parse_label("draft"), Some(Version::Draft));
        assert_eq!(Version::parse_label("v2025.10"), Some(Version::V2025_10));
        assert_eq!(Version::parse_label("2025_10"), Some(Version::V2025_10));
        assert_eq!(Version::parse_label("2025"), Some(Version::V2025_10));
        assert_eq!(Version::parse_label("DRAFT"), Some(Version::Draft));
        assert_eq!(Version::parse_label("bogus"), None);
    }
}
