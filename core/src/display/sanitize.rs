use super::candidate::DisplayCandidate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Placeholder shown when no candidate can be trusted ("unknown").
pub const DEFAULT_FALLBACK: &str = "\u{0646}\u{0627}\u{0645}\u{0634}\u{062E}\u{0635}";

// Lead bytes of Persian/Arabic UTF-8 sequences when they are decoded as Latin-1.
const MOJIBAKE_MARKERS: [char; 3] = ['Ø', 'Ù', 'Û'];

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[\s?؟]+$").expect("valid regex"))
}

/// Where a sanitized label came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TextOrigin {
    Candidate { index: usize },
    Fallback,
}

impl fmt::Display for TextOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextOrigin::Candidate { index } => write!(f, "candidate:{}", index),
            TextOrigin::Fallback => f.write_str("fallback"),
        }
    }
}

/// Display-safe text: a trimmed, uncorrupted candidate or the fallback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SanitizedText {
    pub text: String,
    pub origin: TextOrigin,
}

impl SanitizedText {
    fn fallback(fallback: &str) -> Self {
        Self {
            text: fallback.to_string(),
            origin: TextOrigin::Fallback,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == TextOrigin::Fallback
    }
}

impl fmt::Display for SanitizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for SanitizedText {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl PartialEq<&str> for SanitizedText {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl PartialEq<str> for SanitizedText {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl From<SanitizedText> for String {
    fn from(s: SanitizedText) -> Self {
        s.text
    }
}

impl From<SanitizedText> for DisplayCandidate {
    fn from(s: SanitizedText) -> Self {
        DisplayCandidate::Text(s.text)
    }
}

impl From<&SanitizedText> for DisplayCandidate {
    fn from(s: &SanitizedText) -> Self {
        DisplayCandidate::Text(s.text.clone())
    }
}

/// Corruption rules applied to the string form of a candidate.
pub fn is_corrupted_text(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty()
        || trimmed.contains(MOJIBAKE_MARKERS)
        || placeholder_re().is_match(trimmed)
        || trimmed.contains("??")
}

/// Returns true when the candidate must not be shown to a user.
pub fn is_corrupted(value: &DisplayCandidate) -> bool {
    match value.to_display_string() {
        None => true,
        Some(s) => is_corrupted_text(&s),
    }
}

/// Trimmed string form of `value`, or `fallback` when it is corrupted.
pub fn sanitize(value: impl Into<DisplayCandidate>, fallback: &str) -> SanitizedText {
    sanitize_with_candidates([value], fallback)
}

/// First usable candidate in priority order, or `fallback`.
pub fn sanitize_with_candidates<I>(candidates: I, fallback: &str) -> SanitizedText
where
    I: IntoIterator,
    I::Item: Into<DisplayCandidate>,
{
    for (index, candidate) in candidates.into_iter().enumerate() {
        let candidate = candidate.into();
        let Some(s) = candidate.to_display_string() else {
            continue;
        };
        if !is_corrupted_text(&s) {
            return SanitizedText {
                text: s.trim().to_string(),
                origin: TextOrigin::Candidate { index },
            };
        }
    }
    SanitizedText::fallback(fallback)
}

/// Sanitizer bound to one fallback string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitizer {
    fallback: String,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self {
            fallback: DEFAULT_FALLBACK.to_string(),
        }
    }
}

impl Sanitizer {
    pub fn with_fallback(fallback: impl Into<String>) -> Self {
        Self {
            fallback: fallback.into(),
        }
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn is_corrupted(&self, value: &DisplayCandidate) -> bool {
        is_corrupted(value)
    }

    pub fn sanitize(&self, value: impl Into<DisplayCandidate>) -> SanitizedText {
        sanitize(value, &self.fallback)
    }

    pub fn sanitize_with_candidates<I>(&self, candidates: I) -> SanitizedText
    where
        I: IntoIterator,
        I::Item: Into<DisplayCandidate>,
    {
        sanitize_with_candidates(candidates, &self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_literal_code_points() {
        assert_eq!(DEFAULT_FALLBACK, "نامشخص");
        assert_eq!(DEFAULT_FALLBACK.chars().count(), 6);
    }

    #[test]
    fn question_mark_placeholders() {
        assert!(is_corrupted_text("?"));
        assert!(is_corrupted_text("؟"));
        assert!(is_corrupted_text("؟ ؟"));
        assert!(is_corrupted_text(" ? "));
        assert!(is_corrupted_text("ABC??DEF"));
        assert!(!is_corrupted_text("چرا?"));
        assert!(!is_corrupted_text("A?B"));
    }

    #[test]
    fn mojibake_markers_anywhere() {
        assert!(is_corrupted_text("Ø®Ø·Ø§"));
        assert!(is_corrupted_text("abcÙ"));
        assert!(is_corrupted_text("Û"));
        // Known false positive kept on purpose.
        assert!(is_corrupted_text("Øresund"));
    }

    #[test]
    fn origin_reports_candidate_index() {
        let out = sanitize_with_candidates(vec![None, Some("  سنگ  ")], DEFAULT_FALLBACK);
        assert_eq!(out.as_str(), "سنگ");
        assert_eq!(out.origin, TextOrigin::Candidate { index: 1 });
        assert_eq!(out.origin.to_string(), "candidate:1");
        assert_eq!(TextOrigin::Fallback.to_string(), "fallback");
    }

    #[test]
    fn sanitizer_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Sanitizer>();
        assert_send_sync::<DisplayCandidate>();
    }
}
