pub mod candidate;
pub mod sanitize;

pub use candidate::DisplayCandidate;
pub use sanitize::{
    is_corrupted, is_corrupted_text, sanitize, sanitize_with_candidates, SanitizedText, Sanitizer,
    TextOrigin, DEFAULT_FALLBACK,
};
