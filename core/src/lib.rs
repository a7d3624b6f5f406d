//! Display-text handling for the stone-cutting ERP's master data.
//! No network and no global state; file IO only in explicit loaders.

pub mod catalog;
pub mod config;
pub mod display;

pub mod error;

pub use crate::config::DisplayConfig;
pub use crate::display::{
    is_corrupted, is_corrupted_text, sanitize, sanitize_with_candidates, DisplayCandidate,
    SanitizedText, Sanitizer, TextOrigin, DEFAULT_FALLBACK,
};
pub use crate::error::{CoreError, CoreResult};
