use crate::catalog::model::CatalogKind;
use crate::display::{is_corrupted_text, Sanitizer, DEFAULT_FALLBACK};
use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

pub const DEFAULT_NAME_FIELDS: [&str; 4] = ["name_fa", "persian_name", "name", "title"];

/// Which row fields label a catalog row, and what to show when none is usable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    pub fallback: String,
    pub name_fields: Vec<String>,
    pub kind_fields: BTreeMap<CatalogKind, Vec<String>>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fallback: DEFAULT_FALLBACK.to_string(),
            name_fields: DEFAULT_NAME_FIELDS.iter().map(|s| s.to_string()).collect(),
            kind_fields: BTreeMap::new(),
        }
    }
}

impl DisplayConfig {
    pub fn from_json_str(s: &str) -> CoreResult<Self> {
        let cfg: DisplayConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        let s = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&s)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.name_fields.is_empty() {
            return Err(CoreError::Config("name_fields must not be empty".to_string()));
        }
        for (kind, fields) in &self.kind_fields {
            if fields.is_empty() {
                return Err(CoreError::Config(format!(
                    "kind_fields.{} must not be empty",
                    kind
                )));
            }
        }
        // A corrupted fallback would itself be flagged on the next pass.
        if is_corrupted_text(&self.fallback) {
            return Err(CoreError::Config(format!(
                "fallback {:?} is not displayable",
                self.fallback
            )));
        }
        Ok(())
    }

    pub fn fields_for(&self, kind: CatalogKind) -> &[String] {
        self.kind_fields
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or(self.name_fields.as_slice())
    }

    pub fn sanitizer(&self) -> Sanitizer {
        Sanitizer::with_fallback(self.fallback.clone())
    }
}
