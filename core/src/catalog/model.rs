use crate::display::SanitizedText;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Master-data tables whose rows are shown by name in the UI.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    Mine,
    Stone,
    FinishType,
    CutWidth,
    CuttingType,
    Product,
    Service,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 7] = [
        CatalogKind::Mine,
        CatalogKind::Stone,
        CatalogKind::FinishType,
        CatalogKind::CutWidth,
        CatalogKind::CuttingType,
        CatalogKind::Product,
        CatalogKind::Service,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogKind::Mine => "mine",
            CatalogKind::Stone => "stone",
            CatalogKind::FinishType => "finish_type",
            CatalogKind::CutWidth => "cut_width",
            CatalogKind::CuttingType => "cutting_type",
            CatalogKind::Product => "product",
            CatalogKind::Service => "service",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatalogKind {
    type Err = CoreError;

    // Accepts snake_case, kebab-case and plural table names ("cut-widths", "mines").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase().replace('-', "_");
        let singular = norm.strip_suffix('s').unwrap_or(&norm);
        CatalogKind::ALL
            .into_iter()
            .find(|k| k.as_str() == norm || k.as_str() == singular)
            .ok_or_else(|| CoreError::InvalidInput(format!("unknown catalog kind: {}", s)))
    }
}

/// One row of a master-data export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogRow {
    pub kind: CatalogKind,
    pub id: String,
    pub fields: Map<String, Value>,
}

impl CatalogRow {
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// A row reduced to what the UI renders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayRow {
    pub kind: CatalogKind,
    pub id: String,
    pub label: SanitizedText,
}
