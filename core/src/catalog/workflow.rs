use super::model::{CatalogKind, CatalogRow, DisplayRow};
use super::parser::parse_rows;
use super::render::render_display_csv;
use crate::config::DisplayConfig;
use crate::display::{sanitize_with_candidates, DisplayCandidate, SanitizedText};
use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct KindSummary {
    pub rows: usize,
    pub fallbacks: usize,
}

/// Outcome of labelling every row of a master-data export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayAudit {
    pub input_sha256: String,
    pub row_count: usize,
    pub fallback_count: usize,
    pub by_kind: BTreeMap<CatalogKind, KindSummary>,
    /// `kind:id` of rows that fell back.
    pub fallback_rows: Vec<String>,
    pub rows: Vec<DisplayRow>,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub display_csv: String,
}

/// Label a row from its configured fields, first usable one wins.
pub fn label_row(row: &CatalogRow, config: &DisplayConfig) -> SanitizedText {
    let candidates = config
        .fields_for(row.kind)
        .iter()
        .map(|name| row.field(name).map(DisplayCandidate::from));
    sanitize_with_candidates(candidates, &config.fallback)
}

pub fn display_rows(rows: &[CatalogRow], config: &DisplayConfig) -> Vec<DisplayRow> {
    rows.iter()
        .map(|row| DisplayRow {
            kind: row.kind,
            id: row.id.clone(),
            label: label_row(row, config),
        })
        .collect()
}

/// Parse → label → render.
pub fn execute_display_audit(content: &str, config: &DisplayConfig) -> CoreResult<DisplayAudit> {
    config.validate()?;

    let rows = parse_rows(content)?;
    if rows.is_empty() {
        return Err(CoreError::InvalidInput(
            "No catalog rows found in input".to_string(),
        ));
    }

    let labelled = display_rows(&rows, config);

    let mut by_kind: BTreeMap<CatalogKind, KindSummary> = BTreeMap::new();
    let mut fallback_rows = Vec::new();
    for r in &labelled {
        let entry = by_kind.entry(r.kind).or_default();
        entry.rows += 1;
        if r.label.is_fallback() {
            entry.fallbacks += 1;
            fallback_rows.push(format!("{}:{}", r.kind, r.id));
        }
    }

    let display_csv = render_display_csv(&labelled)?;

    Ok(DisplayAudit {
        input_sha256: sha256_hex(content.as_bytes()),
        row_count: labelled.len(),
        fallback_count: fallback_rows.len(),
        by_kind,
        fallback_rows,
        rows: labelled,
        display_csv,
    })
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut h = Sha256::new();
    h.update(bytes);
    hex::encode(h.finalize())
}
