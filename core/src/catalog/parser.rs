use super::model::{CatalogKind, CatalogRow};
use crate::error::{CoreError, CoreResult};
use serde_json::{Map, Value};

/// Parse a JSON array of row objects.
pub fn parse_json_rows(json_str: &str) -> CoreResult<Vec<CatalogRow>> {
    let raw: Vec<Value> = serde_json::from_str(json_str)
        .map_err(|e| CoreError::InvalidInput(format!("Failed to parse JSON catalog: {}", e)))?;

    raw.into_iter()
        .enumerate()
        .map(|(idx, v)| row_from_value(v).map_err(|e| at_position("row", idx + 1, e)))
        .collect()
}

/// Parse NDJSON (one row object per line). Blank lines are skipped.
pub fn parse_ndjson_rows(ndjson_str: &str) -> CoreResult<Vec<CatalogRow>> {
    let mut rows = Vec::new();

    for (line_num, line) in ndjson_str.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let v: Value = serde_json::from_str(trimmed).map_err(|e| {
            CoreError::InvalidInput(format!(
                "Failed to parse NDJSON line {}: {}",
                line_num + 1,
                e
            ))
        })?;
        rows.push(row_from_value(v).map_err(|e| at_position("line", line_num + 1, e))?);
    }

    Ok(rows)
}

/// JSON array when the content starts with `[`, NDJSON otherwise.
pub fn parse_rows(content: &str) -> CoreResult<Vec<CatalogRow>> {
    if content.trim_start().starts_with('[') {
        parse_json_rows(content)
    } else {
        parse_ndjson_rows(content)
    }
}

fn at_position(unit: &str, n: usize, e: CoreError) -> CoreError {
    match e {
        CoreError::InvalidInput(msg) => CoreError::InvalidInput(format!("{} {}: {}", unit, n, msg)),
        other => other,
    }
}

fn row_from_value(v: Value) -> CoreResult<CatalogRow> {
    let Value::Object(mut obj) = v else {
        return Err(CoreError::InvalidInput(
            "catalog row must be a JSON object".to_string(),
        ));
    };

    let kind = match obj.remove("kind") {
        Some(Value::String(s)) => s.parse::<CatalogKind>()?,
        Some(_) => {
            return Err(CoreError::InvalidInput(
                "catalog row kind must be a string".to_string(),
            ))
        }
        None => {
            return Err(CoreError::InvalidInput(
                "catalog row missing kind".to_string(),
            ))
        }
    };

    let id = match obj.remove("id") {
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        Some(Value::Number(n)) if n.is_i64() || n.is_u64() => n.to_string(),
        Some(_) => {
            return Err(CoreError::InvalidInput(
                "catalog row id must be a non-empty string or integer".to_string(),
            ))
        }
        None => {
            return Err(CoreError::InvalidInput(
                "catalog row missing id".to_string(),
            ))
        }
    };

    let fields: Map<String, Value> = obj;
    Ok(CatalogRow { kind, id, fields })
}
