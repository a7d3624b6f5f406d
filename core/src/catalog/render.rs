use super::model::DisplayRow;
use crate::error::CoreResult;

/// Render labelled rows as CSV sorted by `(kind, id)`.
pub fn render_display_csv(rows: &[DisplayRow]) -> CoreResult<String> {
    let mut sorted: Vec<&DisplayRow> = rows.iter().collect();
    sorted.sort_by(|a, b| (a.kind, a.id.as_str()).cmp(&(b.kind, b.id.as_str())));

    let mut wtr = csv::WriterBuilder::new().from_writer(vec![]);
    wtr.write_record(["kind", "id", "label", "origin"])?;
    for r in sorted {
        wtr.write_record([
            r.kind.as_str(),
            r.id.as_str(),
            r.label.as_str(),
            r.label.origin.to_string().as_str(),
        ])?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).replace("\r\n", "\n"))
}
