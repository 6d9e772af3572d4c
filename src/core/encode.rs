use crate::core::VisitRecord;
use crate::utils::error::Result;
use serde_json::Value;

/// Serialize visit records to CSV text with the fixed column header.
///
/// The returned text has no trailing newline. An empty record slice encodes
/// to an empty string with no header row, so a document with no place visits
/// yields an empty output file.
pub fn encode_csv(records: &[VisitRecord]) -> Result<String> {
    if records.is_empty() {
        return Ok(String::new());
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(VisitRecord::COLUMNS)?;

    for record in records {
        writer.write_record(record_row(record))?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    let mut text = String::from_utf8_lossy(&bytes).into_owned();
    if text.ends_with('\n') {
        text.pop();
    }

    Ok(text)
}

fn record_row(record: &VisitRecord) -> [String; 11] {
    [
        scalar_field(&record.latitude_e7),
        scalar_field(&record.longitude_e7),
        scalar_field(&record.place_id),
        scalar_field(&record.location_address),
        scalar_field(&record.location_name),
        scalar_field(&record.location_confidence),
        record.duration_ms.to_string(),
        scalar_field(&record.place_confidence),
        scalar_field(&record.center_lat_e7),
        scalar_field(&record.center_lng_e7),
        scalar_field(&record.visit_confidence),
    ]
}

/// Render one column value. Absent fields become empty, not the string
/// "null"; strings pass through unquoted here and the CSV writer handles
/// quoting. Arrays or objects, which the export should never place in these
/// fields, fall back to compact JSON.
fn scalar_field(value: &Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
