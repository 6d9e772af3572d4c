use serde_json::Value;

/// One place visit flattened to the fixed CSV column set.
///
/// Columns other than `duration_ms` carry whatever scalar the export held,
/// untouched. A missing or null field stays `None` and renders as an empty
/// CSV field.
#[derive(Debug, Clone, PartialEq)]
pub struct VisitRecord {
    pub latitude_e7: Option<Value>,
    pub longitude_e7: Option<Value>,
    pub place_id: Option<Value>,
    pub location_address: Option<Value>,
    pub location_name: Option<Value>,
    pub location_confidence: Option<Value>,
    pub duration_ms: i64,
    pub place_confidence: Option<Value>,
    pub center_lat_e7: Option<Value>,
    pub center_lng_e7: Option<Value>,
    pub visit_confidence: Option<Value>,
}

impl VisitRecord {
    /// Output column headers, in order.
    pub const COLUMNS: [&'static str; 11] = [
        "latitudeE7",
        "longitudeE7",
        "placeId",
        "locationAddress",
        "locationName",
        "locationConfidence",
        "durationMs",
        "placeConfidence",
        "centerLatE7",
        "centerLngE7",
        "visitConfidence",
    ];
}

/// A converted input: derived archive entry name plus CSV text.
/// The CSV text carries no trailing newline; the archive builder adds one.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedFile {
    pub file_name: String,
    pub csv: String,
}
