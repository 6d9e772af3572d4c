use crate::core::VisitRecord;
use crate::utils::error::{ConvertError, Result};
use serde_json::Value;

/// Flatten the place visits of a parsed location-history document.
///
/// Timeline objects without a qualifying `placeVisit` member (activity
/// segments and the like) are skipped without error. Missing nested fields
/// become empty columns; only a missing or non-array `timelineObjects`
/// sequence is fatal.
pub fn extract_visits(doc: &Value) -> Result<Vec<VisitRecord>> {
    let objects = doc
        .get("timelineObjects")
        .and_then(Value::as_array)
        .ok_or_else(|| ConvertError::ParseError {
            message: "document has no timelineObjects array".to_string(),
        })?;

    let records = objects
        .iter()
        .filter_map(|object| object.get("placeVisit"))
        .filter(|visit| qualifies(visit))
        .map(visit_record)
        .collect();

    Ok(records)
}

/// A qualifying `placeVisit` is anything but null, false, 0, or the empty
/// string; objects always qualify, even empty ones.
fn qualifies(visit: &Value) -> bool {
    match visit {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|v| v != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

fn visit_record(visit: &Value) -> VisitRecord {
    let end = timestamp_ms(visit.pointer("/duration/endTimestampMs"));
    let start = timestamp_ms(visit.pointer("/duration/startTimestampMs"));

    VisitRecord {
        latitude_e7: field(visit, "/location/latitudeE7"),
        longitude_e7: field(visit, "/location/longitudeE7"),
        place_id: field(visit, "/location/placeId"),
        location_address: field(visit, "/location/address"),
        // The export has no separate display-name field; the address doubles
        // as the locationName column.
        location_name: field(visit, "/location/address"),
        location_confidence: field(visit, "/location/locationConfidence"),
        // Saturates at the i64 bounds for extreme magnitudes.
        duration_ms: end.saturating_sub(start),
        place_confidence: field(visit, "/placeConfidence"),
        center_lat_e7: field(visit, "/centerLatE7"),
        center_lng_e7: field(visit, "/centerLngE7"),
        visit_confidence: field(visit, "/visitConfidence"),
    }
}

/// Follow a JSON pointer, treating an explicit null the same as a missing
/// link.
fn field(visit: &Value, pointer: &str) -> Option<Value> {
    visit
        .pointer(pointer)
        .filter(|value| !value.is_null())
        .cloned()
}

/// Coerce a timestamp to milliseconds. The export writes timestamps as
/// decimal strings; plain numbers are accepted too. An absent, null, or
/// unparseable operand counts as 0, so a visit missing one endpoint yields a
/// signed difference against 0.
fn timestamp_ms(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|ms| ms as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_keeps_only_place_visits() {
        let doc = json!({
            "timelineObjects": [
                {"activitySegment": {"activityType": "IN_PASSENGER_VEHICLE"}},
                {"placeVisit": {
                    "location": {
                        "latitudeE7": 515074000,
                        "longitudeE7": -1278000,
                        "placeId": "ChIJdd4hrwug2EcRmSrV3Vo6llI",
                        "address": "London",
                        "locationConfidence": 98.1
                    },
                    "duration": {
                        "startTimestampMs": "1609459200000",
                        "endTimestampMs": "1609462800000"
                    },
                    "placeConfidence": "HIGH_CONFIDENCE",
                    "centerLatE7": 515074001,
                    "centerLngE7": -1278001,
                    "visitConfidence": 95
                }},
                {"activitySegment": {"activityType": "WALKING"}}
            ]
        });

        let records = extract_visits(&doc).unwrap();

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.latitude_e7, Some(json!(515074000)));
        assert_eq!(record.longitude_e7, Some(json!(-1278000)));
        assert_eq!(
            record.place_id,
            Some(json!("ChIJdd4hrwug2EcRmSrV3Vo6llI"))
        );
        assert_eq!(record.location_address, Some(json!("London")));
        assert_eq!(record.location_name, Some(json!("London")));
        assert_eq!(record.location_confidence, Some(json!(98.1)));
        assert_eq!(record.duration_ms, 3_600_000);
        assert_eq!(record.place_confidence, Some(json!("HIGH_CONFIDENCE")));
        assert_eq!(record.center_lat_e7, Some(json!(515074001)));
        assert_eq!(record.center_lng_e7, Some(json!(-1278001)));
        assert_eq!(record.visit_confidence, Some(json!(95)));
    }

    #[test]
    fn test_extract_counts_match_mixed_timeline() {
        let doc = json!({
            "timelineObjects": [
                {"placeVisit": {"location": {"placeId": "a"}}},
                {"activitySegment": {}},
                {"placeVisit": {"location": {"placeId": "b"}}},
                {"placeVisit": {"location": {"placeId": "c"}}},
                {"unknownObject": {}}
            ]
        });

        let records = extract_visits(&doc).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].place_id, Some(json!("a")));
        assert_eq!(records[2].place_id, Some(json!("c")));
    }

    #[test]
    fn test_extract_skips_null_place_visit() {
        let doc = json!({
            "timelineObjects": [
                {"placeVisit": null},
                {"placeVisit": {"location": {"placeId": "kept"}}}
            ]
        });

        let records = extract_visits(&doc).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].place_id, Some(json!("kept")));
    }

    #[test]
    fn test_extract_skips_falsy_place_visit_values() {
        let doc = json!({
            "timelineObjects": [
                {"placeVisit": 0},
                {"placeVisit": 0.0},
                {"placeVisit": ""},
                {"placeVisit": false},
                {"placeVisit": null},
                {"placeVisit": {}}
            ]
        });

        let records = extract_visits(&doc).unwrap();

        // Only the object qualifies, empty as it is.
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].place_id, None);
        assert_eq!(records[0].duration_ms, 0);
    }

    #[test]
    fn test_extract_empty_timeline() {
        let doc = json!({"timelineObjects": []});
        assert!(extract_visits(&doc).unwrap().is_empty());
    }

    #[test]
    fn test_extract_missing_timeline_is_parse_error() {
        let doc = json!({"somethingElse": []});
        let err = extract_visits(&doc).unwrap_err();
        assert!(matches!(err, ConvertError::ParseError { .. }));

        let doc = json!({"timelineObjects": {"not": "an array"}});
        let err = extract_visits(&doc).unwrap_err();
        assert!(matches!(err, ConvertError::ParseError { .. }));
    }

    #[test]
    fn test_empty_visit_defaults() {
        let doc = json!({"timelineObjects": [{"placeVisit": {}}]});

        let records = extract_visits(&doc).unwrap();

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.latitude_e7, None);
        assert_eq!(record.place_id, None);
        assert_eq!(record.location_address, None);
        assert_eq!(record.duration_ms, 0);
        assert_eq!(record.visit_confidence, None);
    }

    #[test]
    fn test_explicit_null_fields_stay_empty() {
        let doc = json!({
            "timelineObjects": [
                {"placeVisit": {"location": {"placeId": null, "address": null}}}
            ]
        });

        let records = extract_visits(&doc).unwrap();

        assert_eq!(records[0].place_id, None);
        assert_eq!(records[0].location_address, None);
        assert_eq!(records[0].location_name, None);
    }

    #[test]
    fn test_duration_with_missing_endpoints() {
        let doc = json!({
            "timelineObjects": [
                {"placeVisit": {"duration": {"endTimestampMs": "1000"}}},
                {"placeVisit": {"duration": {"startTimestampMs": "1000"}}},
                {"placeVisit": {"duration": {}}}
            ]
        });

        let records = extract_visits(&doc).unwrap();

        assert_eq!(records[0].duration_ms, 1000);
        assert_eq!(records[1].duration_ms, -1000);
        assert_eq!(records[2].duration_ms, 0);
    }

    #[test]
    fn test_duration_with_extreme_timestamps() {
        let doc = json!({
            "timelineObjects": [
                {"placeVisit": {"duration": {
                    "startTimestampMs": "1000",
                    "endTimestampMs": "-9223372036854775808"
                }}},
                {"placeVisit": {"duration": {
                    "startTimestampMs": "-1000",
                    "endTimestampMs": "9223372036854775807"
                }}}
            ]
        });

        let records = extract_visits(&doc).unwrap();

        assert_eq!(records[0].duration_ms, i64::MIN);
        assert_eq!(records[1].duration_ms, i64::MAX);
    }

    #[test]
    fn test_duration_accepts_numeric_timestamps() {
        let doc = json!({
            "timelineObjects": [
                {"placeVisit": {"duration": {
                    "startTimestampMs": 1609459200000i64,
                    "endTimestampMs": 1609459260000i64
                }}}
            ]
        });

        let records = extract_visits(&doc).unwrap();

        assert_eq!(records[0].duration_ms, 60_000);
    }

    #[test]
    fn test_unparseable_timestamp_counts_as_zero() {
        let doc = json!({
            "timelineObjects": [
                {"placeVisit": {"duration": {
                    "startTimestampMs": "not-a-number",
                    "endTimestampMs": "5000"
                }}}
            ]
        });

        let records = extract_visits(&doc).unwrap();

        assert_eq!(records[0].duration_ms, 5000);
    }
}
