use serde_json::{Map, Value};
use tracing::trace;

use crate::error::{Result, TranslateError};
use crate::handlers::{self, position_report};

/// A decoded AIS message as produced by libais: field name to value
pub type AisMessage = Map<String, Value>;

/// A gpsd AIS report, ready to be serialized as JSON
pub type GpsdReport = Map<String, Value>;

const REPORT_CLASS: &str = "AIS";
const REPORT_DEVICE: &str = "stdin";

/// Translate one decoded AIS message into a gpsd report.
///
/// The input is only borrowed; every value placed in the report is a deep
/// copy, so the caller may reuse or mutate the message afterwards.
pub fn translate(message: &AisMessage) -> Result<GpsdReport> {
    let message_type = match message.get("id") {
        Some(id) => id.as_i64().ok_or(TranslateError::InvalidFieldType {
            field: "id",
            expected: "an integer message type",
        })?,
        None => return Err(TranslateError::MissingMessageType),
    };

    let mut report = GpsdReport::new();
    report.insert("class".to_string(), Value::from(REPORT_CLASS));
    report.insert("device".to_string(), Value::from(REPORT_DEVICE));
    report.insert("scaled".to_string(), Value::Bool(true));

    // Seeded before the field pass so nav_status / true_heading can overwrite them
    if position_report::is_class_a(message_type) {
        position_report::apply_defaults(&mut report);
    }

    for (field, value) in message {
        if field == "id" {
            report.insert("type".to_string(), value.clone());
            continue;
        }
        match handlers::handler_for(field) {
            Some(handler) => handler(&mut report, message)?,
            None => {
                report.insert(field.clone(), value.clone());
            }
        }
    }

    trace!("Translated AIS type {} message: {} fields in, {} fields out", message_type, message.len(), report.len());
    Ok(report)
}

/// Value form of [`translate`], for callers that pass a translator around
#[derive(Debug, Clone, Copy, Default)]
pub struct Translator;

impl Translator {
    pub fn new() -> Self {
        Self
    }

    pub fn translate(&self, message: &AisMessage) -> Result<GpsdReport> {
        translate(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use serde_json::json;

    fn message(value: Value) -> AisMessage {
        value.as_object().cloned().expect("fixture must be a JSON object")
    }

    #[test]
    fn test_class_a_position_report() {
        let report = translate(&message(json!({
            "id": 1, "cog": 45, "sog": 10.2, "position_accuracy": 1
        })))
        .unwrap();

        assert_eq!(report["type"], 1);
        assert_eq!(report["course"], 45);
        assert_abs_diff_eq!(report["speed"].as_f64().unwrap(), 10.2);
        assert_eq!(report["accuracy"], true);
        assert_eq!(report["status"], "default (also used by AIS-SART, MOB-AIS and EPIRB-AIS under test)");
        assert_eq!(report["heading"], 511);
        assert_eq!(report["class"], "AIS");
        assert_eq!(report["device"], "stdin");
        assert_eq!(report["scaled"], true);
    }

    #[test]
    fn test_class_a_defaults_are_overridden() {
        for message_type in 1..=3 {
            let report = translate(&message(json!({
                "id": message_type, "nav_status": 5, "true_heading": 270
            })))
            .unwrap();
            assert_eq!(report["status"], "moored");
            assert_eq!(report["heading"], 270);
        }
    }

    #[test]
    fn test_no_class_a_defaults_for_other_types() {
        let report = translate(&message(json!({"id": 18}))).unwrap();
        assert!(!report.contains_key("status"));
        assert!(!report.contains_key("heading"));
    }

    #[test]
    fn test_static_and_voyage_data() {
        let report = translate(&message(json!({
            "id": 5, "fix_type": 1, "dim_a": 100, "dim_b": 20, "dim_c": 10, "dim_d": 10,
            "eta_month": 7, "eta_day": 4, "eta_hour": 18, "eta_minute": 5
        })))
        .unwrap();

        assert_eq!(report["epfd"], "GPS");
        assert_eq!(report["to_bow"], 100);
        assert_eq!(report["to_stern"], 20);
        assert_eq!(report["to_port"], 10);
        assert_eq!(report["to_starboard"], 10);
        assert_eq!(report["eta"], "07-04T18:05Z");
        for consumed in ["eta_month", "eta_day", "eta_hour", "eta_minute"] {
            assert!(!report.contains_key(consumed), "{} leaked into the report", consumed);
        }
    }

    #[test]
    fn test_base_station_date_folding() {
        let report = translate(&message(json!({
            "id": 4, "year": 2024, "month": 3, "day": 15, "hour": 12, "minute": 30, "second": 0
        })))
        .unwrap();

        assert_eq!(report["eta"], "2024-03-15T12:30:00Z");
        for consumed in ["year", "month", "day", "hour", "minute", "second"] {
            assert!(!report.contains_key(consumed), "{} leaked into the report", consumed);
        }
    }

    #[test]
    fn test_aid_to_navigation_report() {
        let report = translate(&message(json!({
            "id": 21, "name": "BUOY 7@@@@@@", "aton_type": 9, "off_pos": false, "virtual_aton": true
        })))
        .unwrap();

        assert_eq!(report["name"], "BUOY 7");
        assert_eq!(report["aid_type"], "Beacon, Cardinal N");
        assert_eq!(report["off_position"], false);
        assert_eq!(report["virtual_aid"], true);
    }

    #[test]
    fn test_data_link_reservations() {
        let report = translate(&message(json!({
            "id": 20,
            "reservations": [{"incr": 1, "num_slots": 2, "offset": 3, "timeout": 4}]
        })))
        .unwrap();

        assert_eq!(report["increment1"], 1);
        assert_eq!(report["number1"], 2);
        assert_eq!(report["offset1"], 3);
        assert_eq!(report["timeout1"], 4);
        assert!(!report.contains_key("reservations"));
    }

    #[test]
    fn test_unknown_fields_pass_through() {
        let input = message(json!({
            "id": 27, "mmsi": 366999999, "spare": 0, "raim": false, "nested": {"a": [1, 2]}
        }));
        let report = translate(&input).unwrap();

        let expected = message(json!({
            "class": "AIS", "device": "stdin", "scaled": true, "type": 27,
            "mmsi": 366999999, "spare": 0, "raim": false, "nested": {"a": [1, 2]}
        }));
        assert_eq!(report, expected);
    }

    #[test]
    fn test_missing_message_type() {
        let result = translate(&message(json!({"mmsi": 1, "cog": 12})));
        assert_eq!(result, Err(TranslateError::MissingMessageType));
    }

    #[test]
    fn test_non_integer_message_type() {
        let result = translate(&message(json!({"id": "1"})));
        assert!(matches!(result, Err(TranslateError::InvalidFieldType { field: "id", .. })));
    }

    #[test]
    fn test_unknown_nav_status_fails_message() {
        let result = translate(&message(json!({"id": 1, "nav_status": 16})));
        assert_eq!(
            result,
            Err(TranslateError::EnumerationLookup { table: "navigation status", code: 16 })
        );
    }

    #[test]
    fn test_input_is_not_modified() {
        let input = message(json!({
            "id": 20, "name": "X@@", "reservations": [{"incr": 1, "num_slots": 2, "offset": 3, "timeout": 4}]
        }));
        let snapshot = input.clone();
        let _ = translate(&input).unwrap();
        assert_eq!(input, snapshot);
    }

    #[test]
    fn test_translation_is_deterministic() {
        let input = message(json!({
            "id": 22, "chan_a": 2087, "chan_b": 2088, "x1": -70.5, "x2": -71.0, "y1": 42.5, "y2": 42.0,
            "zone_size": 4, "power_low": false, "txrx_mode": 0
        }));
        let first = translate(&input).unwrap();
        let second = Translator::new().translate(&input).unwrap();
        assert_eq!(first, second);
        assert_eq!(serde_json::to_string(&first).unwrap(), serde_json::to_string(&second).unwrap());
    }

    #[test]
    fn test_report_starts_with_constant_markers() {
        let report = translate(&message(json!({"id": 9, "timestamp": 42}))).unwrap();
        let keys: Vec<&str> = report.keys().map(String::as_str).take(3).collect();
        assert_eq!(keys, ["class", "device", "scaled"]);
        assert_eq!(report["second"], 42);
    }
}
