//! Type 20: Data Link Management Message

use serde_json::Value;

use super::Handler;
use crate::error::{Result, TranslateError};
use crate::translator::{AisMessage, GpsdReport};

/// Slot reservation sub-field and the gpsd prefix its numbered copy is stored under
const RESERVATION_FIELDS: [(&str, &str); 4] = [
    ("incr", "increment"),
    ("num_slots", "number"),
    ("offset", "offset"),
    ("timeout", "timeout"),
];

/// Flatten the reservation list into `increment1`, `number1`, ... (1-indexed)
fn reservations(report: &mut GpsdReport, message: &AisMessage) -> Result<()> {
    let slots = message
        .get("reservations")
        .and_then(Value::as_array)
        .ok_or(TranslateError::InvalidFieldType {
            field: "reservations",
            expected: "a list of slot reservations",
        })?;

    for (index, slot) in slots.iter().enumerate() {
        let slot = slot.as_object().ok_or(TranslateError::InvalidFieldType {
            field: "reservations",
            expected: "a list of slot reservations",
        })?;
        for (from, prefix) in RESERVATION_FIELDS {
            let value = slot.get(from).ok_or(TranslateError::MissingField { field: from })?;
            report.insert(format!("{}{}", prefix, index + 1), value.clone());
        }
    }
    Ok(())
}

pub(crate) const HANDLERS: &[(&str, Handler)] = &[("reservations", reservations)];
