//! Per-field handlers, grouped by the AIS message type that introduces the field.
//!
//! A handler receives the report being built and the whole input message, so
//! a handler can fold several sibling fields into one output (the date fields
//! of a base station report, for example). The siblings then register a no-op.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde_json::Value;

use crate::error::{Result, TranslateError};
use crate::translator::{AisMessage, GpsdReport};

pub mod aid_to_navigation;
pub mod base_station;
pub mod binary_message;
pub mod channel_management;
pub mod class_b;
pub mod data_link;
pub mod position_report;
pub mod sar_aircraft;
pub mod static_voyage;

pub type Handler = fn(&mut GpsdReport, &AisMessage) -> Result<()>;

static HANDLERS: LazyLock<HashMap<&'static str, Handler>> = LazyLock::new(|| {
    [
        position_report::HANDLERS,
        base_station::HANDLERS,
        static_voyage::HANDLERS,
        binary_message::HANDLERS,
        sar_aircraft::HANDLERS,
        class_b::HANDLERS,
        data_link::HANDLERS,
        aid_to_navigation::HANDLERS,
        channel_management::HANDLERS,
    ]
    .into_iter()
    .flatten()
    .copied()
    .collect()
});

/// Look up the handler registered for an input field
pub fn handler_for(field: &str) -> Option<Handler> {
    HANDLERS.get(field).copied()
}

/// Handler for fields consumed by a sibling handler
pub(crate) fn consumed(_report: &mut GpsdReport, _message: &AisMessage) -> Result<()> {
    Ok(())
}

/// Copy `from` into the report as `to`, when present
pub(crate) fn rename(report: &mut GpsdReport, message: &AisMessage, from: &str, to: &str) -> Result<()> {
    if let Some(value) = message.get(from) {
        report.insert(to.to_string(), value.clone());
    }
    Ok(())
}

/// Store whether `from` equals 1 as the boolean `to`, when present
pub(crate) fn flag(report: &mut GpsdReport, message: &AisMessage, from: &str, to: &str) -> Result<()> {
    if let Some(value) = message.get(from) {
        report.insert(to.to_string(), Value::Bool(equals_one(value)));
    }
    Ok(())
}

/// Numeric equality with 1; `true` counts as 1
pub(crate) fn equals_one(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.as_f64() == Some(1.0),
        Value::Bool(b) => *b,
        _ => false,
    }
}

pub(crate) fn integer_field(message: &AisMessage, field: &'static str) -> Result<i64> {
    integer_value(message.get(field), field)
}

pub(crate) fn integer_value(value: Option<&Value>, field: &'static str) -> Result<i64> {
    value
        .ok_or(TranslateError::MissingField { field })?
        .as_i64()
        .ok_or(TranslateError::InvalidFieldType { field, expected: "an integer" })
}
