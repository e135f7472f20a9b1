//! Type 4: Base Station Report

use serde_json::Value;
use tracing::debug;

use super::{Handler, consumed, integer_field};
use crate::error::Result;
use crate::translator::{AisMessage, GpsdReport};

pub static FIX_TYPES: [&str; 9] = [
    "Undefined",
    "GPS",
    "GLONASS",
    "Combined GPS/GLONASS",
    "Loran-C",
    "Chayka",
    "Integrated navigation system",
    "Surveyed",
    "Galileo",
];

pub fn fix_type_description(code: i64) -> Option<&'static str> {
    usize::try_from(code).ok().and_then(|index| FIX_TYPES.get(index)).copied()
}

/// Fold year..second into gpsd's `YYYY-MM-DDTHH:MM:SSZ`
fn year(report: &mut GpsdReport, message: &AisMessage) -> Result<()> {
    let timestamp = format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        integer_field(message, "year")?,
        integer_field(message, "month")?,
        integer_field(message, "day")?,
        integer_field(message, "hour")?,
        integer_field(message, "minute")?,
        integer_field(message, "second")?,
    );
    report.insert("eta".to_string(), Value::from(timestamp));
    Ok(())
}

fn fix_type(report: &mut GpsdReport, message: &AisMessage) -> Result<()> {
    let raw = message.get("fix_type");
    let epfd = raw
        .and_then(Value::as_i64)
        .and_then(fix_type_description)
        .unwrap_or_else(|| {
            debug!("Unknown fix type {:?}, reporting as {}", raw, FIX_TYPES[0]);
            FIX_TYPES[0]
        });
    report.insert("epfd".to_string(), Value::from(epfd));
    Ok(())
}

pub(crate) const HANDLERS: &[(&str, Handler)] = &[
    ("year", year),
    ("month", consumed),
    ("day", consumed),
    ("hour", consumed),
    ("minute", consumed),
    ("second", consumed),
    ("fix_type", fix_type),
];
