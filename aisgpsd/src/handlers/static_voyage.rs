//! Type 5: Static and Voyage Related Data

use serde_json::Value;

use super::{Handler, consumed, integer_field, rename};
use crate::error::Result;
use crate::translator::{AisMessage, GpsdReport};

/// Fold the ETA parts into gpsd's `MM-DDTHH:MMZ`
fn eta_day(report: &mut GpsdReport, message: &AisMessage) -> Result<()> {
    let eta = format!(
        "{:02}-{:02}T{:02}:{:02}Z",
        integer_field(message, "eta_month")?,
        integer_field(message, "eta_day")?,
        integer_field(message, "eta_hour")?,
        integer_field(message, "eta_minute")?,
    );
    report.insert("eta".to_string(), Value::from(eta));
    Ok(())
}

pub(crate) const HANDLERS: &[(&str, Handler)] = &[
    ("dim_a", |report, message| rename(report, message, "dim_a", "to_bow")),
    ("dim_b", |report, message| rename(report, message, "dim_b", "to_stern")),
    ("dim_c", |report, message| rename(report, message, "dim_c", "to_port")),
    ("dim_d", |report, message| rename(report, message, "dim_d", "to_starboard")),
    ("eta_day", eta_day),
    ("eta_month", consumed),
    ("eta_hour", consumed),
    ("eta_minute", consumed),
];
