//! Types 1, 2 and 3: Position Report Class A

use serde_json::Value;

use super::{Handler, flag, integer_field, rename};
use crate::error::{Result, TranslateError};
use crate::translator::{AisMessage, GpsdReport};

pub static NAV_STATUSES: [&str; 16] = [
    "under way using engine",
    "at anchor",
    "not under command",
    "restricted maneuverability",
    "constrained by her draught",
    "moored",
    "aground",
    "engaged in fishing",
    "under way sailing",
    "reserved for future amendment of navigational status for ships carrying DG, HS, or MP, or IMO hazard or pollutant category C, high speed craft (HSC)",
    "reserved for future amendment of navigational status for ships carrying dangerous goods (DG), harmful substances (HS) or marine pollutants (MP), or IMO hazard or pollutant category A, wing in ground (WIG)",
    "power-driven vessel towing astern (regional use)",
    "power-driven vessel pushing ahead or towing alongside (regional use)",
    "reserved for future use",
    "AIS-SART (active), MOB-AIS, EPIRB-AIS",
    "default (also used by AIS-SART, MOB-AIS and EPIRB-AIS under test)",
];

/// Status reported when a Class A message carries no navigation status
pub const NAV_STATUS_DEFAULT: usize = 15;

/// gpsd's "heading not available" value
pub const HEADING_NOT_AVAILABLE: i64 = 511;

pub fn nav_status_description(code: i64) -> Option<&'static str> {
    usize::try_from(code).ok().and_then(|index| NAV_STATUSES.get(index)).copied()
}

pub fn is_class_a(message_type: i64) -> bool {
    matches!(message_type, 1..=3)
}

pub(crate) fn apply_defaults(report: &mut GpsdReport) {
    report.insert("status".to_string(), Value::from(NAV_STATUSES[NAV_STATUS_DEFAULT]));
    report.insert("heading".to_string(), Value::from(HEADING_NOT_AVAILABLE));
}

fn nav_status(report: &mut GpsdReport, message: &AisMessage) -> Result<()> {
    let code = integer_field(message, "nav_status")?;
    let status = nav_status_description(code).ok_or(TranslateError::EnumerationLookup {
        table: "navigation status",
        code,
    })?;
    report.insert("status".to_string(), Value::from(status));
    Ok(())
}

// rot, rot_over_range, special_manoeuvre, sync_state and slot_timeout pass through
pub(crate) const HANDLERS: &[(&str, Handler)] = &[
    ("cog", |report, message| rename(report, message, "cog", "course")),
    ("nav_status", nav_status),
    ("position_accuracy", |report, message| flag(report, message, "position_accuracy", "accuracy")),
    ("repeat_indicator", |report, message| rename(report, message, "repeat_indicator", "repeat")),
    ("sog", |report, message| rename(report, message, "sog", "speed")),
    ("true_heading", |report, message| rename(report, message, "true_heading", "heading")),
    ("x", |report, message| rename(report, message, "x", "lon")),
    ("y", |report, message| rename(report, message, "y", "lat")),
];
