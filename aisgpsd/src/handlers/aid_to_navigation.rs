//! Type 21: Aid-to-Navigation Report

use serde_json::Value;

use super::{Handler, integer_field, rename};
use crate::error::{Result, TranslateError};
use crate::translator::{AisMessage, GpsdReport};

pub static ATON_TYPES: [&str; 32] = [
    "Default, Type of Aid to Navigation not specified",
    "Reference point",
    "RACON (radar transponder marking a navigation hazard)",
    "Fixed structure off shore, such as oil platforms, wind farms, rigs.",
    "Spare, Reserved for future use.",
    "Light, without sectors",
    "Light, with sectors",
    "Leading Light Front",
    "Leading Light Rear",
    "Beacon, Cardinal N",
    "Beacon, Cardinal E",
    "Beacon, Cardinal S",
    "Beacon, Cardinal W",
    "Beacon, Port hand",
    "Beacon, Starboard hand",
    "Beacon, Preferred Channel port hand",
    "Beacon, Preferred Channel starboard hand",
    "Beacon, Isolated danger",
    "Beacon, Safe water",
    "Beacon, Special mark",
    "Cardinal Mark N",
    "Cardinal Mark E",
    "Cardinal Mark S",
    "Cardinal Mark W",
    "Port hand Mark",
    "Starboard hand Mark",
    "Preferred Channel Port hand",
    "Preferred Channel Starboard hand",
    "Isolated danger",
    "Safe Water",
    "Special Mark",
    "Light Vessel / LANBY / Rigs",
];

/// Six-bit AIS text pads unused characters with '@'
const NAME_PADDING: char = '@';

pub fn aton_type_description(code: i64) -> Option<&'static str> {
    usize::try_from(code).ok().and_then(|index| ATON_TYPES.get(index)).copied()
}

fn aton_type(report: &mut GpsdReport, message: &AisMessage) -> Result<()> {
    let code = integer_field(message, "aton_type")?;
    let aid_type = aton_type_description(code).ok_or(TranslateError::EnumerationLookup {
        table: "aid-to-navigation type",
        code,
    })?;
    report.insert("aid_type".to_string(), Value::from(aid_type));
    Ok(())
}

fn name(report: &mut GpsdReport, message: &AisMessage) -> Result<()> {
    let name = message
        .get("name")
        .and_then(Value::as_str)
        .ok_or(TranslateError::InvalidFieldType { field: "name", expected: "a string" })?;
    report.insert("name".to_string(), Value::from(name.trim_end_matches(NAME_PADDING)));
    Ok(())
}

pub(crate) const HANDLERS: &[(&str, Handler)] = &[
    ("aton_type", aton_type),
    ("name", name),
    ("off_pos", |report, message| rename(report, message, "off_pos", "off_position")),
    ("virtual_aton", |report, message| rename(report, message, "virtual_aton", "virtual_aid")),
];
