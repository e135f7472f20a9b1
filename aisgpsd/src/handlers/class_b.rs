//! Types 18 and 19: Standard and Extended Class B CS Position Reports

use super::{Handler, flag};

pub(crate) const HANDLERS: &[(&str, Handler)] = &[
    ("band_flag", |report, message| flag(report, message, "band_flag", "band")),
    ("commstate_flag", |report, message| flag(report, message, "commstate_flag", "cs")),
    ("display_flag", |report, message| flag(report, message, "display_flag", "display")),
    ("dsc_flag", |report, message| flag(report, message, "dsc_flag", "dsc")),
    ("m22_flag", |report, message| flag(report, message, "m22_flag", "msg22")),
    ("mode_flag", |report, message| flag(report, message, "mode_flag", "mode")),
    ("unit_flag", |report, message| flag(report, message, "unit_flag", "unit")),
    ("assigned_mode", |report, message| flag(report, message, "assigned_mode", "assigned")),
];
