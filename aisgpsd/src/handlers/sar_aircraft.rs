//! Type 9: Standard SAR Aircraft Position Report

use super::{Handler, rename};

// libais calls the UTC second "timestamp" in every position report, gpsd calls it "second"
pub(crate) const HANDLERS: &[(&str, Handler)] = &[
    ("timestamp", |report, message| rename(report, message, "timestamp", "second")),
];
