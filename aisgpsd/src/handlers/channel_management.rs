//! Type 22: Channel Management

use super::{Handler, rename};

// x1/y1 is the north-east corner of the zone, x2/y2 the south-west one
pub(crate) const HANDLERS: &[(&str, Handler)] = &[
    ("chan_a", |report, message| rename(report, message, "chan_a", "channel_a")),
    ("chan_b", |report, message| rename(report, message, "chan_b", "channel_b")),
    ("chan_a_bandwidth", |report, message| rename(report, message, "chan_a_bandwidth", "band_a")),
    ("chan_b_bandwidth", |report, message| rename(report, message, "chan_b_bandwidth", "band_b")),
    ("power_low", |report, message| rename(report, message, "power_low", "power")),
    ("txrx_mode", |report, message| rename(report, message, "txrx_mode", "txrx")),
    ("x1", |report, message| rename(report, message, "x1", "ne_lon")),
    ("x2", |report, message| rename(report, message, "x2", "sw_lon")),
    ("y1", |report, message| rename(report, message, "y1", "ne_lat")),
    ("y2", |report, message| rename(report, message, "y2", "sw_lat")),
    ("zone_size", |report, message| rename(report, message, "zone_size", "zonesize")),
];
