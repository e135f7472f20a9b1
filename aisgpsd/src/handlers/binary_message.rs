//! Types 6 and 8: Binary Addressed and Binary Broadcast Messages
//!
//! The application payload is not decoded into gpsd fields; only the
//! addressing and function identifier are renamed.

use super::{Handler, rename};

pub(crate) const HANDLERS: &[(&str, Handler)] = &[
    ("mmsi_dest", |report, message| rename(report, message, "mmsi_dest", "dest_mmsi")),
    ("seq", |report, message| rename(report, message, "seq", "seqno")),
    ("fi", |report, message| rename(report, message, "fi", "fid")),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translator::GpsdReport;
    use serde_json::json;

    #[test]
    fn test_addressed_binary_fields() {
        let message = json!({"mmsi_dest": 366123456, "seq": 2, "fi": 22, "dac": 1})
            .as_object()
            .cloned()
            .unwrap();
        let mut report = GpsdReport::new();
        for (_, handler) in HANDLERS {
            handler(&mut report, &message).unwrap();
        }
        assert_eq!(report["dest_mmsi"], 366123456);
        assert_eq!(report["seqno"], 2);
        assert_eq!(report["fid"], 22);
        assert!(!report.contains_key("dac"));
    }
}
