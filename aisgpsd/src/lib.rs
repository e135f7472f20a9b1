//! AIS to gpsd report translation
//!
//! This library converts AIS messages decoded by libais into the JSON report
//! schema emitted by gpsd, so that consumers written against gpsd (chart
//! plotters, vessel tracking dashboards) can be fed from a libais decoder:
//! - Field renaming (`cog` becomes `course`, `x` becomes `lon`, ...)
//! - Enumeration lookups (navigation status, EPFD fix type, aid-to-navigation type)
//! - Date and ETA component folding into gpsd's timestamp strings
//! - Slot reservation flattening for data link management messages
//!
//! Fields the translator does not know are copied to the report unchanged.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//!
//! let message = json!({"id": 1, "cog": 45, "sog": 10.2, "position_accuracy": 1});
//! let report = aisgpsd::translate(message.as_object().unwrap()).unwrap();
//!
//! assert_eq!(report["class"], "AIS");
//! assert_eq!(report["course"], 45);
//! assert_eq!(report["accuracy"], true);
//! assert_eq!(report["heading"], 511);
//! ```

pub mod error;
pub mod handlers;
pub mod report_handler;
pub mod translator;

// Re-export commonly used types
pub use error::{Result, TranslateError};
pub use handlers::aid_to_navigation::aton_type_description;
pub use handlers::base_station::fix_type_description;
pub use handlers::position_report::nav_status_description;
pub use report_handler::ReportHandler;
pub use translator::{AisMessage, GpsdReport, Translator, translate};
