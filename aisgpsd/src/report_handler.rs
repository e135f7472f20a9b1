use crate::GpsdReport;

/// Trait for components that consume translated gpsd reports
///
/// Outputs (stdout, UDP, ...) implement this so the processing loop can fan
/// each report out without knowing where it ends up.
pub trait ReportHandler {
    /// Process one translated report
    fn handle_report(&mut self, report: &GpsdReport);

    /// Number of reports this handler failed to deliver
    fn error_count(&self) -> u64 {
        0
    }
}
