use std::io::Write;
use tracing::warn;
use aisgpsd::{GpsdReport, ReportHandler};

/// Writes each report as one compact JSON line, the framing gpsd clients read
pub struct JsonLineWriter<W: Write> {
    out: W,
    error_count: u64,
}

impl<W: Write> JsonLineWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, error_count: 0 }
    }

    fn write_report(&mut self, report: &GpsdReport) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.out, report)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportHandler for JsonLineWriter<W> {
    fn handle_report(&mut self, report: &GpsdReport) {
        if let Err(e) = self.write_report(report) {
            if self.error_count < 10 {
                warn!("Failed to write report: {}", e);
            }
            self.error_count += 1;
        }
    }

    fn error_count(&self) -> u64 {
        self.error_count
    }
}
