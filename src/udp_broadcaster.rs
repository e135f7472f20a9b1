use std::net::UdpSocket;
use tracing::{debug, warn, error};
use aisgpsd::{GpsdReport, ReportHandler};

/// Send failures logged before going quiet
const MAX_LOGGED_ERRORS: u64 = 10;

/// UDP broadcaster for gpsd reports
///
/// Serializes each report to JSON and sends it as a single datagram to a
/// configured destination address, the way gpsd-aware plotters expect to
/// receive AIS targets over the network.
pub struct UdpBroadcaster {
    socket: Option<UdpSocket>,
    destination: String,
    error_count: u64,
    message_count: u64,
}

impl UdpBroadcaster {
    /// Create a new UDP broadcaster
    ///
    /// # Arguments
    /// * `destination` - UDP destination address (e.g., "192.168.1.255:10110")
    /// * `enabled` - Whether UDP broadcasting is enabled
    pub fn new(destination: String, enabled: bool) -> Self {
        let socket = if enabled {
            match Self::create_socket(&destination) {
                Ok(sock) => {
                    debug!("UDP broadcaster initialized: {}", destination);
                    Some(sock)
                }
                Err(e) => {
                    error!("Failed to create UDP socket: {}. Broadcasting disabled.", e);
                    None
                }
            }
        } else {
            debug!("UDP broadcaster disabled in configuration");
            None
        };

        Self {
            socket,
            destination,
            error_count: 0,
            message_count: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.socket.is_some()
    }

    /// Create and configure a UDP socket
    fn create_socket(destination: &str) -> Result<UdpSocket, std::io::Error> {
        let socket = UdpSocket::bind("0.0.0.0:0")?;

        // Enable broadcast if destination is a broadcast address
        if destination.contains(".255") {
            socket.set_broadcast(true)?;
        }

        // Set non-blocking mode to prevent blocking the main loop
        socket.set_nonblocking(true)?;

        Ok(socket)
    }

    fn record_error(&mut self, what: &str, e: &dyn std::fmt::Display) {
        if self.error_count < MAX_LOGGED_ERRORS {
            warn!("{}: {}", what, e);
        }
        self.error_count += 1;
    }

    /// Serialize and broadcast one report
    fn broadcast_report(&mut self, report: &GpsdReport) {
        let Some(socket) = self.socket.as_ref() else {
            return;
        };

        let result = serde_json::to_string(report)
            .map_err(std::io::Error::from)
            .and_then(|json| socket.send_to(json.as_bytes(), &self.destination));
        match result {
            Ok(_) => {
                self.message_count += 1;
                if self.message_count % 1000 == 0 {
                    debug!("Broadcasted {} reports via UDP", self.message_count);
                }
            }
            Err(e) => self.record_error("Failed to send UDP packet", &e),
        }
    }

}

impl ReportHandler for UdpBroadcaster {
    fn handle_report(&mut self, report: &GpsdReport) {
        self.broadcast_report(report);
    }

    fn error_count(&self) -> u64 {
        self.error_count
    }
}
