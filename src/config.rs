use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub message_filter: MessageFilterConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LogConfig,
    #[serde(default = "default_metrics_interval_seconds")]
    pub metrics_interval_seconds: u64,
}

fn default_metrics_interval_seconds() -> u64 {
    60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            message_filter: MessageFilterConfig::default(),
            output: OutputConfig::default(),
            logging: LogConfig::default(),
            metrics_interval_seconds: default_metrics_interval_seconds(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Directory where log files will be stored
    pub directory: String,
    /// Log file name prefix (date will be appended)
    pub file_prefix: String,
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            directory: "./logs".to_string(),
            file_prefix: "ais_router".to_string(),
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MessageFilterConfig {
    /// AIS message types to translate
    /// If empty, every message type is accepted
    #[serde(default)]
    pub accepted_types: HashSet<i64>,
}

impl MessageFilterConfig {
    /// Check if a message of the given type should be translated
    pub fn should_accept(&self, message_type: i64) -> bool {
        self.accepted_types.is_empty() || self.accepted_types.contains(&message_type)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Write reports to stdout, one JSON object per line
    #[serde(default = "default_stdout")]
    pub stdout: bool,
    #[serde(default)]
    pub udp: UdpConfig,
}

fn default_stdout() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            stdout: default_stdout(),
            udp: UdpConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UdpConfig {
    pub enabled: bool,
    /// UDP destination address (e.g., "192.168.1.255:10110")
    pub destination: String,
}

impl Default for UdpConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            destination: "127.0.0.1:10110".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    pub fn metrics_interval(&self) -> Duration {
        Duration::from_secs(self.metrics_interval_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_config_default() {
        let log_config = LogConfig::default();
        assert_eq!(log_config.directory, "./logs");
        assert_eq!(log_config.file_prefix, "ais_router");
        assert_eq!(log_config.level, "info");
    }

    #[test]
    fn test_output_config_default() {
        let output = OutputConfig::default();
        assert!(output.stdout);
        assert!(!output.udp.enabled);
        assert_eq!(output.udp.destination, "127.0.0.1:10110");
    }

    #[test]
    fn test_empty_json_is_a_valid_config() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert!(config.message_filter.accepted_types.is_empty());
        assert!(config.output.stdout);
        assert!(!config.output.udp.enabled);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.metrics_interval(), Duration::from_secs(60));
    }

    #[test]
    fn test_message_filter_no_filter() {
        let filter = MessageFilterConfig::default();
        // No types configured, should accept everything
        assert!(filter.should_accept(1));
        assert!(filter.should_accept(21));
        assert!(filter.should_accept(27));
    }

    #[test]
    fn test_message_filter_with_types() {
        let mut filter = MessageFilterConfig::default();
        filter.accepted_types.insert(1);
        filter.accepted_types.insert(5);

        assert!(filter.should_accept(1));
        assert!(filter.should_accept(5));
        assert!(!filter.should_accept(2));
        assert!(!filter.should_accept(21));
    }

    #[test]
    fn test_config_deserialization() {
        let json = r#"{
            "message_filter": { "accepted_types": [1, 2, 3, 18] },
            "output": {
                "stdout": false,
                "udp": { "enabled": true, "destination": "192.168.1.255:2947" }
            },
            "logging": {
                "directory": "/var/log/ais",
                "file_prefix": "router",
                "level": "debug"
            },
            "metrics_interval_seconds": 15
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.message_filter.accepted_types.len(), 4);
        assert!(config.message_filter.should_accept(18));
        assert!(!config.output.stdout);
        assert!(config.output.udp.enabled);
        assert_eq!(config.output.udp.destination, "192.168.1.255:2947");
        assert_eq!(config.logging.directory, "/var/log/ais");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.metrics_interval(), Duration::from_secs(15));
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("127.0.0.1:10110"));
        assert!(json.contains("ais_router"));

        let deserialized: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.output.stdout, config.output.stdout);
        assert_eq!(deserialized.metrics_interval_seconds, 60);
    }
}
