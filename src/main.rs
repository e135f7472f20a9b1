use std::error::Error;
use std::io::BufRead;
use tracing::{debug, info, warn};

mod config;
mod stream_reader;
mod message_filter;
mod stdout_writer;
mod udp_broadcaster;
mod app_metrics;

use config::Config;
use stream_reader::AisStreamReader;
use message_filter::should_translate;
use stdout_writer::JsonLineWriter;
use udp_broadcaster::UdpBroadcaster;
use app_metrics::{AppMetrics, MetricsLogger};

use aisgpsd::{ReportHandler, Translator};

const DEFAULT_CONFIG_PATH: &str = "config.json";

// ========== Logging Setup ==========

fn init_logging(log_config: &config::LogConfig) -> Result<(), Box<dyn Error>> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
    use tracing_appender::rolling;

    // Create log directory if it doesn't exist
    std::fs::create_dir_all(&log_config.directory)?;

    // Create daily rolling file appender
    let file_appender = rolling::daily(&log_config.directory, &log_config.file_prefix);

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_timer(fmt::time::OffsetTime::local_rfc_3339().unwrap_or_else(|_| fmt::time::OffsetTime::new(
            time::UtcOffset::UTC,
            time::format_description::well_known::Rfc3339,
        )));

    // stdout carries the reports, console logging goes to stderr
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::OffsetTime::local_rfc_3339().unwrap_or_else(|_| fmt::time::OffsetTime::new(
            time::UtcOffset::UTC,
            time::format_description::well_known::Rfc3339,
        )));

    // Parse log level from config
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&log_config.level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(())
}

// ========== Processing ==========

/// Translate every message of the input and hand the reports to all outputs.
/// A bad line or a message that fails translation is logged and dropped.
fn process_stream<R: BufRead>(
    config: &Config,
    reader: &mut AisStreamReader<R>,
    outputs: &mut [Box<dyn ReportHandler>],
    metrics: &mut AppMetrics,
    metrics_logger: &mut MetricsLogger,
) {
    let translator = Translator::new();

    while let Some(result) = reader.next_message() {
        metrics.lines_read += 1;
        match result {
            Ok(message) => {
                if !should_translate(config, &message) {
                    metrics.filtered += 1;
                } else {
                    match translator.translate(&message) {
                        Ok(report) => {
                            metrics.reports += 1;
                            for output in outputs.iter_mut() {
                                output.handle_report(&report);
                            }
                        }
                        Err(e) => {
                            metrics.translate_errors += 1;
                            warn!("Dropping message on line {}: {}", reader.line_number(), e);
                        }
                    }
                }
            }
            Err(e) => {
                metrics.read_errors += 1;
                warn!("Skipping line {}: {}", reader.line_number(), e);
            }
        }

        // Log metrics periodically
        metrics_logger.check_and_log(metrics);
    }
}

// ========== Main Application ==========

fn print_help() {
    println!("AIS Router");
    println!();
    println!("Reads libais-decoded AIS messages (one JSON object per line) from stdin");
    println!("and writes gpsd-compatible AIS reports.");
    println!();
    println!("USAGE:");
    println!("    ais_router [OPTIONS] < decoded.jsonl");
    println!();
    println!("OPTIONS:");
    println!("    --config <path>                      Configuration file (default: {})", DEFAULT_CONFIG_PATH);
    println!("    --validate-config, --validate, -v    Validate configuration and exit");
    println!("    --help, -h                           Show this help message");
}

fn main() -> Result<(), Box<dyn Error>> {
    // Check for command-line arguments
    let args: Vec<String> = std::env::args().collect();

    // Check for help flag
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        std::process::exit(0);
    }

    let validate_only = args.iter().any(|a| a == "--validate-config" || a == "--validate" || a == "-v");

    let config_path = match args.iter().position(|a| a == "--config") {
        Some(index) => match args.get(index + 1) {
            Some(path) => path.clone(),
            None => {
                eprintln!("--config requires a path");
                std::process::exit(2);
            }
        },
        None => DEFAULT_CONFIG_PATH.to_string(),
    };

    // Load configuration
    let config = match Config::from_file(&config_path) {
        Ok(cfg) => {
            if validate_only {
                println!("✓ Configuration validation successful");
                println!("  Accepted message types: {}", if cfg.message_filter.accepted_types.is_empty() {
                    "all".to_string()
                } else {
                    let mut types: Vec<_> = cfg.message_filter.accepted_types.iter().collect();
                    types.sort();
                    format!("{:?}", types)
                });
                println!("  stdout output: {}", cfg.output.stdout);
                println!("  UDP output: {} ({})", cfg.output.udp.enabled, cfg.output.udp.destination);
                println!("  Log directory: {} (level {})", cfg.logging.directory, cfg.logging.level);
                std::process::exit(0);
            }
            cfg
        }
        Err(e) => {
            if validate_only {
                eprintln!("✗ Configuration validation failed: {}", e);
                std::process::exit(1);
            }
            eprintln!("Warning: Could not load {}: {}", config_path, e);
            eprintln!("Using default configuration");
            Config::default()
        }
    };

    // Initialize logging
    init_logging(&config.logging)?;
    info!("AIS Router starting...");
    debug!("Configuration: {:?}", config);

    let mut outputs: Vec<Box<dyn ReportHandler>> = Vec::new();
    if config.output.stdout {
        outputs.push(Box::new(JsonLineWriter::new(std::io::stdout())));
    }
    let udp = UdpBroadcaster::new(config.output.udp.destination.clone(), config.output.udp.enabled);
    if udp.is_active() {
        info!("Sending reports via UDP to {}", config.output.udp.destination);
        outputs.push(Box::new(udp));
    }
    if outputs.is_empty() {
        warn!("No output enabled, reports will be discarded");
    }

    let mut reader = AisStreamReader::new(std::io::stdin().lock());
    let mut metrics = AppMetrics::new();
    let mut metrics_logger = MetricsLogger::new(config.metrics_interval());

    info!("Reading decoded AIS messages from stdin");
    process_stream(&config, &mut reader, &mut outputs, &mut metrics, &mut metrics_logger);

    metrics_logger.flush(&mut metrics);
    let output_errors: u64 = outputs.iter().map(|output| output.error_count()).sum();
    if output_errors > 0 {
        warn!("{} reports could not be delivered to an output", output_errors);
    }
    info!("End of input after {} lines, shutting down", reader.line_number());
    Ok(())
}
