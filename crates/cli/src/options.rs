// crates/cli/src/options.rs

use std::path::PathBuf;
use std::time::Duration;

use crate::utils::parse_nonzero_duration;
use clap::{ArgAction, Parser};
use logging::LogFormat;
use probe_core::DEFAULT_HOST;

#[derive(Parser, Debug)]
#[command(
    name = "syslog-probe",
    version,
    about = "Send test syslog messages to the collector",
    long_about = None
)]
pub struct ProbeOpts {
    /// Send message for specific source type
    #[arg(long, value_name = "TYPE", help_heading = "Selection")]
    pub source: Option<String>,
    /// Send messages for all source types
    #[arg(long, conflicts_with = "source", help_heading = "Selection")]
    pub all: bool,
    /// List the known source types and exit
    #[arg(long, conflicts_with_all = ["source", "all"], help_heading = "Selection")]
    pub list: bool,
    /// Load templates from a JSON file instead of the built-in set
    #[arg(long, value_name = "FILE", help_heading = "Selection")]
    pub catalog: Option<PathBuf>,
    /// Force UUID injection (overrides INJECT_UUID env var)
    #[arg(long, help_heading = "Tagging")]
    pub uuid: bool,
    /// Collector host
    #[arg(long, env = "SYSLOG_HOST", default_value = DEFAULT_HOST, help_heading = "Destination")]
    pub host: String,
    /// Send every template to this port instead of its own
    #[arg(long, value_name = "PORT", help_heading = "Destination")]
    pub port: Option<u16>,
    /// Give up on a send after SECONDS
    #[arg(
        long,
        value_name = "SECONDS",
        value_parser = parse_nonzero_duration,
        help_heading = "Destination"
    )]
    pub timeout: Option<Duration>,
    /// Prefer IPv4 when resolving the host
    #[arg(short = '4', long = "ipv4", conflicts_with = "ipv6", help_heading = "Destination")]
    pub ipv4: bool,
    /// Prefer IPv6 when resolving the host
    #[arg(short = '6', long = "ipv6", help_heading = "Destination")]
    pub ipv6: bool,
    /// Socket options, e.g. SO_SNDBUF=65536,ip:ttl=8
    #[arg(
        long,
        value_name = "OPTIONS",
        value_delimiter = ',',
        help_heading = "Destination"
    )]
    pub sockopts: Vec<String>,
    #[arg(short, long, action = ArgAction::Count, help_heading = "Output")]
    pub verbose: u8,
    #[arg(short, long, help_heading = "Output")]
    pub quiet: bool,
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "text",
        help_heading = "Output"
    )]
    pub log_format: LogFormat,
    #[arg(long = "log-file", value_name = "FILE", help_heading = "Output")]
    pub log_file: Option<PathBuf>,
    #[arg(long = "log-file-format", value_name = "FMT", help_heading = "Output")]
    pub log_file_format: Option<String>,
    #[arg(long = "no-color", help_heading = "Output")]
    pub no_color: bool,
    #[arg(long, help_heading = "Output")]
    pub timestamps: bool,
}
