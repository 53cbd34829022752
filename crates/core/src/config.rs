// crates/core/src/config.rs

use logging::{LogFormat, SubscriberConfig};
use std::path::PathBuf;
use std::time::Duration;
use transport::{AddressFamily, SockOpt, UdpTransport};

pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Configuration for a probe run.
#[derive(Clone, Debug)]
pub struct ProbeConfig {
    pub host: String,
    /// Overrides the port of every template when set.
    pub port: Option<u16>,
    pub inject_uuid: bool,
    pub timeout: Option<Duration>,
    pub family: Option<AddressFamily>,
    pub sockopts: Vec<SockOpt>,
    pub log_format: LogFormat,
    pub verbose: u8,
    pub quiet: bool,
    pub log_file: Option<(PathBuf, Option<String>)>,
    pub colored: bool,
    pub timestamps: bool,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: None,
            inject_uuid: false,
            timeout: None,
            family: None,
            sockopts: Vec::new(),
            log_format: LogFormat::Text,
            verbose: 0,
            quiet: false,
            log_file: None,
            colored: true,
            timestamps: false,
        }
    }
}

impl ProbeConfig {
    /// Create a new builder for [`ProbeConfig`].
    pub fn builder() -> ProbeConfigBuilder {
        ProbeConfigBuilder::default()
    }

    pub fn subscriber_config(&self) -> SubscriberConfig {
        SubscriberConfig::builder()
            .format(self.log_format)
            .verbose(self.verbose)
            .quiet(self.quiet)
            .log_file(self.log_file.clone())
            .colored(self.colored)
            .timestamps(self.timestamps)
            .build()
    }

    pub fn transport(&self) -> UdpTransport {
        UdpTransport::new()
            .timeout(self.timeout)
            .family(self.family)
            .sockopts(self.sockopts.clone())
    }

    pub fn destination_port(&self, template_port: u16) -> u16 {
        self.port.unwrap_or(template_port)
    }
}

/// Builder for [`ProbeConfig`].
#[derive(Debug, Default)]
#[must_use]
pub struct ProbeConfigBuilder {
    cfg: ProbeConfig,
}

impl ProbeConfigBuilder {
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.cfg.host = host.into();
        self
    }

    pub fn port(mut self, port: Option<u16>) -> Self {
        self.cfg.port = port;
        self
    }

    pub fn inject_uuid(mut self, enable: bool) -> Self {
        self.cfg.inject_uuid = enable;
        self
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.cfg.timeout = timeout;
        self
    }

    pub fn family(mut self, family: Option<AddressFamily>) -> Self {
        self.cfg.family = family;
        self
    }

    pub fn sockopts(mut self, sockopts: Vec<SockOpt>) -> Self {
        self.cfg.sockopts = sockopts;
        self
    }

    pub fn log_format(mut self, log_format: LogFormat) -> Self {
        self.cfg.log_format = log_format;
        self
    }

    pub fn verbose(mut self, verbose: u8) -> Self {
        self.cfg.verbose = verbose;
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.cfg.quiet = quiet;
        self
    }

    pub fn log_file(mut self, log_file: Option<(PathBuf, Option<String>)>) -> Self {
        self.cfg.log_file = log_file;
        self
    }

    pub fn colored(mut self, enable: bool) -> Self {
        self.cfg.colored = enable;
        self
    }

    pub fn timestamps(mut self, enable: bool) -> Self {
        self.cfg.timestamps = enable;
        self
    }

    pub fn build(self) -> ProbeConfig {
        self.cfg
    }
}
