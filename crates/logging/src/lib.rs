// crates/logging/src/lib.rs

use std::io;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, fmt as tracing_fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

mod flags;
mod formatter;
mod json_format;
mod sink;

pub use flags::{LogFormat, SubscriberConfig, SubscriberConfigBuilder};
pub use formatter::ProbeFormatter;
pub use json_format::{JsonFormatter, SEND_KEYS};

use crate::sink::{FileWriter, LogWriter};

/// Map the quiet/verbose switches onto a maximum level.
pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::ERROR
    } else {
        match verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

pub fn subscriber(cfg: SubscriberConfig) -> io::Result<Box<dyn tracing::Subscriber + Send + Sync>> {
    let SubscriberConfig {
        format,
        verbose,
        quiet,
        log_file,
        colored,
        timestamps,
    } = cfg;
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbose, quiet).into())
        .from_env_lossy();

    let base = tracing_fmt::layer()
        .with_writer(LogWriter)
        .with_target(false)
        .with_level(false)
        .with_ansi(colored);
    let fmt_layer = match format {
        LogFormat::Json => base.event_format(JsonFormatter).boxed(),
        LogFormat::Text => base
            .event_format(ProbeFormatter::new(None).with_timestamps(timestamps))
            .boxed(),
    };

    let file_layer = if let Some((path, fmt)) = log_file {
        let base = tracing_fmt::layer()
            .with_writer(FileWriter::open(&path)?)
            .with_ansi(false);
        let layer = match fmt.as_deref() {
            Some("json") => base.event_format(JsonFormatter).boxed(),
            Some(spec) => base
                .event_format(ProbeFormatter::new(Some(spec.to_string())))
                .boxed(),
            None => base
                .event_format(ProbeFormatter::new(None).with_timestamps(true))
                .boxed(),
        };
        Some(layer)
    } else {
        None
    };

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(file_layer);
    Ok(Box::new(registry))
}

pub fn init(cfg: SubscriberConfig) -> io::Result<()> {
    subscriber(cfg)?
        .try_init()
        .map_err(|e| io::Error::other(e.to_string()))
}
