// src/lib.rs

//! Send tagged test syslog messages to a collector.
//!
//! The [`send`] and [`send_with_config`] helpers drive a whole run from
//! library code with the built-in templates and a real UDP socket. The
//! `syslog-probe` binary wraps the same pieces behind a command line.
//!
//! ```no_run
//! use syslog_probe::{ProbeConfig, Selection, send_with_config};
//!
//! let cfg = ProbeConfig::builder()
//!     .host("10.0.0.5")
//!     .inject_uuid(true)
//!     .build();
//! let summary = send_with_config(&Selection::All, &cfg).unwrap();
//! println!("{summary}");
//! ```

mod run;

pub use probe_core::compose::{CorrelationId, compose, extract_correlation_id};
pub use probe_core::net::{RunSummary, SendOutcome, UdpTransport};
pub use probe_core::templates::{Catalog, CatalogError, SourceTemplate};
pub use probe_core::{ExitCode, ProbeConfig, ProbeError, Result, Selection};
pub use run::{send, send_with_config};
