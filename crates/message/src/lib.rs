// crates/message/src/lib.rs

//! Composition of the syslog payloads sent by the probe.

mod compose;
mod correlation;
mod dialect;

pub use compose::{MARKER_PREFIX, compose, compose_str, extract_correlation_id, marker};
pub use correlation::CorrelationId;
pub use dialect::Dialect;
