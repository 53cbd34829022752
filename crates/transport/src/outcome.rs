// crates/transport/src/outcome.rs
use std::fmt;

use crate::Datagram;

/// Lifecycle of one send attempt. There are no retry states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendState {
    Pending,
    Sent,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SendOutcome {
    pub source_type: String,
    pub succeeded: bool,
    pub error: Option<String>,
}

impl SendOutcome {
    pub fn sent(source_type: impl Into<String>) -> Self {
        Self {
            source_type: source_type.into(),
            succeeded: true,
            error: None,
        }
    }

    pub fn failed(source_type: impl Into<String>, error: impl fmt::Display) -> Self {
        Self {
            source_type: source_type.into(),
            succeeded: false,
            error: Some(error.to_string()),
        }
    }

    pub fn state(&self) -> SendState {
        if self.succeeded {
            SendState::Sent
        } else {
            SendState::Failed
        }
    }
}

/// Send `payload` once and record what happened.
///
/// Transport errors are captured in the outcome, never returned.
pub fn send<T: Datagram + ?Sized>(
    transport: &T,
    source_type: &str,
    host: &str,
    port: u16,
    payload: &[u8],
) -> SendOutcome {
    match transport.send_to(host, port, payload) {
        Ok(n) => {
            tracing::debug!(target: "transport", source_type, host, port, bytes = n, "sent");
            SendOutcome::sent(source_type)
        }
        Err(err) => {
            tracing::warn!(
                target: "transport",
                source_type,
                host,
                port,
                error = %err,
                "send failed"
            );
            SendOutcome::failed(source_type, err)
        }
    }
}

/// Counts accumulated over a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub attempted: usize,
    pub succeeded: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &SendOutcome) {
        self.attempted += 1;
        if outcome.succeeded {
            self.succeeded += 1;
        }
    }

    pub fn failed(&self) -> usize {
        self.attempted - self.succeeded
    }

    pub fn all_succeeded(&self) -> bool {
        self.succeeded == self.attempted
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.succeeded, self.attempted)
    }
}
