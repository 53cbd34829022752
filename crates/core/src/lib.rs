// crates/core/src/lib.rs

//! Driver tying the template catalog, the composer and the UDP transport
//! together.

mod config;
mod error;
mod run;

pub use config::{DEFAULT_HOST, ProbeConfig, ProbeConfigBuilder};
pub use error::{ExitCode, ProbeError, Result, UnknownExit};
pub use run::{Attempt, Selection, attempt, run};

pub mod templates {
    pub use catalog::*;
}

pub mod compose {
    pub use message::*;
}

pub mod net {
    pub use transport::*;
}
