// crates/core/src/error.rs
use std::fmt;
use std::io;

use catalog::CatalogError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("{0}")]
    Usage(String),
    /// Neither a source type nor `--all` was given; help has been shown.
    #[error("no source selected: use --source TYPE or --all")]
    NoSelection,
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("failed to initialise logging: {0}")]
    Logging(#[source] io::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ProbeError>;

/// Process exit status.
///
/// A finished run exits with `Ok` even when individual sends failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Ok = 0,
    SyntaxOrUsage = 1,
    Config = 2,
    Logging = 3,
    FileIo = 11,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownExit(pub u8);

impl fmt::Display for UnknownExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown exit code {}", self.0)
    }
}

impl std::error::Error for UnknownExit {}

impl TryFrom<u8> for ExitCode {
    type Error = UnknownExit;

    fn try_from(v: u8) -> std::result::Result<Self, Self::Error> {
        match v {
            0 => Ok(ExitCode::Ok),
            1 => Ok(ExitCode::SyntaxOrUsage),
            2 => Ok(ExitCode::Config),
            3 => Ok(ExitCode::Logging),
            11 => Ok(ExitCode::FileIo),
            other => Err(UnknownExit(other)),
        }
    }
}

impl From<ExitCode> for u8 {
    fn from(code: ExitCode) -> Self {
        code as u8
    }
}

impl From<&ProbeError> for ExitCode {
    fn from(e: &ProbeError) -> Self {
        match e {
            ProbeError::Usage(_) | ProbeError::NoSelection => ExitCode::SyntaxOrUsage,
            ProbeError::Catalog(_) => ExitCode::Config,
            ProbeError::Logging(_) => ExitCode::Logging,
            ProbeError::Io(_) => ExitCode::FileIo,
        }
    }
}
