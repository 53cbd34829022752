// crates/cli/src/validate.rs
use std::env;

use crate::options::ProbeOpts;
use crate::utils::env_flag;
use probe_core::net::{AddressFamily, parse_sockopts};
use probe_core::{ExitCode, ProbeConfig, ProbeError, Result, Selection};

pub const INJECT_UUID_ENV: &str = "INJECT_UUID";

/// `--uuid` wins; otherwise `INJECT_UUID=true` enables tagging.
pub fn inject_uuid(opts: &ProbeOpts) -> bool {
    opts.uuid || env_flag(env::var(INJECT_UUID_ENV).ok().as_deref())
}

pub fn selection(opts: &ProbeOpts) -> Option<Selection> {
    if opts.all {
        Some(Selection::All)
    } else {
        opts.source.as_ref().map(|s| Selection::One(s.clone()))
    }
}

pub fn build_config(opts: &ProbeOpts) -> Result<ProbeConfig> {
    let family = if opts.ipv4 {
        Some(AddressFamily::V4)
    } else if opts.ipv6 {
        Some(AddressFamily::V6)
    } else {
        None
    };
    let sockopts = parse_sockopts(&opts.sockopts).map_err(ProbeError::Usage)?;
    let log_file = opts
        .log_file
        .clone()
        .map(|path| (path, opts.log_file_format.clone()));
    Ok(ProbeConfig::builder()
        .host(opts.host.clone())
        .port(opts.port)
        .inject_uuid(inject_uuid(opts))
        .timeout(opts.timeout)
        .family(family)
        .sockopts(sockopts)
        .log_format(opts.log_format)
        .verbose(opts.verbose)
        .quiet(opts.quiet)
        .log_file(log_file)
        .colored(!opts.no_color)
        .timestamps(opts.timestamps)
        .build())
}

pub fn exit_code_from_error_kind(kind: clap::error::ErrorKind) -> ExitCode {
    use clap::error::ErrorKind::*;
    match kind {
        DisplayHelp | DisplayVersion => ExitCode::Ok,
        Io | Format => ExitCode::FileIo,
        _ => ExitCode::SyntaxOrUsage,
    }
}
