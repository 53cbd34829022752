// crates/cli/src/lib.rs

//! Command line front end for `syslog-probe`.

use std::ffi::OsString;
use std::io::Write;

use clap::{CommandFactory, Parser};
use probe_core::net::{Datagram, RunSummary};
use probe_core::templates::Catalog;
use probe_core::{ProbeConfig, ProbeError, Result};

pub mod options;
pub mod print;
mod utils;
pub mod validate;

pub use options::ProbeOpts;
pub use print::{PROGRAM_NAME, Reporter, exit_with, handle_clap_error, print_catalog};
pub use validate::{INJECT_UUID_ENV, build_config, exit_code_from_error_kind, inject_uuid};

pub fn cli_command() -> clap::Command {
    ProbeOpts::command()
}

pub fn render_help(cmd: &clap::Command) -> String {
    cmd.clone().render_help().to_string()
}

pub fn parse_args<I, T>(args: I) -> std::result::Result<ProbeOpts, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    ProbeOpts::try_parse_from(args)
}

/// Template catalog named by `--catalog`, or the built-in one.
pub fn load_catalog(opts: &ProbeOpts) -> Result<Catalog> {
    match &opts.catalog {
        Some(path) => Ok(Catalog::load(path)?),
        None => Ok(Catalog::builtin()),
    }
}

/// Parse-free entry point: sets up logging, then sends.
///
/// Returns `Ok(None)` when nothing was sent because `--list` was given.
pub fn run<W: Write>(opts: &ProbeOpts, out: &mut W) -> Result<Option<RunSummary>> {
    let cfg = build_config(opts)?;
    logging::init(cfg.subscriber_config()).map_err(ProbeError::Logging)?;
    let catalog = load_catalog(opts)?;
    let transport = cfg.transport();
    execute(opts, &cfg, &catalog, &transport, out)
}

pub fn execute<T, W>(
    opts: &ProbeOpts,
    cfg: &ProbeConfig,
    catalog: &Catalog,
    transport: &T,
    out: &mut W,
) -> Result<Option<RunSummary>>
where
    T: Datagram + ?Sized,
    W: Write,
{
    if opts.list {
        print_catalog(out, catalog)?;
        return Ok(None);
    }
    let Some(selection) = validate::selection(opts) else {
        write!(out, "{}", render_help(&cli_command()))?;
        return Err(ProbeError::NoSelection);
    };
    tracing::debug!(?selection, templates = catalog.len(), "starting run");

    let mut reporter = Reporter::new(out, cfg.inject_uuid);
    reporter.banner(cfg)?;
    let mut write_err = None;
    let summary = probe_core::run(catalog, &selection, cfg, transport, |attempt| {
        if write_err.is_none() {
            if let Err(e) = reporter.attempt(attempt) {
                write_err = Some(e);
            }
        }
    });
    if let Some(e) = write_err {
        return Err(e.into());
    }
    reporter.summary(&summary)?;
    Ok(Some(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io;

    #[derive(Default)]
    struct Capture(RefCell<Vec<(u16, Vec<u8>)>>);

    impl Datagram for Capture {
        fn send_to(&self, _host: &str, port: u16, payload: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().push((port, payload.to_vec()));
            Ok(payload.len())
        }
    }

    fn exec(args: &[&str]) -> (Result<Option<RunSummary>>, String, Capture) {
        let argv = std::iter::once(PROGRAM_NAME).chain(args.iter().copied());
        let opts = parse_args(argv).unwrap();
        let cfg = ProbeConfig::builder()
            .port(opts.port)
            .inject_uuid(opts.uuid)
            .build();
        let transport = Capture::default();
        let mut out = Vec::new();
        let res = execute(&opts, &cfg, &Catalog::builtin(), &transport, &mut out);
        (res, String::from_utf8(out).unwrap(), transport)
    }

    #[test]
    fn all_sends_every_template_in_order() {
        let (res, out, sent) = exec(&["--all"]);
        let summary = res.unwrap().unwrap();
        assert_eq!((summary.attempted, summary.succeeded), (3, 3));
        assert_eq!(sent.0.borrow().len(), 3);
        let sent_at = |name: &str| out.find(name).unwrap();
        assert!(sent_at("Sent Cisco Router") < sent_at("Sent Palo Alto"));
        assert!(out.contains("Results: 3/3 messages sent successfully"));
        assert!(!out.contains("Trace UUID"));
    }

    #[test]
    fn uuid_flag_tags_payload_and_report() {
        let (res, out, sent) = exec(&["--source", "palo-alto", "--uuid"]);
        assert!(res.unwrap().unwrap().all_succeeded());
        let payload = String::from_utf8(sent.0.borrow()[0].1.clone()).unwrap();
        let id = probe_core::compose::extract_correlation_id(&payload).unwrap();
        assert!(out.contains(&format!("Trace UUID: {id}")));
        assert!(out.contains("Troubleshooting Tips:"));
    }

    #[test]
    fn unknown_source_counts_as_failed_attempt() {
        let (res, out, sent) = exec(&["--source", "juniper"]);
        let summary = res.unwrap().unwrap();
        assert_eq!((summary.attempted, summary.succeeded), (1, 0));
        assert!(sent.0.borrow().is_empty());
        assert!(out.contains("Unknown source type: juniper"));
        assert!(out.contains("Results: 0/1"));
    }

    #[test]
    fn port_override_applies_to_every_send() {
        let (_, _, sent) = exec(&["--all", "--port", "5514"]);
        assert!(sent.0.borrow().iter().all(|(port, _)| *port == 5514));
    }

    #[test]
    fn list_prints_catalog_without_sending() {
        let (res, out, sent) = exec(&["--list"]);
        assert!(res.unwrap().is_none());
        assert!(sent.0.borrow().is_empty());
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn missing_selection_prints_help_and_fails() {
        let (res, out, sent) = exec(&[]);
        assert!(matches!(res, Err(ProbeError::NoSelection)));
        assert!(out.contains("--source"));
        assert!(sent.0.borrow().is_empty());
    }

    #[test]
    fn catalog_flag_loads_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let json = r#"[{"source_type":"fortigate","raw_message":"<189>x"}]"#;
        std::fs::write(&path, json).unwrap();
        let path = path.to_str().unwrap();
        let opts = parse_args([PROGRAM_NAME, "--all", "--catalog", path]).unwrap();
        let catalog = load_catalog(&opts).unwrap();
        assert_eq!(catalog.source_types().collect::<Vec<_>>(), ["fortigate"]);
        let builtin = load_catalog(&parse_args([PROGRAM_NAME, "--all"]).unwrap()).unwrap();
        assert_eq!(builtin.len(), 3);
    }
}
