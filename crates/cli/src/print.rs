// crates/cli/src/print.rs
use std::io::{self, Write};

use probe_core::net::RunSummary;
use probe_core::templates::{Catalog, DEFAULT_PORT};
use probe_core::{Attempt, ExitCode, ProbeConfig};

use crate::validate::exit_code_from_error_kind;

const RULE: &str = "============================================================";

pub const PROGRAM_NAME: &str = "syslog-probe";

pub fn handle_clap_error(e: clap::Error) -> ! {
    let code = exit_code_from_error_kind(e.kind());
    let _ = e.print();
    std::process::exit(u8::from(code) as i32);
}

/// Human readable account of a run, written to stdout.
pub struct Reporter<W> {
    out: W,
    inject_uuid: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, inject_uuid: bool) -> Self {
        Self { out, inject_uuid }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn banner(&mut self, cfg: &ProbeConfig) -> io::Result<()> {
        if self.inject_uuid {
            writeln!(self.out, "UUID injection enabled for traceability")?;
        } else {
            writeln!(
                self.out,
                "UUID injection disabled (set INJECT_UUID=true or use --uuid to enable)"
            )?;
        }
        writeln!(
            self.out,
            "Sending to syslog collector at {}:{}",
            cfg.host,
            cfg.destination_port(DEFAULT_PORT)
        )?;
        writeln!(self.out, "{RULE}")
    }

    pub fn attempt(&mut self, attempt: &Attempt<'_>) -> io::Result<()> {
        if let Some(id) = &attempt.correlation_id {
            writeln!(self.out, "Generated UUID for traceability: {id}")?;
        }
        let outcome = &attempt.outcome;
        let Some(template) = attempt.template.filter(|_| outcome.succeeded) else {
            let err = outcome.error.as_deref().unwrap_or("unknown error");
            if attempt.template.is_none() {
                return writeln!(self.out, "{err}");
            }
            return writeln!(self.out, "Failed to send {}: {err}", outcome.source_type);
        };
        writeln!(self.out, "Sent {}", describe(template))?;
        writeln!(self.out, "   Port: {}", attempt.port)?;
        if !template.expected_parser.is_empty() {
            writeln!(self.out, "   Expected Parser: {}", template.expected_parser)?;
        }
        if let Some(id) = &attempt.correlation_id {
            writeln!(self.out, "   Trace UUID: {id}")?;
        }
        if let Some(message) = &attempt.message {
            writeln!(self.out, "   Message: {message}")?;
        }
        writeln!(self.out)
    }

    pub fn summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        writeln!(self.out, "{RULE}")?;
        writeln!(self.out, "Results: {summary} messages sent successfully")?;
        if self.inject_uuid && summary.succeeded > 0 {
            writeln!(self.out)?;
            writeln!(self.out, "Troubleshooting Tips:")?;
            writeln!(
                self.out,
                "   - Use the UUID(s) above to search for events in the SIEM"
            )?;
            writeln!(
                self.out,
                "   - Query with parser-based searches for better accuracy"
            )?;
            writeln!(
                self.out,
                "   - Check the collector logs for the marker [TEST_UUID=...]"
            )?;
        }
        Ok(())
    }
}

fn describe(template: &probe_core::templates::SourceTemplate) -> &str {
    if template.description.is_empty() {
        &template.source_type
    } else {
        &template.description
    }
}

pub fn print_catalog<W: Write>(out: &mut W, catalog: &Catalog) -> io::Result<()> {
    let width = catalog.source_types().map(str::len).max().unwrap_or(0);
    for t in catalog.iter() {
        writeln!(
            out,
            "{:<width$}  {:>5}  {:<18}  {}",
            t.source_type, t.port, t.expected_parser, t.description
        )?;
    }
    Ok(())
}

pub fn exit_with(code: ExitCode) -> ! {
    std::process::exit(u8::from(code) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use probe_core::compose::CorrelationId;
    use probe_core::net::SendOutcome;
    use probe_core::templates::SourceTemplate;

    fn render<F>(inject: bool, f: F) -> String
    where
        F: FnOnce(&mut Reporter<Vec<u8>>) -> io::Result<()>,
    {
        let mut r = Reporter::new(Vec::new(), inject);
        f(&mut r).unwrap();
        String::from_utf8(r.into_inner()).unwrap()
    }

    #[test]
    fn banner_reports_mode_and_destination() {
        let cfg = ProbeConfig::default();
        let out = render(false, |r| r.banner(&cfg));
        assert_eq!(
            out,
            format!(
                "UUID injection disabled (set INJECT_UUID=true or use --uuid to enable)\n\
                 Sending to syslog collector at 127.0.0.1:514\n{RULE}\n"
            )
        );
    }

    #[test]
    fn successful_attempt_block() {
        let t = SourceTemplate::new("palo-alto", "<134>x")
            .description("Palo Alto Firewall")
            .expected_parser("paloAltoFirewall");
        let attempt = Attempt {
            outcome: SendOutcome::sent("palo-alto"),
            template: Some(&t),
            port: 514,
            correlation_id: None,
            message: Some("<134>x".into()),
        };
        let out = render(false, |r| r.attempt(&attempt));
        assert_eq!(
            out,
            "Sent Palo Alto Firewall\n   Port: 514\n   Expected Parser: paloAltoFirewall\n   Message: <134>x\n\n"
        );
    }

    #[test]
    fn failed_attempt_line() {
        let t = SourceTemplate::new("palo-alto", "<134>x");
        let attempt = Attempt {
            outcome: SendOutcome::failed("palo-alto", "Network is unreachable"),
            template: Some(&t),
            port: 514,
            correlation_id: None,
            message: Some("<134>x".into()),
        };
        let out = render(false, |r| r.attempt(&attempt));
        assert_eq!(out, "Failed to send palo-alto: Network is unreachable\n");
    }

    #[test]
    fn failed_attempt_still_shows_generated_id() {
        let t = SourceTemplate::new("palo-alto", "<134>x");
        let id = CorrelationId::new();
        let attempt = Attempt {
            outcome: SendOutcome::failed("palo-alto", "Network is unreachable"),
            template: Some(&t),
            port: 514,
            correlation_id: Some(id),
            message: Some(format!("<134>x [TEST_UUID={id}]")),
        };
        let out = render(true, |r| r.attempt(&attempt));
        assert_eq!(
            out,
            format!(
                "Generated UUID for traceability: {id}\n\
                 Failed to send palo-alto: Network is unreachable\n"
            )
        );
    }

    #[test]
    fn unknown_source_line() {
        let attempt = Attempt {
            outcome: SendOutcome::failed("juniper", "Unknown source type: juniper"),
            template: None,
            port: 514,
            correlation_id: None,
            message: None,
        };
        let out = render(false, |r| r.attempt(&attempt));
        assert_eq!(out, "Unknown source type: juniper\n");
    }

    #[test]
    fn tips_only_when_tagged_and_something_sent() {
        let sent = RunSummary {
            attempted: 3,
            succeeded: 2,
        };
        let plain = render(false, |r| r.summary(&sent));
        assert!(plain.ends_with("Results: 2/3 messages sent successfully\n"));
        let tagged = render(true, |r| r.summary(&sent));
        assert!(tagged.contains("Troubleshooting Tips:"));
        let none = RunSummary {
            attempted: 1,
            succeeded: 0,
        };
        assert!(!render(true, |r| r.summary(&none)).contains("Troubleshooting"));
    }

    #[test]
    fn catalog_listing_has_one_line_per_template() {
        let mut out = Vec::new();
        print_catalog(&mut out, &Catalog::builtin()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("cisco-router  "));
        assert!(lines[1].contains("paloAltoFirewall"));
    }
}
