// crates/core/src/run.rs

use catalog::{Catalog, DEFAULT_PORT, SourceTemplate};
use message::{CorrelationId, Dialect, compose};
use transport::{Datagram, RunSummary, SendOutcome, send};

use crate::config::ProbeConfig;

/// Which catalog entries a run sends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    One(String),
    All,
}

/// Everything known about one send attempt, handed to the reporter.
#[derive(Clone, Debug)]
pub struct Attempt<'a> {
    pub outcome: SendOutcome,
    /// `None` when the source type was not in the catalog.
    pub template: Option<&'a SourceTemplate>,
    pub port: u16,
    pub correlation_id: Option<CorrelationId>,
    pub message: Option<String>,
}

/// Look up, compose and send a single source type.
pub fn attempt<'a, T: Datagram + ?Sized>(
    catalog: &'a Catalog,
    source_type: &str,
    cfg: &ProbeConfig,
    transport: &T,
) -> Attempt<'a> {
    let template = match catalog.lookup(source_type) {
        Ok(t) => t,
        Err(err) => {
            tracing::error!(source_type, "{err}");
            return Attempt {
                outcome: SendOutcome::failed(source_type, err),
                template: None,
                port: cfg.destination_port(DEFAULT_PORT),
                correlation_id: None,
                message: None,
            };
        }
    };

    let correlation_id = cfg.inject_uuid.then(CorrelationId::new);
    let id = correlation_id.map(|c| c.to_string());
    if let Some(id) = &id {
        tracing::info!(source_type, correlation_id = %id, "generated correlation id");
    }
    let payload = compose(template, id.as_deref());
    let port = cfg.destination_port(template.port);
    tracing::debug!(
        source_type,
        dialect = %Dialect::detect(&template.raw_message),
        host = %cfg.host,
        port,
        bytes = payload.len(),
        "composed message"
    );

    let outcome = send(transport, source_type, &cfg.host, port, &payload);
    Attempt {
        outcome,
        template: Some(template),
        port,
        correlation_id,
        message: Some(String::from_utf8_lossy(&payload).into_owned()),
    }
}

/// Send every selected entry once, in catalog order.
///
/// A failed attempt never stops the remaining ones. `on_attempt` sees each
/// attempt as soon as it completes.
pub fn run<T, F>(
    catalog: &Catalog,
    selection: &Selection,
    cfg: &ProbeConfig,
    transport: &T,
    mut on_attempt: F,
) -> RunSummary
where
    T: Datagram + ?Sized,
    F: FnMut(&Attempt<'_>),
{
    let targets: Vec<&str> = match selection {
        Selection::One(source_type) => vec![source_type.as_str()],
        Selection::All => catalog.source_types().collect(),
    };
    let mut summary = RunSummary::default();
    for source_type in targets {
        let result = attempt(catalog, source_type, cfg, transport);
        summary.record(&result.outcome);
        on_attempt(&result);
    }
    tracing::info!(
        attempted = summary.attempted,
        succeeded = summary.succeeded,
        "run finished"
    );
    summary
}
