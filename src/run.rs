// src/run.rs

use probe_core::net::RunSummary;
use probe_core::templates::Catalog;
use probe_core::{ProbeConfig, ProbeError, Result, Selection};
use tracing::subscriber::with_default;

use logging::subscriber;

/// Sends `selection` from the built-in catalog using `cfg`.
///
/// Logging is scoped to this call, so library users keep their own global
/// subscriber.
pub fn send_with_config(selection: &Selection, cfg: &ProbeConfig) -> Result<RunSummary> {
    let sub = subscriber(cfg.subscriber_config()).map_err(ProbeError::Logging)?;
    with_default(sub, || {
        let catalog = Catalog::builtin();
        if let Selection::One(source_type) = selection {
            catalog.lookup(source_type)?;
        }
        let transport = cfg.transport();
        Ok(probe_core::run(&catalog, selection, cfg, &transport, |_| {}))
    })
}

pub fn send(selection: &Selection) -> Result<RunSummary> {
    send_with_config(selection, &ProbeConfig::default())
}
