// crates/logging/src/json_format.rs

use serde_json::{Map, Value};
use time::OffsetDateTime;
use time::macros::format_description;
use tracing::{Event, Subscriber};
use tracing_serde::{AsSerde, fields::AsMap};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, format::Writer};
use tracing_subscriber::registry::LookupSpan;

/// Event fields describing a send, lifted out of `fields` so collectors can
/// index them directly.
pub const SEND_KEYS: [&str; 4] = ["source_type", "host", "port", "correlation_id"];

/// One JSON object per line.
///
/// ```text
/// {"timestamp":"..","level":"INFO","target":"..","message":"sent",
///  "source_type":"palo-alto","port":514,"fields":{"bytes":151}}
/// ```
///
/// `message` and the [`SEND_KEYS`] present on the event sit at the top
/// level; everything else stays under `fields`.
#[derive(Default)]
pub struct JsonFormatter;

fn event_object(event: &Event<'_>) -> Result<Map<String, Value>, serde_json::Error> {
    let mut obj = Map::new();
    let now = OffsetDateTime::now_utc()
        .format(&format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second]Z"
        ))
        .unwrap_or_default();
    obj.insert("timestamp".into(), Value::String(now));
    let meta = event.metadata();
    obj.insert("level".into(), serde_json::to_value(meta.level().as_serde())?);
    obj.insert("target".into(), Value::String(meta.target().to_string()));

    let mut fields = match serde_json::to_value(event.field_map())? {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    if let Some(message) = fields.remove("message") {
        obj.insert("message".into(), message);
    }
    for key in SEND_KEYS {
        if let Some(value) = fields.remove(key) {
            obj.insert(key.into(), value);
        }
    }
    if !fields.is_empty() {
        obj.insert("fields".into(), Value::Object(fields));
    }
    Ok(obj)
}

impl<S, N> FormatEvent<S, N> for JsonFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let obj = event_object(event).map_err(|_| std::fmt::Error)?;
        let line = serde_json::to_string(&Value::Object(obj)).map_err(|_| std::fmt::Error)?;
        writeln!(writer, "{line}")
    }
}
