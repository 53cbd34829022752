// crates/logging/src/formatter.rs
use std::collections::BTreeMap;
use std::fmt;
use time::{OffsetDateTime, macros::format_description};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, format::Writer};
use tracing_subscriber::registry::LookupSpan;

/// Text event formatter.
///
/// Without a template an event renders as `level: message key=value ...`,
/// optionally prefixed by a timestamp. A template such as `%t %l %s %u %M`
/// selects individual pieces instead:
///
/// | token | expands to |
/// |-------|------------|
/// | `%t`  | local time |
/// | `%p`  | process id |
/// | `%l`  | level |
/// | `%s`  | `source_type` field |
/// | `%h`  | `host` field |
/// | `%P`  | `port` field |
/// | `%u`  | `correlation_id` field |
/// | `%M`  | message |
/// | `%%`  | literal `%` |
pub struct ProbeFormatter {
    tokens: Option<Vec<Token>>,
    timestamps: bool,
}

impl ProbeFormatter {
    pub fn new(format: Option<String>) -> Self {
        Self {
            tokens: format.map(|f| parse_tokens(&f)),
            timestamps: false,
        }
    }

    pub fn with_timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Token {
    Lit(String),
    Time,
    Pid,
    Level,
    Field(&'static str),
    Message,
}

fn parse_tokens(fmt: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = fmt.chars();
    let mut lit = String::new();
    while let Some(c) = chars.next() {
        if c != '%' {
            lit.push(c);
            continue;
        }
        let tok = match chars.next() {
            Some('%') => {
                lit.push('%');
                continue;
            }
            Some('t') => Token::Time,
            Some('p') => Token::Pid,
            Some('l') => Token::Level,
            Some('s') => Token::Field("source_type"),
            Some('h') => Token::Field("host"),
            Some('P') => Token::Field("port"),
            Some('u') => Token::Field("correlation_id"),
            Some('M') => Token::Message,
            Some(other) => {
                lit.push('%');
                lit.push(other);
                continue;
            }
            None => {
                lit.push('%');
                continue;
            }
        };
        if !lit.is_empty() {
            tokens.push(Token::Lit(std::mem::take(&mut lit)));
        }
        tokens.push(tok);
    }
    if !lit.is_empty() {
        tokens.push(Token::Lit(lit));
    }
    tokens
}

fn format_time() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let fmt = format_description!("[year]/[month]/[day] [hour]:[minute]:[second]");
    now.format(&fmt).unwrap_or_default()
}

fn level_label(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "error",
        Level::WARN => "warning",
        Level::INFO => "info",
        Level::DEBUG => "debug",
        Level::TRACE => "trace",
    }
}

#[derive(Default)]
struct MsgVisitor {
    message: String,
    fields: BTreeMap<&'static str, String>,
}

impl Visit for MsgVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.fields.insert(field.name(), value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message.push_str(&format!("{value:?}"));
        } else {
            self.fields.insert(field.name(), format!("{value:?}"));
        }
    }
}

impl<S, N> FormatEvent<S, N> for ProbeFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut visitor = MsgVisitor::default();
        event.record(&mut visitor);
        let level = level_label(event.metadata().level());

        if let Some(tokens) = &self.tokens {
            let mut out = String::new();
            for tok in tokens {
                match tok {
                    Token::Lit(s) => out.push_str(s),
                    Token::Time => out.push_str(&format_time()),
                    Token::Pid => out.push_str(&std::process::id().to_string()),
                    Token::Level => out.push_str(level),
                    Token::Field(name) => {
                        if let Some(v) = visitor.fields.get(name) {
                            out.push_str(v);
                        }
                    }
                    Token::Message => out.push_str(&visitor.message),
                }
            }
            return writeln!(writer, "{out}");
        }

        if self.timestamps {
            write!(writer, "{} ", format_time())?;
        }
        write!(writer, "{level}: {}", visitor.message)?;
        for (name, value) in &visitor.fields {
            write!(writer, " {name}={value}")?;
        }
        writeln!(writer)
    }
}
