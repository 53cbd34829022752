// crates/message/src/dialect.rs
use std::fmt;

/// Syslog header flavour of a raw message.
///
/// Informational only: composition does not depend on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialect {
    Rfc3164,
    Rfc5424,
    Unknown,
}

impl Dialect {
    pub fn detect(raw: &str) -> Self {
        let Some(rest) = raw.strip_prefix('<') else {
            return Dialect::Unknown;
        };
        let Some((pri, header)) = rest.split_once('>') else {
            return Dialect::Unknown;
        };
        if pri.is_empty() || pri.len() > 3 || !pri.bytes().all(|b| b.is_ascii_digit()) {
            return Dialect::Unknown;
        }
        if header.starts_with("1 ") {
            Dialect::Rfc5424
        } else {
            Dialect::Rfc3164
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Dialect::Rfc3164 => "rfc3164",
            Dialect::Rfc5424 => "rfc5424",
            Dialect::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
