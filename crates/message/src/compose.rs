// crates/message/src/compose.rs

use std::borrow::Cow;

use catalog::SourceTemplate;

/// Literal opening of the correlation marker searched for by the verifier.
pub const MARKER_PREFIX: &str = "[TEST_UUID=";

/// Number of leading header fields kept in front of the marker.
const HEADER_FIELDS: usize = 4;

pub fn marker(id: &str) -> String {
    format!("{MARKER_PREFIX}{id}]")
}

/// Build the datagram payload for `template`.
///
/// Without an id the raw message is returned untouched. With an id the
/// marker is placed after the fourth space separated field of a `<PRI>`
/// prefixed message. For RFC 5424 that is after the app name, for RFC 3164
/// after the time and before the hostname. Messages that are too short or
/// lack a `<PRI>` prefix get the marker appended instead.
pub fn compose(template: &SourceTemplate, correlation_id: Option<&str>) -> Vec<u8> {
    compose_str(&template.raw_message, correlation_id)
        .into_owned()
        .into_bytes()
}

pub fn compose_str<'a>(raw: &'a str, correlation_id: Option<&str>) -> Cow<'a, str> {
    let Some(id) = correlation_id else {
        return Cow::Borrowed(raw);
    };
    let marker = marker(id);
    if let Some((header, body)) = split_header(raw) {
        return Cow::Owned(format!("{header} {marker} {body}"));
    }
    tracing::trace!(len = raw.len(), "no splice point, appending marker");
    Cow::Owned(format!("{raw} {marker}"))
}

// Splits on single spaces so doubled spaces (RFC 3164 day padding) count as
// empty fields and are reproduced verbatim.
fn split_header(raw: &str) -> Option<(&str, &str)> {
    if !raw.starts_with('<') || !raw.contains('>') {
        return None;
    }
    let mut end = 0;
    for _ in 0..HEADER_FIELDS {
        end += raw[end..].find(' ')? + 1;
    }
    Some((&raw[..end - 1], &raw[end..]))
}

/// Return the id carried by the first correlation marker in `message`.
pub fn extract_correlation_id(message: &str) -> Option<&str> {
    let start = message.find(MARKER_PREFIX)? + MARKER_PREFIX.len();
    let len = message[start..].find(']')?;
    Some(&message[start..start + len])
}
