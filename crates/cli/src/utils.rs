// crates/cli/src/utils.rs
use std::time::Duration;

pub(crate) fn parse_duration(s: &str) -> std::result::Result<Duration, std::num::ParseIntError> {
    Ok(Duration::from_secs(s.parse()?))
}

pub(crate) fn parse_nonzero_duration(s: &str) -> std::result::Result<Duration, String> {
    let d = parse_duration(s).map_err(|e| e.to_string())?;
    if d.as_secs() == 0 {
        Err("value must be greater than 0".into())
    } else {
        Ok(d)
    }
}

/// `true` only for a case-insensitive `"true"`.
pub(crate) fn env_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.eq_ignore_ascii_case("true"))
}
