#![no_main]
use fuzz::helpers;
use libfuzzer_sys::fuzz_target;
use message::{compose_str, extract_correlation_id, marker};

fuzz_target!(|data: &[u8]| {
    let Some((id, raw)) = helpers::id_and_message(data) else {
        return;
    };
    if id.contains(['[', ']']) || raw.contains("[TEST_UUID=") {
        return;
    }
    assert_eq!(compose_str(raw, None), raw);
    let out = compose_str(raw, Some(id));
    assert_eq!(out.matches(&marker(id)).count(), 1);
    assert_eq!(extract_correlation_id(&out), Some(id));
});
