#![no_main]
use catalog::Catalog;
use fuzz::helpers;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(catalog) = Catalog::from_json_reader(helpers::cursor(data)) {
        for t in catalog.iter() {
            assert!(catalog.lookup(&t.source_type).is_ok());
        }
    }
});
