#![no_main]

use libfuzzer_sys::fuzz_target;
use taxonomy_links::coerce_term_id;

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);
    if let Some(tid) = coerce_term_id(&raw) {
        assert_ne!(tid.get(), 0);
    }
});
