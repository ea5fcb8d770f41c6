#![no_main]

use libfuzzer_sys::fuzz_target;
use taxonomy_links::Vocabulary;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Arbitrary parent links (cycles included) must terminate
        if let Ok(vocabulary) = toml::from_str::<Vocabulary>(content) {
            let _ = vocabulary.load_tree(None, None);
        }
    }
});
