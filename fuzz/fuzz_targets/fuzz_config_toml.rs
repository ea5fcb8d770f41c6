#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing and block settings should never panic
        if let Ok(config) = toml::from_str::<taxonomy_links::Config>(content) {
            let _ = config.block_settings(std::path::Path::new("taxonomy-links.toml"));
            let _ = config.link_builder();
        }
    }
});
