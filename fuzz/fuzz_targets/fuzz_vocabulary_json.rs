#![no_main]

use libfuzzer_sys::fuzz_target;
use taxonomy_links::{flatten, RouteLinkBuilder, Vocabulary};

fuzz_target!(|data: &[u8]| {
    if let Ok(vocabulary) = serde_json::from_slice::<Vocabulary>(data) {
        // Whatever the source emits, the flattener must accept it
        let records = vocabulary.load_tree(None, Some(16));
        assert!(flatten(&records, 0, RouteLinkBuilder::default()).is_ok());
    }
});
