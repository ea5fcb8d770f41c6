#![no_main]

use libfuzzer_sys::fuzz_target;
use taxonomy_links::{flatten, RouteLinkBuilder, TermRecord};

fuzz_target!(|data: &[u8]| {
    // First byte picks the base depth, the rest are record depths
    let Some((base, depths)) = data.split_first() else {
        return;
    };
    let records: Vec<TermRecord> = depths
        .iter()
        .enumerate()
        .map(|(i, d)| TermRecord::new(i as i64 + 1, format!("t{}", i), usize::from(d % 8)))
        .collect();

    if let Ok(list) = flatten(&records, usize::from(base % 4), RouteLinkBuilder::default()) {
        assert_eq!(list.item_count(), records.len());
    }
});
