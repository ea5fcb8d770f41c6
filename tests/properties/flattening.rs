//! Property tests for the tree flattener.

use proptest::prelude::*;

use taxonomy_links::domain::entities::{ItemList, TermRecord};
use taxonomy_links::{flatten, FlattenError};

use crate::common::{rec, TermPaths};

/// Depth sequences a pre-order traversal can produce: start at 0, go at most
/// one level deeper per step, ascend by any amount.
fn valid_depths() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(0usize..6, 0..40).prop_map(|raw| {
        let mut depths = Vec::with_capacity(raw.len());
        let mut prev: Option<usize> = None;
        for r in raw {
            let depth = match prev {
                None => 0,
                Some(p) => r.min(p + 1),
            };
            depths.push(depth);
            prev = Some(depth);
        }
        depths
    })
}

fn to_records(depths: &[usize]) -> Vec<TermRecord> {
    depths
        .iter()
        .enumerate()
        .map(|(i, d)| rec(i as i64 + 1, &format!("t{}", i + 1), *d))
        .collect()
}

/// Number of records in the subtree rooted at `index`, the record included
fn subtree_len(depths: &[usize], index: usize) -> usize {
    1 + depths[index + 1..]
        .iter()
        .take_while(|d| **d > depths[index])
        .count()
}

fn count_groups(list: &ItemList) -> usize {
    list.iter()
        .map(|n| match n.sublist() {
            Some(sub) => 1 + count_groups(sub),
            None => 0,
        })
        .sum()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Pre-order traversal reproduces the input (title, depth) sequence.
    #[test]
    fn property_preorder_reproduces_input(depths in valid_depths()) {
        let input = to_records(&depths);
        let list = flatten(&input, 0, TermPaths).unwrap();

        let walked: Vec<(usize, String)> =
            list.preorder().map(|(d, item)| (d, item.title.clone())).collect();
        let expected: Vec<(usize, String)> =
            input.iter().map(|r| (r.depth, r.name.clone())).collect();
        prop_assert_eq!(walked, expected);
    }

    /// PROPERTY: Exactly the records followed by a deeper record become groups.
    #[test]
    fn property_group_count_matches_descents(depths in valid_depths()) {
        let list = flatten(&to_records(&depths), 0, TermPaths).unwrap();
        let descents = depths.windows(2).filter(|w| w[1] > w[0]).count();
        prop_assert_eq!(count_groups(&list), descents);
    }

    /// PROPERTY: Top-level slots are exactly the depth-0 records.
    #[test]
    fn property_top_level_is_depth_zero(depths in valid_depths()) {
        let list = flatten(&to_records(&depths), 0, TermPaths).unwrap();
        prop_assert_eq!(list.len(), depths.iter().filter(|d| **d == 0).count());
    }

    /// PROPERTY: Each top-level group holds its whole subtree and nothing else.
    #[test]
    fn property_top_level_groups_hold_subtrees(depths in valid_depths()) {
        let list = flatten(&to_records(&depths), 0, TermPaths).unwrap();
        let roots: Vec<usize> = depths
            .iter()
            .enumerate()
            .filter(|(_, d)| **d == 0)
            .map(|(i, _)| i)
            .collect();

        for (node, index) in list.iter().zip(roots) {
            let size = subtree_len(&depths, index);
            let inner = node.sublist().map(ItemList::item_count).unwrap_or(0);
            prop_assert_eq!(inner + 1, size);
            prop_assert_eq!(node.is_group(), size > 1);
        }
    }

    /// PROPERTY: Arbitrary depth sequences never panic; they nest or fail cleanly.
    #[test]
    fn property_arbitrary_depths_never_panic(
        depths in proptest::collection::vec(0usize..8, 0..30),
        base in 0usize..3,
    ) {
        match flatten(&to_records(&depths), base, TermPaths) {
            Ok(list) => prop_assert_eq!(list.item_count(), depths.len()),
            Err(FlattenError::DepthAboveBase { depth, base_depth, .. }) => {
                prop_assert!(depth < base_depth)
            }
            Err(FlattenError::UnanchoredStart { depth, .. }) => prop_assert!(depth > 0),
            Err(FlattenError::DepthJump { from, to, .. }) => prop_assert!(to > from + 1),
        }
    }
}
