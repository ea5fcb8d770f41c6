//! Flattening contracts (FLAT-001 through FLAT-006)
//!
//! A pre-order, depth-tagged record sequence becomes a nested item list
//! whose structure mirrors the depths exactly.

use taxonomy_links::domain::entities::{ItemList, LinkItem, ListNode};
use taxonomy_links::{flatten, FlattenError, TreeFlattener};

use crate::common::*;

fn titles(list: &ItemList) -> Vec<&str> {
    list.iter().map(|n| n.item().title.as_str()).collect()
}

fn sublist<'a>(list: &'a ItemList, index: usize) -> &'a ItemList {
    list.get(index)
        .and_then(ListNode::sublist)
        .unwrap_or_else(|| panic!("slot {} is not a group: {:?}", index, list.get(index)))
}

/// CONTRACT FLAT-001: Order preservation
///
/// Walking the output in pre-order yields the input terms in input order.
mod order_preservation {
    use super::*;

    #[test]
    fn contract_preorder_matches_input() {
        let input = records(&[
            ("Fruit", 0),
            ("Apple", 1),
            ("Cox", 2),
            ("Pear", 1),
            ("Veg", 0),
            ("Kale", 1),
        ]);
        let list = flatten(&input, 0, TermPaths).unwrap();

        let walked: Vec<(usize, String)> = list
            .preorder()
            .map(|(depth, item)| (depth, item.title.clone()))
            .collect();
        let expected: Vec<(usize, String)> =
            input.iter().map(|r| (r.depth, r.name.clone())).collect();
        assert_eq!(walked, expected);
    }
}

/// CONTRACT FLAT-002: Leaf and group fidelity
///
/// A record followed by a deeper record is a group holding exactly its
/// descendants; every other record is a leaf.
mod fidelity {
    use super::*;

    #[test]
    fn contract_records_without_children_are_leaves() {
        let list = flatten(&records(&[("A", 0), ("B", 0)]), 0, TermPaths).unwrap();
        assert!(list.iter().all(|n| !n.is_group()));
    }

    #[test]
    fn contract_groups_hold_exactly_their_descendants() {
        let list = flatten(
            &records(&[("A", 0), ("B", 1), ("C", 2), ("D", 1), ("E", 0)]),
            0,
            TermPaths,
        )
        .unwrap();

        assert_eq!(titles(&list), vec!["A", "E"]);
        assert_eq!(titles(sublist(&list, 0)), vec!["B", "D"]);
        assert_eq!(titles(sublist(sublist(&list, 0), 0)), vec!["C"]);
        assert!(!list.nodes()[1].is_group());
    }
}

/// CONTRACT FLAT-003: Empty in, empty out
mod emptiness {
    use super::*;

    #[test]
    fn contract_empty_input_yields_empty_list() {
        let list = flatten(&[], 0, TermPaths).unwrap();
        assert!(list.is_empty());
        assert_eq!(serde_json::to_string(&list).unwrap(), "[]");
    }
}

/// CONTRACT FLAT-004: Field separation
///
/// A group carries the same display fields the record would have as a leaf,
/// and the parent never reappears inside its own sublist.
mod field_separation {
    use super::*;

    #[test]
    fn contract_group_item_equals_leaf_item() {
        let grouped = flatten(&records(&[("A", 0), ("B", 1)]), 0, TermPaths).unwrap();
        let alone = flatten(&records(&[("A", 0)]), 0, TermPaths).unwrap();

        assert_eq!(grouped.nodes()[0].item(), alone.nodes()[0].item());
        assert_eq!(titles(sublist(&grouped, 0)), vec!["B"]);
    }

    #[test]
    fn contract_group_serializes_fields_beside_sublist() {
        let list = flatten(&records(&[("A", 0), ("B", 1)]), 0, TermPaths).unwrap();
        let value = serde_json::to_value(&list).unwrap();

        assert_eq!(
            value,
            serde_json::json!([{
                "type": "link",
                "title": "A",
                "url": "/term/1",
                "sublist": [{"type": "link", "title": "B", "url": "/term/2"}]
            }])
        );
    }
}

/// CONTRACT FLAT-005: Reference scenarios
mod scenarios {
    use super::*;

    #[test]
    fn contract_scenario_a_group_then_leaf() {
        let input = vec![
            rec(1, "Fruit", 0),
            rec(2, "Apple", 1),
            rec(3, "Banana", 1),
            rec(4, "Veg", 0),
        ];
        let list = flatten(&input, 0, TermPaths).unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.nodes()[0].item(), &LinkItem::link("Fruit", "/term/1"));
        assert_eq!(titles(sublist(&list, 0)), vec!["Apple", "Banana"]);
        assert_eq!(list.nodes()[1], ListNode::Leaf(LinkItem::link("Veg", "/term/4")));
    }

    #[test]
    fn contract_scenario_b_single_leaf() {
        let list = flatten(&[rec(1, "Root", 0)], 0, TermPaths).unwrap();
        assert_eq!(list.nodes(), &[ListNode::Leaf(LinkItem::link("Root", "/term/1"))]);
    }

    #[test]
    fn contract_scenario_c_chain() {
        let list = flatten(&records(&[("A", 0), ("B", 1), ("C", 2)]), 0, TermPaths).unwrap();

        assert_eq!(titles(&list), vec!["A"]);
        let b = sublist(&list, 0);
        assert_eq!(titles(b), vec!["B"]);
        let c = sublist(b, 0);
        assert_eq!(c.nodes(), &[ListNode::Leaf(LinkItem::link("C", "/term/3"))]);
    }

    #[test]
    fn contract_scenario_d_sibling_after_group() {
        let list = flatten(&records(&[("A", 0), ("B", 1), ("C", 0)]), 0, TermPaths).unwrap();

        assert_eq!(titles(&list), vec!["A", "C"]);
        assert_eq!(titles(sublist(&list, 0)), vec!["B"]);
        assert!(!list.nodes()[1].is_group());
    }

    #[test]
    fn contract_multi_level_ascent_closes_every_level() {
        let list = flatten(
            &records(&[("A", 0), ("B", 1), ("C", 2), ("D", 0)]),
            0,
            TermPaths,
        )
        .unwrap();

        assert_eq!(titles(&list), vec!["A", "D"]);
        assert_eq!(list.max_depth(), 3);
        assert_eq!(list.item_count(), 4);
    }
}

/// CONTRACT FLAT-006: Malformed depth sequences are rejected, never guessed at
mod malformed {
    use super::*;

    #[test]
    fn contract_depth_jump_is_an_error() {
        let err = flatten(&records(&[("A", 0), ("B", 2)]), 0, TermPaths).unwrap_err();
        assert_eq!(
            err,
            FlattenError::DepthJump {
                tid: 2i64.into(),
                from: 0,
                to: 2
            }
        );
    }

    #[test]
    fn contract_first_record_must_sit_at_base() {
        let err = flatten(&records(&[("A", 1)]), 0, TermPaths).unwrap_err();
        assert!(matches!(err, FlattenError::UnanchoredStart { depth: 1, .. }));
    }

    #[test]
    fn contract_records_above_base_are_rejected() {
        let err = flatten(&records(&[("A", 2), ("B", 1)]), 2, TermPaths).unwrap_err();
        assert!(matches!(
            err,
            FlattenError::DepthAboveBase {
                depth: 1,
                base_depth: 2,
                ..
            }
        ));
    }

    #[test]
    fn contract_relative_flattening_uses_first_depth() {
        let flattener = TreeFlattener::new(TermPaths);
        let list = flattener
            .flatten_relative(&records(&[("A", 3), ("B", 4), ("C", 3)]))
            .unwrap();
        assert_eq!(titles(&list), vec!["A", "C"]);
    }
}
