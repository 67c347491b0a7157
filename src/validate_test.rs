use pretty_assertions::assert_eq;

use crate::error::Violation;
use crate::llrb::Llrb;
use crate::node::{Link, Node};

// hand build a tree, bypassing put() and its fixups.
fn node(key: i64, black: bool, left: Link<i64, i64>, right: Link<i64, i64>) -> Link<i64, i64> {
    let mut node = Node::new(key, key * 10);
    node.black = black;
    node.left = left;
    node.right = right;
    node.update_size();
    Some(node)
}

fn leaf(key: i64, black: bool) -> Link<i64, i64> {
    node(key, black, None, None)
}

fn with_root(root: Link<i64, i64>) -> Llrb<i64, i64> {
    let mut llrb = Llrb::new("test-validate");
    llrb.root = root;
    llrb
}

#[test]
fn test_valid_tree() {
    // 2-3 tree: [2 4] with children 1, 3, 5.
    let root = node(
        4,
        true,
        node(2, false, leaf(1, true), leaf(3, true)),
        leaf(5, true),
    );
    let llrb = with_root(root);
    let stats = llrb.validate().unwrap();
    assert_eq!(stats.entries(), 5);
    assert_eq!(stats.blacks(), Some(2));
    assert_eq!(llrb.validate_blacks(), Ok(2));
    assert_eq!(llrb.keys().collect::<Vec<i64>>(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_sort_error() {
    let llrb = with_root(node(2, true, leaf(3, true), None));
    assert_eq!(llrb.validate_bst(), Err(Violation::SortError(3, 2)));

    // 6 is right of 2, but still left of its grand parent 5.
    let left = node(2, true, None, leaf(6, true));
    let llrb = with_root(node(5, true, left, leaf(7, true)));
    assert_eq!(llrb.validate_bst(), Err(Violation::SortError(6, 5)));
    assert_eq!(llrb.validate().err(), Some(Violation::SortError(6, 5)));
}

#[test]
fn test_size_mismatch() {
    let mut root = node(2, true, leaf(1, true), leaf(3, true));
    if let Some(root) = root.as_mut() {
        root.size = 5;
    }
    let llrb = with_root(root);
    assert!(llrb.validate_bst().is_ok());
    let err = Violation::SizeMismatch {
        key: 2,
        expect: 3,
        found: 5,
    };
    assert_eq!(llrb.validate_sizes(), Err(err.clone()));
    assert_eq!(llrb.validate().err(), Some(err));
}

#[test]
fn test_rank_mismatch() {
    let mut root = node(2, true, leaf(1, true), leaf(3, true));
    if let Some(left) = root.as_mut().and_then(|root| root.left.as_mut()) {
        left.size = 2;
    }
    let llrb = with_root(root);
    match llrb.validate_ranks() {
        Err(Violation::RankMismatch(_)) => (),
        res => panic!("unexpected {:?}", res),
    }
}

#[test]
fn test_right_red() {
    let llrb = with_root(node(2, true, None, leaf(3, false)));
    assert_eq!(llrb.validate_23(), Err(Violation::RightRed(2)));
    assert_eq!(llrb.validate().err(), Some(Violation::RightRed(2)));
}

#[test]
fn test_consecutive_reds() {
    let left = node(2, false, leaf(1, false), None);
    let llrb = with_root(node(3, true, left, leaf(4, true)));
    assert_eq!(llrb.validate_23(), Err(Violation::ConsecutiveReds(1)));
}

#[test]
fn test_unbalanced_blacks() {
    let llrb = with_root(node(2, true, leaf(1, true), None));
    assert!(llrb.validate_23().is_ok());
    let msg = "expected 2 found 1".to_string();
    assert_eq!(llrb.validate_blacks(), Err(Violation::UnbalancedBlacks(msg)));
    match llrb.validate() {
        Err(Violation::UnbalancedBlacks(_)) => (),
        res => panic!("unexpected {:?}", res.map(|stats| stats.entries())),
    }
}

#[test]
fn test_violation_display() {
    let err: Violation<i64> = Violation::SortError(3, 2);
    assert_eq!(err.to_string(), "sort error: 3 under 2");
    let err: Violation<&str> = Violation::RightRed("x");
    assert_eq!(err.to_string(), "red right link under \"x\"");
}
