//! End-to-end checks across the crate surface: building trees, querying
//! and traversing them, and running the expression pipeline.

use itertools::Itertools;
use ordtree::traverse::{apply_and_property, apply_left_subtree_sum};
use ordtree::{
    balanced_from_sorted, count_distinct_bsts, eval_postfix, evaluate, extent, infix_to_postfix,
    parse_ternary, parse_tree, postorder_from_traversals, single_child_chain,
    single_child_chain_bounds, Bst, Node, TreeError,
};

#[test_log::test]
fn test_bst_lifecycle() {
    let mut bst: Bst<i32> = [8, 4, 12, 2, 6, 10, 14].into_iter().collect();
    assert!(bst.is_valid());

    assert_eq!(bst.min(), Ok(&2));
    assert_eq!(bst.ceil(&5), Ok(&6));
    assert_eq!(bst.ceil(&15), Err(TreeError::NotFound));
    assert_eq!(bst.range(&5, &11), vec![&6, &8, &10]);

    bst.insert(11);
    assert!(bst.is_valid());
    assert_eq!(
        bst.iter_in_order().copied().collect_vec(),
        vec![2, 4, 6, 8, 10, 11, 12, 14]
    );
}

#[test]
fn test_balanced_construction_feeds_traversal() {
    let bst = balanced_from_sorted(&[1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(
        bst.iter_pre_order().copied().collect_vec(),
        vec![4, 2, 1, 3, 6, 5, 7]
    );

    let preorder = bst.iter_pre_order().copied().collect_vec();
    assert!(!single_child_chain(&preorder));
    assert_eq!(
        single_child_chain(&preorder),
        single_child_chain_bounds(&preorder)
    );

    // A degenerate insert order produces a chain.
    let chain: Bst<i32> = [20, 10, 11, 13, 12].into_iter().collect();
    let preorder = chain.iter_pre_order().copied().collect_vec();
    assert_eq!(preorder, vec![20, 10, 11, 13, 12]);
    assert!(single_child_chain(&preorder));
    assert!(single_child_chain_bounds(&preorder));
}

#[test]
fn test_traversal_round_trip() {
    let bst: Bst<i32> = [4, 2, 6, 1, 3, 5, 7].into_iter().collect();
    let inorder = bst.iter_in_order().copied().collect_vec();
    let preorder = bst.iter_pre_order().copied().collect_vec();

    let mut postorder = Vec::new();
    ordtree::traverse::post_order(bst.root(), &mut |k| postorder.push(*k));

    assert_eq!(
        postorder_from_traversals(&inorder, &preorder),
        Ok(postorder)
    );
}

#[test]
fn test_transforms_compose() {
    // 1 -> (2 -> (4, 5), 3)
    let mut tree = Node::with_children(
        1,
        Some(Box::new(Node::with_children(
            2,
            Some(Node::boxed(4)),
            Some(Node::boxed(5)),
        ))),
        Some(Node::boxed(3)),
    );
    assert_eq!(extent(Some(&tree)).diameter, 4);

    assert_eq!(apply_left_subtree_sum(Some(&mut tree)), 15);
    assert_eq!(tree.key, 12);

    // Post-order: the inner node becomes 4 & 5 = 4 first, then the root
    // becomes 4 & 3 = 0.
    apply_and_property(Some(&mut tree));
    assert_eq!(tree.left.as_ref().unwrap().key, 4);
    assert_eq!(tree.key, 0);
}

#[test]
fn test_catalan_counts_match_enumeration() {
    assert_eq!(count_distinct_bsts(3), 5);

    // All 3! insert orders over {1,2,3} produce exactly 5 distinct shapes.
    let shapes: std::collections::BTreeSet<Vec<i32>> = [1, 2, 3]
        .into_iter()
        .permutations(3)
        .map(|order| {
            let bst: Bst<i32> = order.into_iter().collect();
            bst.iter_pre_order().copied().collect_vec()
        })
        .collect();
    assert_eq!(shapes.len(), 5);
}

#[test]
fn test_ternary_parse() {
    let tree = parse_ternary("a?b?c:d:e").unwrap();
    assert_eq!(tree.value, 'a');
    assert_eq!(tree.left.as_ref().unwrap().left.as_ref().unwrap().value, 'c');
    assert!(parse_ternary("a?b").is_err());
}

#[test_log::test]
fn test_expression_pipeline() {
    assert_eq!(infix_to_postfix("A * B + C * D").unwrap(), "A B * C D * +");
    assert_eq!(eval_postfix("7 8 + 3 2 + /").unwrap(), 3.0);

    let postfix = infix_to_postfix("( 7 + 8 ) / ( 3 + 2 )").unwrap();
    assert_eq!(postfix, "7 8 + 3 2 + /");
    assert_eq!(eval_postfix(&postfix).unwrap(), 3.0);

    let tree = parse_tree("( ( 7 + 8 ) / ( 3 + 2 ) )").unwrap();
    assert_eq!(evaluate(&tree).unwrap(), 3.0);
}
