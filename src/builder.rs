//! Tree construction from external descriptions: sorted sequences, ternary
//! conditional expressions, and the count of distinct BST shapes.

use crate::bst::Bst;
use crate::errors::TreeError;
use crate::node::{ExprNode, Link, Node};
use tracing::instrument;

/// Builds a height-balanced BST from an ascending slice by picking the
/// middle element of each range as the subtree root.
///
/// On even-length ranges the lower middle is chosen (`mid = (lo + hi) / 2`).
/// That tie-break is part of the contract: it decides which of several
/// balanced shapes is produced, and the resulting height is
/// `ceil(log2(n + 1))`.
pub fn balanced_from_sorted<K: Ord + Clone>(sorted: &[K]) -> Bst<K> {
    Bst::from_root(balanced_link(sorted))
}

fn balanced_link<K: Clone>(sorted: &[K]) -> Link<K> {
    if sorted.is_empty() {
        return None;
    }
    let mid = (sorted.len() - 1) / 2;
    Some(Box::new(Node::with_children(
        sorted[mid].clone(),
        balanced_link(&sorted[..mid]),
        balanced_link(&sorted[mid + 1..]),
    )))
}

/// Parses a ternary conditional expression such as `a?b?c:d:e` into a
/// binary tree: the condition becomes the node, the `?` branch its left
/// child and the `:` branch its right child, nesting recursively.
///
/// Unexpected characters, a missing `:` branch, and trailing input are all
/// rejected with [`TreeError::MalformedExpression`].
#[instrument(level = "debug")]
pub fn parse_ternary(expr: &str) -> Result<ExprNode<char>, TreeError> {
    let chars: Vec<char> = expr.chars().collect();
    let mut pos = 0;
    let root = parse_ternary_at(&chars, &mut pos)?;
    if pos != chars.len() {
        return Err(malformed(&chars, pos, "trailing input"));
    }
    Ok(root)
}

fn parse_ternary_at(chars: &[char], pos: &mut usize) -> Result<ExprNode<char>, TreeError> {
    let value = *chars
        .get(*pos)
        .ok_or_else(|| malformed(chars, *pos, "expected an operand"))?;
    if value == '?' || value == ':' {
        return Err(malformed(chars, *pos, "expected an operand"));
    }
    *pos += 1;

    let mut node = ExprNode::new(value);
    if chars.get(*pos) == Some(&'?') {
        *pos += 1;
        node.left = Some(Box::new(parse_ternary_at(chars, pos)?));
        if chars.get(*pos) != Some(&':') {
            return Err(malformed(chars, *pos, "expected ':'"));
        }
        *pos += 1;
        node.right = Some(Box::new(parse_ternary_at(chars, pos)?));
    }
    Ok(node)
}

fn malformed(chars: &[char], pos: usize, what: &str) -> TreeError {
    match chars.get(pos) {
        Some(c) => TreeError::MalformedExpression(format!("{what} at position {pos}, found '{c}'")),
        None => TreeError::MalformedExpression(format!("{what} at position {pos}, found end of input")),
    }
}

/// The number of structurally distinct BSTs over `n` unique keys: the n-th
/// Catalan number, `C(2n, n) / (n + 1)`.
///
/// The binomial coefficient is built with interleaved exact multiplication
/// and division; every prefix of that product is itself a binomial
/// coefficient, so each intermediate division is exact.
///
/// # Panics
///
/// For `n > 62`, where the intermediate product no longer fits in `u128`.
/// Callers needing more want a bignum type.
pub fn count_distinct_bsts(n: u32) -> u128 {
    // The largest intermediate is roughly C(2n, n) * n, which still fits
    // in u128 at n = 62 and overflows at 63.
    assert!(n <= 62, "C(2n, n) overflows u128 for n > 62");
    let n = n as u128;
    let mut binomial: u128 = 1;
    for i in 0..n {
        binomial = binomial * (2 * n - i) / (i + 1);
    }
    binomial / (n + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traverse;
    use itertools::Itertools;

    fn pre_order_keys(bst: &Bst<i32>) -> Vec<i32> {
        let mut keys = Vec::new();
        traverse::pre_order(bst.root(), &mut |k| keys.push(*k));
        keys
    }

    #[test]
    fn test_balanced_shape_is_pinned() {
        let bst = balanced_from_sorted(&[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(pre_order_keys(&bst), vec![4, 2, 1, 3, 6, 5, 7]);
        assert!(bst.is_valid());
    }

    #[test]
    fn test_balanced_lower_mid_tie_break() {
        // Even-length ranges pick the lower middle.
        let bst = balanced_from_sorted(&[1, 2, 3, 4]);
        assert_eq!(pre_order_keys(&bst), vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_balanced_height_bound() {
        for n in 0..64usize {
            let sorted = (0..n as i32).collect_vec();
            let bst = balanced_from_sorted(&sorted);
            // next_power_of_two().trailing_zeros() is ceil(log2(n + 1))
            let expected = (n + 1).next_power_of_two().trailing_zeros() as usize;
            assert_eq!(
                traverse::extent(bst.root()).height,
                expected,
                "height for n = {n}"
            );
        }
    }

    #[test]
    fn test_ternary_single_operand() {
        let tree = parse_ternary("a").unwrap();
        assert_eq!(tree.value, 'a');
        assert!(tree.is_leaf());
    }

    #[test]
    fn test_ternary_simple() {
        let tree = parse_ternary("a?b:c").unwrap();
        assert_eq!(tree.value, 'a');
        assert_eq!(tree.left.as_ref().map(|n| n.value), Some('b'));
        assert_eq!(tree.right.as_ref().map(|n| n.value), Some('c'));
    }

    #[test_log::test]
    fn test_ternary_nested_in_condition_branch() {
        let tree = parse_ternary("a?b?c:d:e").unwrap();
        assert_eq!(tree.value, 'a');
        assert_eq!(tree.right.as_ref().map(|n| n.value), Some('e'));

        let left = tree.left.as_ref().unwrap();
        assert_eq!(left.value, 'b');
        assert_eq!(left.left.as_ref().map(|n| n.value), Some('c'));
        assert_eq!(left.right.as_ref().map(|n| n.value), Some('d'));
    }

    #[test]
    fn test_ternary_rejects_malformed() {
        for expr in ["", "a?b", "a?:b", "?a:b", "a?b:c:d", "a?b:"] {
            assert!(
                matches!(parse_ternary(expr), Err(TreeError::MalformedExpression(_))),
                "expected rejection of {expr:?}"
            );
        }
    }

    #[test]
    fn test_catalan_numbers() {
        assert_eq!(count_distinct_bsts(0), 1);
        assert_eq!(count_distinct_bsts(1), 1);
        assert_eq!(count_distinct_bsts(2), 2);
        assert_eq!(count_distinct_bsts(3), 5);
        assert_eq!(count_distinct_bsts(10), 16_796);
        // A value where a float-based binomial goes wrong.
        assert_eq!(count_distinct_bsts(30), 3_814_986_502_092_304);
    }

    #[test]
    fn test_catalan_domain_boundary() {
        // The last in-domain value still computes (Catalan numbers grow
        // monotonically), the first out-of-domain one is rejected upfront.
        assert!(count_distinct_bsts(62) > count_distinct_bsts(61));
    }

    #[test]
    #[should_panic(expected = "overflows u128")]
    fn test_catalan_rejects_out_of_domain() {
        count_distinct_bsts(63);
    }

    #[test]
    fn test_catalan_matches_recurrence() {
        // C(n+1) = C(n) * 2 * (2n + 1) / (n + 2), exact in u128.
        let mut expected: u128 = 1;
        for n in 0..=40u32 {
            assert_eq!(count_distinct_bsts(n), expected, "n = {n}");
            expected = expected * 2 * (2 * n as u128 + 1) / (n as u128 + 2);
        }
    }
}
