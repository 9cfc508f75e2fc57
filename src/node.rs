//! Tree cells of the leftist heap and the merge that maintains them.
//!
//! A [`Node`] is never mutated once it's reachable through an [`Arc`]. Every structural
//! change goes through [`merge`], which rebuilds only the right spines it walks and
//! reuses everything else by bumping reference counts.
//!
//! Invariants, for every node:
//! * `rank(left) >= rank(right)`
//! * `cmp.precedes(value, child.value)` for both children
//! * `rank == rank(right) + 1`
use alloc::sync::Arc;

use crate::comparators::Comparator;

/// A subtree, `None` is the empty tree of rank 0
pub(crate) type Link<T> = Option<Arc<Node<T>>>;

#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    /// Length of the right spine, counted in nodes
    pub(crate) rank: usize,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

#[inline]
pub(crate) fn rank<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.rank)
}

impl<T> Node<T> {
    #[inline]
    pub(crate) fn leaf(value: T) -> Arc<Self> {
        Arc::new(Self {
            value,
            rank: 1,
            left: None,
            right: None,
        })
    }

    /// Builds a node over two heap-ordered subtrees, placing the one with the larger rank
    /// on the left. On equal ranks `a` stays on the left.
    #[inline]
    pub(crate) fn join(value: T, a: Link<T>, b: Link<T>) -> Arc<Self> {
        let (left, right) = if rank(&a) >= rank(&b) { (a, b) } else { (b, a) };
        Arc::new(Self {
            value,
            rank: rank(&right) + 1,
            left,
            right,
        })
    }
}

/// Merges two heap-ordered trees.
///
/// The root that [`precedes`](Comparator::precedes) the other (`a` on ties) keeps its left
/// subtree and has the other tree merged into its right one. Recursion only follows right
/// spines, so the depth is `O(log n)`.
///
/// Nodes owned solely by the caller are moved, shared ones are shallow-copied.
pub(crate) fn merge<T, C>(a: Link<T>, b: Link<T>, cmp: &C) -> Link<T>
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    match (a, b) {
        (None, other) | (other, None) => other,
        (Some(a), Some(b)) => {
            let (winner, loser) = if cmp.precedes(&a.value, &b.value) {
                (a, b)
            } else {
                (b, a)
            };
            let Node {
                value, left, right, ..
            } = Arc::unwrap_or_clone(winner);
            let right = merge(right, Some(loser), cmp);
            Some(Node::join(value, left, right))
        }
    }
}

/// Splits off the root value and merges its children into the remaining tree.
pub(crate) fn detach_top<T, C>(root: Arc<Node<T>>, cmp: &C) -> (T, Link<T>)
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    let Node {
        value, left, right, ..
    } = Arc::unwrap_or_clone(root);
    (value, merge(left, right, cmp))
}
