//! Implementation of [`Heap`]

use alloc::{sync::Arc, vec::Vec};
use core::fmt;

use crate::{
    builder::Builder,
    comparators::{ByKey, ByOrd, ByPredicate, Comparator, MaxFirst},
    error::EmptyHeapError,
    iter::Iter,
    node::{self, Link, Node},
};

/// Persistent priority queue.
///
/// A `Heap` is an immutable value: [`insert`](Heap::insert) and
/// [`pop_top`](Heap::pop_top) return a new heap and leave `self` untouched. Both share
/// every subtree they didn't need to rebuild, so they cost `O(log n)` time and memory.
///
/// Element that [`precedes`](Comparator::precedes) all others under `C` is on top. With
/// the default [`ByOrd`] that is the smallest element.
///
/// Cloning a heap is `O(1)`. Heaps are [`Send`] and [`Sync`] when `T` and `C` are, and
/// can be read from and derived from concurrently.
///
/// There is no indexed access, membership test or slicing: a heap only knows its top.
/// Use a sorted [`Vec`] if you need those.
///
/// # Examples
///
/// ```
/// use leftist_heap::Heap;
///
/// let heap = Heap::from([10, 9, 8]);
/// assert_eq!(heap.top(), &8);
///
/// let (top, rest) = heap.pop_top();
/// assert_eq!(top, 8);
/// assert_eq!(rest.into_sorted_vec(), vec![9, 10]);
///
/// // `heap` itself is unchanged
/// assert_eq!(heap.len(), 3);
/// ```
pub struct Heap<T, C = ByOrd> {
    pub(crate) root: Link<T>,
    pub(crate) cmp: Arc<C>,
    pub(crate) len: usize,
}

impl<T: Ord> Heap<T> {
    /// Creates an empty min-heap, ordered by [`Ord`]
    #[inline]
    pub fn new() -> Self {
        Self::with_comparator(ByOrd)
    }
}

impl<T: Ord> Heap<T, MaxFirst<ByOrd>> {
    /// Creates an empty max-heap, ordered by [`Ord`]
    #[inline]
    pub fn new_max() -> Self {
        Self::with_comparator(MaxFirst(ByOrd))
    }
}

impl<T, F> Heap<T, ByPredicate<F>>
where
    F: Fn(&T, &T) -> bool,
{
    /// Creates an empty heap ordered by a priority function.
    ///
    /// `priority(a, b)` must return `true` iff `a` has priority higher than or equal to
    /// `b`.
    ///
    /// ```
    /// use leftist_heap::Heap;
    ///
    /// let heap = Heap::with_priority(|a: &i32, b: &i32| a >= b)
    ///     .insert(8)
    ///     .insert(10)
    ///     .insert(9);
    /// assert_eq!(heap.top(), &10);
    /// ```
    #[inline]
    pub fn with_priority(priority: F) -> Self {
        Self::with_comparator(ByPredicate(priority))
    }
}

impl<T, F, K> Heap<T, ByKey<F>>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    /// Creates an empty heap that yields the element with the smallest key first
    #[inline]
    pub fn min_by_key(key: F) -> Self {
        Self::with_comparator(ByKey(key))
    }
}

impl<T, F, K> Heap<T, MaxFirst<ByKey<F>>>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    /// Creates an empty heap that yields the element with the largest key first
    #[inline]
    pub fn max_by_key(key: F) -> Self {
        Self::with_comparator(MaxFirst(ByKey(key)))
    }
}

impl<T, C> Heap<T, C>
where
    C: Comparator<T>,
{
    /// Creates an empty heap ordered by `cmp`
    #[inline]
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            root: None,
            cmp: Arc::new(cmp),
            len: 0,
        }
    }

    /// Creates a heap holding just `value`, ordered by `cmp`
    #[inline]
    pub fn singleton(value: T, cmp: C) -> Self {
        Self {
            root: Some(Node::leaf(value)),
            cmp: Arc::new(cmp),
            len: 1,
        }
    }

    /// Creates a heap of all the `items`, ordered by `cmp`.
    ///
    /// Items may come in any order. No items result in an empty heap.
    ///
    /// ```
    /// use leftist_heap::{Heap, comparators::MaxFirst, comparators::ByOrd};
    ///
    /// let heap = Heap::from_iter_with([10, 9, 8], MaxFirst(ByOrd));
    /// assert_eq!(heap.top(), &10);
    ///
    /// let empty = Heap::from_iter_with(Vec::<i32>::new(), MaxFirst(ByOrd));
    /// assert!(empty.is_empty());
    /// ```
    pub fn from_iter_with<I>(items: I, cmp: C) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Clone,
    {
        let mut builder = Builder::new(Self::with_comparator(cmp));
        builder.extend(items);
        builder.build()
    }

    /// Number of elements in the heap, `O(1)`
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the heap holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The comparator this heap was created with
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns a reference to the top element, or `None` if the heap is empty
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.root.as_ref().map(|node| &node.value)
    }

    /// Returns a reference to the top element
    ///
    /// # Errors
    /// [`EmptyHeapError`] if the heap is empty
    #[inline]
    pub fn try_top(&self) -> Result<&T, EmptyHeapError> {
        self.peek().ok_or(EmptyHeapError)
    }

    /// Returns a reference to the top element
    ///
    /// # Panics
    /// If the heap is empty
    ///
    /// ```should_panic
    /// use leftist_heap::Heap;
    ///
    /// Heap::<i32>::new().top();
    /// ```
    #[inline]
    #[track_caller]
    pub fn top(&self) -> &T {
        match self.try_top() {
            Ok(top) => top,
            Err(err) => panic!("{err}"),
        }
    }

    /// Removes the top element, returning it together with the heap of the remaining
    /// elements. `self` is left unchanged.
    ///
    /// # Errors
    /// [`EmptyHeapError`] if the heap is empty
    pub fn try_pop_top(&self) -> Result<(T, Self), EmptyHeapError>
    where
        T: Clone,
    {
        let mut rest = self.clone();
        match rest.pop_in_place() {
            Some(top) => Ok((top, rest)),
            None => {
                debug!("pop_top on an empty heap");
                Err(EmptyHeapError)
            }
        }
    }

    /// Removes the top element, returning it together with the heap of the remaining
    /// elements. `self` is left unchanged.
    ///
    /// # Panics
    /// If the heap is empty
    #[track_caller]
    pub fn pop_top(&self) -> (T, Self)
    where
        T: Clone,
    {
        match self.try_pop_top() {
            Ok(res) => res,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns a new heap with `value` added. `self` is left unchanged.
    #[must_use]
    pub fn insert(&self, value: T) -> Self
    where
        T: Clone,
    {
        let mut heap = self.clone();
        heap.push_in_place(value);
        heap
    }

    /// Returns a heap holding the elements of both `self` and `other`, ordered by `self`'s
    /// comparator.
    ///
    /// Runs in `O(log(n + m))` when both heaps are known to order elements the same way:
    /// they descend from the same comparator instance (through [`Clone`], [`insert`],
    /// [`pop_top`], ...) or the comparator is a stateless zero-sized type, like [`ByOrd`].
    /// Otherwise `other`'s elements are inserted one by one.
    ///
    /// [`insert`]: Heap::insert
    /// [`pop_top`]: Heap::pop_top
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        if self.shares_order_with(other) {
            trace!("melding heaps of {} and {} elements", self.len, other.len);
            Self {
                root: node::merge(self.root.clone(), other.root.clone(), &*self.cmp),
                cmp: Arc::clone(&self.cmp),
                len: self.len + other.len,
            }
        } else {
            trace!(
                "comparators differ, inserting {} elements one by one",
                other.len
            );
            let mut builder = Builder::new(self.clone());
            builder.extend(other);
            builder.build()
        }
    }

    /// Returns an iterator over the elements in priority order.
    ///
    /// The iterator works on its own copy of the heap handle, `self` is not affected.
    #[inline]
    pub fn iter(&self) -> Iter<T, C> {
        Iter::new(self.clone())
    }

    /// Drains the heap into a [`Vec`], in priority order
    pub fn into_sorted_vec(self) -> Vec<T>
    where
        T: Clone,
    {
        Iter::new(self).collect()
    }

    /// Converts the heap into a [`Builder`] that continues adding elements to it
    #[inline]
    pub fn into_builder(self) -> Builder<T, C> {
        Builder::new(self)
    }

    #[inline]
    fn shares_order_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.cmp, &other.cmp) || core::mem::size_of::<C>() == 0
    }

    // Both in-place operations keep `self.root` alive until the comparator is done with
    // the merge, so a panicking comparator leaves `self` as it was.

    pub(crate) fn push_in_place(&mut self, value: T)
    where
        T: Clone,
    {
        let root = node::merge(self.root.clone(), Some(Node::leaf(value)), &*self.cmp);
        self.root = root;
        self.len += 1;
    }

    pub(crate) fn pop_in_place(&mut self) -> Option<T>
    where
        T: Clone,
    {
        let root = Arc::clone(self.root.as_ref()?);
        let (top, rest) = node::detach_top(root, &*self.cmp);
        self.root = rest;
        self.len -= 1;
        Some(top)
    }
}

impl<T, C> Clone for Heap<T, C> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            cmp: Arc::clone(&self.cmp),
            len: self.len,
        }
    }
}

impl<T: Ord> Default for Heap<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Heap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("len", &self.len)
            .field("top", &self.root.as_ref().map(|node| &node.value))
            .finish_non_exhaustive()
    }
}

impl<T: Ord + Clone> From<Vec<T>> for Heap<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Ord + Clone, const N: usize> From<[T; N]> for Heap<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

// Left spines are unbounded (a min-heap built from a descending sequence is a single
// left spine), so the default recursive drop could overflow the stack.
impl<T, C> Drop for Heap<T, C> {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        stack.extend(self.root.take());
        while let Some(node) = stack.pop() {
            // Subtrees still shared with another heap stay alive
            if let Some(mut node) = Arc::into_inner(node) {
                stack.extend(node.left.take());
                stack.extend(node.right.take());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, vec, vec::Vec};

    use super::*;
    use crate::{comparators::ByFunc, tests::assert_invariants};

    #[test]
    fn empty() {
        let heap = Heap::<i32>::new();
        assert_eq!(heap.len(), 0);
        assert!(heap.is_empty());
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.try_top(), Err(EmptyHeapError));
        assert_eq!(heap.try_pop_top().err(), Some(EmptyHeapError));
        assert_invariants(&heap);
    }

    #[test]
    #[should_panic(expected = "heap is empty")]
    fn top_panics_on_empty() {
        Heap::<i32>::new().top();
    }

    #[test]
    #[should_panic(expected = "heap is empty")]
    fn pop_top_panics_on_empty() {
        let _ = Heap::<i32>::new().pop_top();
    }

    #[test]
    fn insert_into_empty() {
        let heap = Heap::new().insert(42);
        assert_eq!(heap.len(), 1);
        assert_eq!(heap.top(), &42);
        assert_invariants(&heap);
    }

    #[test]
    fn min_by_default() {
        let heap = Heap::from(vec![10, 9, 8]);
        assert_eq!(heap.top(), &8);
        let (top, rest) = heap.pop_top();
        assert_eq!(top, 8);
        assert_eq!(rest.len(), 2);
        assert_invariants(&rest);
        assert_eq!(rest.into_sorted_vec(), [9, 10]);
    }

    #[test]
    fn greater_or_equal_priority() {
        let heap = Heap::from_iter_with([10, 9, 8], ByPredicate(|a: &i32, b: &i32| a >= b));
        assert_eq!(heap.top(), &10);
        let (top, rest) = heap.pop_top();
        assert_eq!(top, 10);
        assert_invariants(&rest);
        assert_eq!(rest.into_sorted_vec(), [9, 8]);
    }

    #[test]
    fn empty_list_with_comparator() {
        let heap = Heap::from_iter_with(Vec::<i32>::new(), MaxFirst(ByOrd));
        assert!(heap.is_empty());
        assert_eq!(heap.try_top(), Err(EmptyHeapError));
    }

    #[test]
    fn singleton_with_odd_priority() {
        // Any two-argument function is accepted, even a meaningless one
        let heap = Heap::singleton(10, ByPredicate(|a: &i32, b: &i32| a == b));
        assert_eq!(heap.len(), 1);
        assert_eq!(heap.top(), &10);
    }

    #[test]
    fn with_priority() {
        let heap = Heap::with_priority(|a: &&str, b: &&str| a.len() <= b.len())
            .insert("ccc")
            .insert("a")
            .insert("bb");
        assert_eq!(heap.into_sorted_vec(), ["a", "bb", "ccc"]);
    }

    #[test]
    fn by_key() {
        let heap = Heap::min_by_key(|v: &i32| v.abs()).insert(-3).insert(1).insert(-2);
        assert_eq!(heap.top(), &1);
        let heap = Heap::max_by_key(|v: &i32| v.abs()).insert(-3).insert(1).insert(-2);
        assert_eq!(heap.top(), &-3);
        let heap = Heap::new_max().insert(-3).insert(1).insert(-2);
        assert_eq!(heap.top(), &1);
    }

    #[test]
    fn persistence() {
        let base = Heap::from([5, 3, 8, 1]);
        let bigger = base.insert(0);
        let (top, smaller) = base.pop_top();

        assert_eq!(top, 1);
        assert_eq!(base.len(), 4);
        assert_eq!(base.top(), &1);
        assert_eq!(bigger.top(), &0);
        assert_eq!(smaller.top(), &3);

        assert_eq!(base.clone().into_sorted_vec(), [1, 3, 5, 8]);
        assert_eq!(bigger.into_sorted_vec(), [0, 1, 3, 5, 8]);
        assert_eq!(smaller.into_sorted_vec(), [3, 5, 8]);
        assert_invariants(&base);
    }

    #[test]
    fn merge_same_comparator() {
        let a = Heap::from([9, 1, 7]);
        let b = Heap::from([4, 2, 8, 0]);
        let merged = a.merge(&b);
        assert_eq!(merged.len(), 7);
        assert_invariants(&merged);
        assert_eq!(merged.into_sorted_vec(), [0, 1, 2, 4, 7, 8, 9]);
        // inputs are intact
        assert_eq!(a.into_sorted_vec(), [1, 7, 9]);
        assert_eq!(b.into_sorted_vec(), [0, 2, 4, 8]);
    }

    #[test]
    fn merge_derived_heaps() {
        let threshold = 3;
        let base = Heap::with_priority(move |a: &i32, b: &i32| (a % threshold) <= (b % threshold));
        let a = base.insert(4).insert(2);
        let b = base.insert(3).insert(5);
        let merged = a.merge(&b);
        assert_invariants(&merged);
        assert_eq!(merged.top(), &3);
        assert_eq!(merged.len(), 4);
    }

    #[test]
    fn merge_different_comparators() {
        let flip = |flip: bool| {
            ByFunc(move |a: &i32, b: &i32| if flip { b.cmp(a) } else { a.cmp(b) })
        };
        let min = Heap::from_iter_with([5, 1, 3], flip(false));
        let max = Heap::from_iter_with([2, 6, 4], flip(true));
        let merged = min.merge(&max);
        assert_invariants(&merged);
        assert_eq!(merged.into_sorted_vec(), [1, 2, 3, 4, 5, 6]);
        let merged = max.merge(&min);
        assert_invariants(&merged);
        assert_eq!(merged.into_sorted_vec(), [6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn clone_shares_structure() {
        let heap = Heap::from([3, 1, 2]);
        let copy = heap.clone();
        assert!(Arc::ptr_eq(
            heap.root.as_ref().unwrap(),
            copy.root.as_ref().unwrap()
        ));
        assert!(Arc::ptr_eq(&heap.cmp, &copy.cmp));
    }

    #[test]
    fn debug_formatter() {
        let heap = Heap::from([31415, 27182]);
        let s = format!("{heap:?}");
        assert!(s.contains("27182"));
        assert!(s.contains("len: 2"));
    }

    #[test]
    fn comparator_panic_leaves_heap_intact() {
        use crate::tests::std::panic::{AssertUnwindSafe, catch_unwind};

        let heap = Heap::with_priority(|a: &i32, b: &i32| {
            assert!(*a != 13 && *b != 13, "unlucky");
            a <= b
        })
        .insert(1)
        .insert(2)
        .insert(3);
        let res = catch_unwind(AssertUnwindSafe(|| heap.insert(13)));
        assert!(res.is_err());
        assert_invariants(&heap);
        assert_eq!(heap.into_sorted_vec(), [1, 2, 3]);
    }
}
