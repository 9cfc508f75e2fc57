//! Priority-ordered iteration over a [`Heap`]

use core::iter::FusedIterator;

use crate::{Heap, comparators::Comparator};

/// Iterator yielding the elements of a [`Heap`] in priority order.
///
/// Each call to [`next`](Iterator::next) pops the top of a private copy of the heap, so
/// elements are produced on demand and stopping early costs nothing. The heap the
/// iterator was created from is never modified: iterating it again yields the same
/// sequence.
///
/// Created by [`Heap::iter`] or by iterating a heap (or a reference to it) in a `for`
/// loop.
///
/// # Examples
///
/// ```
/// use leftist_heap::Heap;
///
/// let heap = Heap::from([4, 1, 3, 2]);
/// let mut iter = heap.iter();
/// assert_eq!(iter.len(), 4);
/// assert_eq!(iter.next(), Some(1));
/// assert_eq!(iter.peek(), Some(&2));
/// assert_eq!(iter.collect::<Vec<_>>(), vec![2, 3, 4]);
///
/// assert!(heap.iter().eq([1, 2, 3, 4]));
/// ```
#[derive(Debug)]
pub struct Iter<T, C> {
    heap: Heap<T, C>,
}

impl<T, C> Iter<T, C> {
    #[inline]
    pub(crate) fn new(heap: Heap<T, C>) -> Self {
        Self { heap }
    }

    /// Returns a reference to the element that the next call to
    /// [`next`](Iterator::next) will return, without advancing the iterator.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.heap.root.as_ref().map(|node| &node.value)
    }

    /// Returns the elements not yet yielded as a heap
    #[inline]
    pub fn into_heap(self) -> Heap<T, C> {
        self.heap
    }
}

impl<T, C> Clone for Iter<T, C> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            heap: self.heap.clone(),
        }
    }
}

impl<T, C> Iterator for Iter<T, C>
where
    T: Clone,
    C: Comparator<T>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.heap.pop_in_place()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len, Some(self.heap.len))
    }

    #[inline]
    fn count(self) -> usize {
        self.heap.len
    }
}

impl<T, C> ExactSizeIterator for Iter<T, C>
where
    T: Clone,
    C: Comparator<T>,
{
}

// Once the heap is empty it stays empty
impl<T, C> FusedIterator for Iter<T, C>
where
    T: Clone,
    C: Comparator<T>,
{
}

impl<T, C> IntoIterator for Heap<T, C>
where
    T: Clone,
    C: Comparator<T>,
{
    type Item = T;
    type IntoIter = Iter<T, C>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}

impl<T, C> IntoIterator for &Heap<T, C>
where
    T: Clone,
    C: Comparator<T>,
{
    type Item = T;
    type IntoIter = Iter<T, C>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
