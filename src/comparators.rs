//! Defines comparators for [`Heap`](crate::Heap)
//!
//! Users of this crate may implement [`Comparator`] trait to create a custom comparator
//! or use one of the provided ones. [`ByOrd`] is the default and turns the heap into a
//! min-heap, [`MaxFirst`] reverses any comparator.
//!
//! The heap only ever asks one question: "does `a` have priority higher than or equal to
//! `b`?", see [`Comparator::precedes`]. [`ByPredicate`] answers it directly with a
//! two-argument function.

use core::cmp::Ordering;

/// Trait used to compare elements of [`Heap`](crate::Heap)
///
/// [`Ordering::Less`] means that `a` should be extracted before `b`.
///
/// Implementations should produce a consistent total ordering, see [`Ord`]
/// documentation for details. Producing non-total or inconsistent ordering results in
/// elements being extracted in an unspecified order, but never loses or duplicates them.
pub trait Comparator<T> {
    /// Compares two elements and returns an [`Ordering`]
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns `true` if `a` has priority higher than or equal to `b`, i.e. `a` may sit
    /// above `b` in the heap.
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        self.compare(a, b).is_le()
    }
}

impl<T, C> Comparator<T> for &C
where
    C: Comparator<T> + ?Sized,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        C::compare(self, a, b)
    }

    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        C::precedes(self, a, b)
    }
}

/// Wrapper that reverses a comparator, turning a min-heap into a max-heap.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxFirst<C>(pub C);

impl<T, C> Comparator<T> for MaxFirst<C>
where
    C: Comparator<T>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Comparator that uses [`Ord`] to compare items, default for the [`Heap`](crate::Heap).
///
/// Smallest item is extracted first.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByOrd;

impl<T: Ord> Comparator<T> for ByOrd {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        Ord::cmp(a, b)
    }
}

/// Comparator that uses a function returning [`Ordering`] to compare items
#[derive(Debug, Clone, Copy)]
pub struct ByFunc<F>(pub F);

impl<T, F> Comparator<T> for ByFunc<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    // Leaving decision to inline this to the compiler because F can be long
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0(a, b)
    }
}

/// Comparator that uses a key to compare items, smallest key first
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T, F, K> Comparator<T> for ByKey<F>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0(a).cmp(&self.0(b))
    }
}

/// Comparator built from a priority function `f(a, b)` that returns `true` iff `a` has
/// priority higher than or equal to `b`.
///
/// `|a, b| a <= b` gives a min-heap, `|a, b| a >= b` gives a max-heap.
///
/// The function must take exactly two arguments, anything else is rejected by the
/// compiler:
///
/// ```compile_fail
/// use leftist_heap::Heap;
/// let heap = Heap::with_priority(|a: &i32| *a > 0);
/// ```
///
/// ```compile_fail
/// use leftist_heap::Heap;
/// let heap = Heap::with_priority(|a: &i32, b: &i32, c: &i32| a <= b && b <= c);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ByPredicate<F>(pub F);

impl<T, F> Comparator<T> for ByPredicate<F>
where
    F: Fn(&T, &T) -> bool,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        if self.0(a, b) {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }

    fn precedes(&self, a: &T, b: &T) -> bool {
        self.0(a, b)
    }
}
