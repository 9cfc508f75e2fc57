use crate::{
    Heap,
    comparators::{ByOrd, Comparator},
};

/// Builds a [`Heap`] by inserting elements one at a time.
///
/// Starts from any heap, usually an empty one, and accepts elements in any order, either
/// pushed individually as they arrive or through [`Extend`]. The heap is handed out by
/// [`build`](Builder::build) once the source is exhausted.
///
/// A builder owns its heap handle: copies of the starting heap made before
/// [`Builder::new`] are not affected by the pushes.
///
/// # Examples
///
/// ```
/// use leftist_heap::{Builder, Heap};
///
/// let mut builder = Builder::new(Heap::new_max());
/// builder.push(3).push(7);
/// builder.extend([5, 1]);
/// let heap = builder.build();
/// assert_eq!(heap.into_sorted_vec(), vec![7, 5, 3, 1]);
/// ```
#[derive(Debug)]
pub struct Builder<T, C = ByOrd> {
    heap: Heap<T, C>,
}

impl<T, C> Builder<T, C>
where
    C: Comparator<T>,
{
    /// Creates a builder that adds elements to `heap`
    #[inline]
    pub fn new(heap: Heap<T, C>) -> Self {
        Self { heap }
    }

    /// Adds `value` to the heap being built
    #[inline]
    pub fn push(&mut self, value: T) -> &mut Self
    where
        T: Clone,
    {
        self.heap.push_in_place(value);
        self
    }

    /// Number of elements in the heap being built
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if no elements were added and the starting heap was empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Finishes building, returning the heap
    pub fn build(self) -> Heap<T, C> {
        trace!("built heap of {} elements", self.heap.len());
        self.heap
    }
}

impl<T, C> Extend<T> for Builder<T, C>
where
    T: Clone,
    C: Comparator<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.heap.push_in_place(value);
        }
    }
}

impl<T: Ord + Clone> FromIterator<T> for Heap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut builder = Builder::new(Heap::new());
        builder.extend(iter);
        builder.build()
    }
}
