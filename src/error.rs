use core::fmt;

/// Error returned by [`Heap::try_top`](crate::Heap::try_top) and
/// [`Heap::try_pop_top`](crate::Heap::try_pop_top) when the heap has no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyHeapError;

impl fmt::Display for EmptyHeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("heap is empty")
    }
}

impl core::error::Error for EmptyHeapError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn message() {
        assert_eq!(EmptyHeapError.to_string(), "heap is empty");
    }
}
