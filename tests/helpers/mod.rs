#![allow(dead_code)]

use core::fmt::Debug;

use leftist_heap::{Heap, comparators::Comparator};

/// A job in a scheduler queue: ordered by `priority` only, `name` tags it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub priority: u32,
    pub name: &'static str,
}

impl Job {
    pub const fn new(priority: u32, name: &'static str) -> Self {
        Self { priority, name }
    }
}

/// Drains `heap` with `try_pop_top`, checking that every extracted element is the top
/// of the heap it came from, that it precedes the next one, and that counts go down by
/// one each step.
pub fn drain_checked<T, C>(heap: &Heap<T, C>) -> Vec<T>
where
    T: Clone + Debug + PartialEq,
    C: Comparator<T>,
{
    let mut out = Vec::with_capacity(heap.len());
    let mut current = heap.clone();
    while let Ok((top, rest)) = current.try_pop_top() {
        assert_eq!(Some(&top), current.peek());
        assert_eq!(rest.len() + 1, current.len());
        if let Some(next) = rest.peek() {
            assert!(
                current.comparator().precedes(&top, next),
                "{top:?} was extracted before {next:?}"
            );
        }
        out.push(top);
        current = rest;
    }
    assert!(current.is_empty());
    assert_eq!(out.len(), heap.len());
    out
}
