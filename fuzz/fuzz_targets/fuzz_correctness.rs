#![no_main]

use libfuzzer_sys::fuzz_target;
extern crate leftist_heap;
use leftist_heap::comparators::{ByOrd, MaxFirst};
fuzz_target!(|data: Vec<i8>| {
    leftist_heap::tests::assert_correct_drain(&data[..], ByOrd);
    leftist_heap::tests::assert_correct_drain(&data[..], MaxFirst(ByOrd));
});
