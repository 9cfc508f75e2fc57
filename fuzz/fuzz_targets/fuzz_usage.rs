#![no_main]

use libfuzzer_sys::fuzz_target;
extern crate leftist_heap;

// `Some(item)` inserts, `None` extracts the top
fuzz_target!(|ops: Vec<Option<i8>>| {
    leftist_heap::tests::assert_matches_model(&ops);
});
