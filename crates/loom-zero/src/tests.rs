// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{ZeroizeOnDropSentinel, ZeroizingGuard, constant_time_eq, fast_zeroize, is_zeroized};

#[test]
fn fast_zeroize_clears_all_bytes() {
    let mut buf = [0xAAu8; 64];
    fast_zeroize(&mut buf);
    assert!(is_zeroized(&buf));
}

#[test]
fn fast_zeroize_empty_slice_is_a_no_op() {
    let mut buf: [u8; 0] = [];
    fast_zeroize(&mut buf);
}

#[test]
fn constant_time_eq_matches_equality() {
    assert!(constant_time_eq(b"hunter2", b"hunter2"));
    assert!(!constant_time_eq(b"hunter2", b"hunter3"));
    assert!(!constant_time_eq(b"short", b"shorter"));
    assert!(constant_time_eq(b"", b""));
}

#[test]
fn sentinel_marked_does_not_panic_on_drop() {
    let mut sentinel = ZeroizeOnDropSentinel::default();
    sentinel.mark();
    drop(sentinel);
}

#[test]
#[should_panic(expected = "without scrubbing")]
fn sentinel_unmarked_panics_on_drop() {
    let sentinel = ZeroizeOnDropSentinel::default();
    drop(sentinel);
}

#[test]
fn zeroizing_guard_exposes_its_bytes_then_scrubs_on_drop() {
    let guard = ZeroizingGuard::new(vec![1, 2, 3, 4]);
    assert_eq!(&*guard, &[1, 2, 3, 4]);
    drop(guard);
}

#[test]
fn zeroizing_guard_from_mut_vec_scrubs_the_source() {
    let mut source = vec![9u8; 32];
    let guard = ZeroizingGuard::from_mut_vec(&mut source);
    assert!(source.is_empty());
    assert_eq!(guard.len(), 32);
}

proptest::proptest! {
    #[test]
    fn constant_time_eq_agrees_with_slice_equality(a: Vec<u8>, b: Vec<u8>) {
        proptest::prop_assert_eq!(constant_time_eq(&a, &b), a == b);
    }
}
