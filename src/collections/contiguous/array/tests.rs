#![cfg(test)]

use std::mem::MaybeUninit;
use std::ptr::NonNull;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_zst_support() {
    let mut arr = Array::<ZeroSizedType>::new_uninit(5);
    assert_eq!(arr.size(), 5);

    let old_ptr = arr.ptr;

    arr.realloc(30);
    assert_eq!(arr.size(), 30);
    assert_eq!(
        arr.ptr, old_ptr,
        "Pointer shouldn't change when reallocated for a ZST."
    );
}

#[test]
fn test_realloc() {
    let mut arr = Array::<usize>::new_uninit(5);
    for i in 0..5 {
        arr[i] = MaybeUninit::new(i);
    }

    let old_ptr = arr.ptr;
    arr.realloc(5);
    assert_eq!(
        arr.ptr, old_ptr,
        "When reallocating to the same size, the pointer shouldn't change."
    );

    arr.realloc(10);
    assert_eq!(arr.size(), 10);
    for i in 0..5 {
        assert_eq!(
            // SAFETY: The first 5 slots were initialized before growing.
            unsafe { arr[i].assume_init() }, i,
            "When growing, all elements should remain in the Array."
        );
    }

    arr.realloc(0);
    assert_eq!(arr.size(), 0);
    assert_eq!(
        arr.ptr,
        NonNull::dangling(),
        "Pointer should be replaced with a dangling one for 0 size."
    );

    arr.realloc(3);
    assert_ne!(
        arr.ptr,
        NonNull::dangling(),
        "Pointer should be replaced with an allocated one."
    );
}

#[test]
fn test_capacity_overflow() {
    assert_panics!({
        let _ = Array::<u8>::new_uninit(isize::MAX as usize + 1);
    }, message = "Capacity overflow!");

    assert_panics!({
        let mut arr = Array::<u64>::new_uninit(5);
        arr.realloc(isize::MAX as usize / 4);
    }, message = "Capacity overflow!");
}

#[test]
fn test_uninit_slots_are_not_dropped() {
    let counter = CountedDrop::new(0);
    let mut arr = Array::<CountedDrop>::new_uninit(4);
    for i in 0..4 {
        arr[i] = MaybeUninit::new(counter.clone());
    }

    drop(arr);

    assert_eq!(
        counter.drops(),
        0,
        "Dropping an Array of MaybeUninit shouldn't drop the values it holds."
    );
}

#[test]
fn test_debug() {
    let arr: Array<u8> = Array::new();
    assert_eq!(format!("{:?}", arr), "Array { contents: [], size: 0 }");
}
