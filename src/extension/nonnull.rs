// Copyright 2024 narray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use alloc::vec::Vec;
use std::ptr::NonNull;

/// Return a NonNull<T> pointer to the vector's data
pub(crate) fn nonnull_from_vec_data<T>(v: &mut Vec<T>) -> NonNull<T>
{
    // this pointer is guaranteed to be non-null
    unsafe { NonNull::new_unchecked(v.as_mut_ptr()) }
}

/// Move `ptr` by `offset` elements.
///
/// Safety: the result must stay inside the allocation `ptr` points into.
/// A null result is caught by a debug assertion.
#[inline]
pub(crate) unsafe fn nonnull_offset<T>(ptr: NonNull<T>, offset: isize) -> NonNull<T>
{
    let p = ptr.as_ptr().offset(offset);
    debug_assert!(!p.is_null());
    NonNull::new_unchecked(p)
}
