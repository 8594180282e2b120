// Copyright 2024 narray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use alloc::vec::Vec;
use std::fmt;
use std::mem::ManuallyDrop;
use std::ptr::NonNull;

use crate::extension::nonnull;

/// How a new buffer takes hold of its elements.
///
/// The mode is consumed when the buffer is created and is not recorded.
pub(crate) enum Acquire<'a, A>
{
    /// Adopt the vector's allocation; it is freed with the buffer.
    Owning(Vec<A>),
    /// Clone the elements into a private allocation, using the given
    /// cloning routine (see `Acquire::copying`).
    Copying(&'a [A], fn(&[A]) -> Vec<A>),
    /// Reference `len` elements of external memory that is never freed.
    NonOwning(NonNull<A>, usize),
}

impl<'a, A: Clone> Acquire<'a, A>
{
    pub(crate) fn copying(xs: &'a [A]) -> Self
    {
        Acquire::Copying(xs, <[A]>::to_vec)
    }
}

/// Shared element storage.
///
/// Like a Vec whose element type has been erased: the buffer remembers the
/// base pointer, length and capacity of its allocation, and a release
/// routine monomorphized for the element type. Arrays hold it through an
/// `Arc`, so the routine runs exactly once, when the last array lets go.
pub(crate) struct Buffer
{
    ptr: NonNull<u8>,
    len: usize,
    capacity: usize,
    release: Option<unsafe fn(NonNull<u8>, usize, usize)>,
}

/// Drop `len` elements and free the allocation of `capacity` elements.
///
/// ## Safety
///
/// The arguments must be the raw parts of a `Vec<A>` that nobody else owns.
unsafe fn release_vec<A>(ptr: NonNull<u8>, len: usize, capacity: usize)
{
    drop(Vec::from_raw_parts(ptr.cast::<A>().as_ptr(), len, capacity));
}

impl Buffer
{
    /// Create a buffer and return it with the pointer to its first element.
    pub(crate) fn acquire<A>(mode: Acquire<'_, A>) -> (Self, NonNull<A>)
    {
        match mode {
            Acquire::Owning(v) => Self::from_vec(v),
            Acquire::Copying(xs, to_vec) => Self::from_vec(to_vec(xs)),
            Acquire::NonOwning(ptr, len) => {
                let buffer = Buffer {
                    ptr: ptr.cast(),
                    len,
                    capacity: len,
                    release: None,
                };
                (buffer, ptr)
            }
        }
    }

    pub(crate) fn from_vec<A>(v: Vec<A>) -> (Self, NonNull<A>)
    {
        let mut v = ManuallyDrop::new(v);
        let len = v.len();
        let capacity = v.capacity();
        let ptr = nonnull::nonnull_from_vec_data(&mut v);
        let buffer = Buffer {
            ptr: ptr.cast(),
            len,
            capacity,
            release: Some(release_vec::<A>),
        };
        (buffer, ptr)
    }

    /// Number of elements the buffer was created with.
    pub(crate) fn len(&self) -> usize
    {
        self.len
    }

    pub(crate) fn is_owned(&self) -> bool
    {
        self.release.is_some()
    }
}

impl Drop for Buffer
{
    fn drop(&mut self)
    {
        if let Some(release) = self.release {
            unsafe {
                release(self.ptr, self.len, self.capacity);
            }
        }
    }
}

impl fmt::Debug for Buffer
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("Buffer")
            .field("ptr", &self.ptr)
            .field("len", &self.len)
            .field("owned", &self.is_owned())
            .finish()
    }
}
