// Copyright 2024 narray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;
use std::ops::Deref;

use crate::imp_prelude::*;
use crate::Arc;

/// A read-only array that may be sent to and shared between threads.
///
/// Made with [`NArray::freeze`], which only succeeds for an array that is
/// the sole holder of a buffer it owns. From then on no handle can write
/// the elements, so any number of threads may derive views from it and
/// read through them concurrently. Views derived on a thread are ordinary
/// [`ConstNArray`]s and stay on that thread.
///
/// ```
/// use narray::NArray;
/// use std::thread;
///
/// let a = NArray::from_shape_vec((2, 3), vec![1, 2, 3, 4, 5, 6]).unwrap();
/// let frozen = a.freeze().unwrap();
/// let column_sums: Vec<i32> = thread::scope(|s| {
///     let handles: Vec<_> = (0..3)
///         .map(|j| {
///             let frozen = &frozen;
///             s.spawn(move || narray::sum(&frozen.slice_y(j).unwrap()))
///         })
///         .collect();
///     handles.into_iter().map(|h| h.join().unwrap()).collect()
/// });
/// assert_eq!(column_sums, [5, 7, 9]);
/// ```
pub struct FrozenNArray<A>
{
    array: ConstNArray<A>,
}

// No writable handle to the buffer exists once frozen; elements are cloned
// on any thread and dropped on whichever thread releases the buffer last.
unsafe impl<A> Send for FrozenNArray<A> where A: Send + Sync {}
unsafe impl<A> Sync for FrozenNArray<A> where A: Send + Sync {}

impl<A, K: Access> NArray<A, K>
{
    /// Give up write access for good and return a handle that can cross
    /// threads.
    ///
    /// Succeeds if the array is empty, or if it is the only array over a
    /// buffer it owns. Otherwise the array is returned unchanged: another
    /// handle could still write the elements, and memory adopted with
    /// [`from_shape_ptr`](NArray::from_shape_ptr) is owned elsewhere.
    ///
    /// ```
    /// use narray::NArray;
    ///
    /// let a = NArray::from_elem(4, 0u8).unwrap();
    /// let view = a.flip(0).unwrap();
    /// let a = a.freeze().unwrap_err();
    /// drop(view);
    /// assert!(a.freeze().is_ok());
    /// ```
    pub fn freeze(self) -> Result<FrozenNArray<A>, Self>
    {
        let exclusive = match self.data {
            Some(ref data) => Arc::strong_count(data) == 1 && data.is_owned(),
            None => true,
        };
        if exclusive {
            Ok(FrozenNArray {
                array: self.with_access(),
            })
        } else {
            Err(self)
        }
    }
}

impl<A> FrozenNArray<A>
{
    /// Return a read-only array over the same elements, for use on the
    /// current thread.
    pub fn view(&self) -> ConstNArray<A>
    {
        self.array.clone()
    }
}

impl<A> Deref for FrozenNArray<A>
{
    type Target = ConstNArray<A>;

    fn deref(&self) -> &ConstNArray<A>
    {
        &self.array
    }
}

impl<A> Clone for FrozenNArray<A>
{
    fn clone(&self) -> Self
    {
        FrozenNArray {
            array: self.array.clone(),
        }
    }
}

impl<A: fmt::Debug> fmt::Debug for FrozenNArray<A>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        fmt::Debug::fmt(&self.array, f)
    }
}
