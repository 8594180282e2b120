// Copyright 2024 narray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::mem::{align_of, size_of};
use std::ptr::NonNull;

use crate::error::{self, NArrayError};
use crate::imp_prelude::*;

impl<A, K: Access> NArray<A, K>
{
    /// View one field of every record: an array of `U` over the same
    /// buffer, whose element at each location is the `U` found
    /// `byte_offset` bytes into the record `A` at that location.
    ///
    /// `stride_scale` must be `size_of::<A>() / size_of::<U>()`, the number
    /// of `U`s per record; every step is multiplied by it. The projection
    /// keeps the access marker, so a projection of a read-only array is
    /// read-only.
    ///
    /// Errors with `Empty` for an empty array and with `DomainError` if `U`
    /// is zero-sized, `size_of::<A>()` is not a multiple of
    /// `size_of::<U>()`, `stride_scale` is not their ratio, the field does
    /// not fit in the record, or the field address is misaligned for `U`.
    ///
    /// ## Safety
    ///
    /// For every record, the `size_of::<U>()` bytes at `byte_offset` must be
    /// a valid `U` for as long as the projection is used (typically: they
    /// are a field of type `U`), and writing a `U` there must leave a valid
    /// `A`.
    ///
    /// ```
    /// use narray::NArray;
    ///
    /// #[derive(Clone, Copy)]
    /// #[repr(C)]
    /// struct Point { x: f32, y: f32 }
    ///
    /// let points = NArray::from_elem(3, Point { x: 1., y: 2. }).unwrap();
    /// let ys = unsafe { points.project::<f32>(4, 2).unwrap() };
    /// assert_eq!(ys.steps(), &[2]);
    /// ys.set_at(&[1], 5.).unwrap();
    /// assert_eq!(points.at(&[1]).unwrap().y, 5.);
    /// ```
    pub unsafe fn project<U>(&self, byte_offset: usize, stride_scale: usize) -> Result<NArray<U, K>, NArrayError>
    {
        const CONTEXT: &str = "project(byte_offset, stride_scale)";
        if self.is_empty() {
            return Err(error::empty(CONTEXT));
        }
        let (a_size, u_size) = (size_of::<A>(), size_of::<U>());
        if u_size == 0
            || a_size < u_size
            || a_size % u_size != 0
            || stride_scale != a_size / u_size
            || byte_offset > a_size - u_size
        {
            return Err(error::domain_error(CONTEXT));
        }
        let field = (self.ptr.as_ptr() as *mut u8).add(byte_offset);
        if (field as usize) % align_of::<U>() != 0 {
            return Err(error::domain_error(CONTEXT));
        }
        let steps = self.steps.clone() * (stride_scale as isize);
        let ptr = NonNull::new_unchecked(field as *mut U);
        Ok(self.with_elem(ptr, self.sizes.clone(), steps))
    }
}
