// Copyright 2024 narray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The traversal engine.
//!
//! Every bulk operation walks its operands through `traverse`: one shared
//! shape, one step vector per operand, and a callback that receives each
//! operand's element offset. Locations are visited in row-major order
//! (last dimension fastest) whatever the steps are, so operands may be
//! flipped, transposed, broadcast or overlapping.

use std::ptr;

use crate::dimension::{self, stride_offset};
use crate::error::{self, NArrayError};
use crate::imp_prelude::*;

/// Walk every location of `sizes` in row-major order, calling `f` with the
/// offset of that location under each of the `K` step vectors.
///
/// The innermost dimension is the tight loop; the outer dimensions are
/// advanced like an odometer. Zero dimensions visit one location, and any
/// zero extent visits none. `f` returns `false` to stop early; the return
/// value is `true` if the walk ran to the end.
pub(crate) fn walk<const K: usize, F>(sizes: &[usize], steps: [&[isize]; K], mut f: F) -> bool
where F: FnMut([isize; K]) -> bool
{
    debug_assert!(steps.iter().all(|s| s.len() == sizes.len()));
    if sizes.iter().any(|&n| n == 0) {
        return true;
    }
    let ndim = sizes.len();
    if ndim == 0 {
        return f([0; K]);
    }
    let inner = ndim - 1;
    let inner_len = sizes[inner];
    let inner_steps: [isize; K] = core::array::from_fn(|k| steps[k][inner]);

    let mut index = Sizes::zeros(inner);
    let mut base = [0isize; K];
    loop {
        let mut offset = base;
        for _ in 0..inner_len {
            if !f(offset) {
                return false;
            }
            for k in 0..K {
                offset[k] += inner_steps[k];
            }
        }

        let mut d = inner;
        loop {
            if d == 0 {
                return true;
            }
            d -= 1;
            index[d] += 1;
            for k in 0..K {
                base[k] += steps[k][d];
            }
            if index[d] < sizes[d] {
                break;
            }
            for k in 0..K {
                base[k] -= stride_offset(sizes[d], steps[k][d]);
            }
            index[d] = 0;
        }
    }
}

/// Condense the operands jointly, then `walk` them.
///
/// Condensing never changes which offsets are visited or their order, it
/// only shortens the odometer.
pub(crate) fn traverse<const K: usize, F>(sizes: &[usize], steps: [&[isize]; K], f: F) -> bool
where F: FnMut([isize; K]) -> bool
{
    let (sizes, steps) = dimension::condense_many(sizes, steps);
    walk(&sizes, core::array::from_fn(|k| &steps[k][..]), f)
}

/// Read the element at `p`.
///
/// ## Safety
///
/// `p` must point to a live element.
#[inline]
pub(crate) unsafe fn load<A: Clone>(p: *const A) -> A
{
    (*p).clone()
}

/// Replace the element at `p` with `value`, dropping the old element after
/// the store.
///
/// ## Safety
///
/// `p` must point to a live element.
#[inline]
pub(crate) unsafe fn store<A>(p: *mut A, value: A)
{
    drop(ptr::replace(p, value));
}

pub(crate) fn check_same_shape<A, B, K: Access, L: Access>(
    a: &NArray<A, K>, b: &NArray<B, L>, context: &'static str,
) -> Result<(), NArrayError>
{
    if a.is_empty() == b.is_empty() && a.sizes() == b.sizes() {
        Ok(())
    } else {
        Err(error::invalid_argument(context))
    }
}

impl<A, K: Access> NArray<A, K>
{
    /// Call `f` with a pointer to every element, in row-major order, until it
    /// returns `false`.
    pub(crate) fn visit_ptrs<F>(&self, mut f: F) -> bool
    where F: FnMut(*mut A) -> bool
    {
        if self.is_empty() {
            return true;
        }
        let base = self.ptr.as_ptr();
        traverse(&self.sizes, [&self.steps[..]], |[o]| unsafe { f(base.offset(o)) })
    }

    /// Call `f` with pointers to the elements of `self` and `other` at every
    /// location, in row-major order, until it returns `false`.
    ///
    /// The shapes must be equal (checked by the caller).
    pub(crate) fn zip_ptrs<B, L, F>(&self, other: &NArray<B, L>, mut f: F) -> bool
    where
        L: Access,
        F: FnMut(*mut A, *mut B) -> bool,
    {
        debug_assert!(check_same_shape(self, other, "zip").is_ok());
        if self.is_empty() || other.is_empty() {
            return true;
        }
        let (pa, pb) = (self.ptr.as_ptr(), other.ptr.as_ptr());
        traverse(&self.sizes, [&self.steps[..], &other.steps[..]], |[oa, ob]| unsafe {
            f(pa.offset(oa), pb.offset(ob))
        })
    }

    /// Three-operand form of `zip_ptrs`.
    pub(crate) fn zip3_ptrs<B, C, L, M, F>(&self, b: &NArray<B, L>, c: &NArray<C, M>, mut f: F) -> bool
    where
        L: Access,
        M: Access,
        F: FnMut(*mut A, *mut B, *mut C) -> bool,
    {
        debug_assert!(check_same_shape(self, b, "zip").is_ok());
        debug_assert!(check_same_shape(self, c, "zip").is_ok());
        if self.is_empty() || b.is_empty() || c.is_empty() {
            return true;
        }
        let (pa, pb, pc) = (self.ptr.as_ptr(), b.ptr.as_ptr(), c.ptr.as_ptr());
        traverse(&self.sizes, [&self.steps[..], &b.steps[..], &c.steps[..]], |[oa, ob, oc]| unsafe {
            f(pa.offset(oa), pb.offset(ob), pc.offset(oc))
        })
    }
}
