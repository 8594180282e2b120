// Copyright 2024 narray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use alloc::vec::Vec;

use crate::error::NArrayError;
use crate::imp_prelude::*;
use crate::traversal::{check_same_shape, load, store};

/// Return a new array holding `f(x, y)` for the elements `x` of `a` and `y`
/// of `b` at every location.
///
/// `f` is called once per location, in row-major order. Two empty arrays of
/// equal dimensionality give an empty array.
///
/// Errors with `InvalidArgument` if the shapes differ.
///
/// ```
/// use narray::{binary_op, NArray};
///
/// let a = NArray::from_shape_vec(3, vec![1, 2, 3]).unwrap();
/// let b = NArray::from_shape_vec(3, vec![10, 20, 30]).unwrap();
/// let c = binary_op(&a, &b.flip(0).unwrap(), |x, y| x * y).unwrap();
/// assert_eq!(c.iter().collect::<Vec<_>>(), vec![30, 40, 30]);
/// ```
pub fn binary_op<A, B, C, K, L, F>(a: &NArray<A, K>, b: &NArray<B, L>, mut f: F) -> Result<NArray<C>, NArrayError>
where
    A: Clone,
    B: Clone,
    K: Access,
    L: Access,
    F: FnMut(A, B) -> C,
{
    check_same_shape(a, b, "binary_op(a, b, f)")?;
    if a.is_empty() {
        return Ok(NArray::empty_with_ndim(a.ndim()));
    }
    let mut v = Vec::with_capacity(a.size());
    a.zip_ptrs(b, |x, y| {
        v.push(f(unsafe { load(x) }, unsafe { load(y) }));
        true
    });
    Ok(NArray::from_vec_unchecked(Sizes::from(a.sizes()), v))
}

/// Store `f(x, y)` into `dst` for the elements `x` of `a` and `y` of `b` at
/// every location.
///
/// `dst` may share elements with `a` or `b`; every location is read before
/// it is written.
///
/// Errors with `InvalidArgument` if the three shapes are not equal.
pub fn binary_op_into<A, B, C, KD, K, L, F>(
    dst: &NArray<C, KD>, a: &NArray<A, K>, b: &NArray<B, L>, mut f: F,
) -> Result<(), NArrayError>
where
    A: Clone,
    B: Clone,
    KD: Writable,
    K: Access,
    L: Access,
    F: FnMut(A, B) -> C,
{
    const CONTEXT: &str = "binary_op_into(dst, a, b, f)";
    check_same_shape(dst, a, CONTEXT)?;
    check_same_shape(dst, b, CONTEXT)?;
    dst.zip3_ptrs(a, b, |d, x, y| {
        unsafe {
            let z = f(load(x), load(y));
            store(d, z);
        }
        true
    });
    Ok(())
}

/// Return a new array holding `f(x)` for every element `x` of `a`; same as
/// [`a.convert_with(f)`](NArray::convert_with).
pub fn unary_op<A, B, K, F>(a: &NArray<A, K>, f: F) -> NArray<B>
where
    A: Clone,
    K: Access,
    F: FnMut(A) -> B,
{
    a.convert_with(f)
}

/// Store `f(x)` into `dst` for the element `x` of `a` at every location.
///
/// Errors with `InvalidArgument` if the shapes differ.
///
/// ```
/// use narray::{unary_op_into, NArray};
///
/// let a = NArray::from_shape_vec((2, 2), vec![1., 4., 9., 16.]).unwrap();
/// let dst = NArray::from_elem((2, 2), 0.).unwrap();
/// unary_op_into(&dst.t(), &a, f64::sqrt).unwrap();
/// assert_eq!(dst.iter().collect::<Vec<_>>(), vec![1., 3., 2., 4.]);
/// ```
pub fn unary_op_into<A, B, KD, K, F>(dst: &NArray<B, KD>, a: &NArray<A, K>, mut f: F) -> Result<(), NArrayError>
where
    A: Clone,
    KD: Writable,
    K: Access,
    F: FnMut(A) -> B,
{
    check_same_shape(dst, a, "unary_op_into(dst, a, f)")?;
    dst.zip_ptrs(a, |d, x| {
        unsafe { store(d, f(load(x))) };
        true
    });
    Ok(())
}
