// Copyright 2024 narray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reductions over all elements of an array.
//!
//! Every reduction is a fold over one traversal of the array, in row-major
//! order. The functions are re-exported at the crate root.

use alloc::vec::Vec;
use std::cmp::Ordering;
use std::ops::{Add, Div};

use num_traits::{FromPrimitive, Zero};

use crate::dimension::index_to_loc;
use crate::error::{self, NArrayError};
use crate::imp_prelude::*;

/// Elements that have a truth value: masks and [`count`] accept any
/// `Truthy` element type.
///
/// Numbers are truthy when they are not zero (so `NaN` is truthy).
pub trait Truthy
{
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool
{
    #[inline]
    fn is_truthy(&self) -> bool
    {
        *self
    }
}

macro_rules! impl_truthy {
    ($($t:ty),*) => {
        $(
        impl Truthy for $t
        {
            #[inline]
            #[allow(clippy::float_cmp)]
            fn is_truthy(&self) -> bool
            {
                *self != (0 as $t)
            }
        }
        )*
    };
}

impl_truthy!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

/// Return the sum of all elements, zero for an empty array.
///
/// ```
/// use narray::{NArray, sum};
///
/// let a = NArray::from_shape_vec((2, 2), vec![1., 2., 3., 4.]).unwrap();
/// assert_eq!(sum(&a), 10.);
/// ```
pub fn sum<A, K>(a: &NArray<A, K>) -> A
where
    A: Clone + Zero + Add<Output = A>,
    K: Access,
{
    a.iter().fold(A::zero(), |acc, x| acc + x)
}

/// Fold the elements into the best one under `better(candidate, best)`,
/// along with its row-major index. The first of equal elements wins.
fn select_by<A, K, F>(a: &NArray<A, K>, context: &'static str, mut better: F)
    -> Result<(A, usize), NArrayError>
where
    A: Clone,
    K: Access,
    F: FnMut(&A, &A) -> bool,
{
    let mut iter = a.iter();
    let first = iter.next().ok_or_else(|| error::empty(context))?;
    let best = iter.enumerate().fold((first, 0), |(best, at), (i, x)| {
        if better(&x, &best) {
            (x, i + 1)
        } else {
            (best, at)
        }
    });
    Ok(best)
}

/// Return the smallest element.
///
/// Errors with `Empty` for an empty array.
pub fn min<A, K>(a: &NArray<A, K>) -> Result<A, NArrayError>
where
    A: Clone + PartialOrd,
    K: Access,
{
    select_by(a, "min(a)", |x, best| x < best).map(|(x, _)| x)
}

/// Return the largest element.
///
/// Errors with `Empty` for an empty array.
pub fn max<A, K>(a: &NArray<A, K>) -> Result<A, NArrayError>
where
    A: Clone + PartialOrd,
    K: Access,
{
    select_by(a, "max(a)", |x, best| x > best).map(|(x, _)| x)
}

/// Return the smallest element and its location. Of several equal smallest
/// elements the first in row-major order is reported.
///
/// Errors with `Empty` for an empty array.
///
/// ```
/// use narray::{NArray, min_at};
///
/// let a = NArray::from_shape_vec((2, 3), vec![4, 1, 5, 9, 1, 3]).unwrap();
/// let (value, loc) = min_at(&a).unwrap();
/// assert_eq!(value, 1);
/// assert_eq!(loc, [0, 1]);
/// ```
pub fn min_at<A, K>(a: &NArray<A, K>) -> Result<(A, Sizes), NArrayError>
where
    A: Clone + PartialOrd,
    K: Access,
{
    let (x, i) = select_by(a, "min_at(a)", |x, best| x < best)?;
    Ok((x, index_to_loc(i, a.sizes())))
}

/// Return the largest element and its location. Of several equal largest
/// elements the first in row-major order is reported.
///
/// Errors with `Empty` for an empty array.
pub fn max_at<A, K>(a: &NArray<A, K>) -> Result<(A, Sizes), NArrayError>
where
    A: Clone + PartialOrd,
    K: Access,
{
    let (x, i) = select_by(a, "max_at(a)", |x, best| x > best)?;
    Ok((x, index_to_loc(i, a.sizes())))
}

/// Return the arithmetic mean of the elements, `sum / size` in the element
/// type (so integer means are truncated).
///
/// Errors with `Empty` for an empty array, and with `DomainError` if the
/// element count is not representable as `A`.
///
/// ```
/// use narray::{NArray, mean};
///
/// let a = NArray::from_shape_vec(4, vec![1., 2., 3., 4.]).unwrap();
/// assert_eq!(mean(&a), Ok(2.5));
/// ```
pub fn mean<A, K>(a: &NArray<A, K>) -> Result<A, NArrayError>
where
    A: Clone + Zero + Add<Output = A> + Div<Output = A> + FromPrimitive,
    K: Access,
{
    const CONTEXT: &str = "mean(a)";
    if a.is_empty() {
        return Err(error::empty(CONTEXT));
    }
    let n = A::from_usize(a.size()).ok_or_else(|| error::domain_error(CONTEXT))?;
    Ok(sum(a) / n)
}

/// Return the element of rank `size / 2` in ascending order: the median for
/// an odd count, the upper of the two middle elements for an even count.
///
/// Incomparable elements (such as `NaN`) are treated as equal to
/// everything.
///
/// Errors with `Empty` for an empty array.
///
/// ```
/// use narray::{NArray, median};
///
/// let a = NArray::from_shape_vec(4, vec![7, 1, 9, 3]).unwrap();
/// assert_eq!(median(&a), Ok(7));
/// ```
pub fn median<A, K>(a: &NArray<A, K>) -> Result<A, NArrayError>
where
    A: Clone + PartialOrd,
    K: Access,
{
    if a.is_empty() {
        return Err(error::empty("median(a)"));
    }
    let mut v: Vec<A> = a.iter().collect();
    let mid = v.len() / 2;
    let (_, m, _) = v.select_nth_unstable_by(mid, |x, y| x.partial_cmp(y).unwrap_or(Ordering::Equal));
    Ok(m.clone())
}

/// Return the number of truthy elements, zero for an empty array.
///
/// ```
/// use narray::{NArray, count};
///
/// let a = NArray::from_shape_vec(5, vec![0, 3, 0, -1, 8]).unwrap();
/// assert_eq!(count(&a), 3);
/// ```
pub fn count<A, K>(a: &NArray<A, K>) -> usize
where
    A: Truthy,
    K: Access,
{
    let mut n = 0;
    a.visit_ptrs(|p| {
        if unsafe { (*p).is_truthy() } {
            n += 1;
        }
        true
    });
    n
}
