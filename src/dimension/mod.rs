// Copyright 2024 narray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Shape and step algorithms.
//!
//! Everything here works on plain `sizes`/`steps` slices: the address of
//! location `loc` is `base + Σ loc[i] * steps[i]`, steps counted in elements.

use crate::error::{self, NArrayError};

pub use self::conversion::IntoDims;
pub use self::dimvec::{DimVec, Sizes, Steps};

pub(crate) use self::reshape::reshape_steps;

mod conversion;
pub mod dimvec;
mod reshape;

/// Calculate offset from `usize` index and `isize` step
#[inline(always)]
pub(crate) fn stride_offset(n: usize, step: isize) -> isize
{
    (n as isize) * step
}

/// Return the number of elements addressed by `sizes`, checking that every
/// extent is positive and that the product fits in `isize`.
pub(crate) fn size_of_shape_checked(sizes: &[usize], context: &'static str) -> Result<usize, NArrayError>
{
    let mut size = 1usize;
    for &n in sizes {
        if n == 0 {
            return Err(error::invalid_argument(context));
        }
        size = size
            .checked_mul(n)
            .ok_or_else(|| error::invalid_argument(context))?;
    }
    if size > isize::MAX as usize {
        return Err(error::invalid_argument(context));
    }
    Ok(size)
}

/// Row-major steps for `sizes`.
///
/// Shape (a, b, c) => steps (b * c, c, 1)
pub(crate) fn default_steps(sizes: &[usize]) -> Steps
{
    let mut steps = Steps::zeros(sizes.len());
    let mut cum = 1isize;
    for (s, &n) in steps.iter_mut().zip(sizes).rev() {
        *s = cum;
        cum *= n as isize;
    }
    steps
}

/// Offset from the base of the element at `loc`, without bounds checks.
#[inline]
pub(crate) fn offset_of(loc: &[usize], steps: &[isize]) -> isize
{
    debug_assert_eq!(loc.len(), steps.len());
    let mut offset = 0;
    for (&i, &s) in loc.iter().zip(steps) {
        offset += stride_offset(i, s);
    }
    offset
}

/// Offset from the base of the element at `loc`, or `None` if `loc` has the
/// wrong length or any coordinate is out of bounds.
pub(crate) fn offset_checked(sizes: &[usize], steps: &[isize], loc: &[usize]) -> Option<isize>
{
    if loc.len() != sizes.len() {
        return None;
    }
    let mut offset = 0;
    for ((&n, &s), &i) in sizes.iter().zip(steps).zip(loc) {
        if i >= n {
            return None;
        }
        offset += stride_offset(i, s);
    }
    Some(offset)
}

/// Location of the element with row-major linear index `index`.
pub(crate) fn index_to_loc(mut index: usize, sizes: &[usize]) -> Sizes
{
    let mut loc = Sizes::zeros(sizes.len());
    for (l, &n) in loc.iter_mut().zip(sizes).rev() {
        *l = index % n;
        index /= n;
    }
    loc
}

/// Return `true` if the addressed elements form one gap-free run of memory,
/// in any order.
pub(crate) fn is_contiguous(sizes: &[usize], steps: &[isize]) -> bool
{
    let size: usize = sizes.iter().product();
    let span: usize = sizes
        .iter()
        .zip(steps)
        .map(|(&n, &s)| s.unsigned_abs() * n.saturating_sub(1))
        .sum();
    span + 1 == size
}

/// Return `true` if visiting elements in row-major index order never moves
/// to a lower address.
pub(crate) fn is_aligned(sizes: &[usize], steps: &[isize]) -> bool
{
    let mut endstep = 0isize;
    for (&n, &s) in sizes.iter().zip(steps).rev() {
        // any step is ok if the dimension has one element
        if n == 1 {
            continue;
        }
        if endstep > s {
            return false;
        }
        endstep += stride_offset(n - 1, s);
    }
    true
}

/// Rewrite `sizes`/`steps` into an aligned description of the same element
/// set and return the base offset that goes with it.
///
/// Negative steps are negated, moving the base to the far end of that
/// dimension, then dimensions are stably sorted by descending step.
pub(crate) fn align(sizes: &mut [usize], steps: &mut [isize]) -> isize
{
    let mut offset = 0;
    for (&n, s) in sizes.iter().zip(steps.iter_mut()) {
        if *s < 0 {
            *s = -*s;
            offset -= stride_offset(n - 1, *s);
        }
    }
    // insertion sort: stable, and dimensionality is small
    for i in 1..steps.len() {
        let mut j = i;
        while j > 0 && steps[j - 1] < steps[j] {
            steps.swap(j - 1, j);
            sizes.swap(j - 1, j);
            j -= 1;
        }
    }
    offset
}

/// Merge adjacent dimensions that address one run, and drop size-1
/// dimensions, jointly for `K` operands that share `sizes`.
///
/// A dimension merges into its predecessor only if every operand satisfies
/// `prev_step == step * size`. The visiting order of the elements is
/// unchanged. A non-empty input never condenses to zero dimensions.
pub(crate) fn condense_many<const K: usize>(sizes: &[usize], steps: [&[isize]; K]) -> (Sizes, [Steps; K])
{
    debug_assert!(steps.iter().all(|s| s.len() == sizes.len()));
    let mut out_sizes = Sizes::new();
    let mut out_steps: [Steps; K] = core::array::from_fn(|_| Steps::new());
    for (i, &n) in sizes.iter().enumerate() {
        if n == 1 {
            continue;
        }
        let mergeable = !out_sizes.is_empty()
            && (0..K).all(|k| {
                let last = out_steps[k][out_steps[k].len() - 1];
                last == stride_offset(n, steps[k][i])
            });
        if mergeable {
            let last = out_sizes.len() - 1;
            out_sizes[last] *= n;
            for k in 0..K {
                out_steps[k][last] = steps[k][i];
            }
        } else {
            out_sizes.push(n);
            for k in 0..K {
                out_steps[k].push(steps[k][i]);
            }
        }
    }
    if out_sizes.is_empty() && !sizes.is_empty() {
        let last = sizes.len() - 1;
        out_sizes.push(1);
        for k in 0..K {
            out_steps[k].push(steps[k][last]);
        }
    }
    (out_sizes, out_steps)
}

/// Single-operand form of `condense_many`.
pub(crate) fn condense(sizes: &[usize], steps: &[isize]) -> (Sizes, Steps)
{
    let (sizes, [steps]) = condense_many(sizes, [steps]);
    (sizes, steps)
}

/// Check `dim < ndim`.
#[inline]
pub(crate) fn check_dim(dim: usize, ndim: usize, context: &'static str) -> Result<(), NArrayError>
{
    if dim < ndim {
        Ok(())
    } else {
        Err(error::out_of_range(context))
    }
}
