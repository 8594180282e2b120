// Copyright 2024 narray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![crate_name = "narray"]
#![doc(html_root_url = "https://docs.rs/narray/0.1/")]
#![allow(
    clippy::many_single_char_names,
    clippy::deref_addrof,
    clippy::unreadable_literal,
    clippy::manual_map, // is not an error
    clippy::while_let_on_iterator, // is not an error
    clippy::from_iter_instead_of_collect, // using from_iter is good style
    clippy::redundant_closure, // false positives clippy #7812
    clippy::incompatible_msrv, // false positive PointerExt::offset
)]
#![doc(test(attr(deny(warnings))))]
#![doc(test(attr(allow(unused_variables))))]
#![doc(test(attr(allow(deprecated))))]
#![cfg_attr(not(feature = "std"), no_std)]

//! The `narray` crate provides an *n*-dimensional strided array over shared
//! storage.
//!
//! - [`NArray`]: a shape (`sizes`), per-dimension address deltas (`steps`)
//!   and a reference-counted handle to a [buffer](#ownership-and-sharing).
//! - Slicing, ranging, flipping, sub-striding, transposing, reshaping,
//!   broadcasting with [`repeat`](NArray::repeat) and sliding
//!   [`window`](NArray::window)s all return new arrays over the same
//!   buffer in time independent of the element count.
//! - Bulk operations (assignment, conversion, arithmetic, reductions) walk
//!   any number of dimensions with one traversal routine that advances each
//!   operand by its own steps, so negative, zero and overlapping steps are
//!   all handled.
//!
//! ## Ownership and sharing
//!
//! Cloning an array is cheap and shallow: both handles share one buffer,
//! and a write through one is visible through the other. Use
//! [`to_owned`](NArray::to_owned) for an independent copy.
//!
//! Whether elements may be written is a property of the handle's type, not
//! of the borrow: `NArray<A>` (that is `NArray<A, ReadWrite>`) writes
//! through `&self`, while [`ConstNArray<A>`](ConstNArray) has no writing
//! methods at all. A `ReadWrite` array converts into a `ConstNArray`; the
//! reverse conversion does not exist.
//!
//! Elements are read by value (`A: Clone`) and written by value, so no
//! reference to an element outlives a single access. Array handles are
//! neither `Send` nor `Sync`. To read an array from several threads,
//! [`freeze`](NArray::freeze) it into a [`FrozenNArray`], which is both;
//! the buffer's reference count is atomic.
//!
//! ## Crate Feature Flags
//!
//! - `std`: Rust standard library (enabled by default)
//!   - This crate can be used without the standard library by disabling the
//!     default `std` feature. To do so, use `default-features = false` in
//!     your `Cargo.toml`.
//! - `approx`
//!   - Implementations of traits from the [`approx`] crate.
//!
//! ## Example
//!
//! ```
//! use narray::prelude::*;
//!
//! let a = NArray::from_shape_gen((4, 6), {
//!     let mut i = 0;
//!     move || { i += 1; i - 1 }
//! }).unwrap();
//!
//! let column = a.slice_y(1).unwrap();
//! assert_eq!(column.sizes(), &[4]);
//! assert_eq!(column.steps(), &[6]);
//! assert_eq!(column.iter().collect::<Vec<_>>(), vec![1, 7, 13, 19]);
//!
//! column.fill(0);
//! assert_eq!(a.at(&[2, 1]), Ok(0));
//! ```

extern crate alloc;

#[cfg(not(feature = "std"))]
extern crate core as std;

#[cfg(feature = "approx")]
pub extern crate approx;

#[cfg(target_has_atomic = "ptr")]
use alloc::sync::Arc;

#[cfg(not(target_has_atomic = "ptr"))]
use portable_atomic_util::Arc;

use std::marker::PhantomData;
use std::ptr::NonNull;

pub use crate::data_traits::{Access, ReadOnly, ReadWrite, Writable};
pub use crate::dimension::{DimVec, IntoDims, Sizes, Steps};
pub use crate::error::{ErrorKind, NArrayError};
pub use crate::free_functions::{binary_op, binary_op_into, unary_op, unary_op_into};
pub use crate::impl_frozen::FrozenNArray;
pub use crate::impl_ops::ScalarOperand;
pub use crate::iterators::{Iter, SubArrays};
pub use crate::numeric::{count, max, max_at, mean, median, min, min_at, sum, Truthy};

use crate::data_repr::Buffer;

#[macro_use]
mod private;
mod data_repr;
mod data_traits;
pub mod dimension;
mod error;
mod extension
{
    pub(crate) mod nonnull;
}

mod arrayformat;
mod arraytraits;
#[cfg(feature = "approx")]
mod array_approx;
mod free_functions;
mod impl_constructors;
mod impl_frozen;
mod impl_internal_constructors;
mod impl_methods;
mod impl_ops;
mod impl_projection;
mod impl_views;
mod iterators;
pub mod numeric;
pub mod prelude;
mod traversal;

/// Implementation's prelude. Common types used everywhere.
mod imp_prelude
{
    pub use crate::dimension::{IntoDims, Sizes, Steps};
    pub use crate::error::NArrayError;
    pub use crate::{Access, ConstNArray, NArray, Writable};
}

/// An *n*-dimensional array over shared, reference-counted storage.
///
/// The array is a *view* description: a handle to a buffer, a base
/// pointer into it, and for each dimension an extent (`sizes`) and an
/// address delta in elements (`steps`). The element at location `loc` lives
/// at `base + Σ loc[i] * steps[i]`. Steps may be negative (flipped
/// dimensions), zero (broadcast dimensions, see [`.repeat()`](Self::repeat))
/// or overlap (see [`.window()`](Self::window)).
///
/// The type parameter `K` is the [access marker](Access): [`ReadWrite`]
/// (the default) or [`ReadOnly`]. `ConstNArray<A>` is an alias for the
/// read-only form.
///
/// ## Empty arrays
///
/// An array made by [`NArray::new`], [`Default`] or [`.clear()`](Self::clear)
/// references no buffer. It has [`.size()`](Self::size) zero, all of its
/// extents are zero, and element access fails with
/// [`ErrorKind::Empty`]. Every non-empty array has strictly positive
/// extents.
///
/// ## Dimensionality
///
/// The number of dimensions is a runtime property ([`.ndim()`](Self::ndim)).
/// Up to eight dimensions are described without heap allocation. A
/// zero-dimensional non-empty array addresses exactly one element, and is
/// what [`.slice()`](Self::slice) of a one-dimensional array returns.
///
/// ## Methods
///
/// + [Constructor Methods](#constructor-methods)
/// + [Queries and Element Access](#queries-and-element-access)
/// + [Views](#views)
/// + [Bulk Operations](#bulk-operations)
/// + [Arithmetic Operations](#arithmetic-operations)
///
/// ## Arithmetic Operations
///
/// Arithmetic operators (`+`, `-`, `*`, `/`, `%`) work elementwise on
/// references to arrays and always return a new, freshly allocated array:
///
/// - `&A @ &B`, where the extents must be equal (the operator panics
///   otherwise; [`binary_op`] is the fallible form),
/// - `&A @ x` and `x @ &A` with a scalar `x` (see [`ScalarOperand`]).
///
/// The compound assignments `+=`, `-=`, `*=` and `/=` write through any
/// `ReadWrite` array, including views, and also have fallible forms such as
/// [`.add_assign_array()`](Self::add_assign_array). Unary `-` and `!` apply
/// to `&A`.
///
/// ```
/// use narray::NArray;
///
/// let a = NArray::from_shape_vec((2, 2), vec![1, 2, 3, 4]).unwrap();
/// let b = &a + &a.t();
/// assert_eq!(b.iter().collect::<Vec<_>>(), vec![2, 5, 5, 8]);
///
/// let mut row = a.outer(0).unwrap();
/// row *= 10;
/// assert_eq!(a.at(&[0, 1]), Ok(20));
/// ```
pub struct NArray<A, K: Access = ReadWrite>
{
    /// Keeps the buffer alive; `None` for an empty array.
    data: Option<Arc<Buffer>>,
    /// Address of the element at location `(0, ..., 0)`. Dangling when empty.
    ptr: NonNull<A>,
    sizes: Sizes,
    steps: Steps,
    access: PhantomData<K>,
}

/// An array whose elements can only be read.
pub type ConstNArray<A> = NArray<A, ReadOnly>;
