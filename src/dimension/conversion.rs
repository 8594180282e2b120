// Copyright 2024 narray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tuple to size-vector conversion, IntoDims, and related things

use alloc::vec::Vec;

use super::dimvec::Sizes;

/// $m: macro callback
/// $m is called with $arg and then the indices corresponding to the size argument
macro_rules! index {
    ($m:ident $arg:tt 1) => ($m!($arg 0));
    ($m:ident $arg:tt 2) => ($m!($arg 0 1));
    ($m:ident $arg:tt 3) => ($m!($arg 0 1 2));
    ($m:ident $arg:tt 4) => ($m!($arg 0 1 2 3));
    ($m:ident $arg:tt 5) => ($m!($arg 0 1 2 3 4));
    ($m:ident $arg:tt 6) => ($m!($arg 0 1 2 3 4 5));
}

/// Argument conversion into a size vector.
///
/// Implemented for `usize` (one dimension), tuples of up to six `usize`,
/// arrays, slices and vectors of `usize`, and `Sizes` itself.
///
/// ```
/// use narray::IntoDims;
///
/// assert_eq!((4usize, 3, 2).into_dims(), [4, 3, 2]);
/// assert_eq!(5usize.into_dims(), [5]);
/// ```
pub trait IntoDims
{
    fn into_dims(self) -> Sizes;
}

impl IntoDims for usize
{
    #[inline(always)]
    fn into_dims(self) -> Sizes
    {
        Sizes::from([self])
    }
}

impl IntoDims for ()
{
    #[inline(always)]
    fn into_dims(self) -> Sizes
    {
        Sizes::new()
    }
}

impl IntoDims for Sizes
{
    #[inline(always)]
    fn into_dims(self) -> Sizes
    {
        self
    }
}

impl<'a> IntoDims for &'a Sizes
{
    #[inline(always)]
    fn into_dims(self) -> Sizes
    {
        self.clone()
    }
}

impl<'a> IntoDims for &'a [usize]
{
    #[inline(always)]
    fn into_dims(self) -> Sizes
    {
        Sizes::from(self)
    }
}

impl IntoDims for Vec<usize>
{
    #[inline(always)]
    fn into_dims(self) -> Sizes
    {
        Sizes::from(self)
    }
}

impl<const N: usize> IntoDims for [usize; N]
{
    #[inline(always)]
    fn into_dims(self) -> Sizes
    {
        Sizes::from(self)
    }
}

impl<'a, const N: usize> IntoDims for &'a [usize; N]
{
    #[inline(always)]
    fn into_dims(self) -> Sizes
    {
        Sizes::from(&self[..])
    }
}

macro_rules! sub {
    ($_x:tt $y:tt) => {
        $y
    };
}

macro_rules! tuple_type {
    ([$T:ident] $($index:tt)*) => (
        ( $(sub!($index $T), )* )
    )
}

macro_rules! tuple_expr {
    ([$self_:expr] $($index:tt)*) => (
        Sizes::from([$($self_.$index, )*])
    );
}

macro_rules! tuple_to_dims {
    ($($n:tt)*) => {
        $(
        impl IntoDims for index!(tuple_type [usize] $n)
        {
            #[inline(always)]
            fn into_dims(self) -> Sizes
            {
                index!(tuple_expr [self] $n)
            }
        }
        )*
    };
}

tuple_to_dims!(1 2 3 4 5 6);
