// Copyright 2024 narray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Access markers: whether the elements of an array may be written.

use std::fmt;

/// Element access trait.
///
/// The second type parameter of `NArray` says whether the elements can be
/// written through that array. It is independent of how many arrays share
/// the buffer: a `ReadWrite` array may be shared freely, and every sharer
/// sees its writes.
///
/// ***Note:*** `Access` is not an extension interface. It is public because
/// it is used as a bound on public methods.
pub trait Access: Copy + Default + fmt::Debug + 'static
{
    /// `true` if writes are allowed.
    const WRITABLE: bool;
    private_decl! {}
}

/// Element access trait.
///
/// For an array with writable elements.
///
/// ***Internal trait, see `Access`.***
pub trait Writable: Access {}

/// Elements can be read and written.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ReadWrite;

/// Elements can only be read.
///
/// An array with this marker can be made from a `ReadWrite` one, never the
/// reverse.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ReadOnly;

impl Access for ReadWrite
{
    const WRITABLE: bool = true;
    private_impl! {}
}

impl Writable for ReadWrite {}

impl Access for ReadOnly
{
    const WRITABLE: bool = false;
    private_impl! {}
}
