// Copyright 2024 narray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

/// An error produced by a fallible array operation.
///
/// Every error is a precondition failure: it is raised before any element or
/// view is touched, so the operation has no partial effect.
#[derive(Clone, Debug)]
pub struct NArrayError
{
    // we want to be able to change this representation later
    repr: ErrorKind,
    context: &'static str,
}

impl NArrayError
{
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind
    {
        self.repr
    }

    /// Return the name of the operation that failed, for example
    /// `"range(dim, start, len)"`.
    #[inline]
    pub fn context(&self) -> &'static str
    {
        self.context
    }

    /// Create a new `NArrayError`
    pub fn from_kind(error: ErrorKind, context: &'static str) -> Self
    {
        NArrayError { repr: error, context }
    }
}

/// Error code for a failed array operation.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind
{
    /// malformed parameters: non-positive extent, mismatched operand shapes
    InvalidArgument,
    /// an index, dimension or range outside of its valid bounds
    OutOfRange,
    /// the operation is impossible for the current memory layout or state
    DomainError,
    /// the array references no data
    Empty,
}

impl ErrorKind
{
    fn description(self) -> &'static str
    {
        match self {
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::OutOfRange => "index out of range",
            ErrorKind::DomainError => "operation not possible for this memory layout",
            ErrorKind::Empty => "array references no data",
        }
    }
}

impl PartialEq for NArrayError
{
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool
    {
        self.repr == rhs.repr
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NArrayError {}

impl fmt::Display for NArrayError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}: {} ({:?})", self.context, self.repr.description(), self.repr)
    }
}

#[inline(always)]
pub(crate) fn from_kind(k: ErrorKind, context: &'static str) -> NArrayError
{
    NArrayError::from_kind(k, context)
}

pub(crate) fn invalid_argument(context: &'static str) -> NArrayError
{
    from_kind(ErrorKind::InvalidArgument, context)
}

pub(crate) fn out_of_range(context: &'static str) -> NArrayError
{
    from_kind(ErrorKind::OutOfRange, context)
}

pub(crate) fn domain_error(context: &'static str) -> NArrayError
{
    from_kind(ErrorKind::DomainError, context)
}

pub(crate) fn empty(context: &'static str) -> NArrayError
{
    from_kind(ErrorKind::Empty, context)
}
