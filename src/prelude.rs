// Copyright 2024 narray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! narray prelude.
//!
//! This module contains the most used types, traits and functions that you
//! can import easily as a group.
//!
//! ```
//! use narray::prelude::*;
//!
//! let a = NArray::from_elem((2, 2), 1).unwrap();
//! assert_eq!(sum(&a), 4);
//! ```

#[doc(no_inline)]
pub use crate::{ConstNArray, FrozenNArray, NArray};

#[doc(no_inline)]
pub use crate::{Access, ReadOnly, ReadWrite, Writable};

#[doc(no_inline)]
pub use crate::{DimVec, IntoDims, Sizes, Steps};

#[doc(no_inline)]
pub use crate::{ErrorKind, NArrayError};

#[doc(no_inline)]
pub use crate::{binary_op, binary_op_into, unary_op, unary_op_into};

#[doc(no_inline)]
pub use crate::numeric::{count, max, max_at, mean, median, min, min_at, sum, Truthy};

#[doc(no_inline)]
pub use crate::ScalarOperand;
