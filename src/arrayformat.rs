// Copyright 2024 narray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::imp_prelude::*;

/// Write `array` as nested brackets, one level per dimension, with rows of
/// the last dimension on one line.
fn format_array<A, K, F>(array: &NArray<A, K>, f: &mut fmt::Formatter<'_>, format: &mut F) -> fmt::Result
where
    K: Access,
    F: FnMut(&A, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    if array.is_empty() {
        return write!(f, "[]");
    }
    format_level(array, 0, f, format)
}

fn format_level<A, K, F>(array: &NArray<A, K>, depth: usize, f: &mut fmt::Formatter<'_>, format: &mut F)
    -> fmt::Result
where
    K: Access,
    F: FnMut(&A, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    if array.ndim() == 0 {
        // the element is only borrowed for the duration of the call
        return format(unsafe { &*array.as_ptr() }, f);
    }
    let n = array.sizes()[0];
    let last = array.ndim() == 1;
    write!(f, "[")?;
    for i in 0..n {
        if i > 0 {
            if last {
                write!(f, ", ")?;
            } else {
                writeln!(f, ",")?;
                for _ in 0..=depth {
                    write!(f, " ")?;
                }
            }
        }
        match array.outer(i) {
            Ok(sub) => format_level(&sub, depth + 1, f, format)?,
            Err(_) => return Err(fmt::Error),
        }
    }
    write!(f, "]")
}

/// Format the array using `Display` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style.
impl<A: fmt::Display, K: Access> fmt::Display for NArray<A, K>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        format_array(self, f, &mut <A as fmt::Display>::fmt)
    }
}

/// Format the array using `Debug` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style, followed by its layout.
impl<A: fmt::Debug, K: Access> fmt::Debug for NArray<A, K>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        format_array(self, f, &mut <A as fmt::Debug>::fmt)?;
        write!(f, " sizes={:?}, steps={:?}", self.sizes(), self.steps())?;
        if let Some(buffer) = self.buffer() {
            write!(f, ", buffer={:?}", buffer)?;
        }
        Ok(())
    }
}
