// Copyright 2024 narray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use super::{condense, Steps};
use crate::error::{self, NArrayError};

const CONTEXT: &str = "reshape(sizes)";

/// Compute the steps that describe the elements addressed by
/// `from_sizes`/`from_steps`, in the same row-major order, under the new
/// extents `to_sizes`.
///
/// The source is condensed into runs first. Each run of `n` elements with
/// step `t` is then split from the front: a requested extent `m` that divides
/// the remaining run length `r` gets step `(r / m) * t` and leaves `r / m`
/// for the following extents. A run is finished once it is consumed down to
/// one element.
///
/// Preconditions: `from_sizes` describes a non-empty view (all extents
/// positive). `to_sizes` may be anything.
///
/// This function returns:
///
/// - InvalidArgument if any requested extent is zero
/// - DomainError if the element counts differ or the layout can not be
///   expressed with the requested extents without copying
pub(crate) fn reshape_steps(from_sizes: &[usize], from_steps: &[isize], to_sizes: &[usize])
    -> Result<Steps, NArrayError>
{
    debug_assert_eq!(from_sizes.len(), from_steps.len());
    if to_sizes.iter().any(|&n| n == 0) {
        return Err(error::invalid_argument(CONTEXT));
    }

    let (mut runs, run_steps) = condense(from_sizes, from_steps);
    let mut to_steps = Steps::zeros(to_sizes.len());

    // cursor indexes into the runs and into `to_sizes`
    let mut fi = 0;
    let mut ti = 0;

    while fi < runs.len() && ti < to_sizes.len() {
        let m = to_sizes[ti];
        if runs[fi] % m == 0 {
            runs[fi] /= m;
            to_steps[ti] = runs[fi] as isize * run_steps[fi];
            ti += 1;
        } else if runs[fi] == 1 {
            fi += 1;
        } else {
            return Err(error::domain_error(CONTEXT));
        }
    }

    // trailing extents must be 1 on both sides
    while ti < to_sizes.len() {
        if to_sizes[ti] != 1 {
            return Err(error::domain_error(CONTEXT));
        }
        to_steps[ti] = 1;
        ti += 1;
    }
    if runs[fi..].iter().any(|&n| n != 1) {
        return Err(error::domain_error(CONTEXT));
    }

    Ok(to_steps)
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::error::ErrorKind;

    macro_rules! test_reshape {
        (fail $kind:ident from $from:expr, $step:expr, to $to:expr) => {
            let (from, step, to): (&[usize], &[isize], &[usize]) = (&$from, &$step, &$to);
            let res = reshape_steps(from, step, to);
            assert_eq!(
                res.map_err(|e| e.kind()),
                Err(ErrorKind::$kind),
                "reshape {:?} {:?} to {:?}",
                from,
                step,
                to
            );
        };
        (ok from $from:expr, $step:expr, to $to:expr, $to_step:expr) => {{
            let (from, step, to): (&[usize], &[isize], &[usize]) = (&$from, &$step, &$to);
            let expected: &[isize] = &$to_step;
            let res = reshape_steps(from, step, to);
            assert_eq!(
                res.map_err(|e| e.kind()),
                Ok(Steps::from(expected)),
                "reshape {:?} {:?} to {:?}",
                from,
                step,
                to
            );
        }};
    }

    #[test]
    fn contiguous_sources()
    {
        test_reshape!(ok from [1, 2, 3], [6, 3, 1], to [1, 2, 3], [6, 3, 1]);
        test_reshape!(ok from [1, 2, 3], [6, 3, 1], to [2, 3], [3, 1]);
        test_reshape!(ok from [1, 2, 3], [6, 3, 1], to [6], [1]);
        test_reshape!(ok from [6], [1], to [3, 2], [2, 1]);
        test_reshape!(ok from [3, 4, 5], [20, 5, 1], to [4, 15], [15, 1]);
        test_reshape!(ok from [4, 4, 4], [16, 4, 1], to [16, 4], [4, 1]);
        test_reshape!(ok from [4, 4], [4, 1], to [2, 2, 4, 1], [8, 4, 1, 1]);
        test_reshape!(ok from [4, 4], [4, 1], to [2, 2, 2, 2], [8, 4, 2, 1]);
        test_reshape!(ok from [3, 4, 5, 7], [140, 35, 7, 1], to [28, 15], [15, 1]);
        test_reshape!(ok from [14, 14], [14, 1], to [98, 2], [2, 1]);
        test_reshape!(ok from [14, 14], [14, 1], to [1, 98, 1, 2, 1], [196, 2, 2, 1, 1]);
        test_reshape!(ok from [16], [-4], to [2, 2, 4], [-32, -16, -4]);
    }

    #[test]
    fn strided_sources()
    {
        // a 12x12 window of a 14x14 array
        test_reshape!(ok from [12, 12], [14, 1], to [4, 3, 4, 3], [42, 14, 3, 1]);
        test_reshape!(fail DomainError from [12, 12], [14, 1], to [144]);
        test_reshape!(ok from [4, 4], [8, 1], to [2, 2, 2, 2], [16, 8, 2, 1]);
        test_reshape!(fail DomainError from [4, 4], [8, 1], to [2, 1, 4, 2]);
        test_reshape!(ok from [14, 14], [-14, -1], to [98, 2], [-2, -1]);
        test_reshape!(ok from [10], [2], to [10], [2]);
    }

    #[test]
    fn broadcast_sources()
    {
        test_reshape!(ok from [3, 4, 5, 7], [0, 0, 7, 1], to [12, 35], [0, 1]);
        test_reshape!(fail DomainError from [3, 4, 5, 7], [0, 0, 7, 1], to [28, 15]);
    }

    #[test]
    fn unit_extents()
    {
        test_reshape!(ok from [10, 1, 1, 1, 1], [1, 1, 1, 1, 1], to [10], [1]);
        test_reshape!(ok from [1, 5, 1, 2, 1], [1, 2, 1, 1, 1], to [10], [1]);
        test_reshape!(fail DomainError from [1, 5, 1, 2, 1], [1, 1, 1, 5, 1], to [10]);
        test_reshape!(ok from [1], [3], to [1, 1], [3, 3]);
        test_reshape!(ok from [1, 1], [3, 3], to [], []);
    }

    #[test]
    fn size_mismatch_and_zero()
    {
        test_reshape!(fail DomainError from [2, 3], [3, 1], to [7]);
        test_reshape!(fail DomainError from [2, 3], [3, 1], to [3]);
        test_reshape!(fail DomainError from [2, 3], [3, 1], to [6, 2]);
        test_reshape!(fail InvalidArgument from [2, 3], [3, 1], to [6, 0]);
    }
}
