// Copyright 2024 narray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::imp_prelude::*;

impl<A, K: Access> NArray<A, K>
{
    /// Return `true` if the extents are equal and `f` holds for the elements
    /// at every location. Any two empty arrays are equal.
    fn all_pairs<B, L, F>(&self, other: &NArray<B, L>, mut f: F) -> bool
    where
        L: Access,
        F: FnMut(&A, &B) -> bool,
    {
        if self.is_empty() || other.is_empty() {
            return self.is_empty() && other.is_empty();
        }
        self.sizes() == other.sizes() && self.zip_ptrs(other, |a, b| unsafe { f(&*a, &*b) })
    }
}

/// **Requires crate feature `"approx"`.**
impl<A, B, K, L> AbsDiffEq<NArray<B, L>> for NArray<A, K>
where
    A: AbsDiffEq<B>,
    A::Epsilon: Clone,
    K: Access,
    L: Access,
{
    type Epsilon = A::Epsilon;

    fn default_epsilon() -> A::Epsilon
    {
        A::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &NArray<B, L>, epsilon: A::Epsilon) -> bool
    {
        self.all_pairs(other, move |a, b| A::abs_diff_eq(a, b, epsilon.clone()))
    }
}

/// **Requires crate feature `"approx"`.**
impl<A, B, K, L> RelativeEq<NArray<B, L>> for NArray<A, K>
where
    A: RelativeEq<B>,
    A::Epsilon: Clone,
    K: Access,
    L: Access,
{
    fn default_max_relative() -> A::Epsilon
    {
        A::default_max_relative()
    }

    fn relative_eq(&self, other: &NArray<B, L>, epsilon: A::Epsilon, max_relative: A::Epsilon) -> bool
    {
        self.all_pairs(other, move |a, b| A::relative_eq(a, b, epsilon.clone(), max_relative.clone()))
    }
}

/// **Requires crate feature `"approx"`.**
impl<A, B, K, L> UlpsEq<NArray<B, L>> for NArray<A, K>
where
    A: UlpsEq<B>,
    A::Epsilon: Clone,
    K: Access,
    L: Access,
{
    fn default_max_ulps() -> u32
    {
        A::default_max_ulps()
    }

    fn ulps_eq(&self, other: &NArray<B, L>, epsilon: A::Epsilon, max_ulps: u32) -> bool
    {
        self.all_pairs(other, move |a, b| A::ulps_eq(a, b, epsilon.clone(), max_ulps))
    }
}

#[cfg(test)]
mod tests
{
    use crate::NArray;
    use alloc::vec;
    use approx::{
        assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_relative_ne, assert_ulps_eq,
        assert_ulps_ne,
    };

    fn arr(v: alloc::vec::Vec<f32>) -> NArray<f32>
    {
        NArray::from_shape_vec((2, 2), v).unwrap()
    }

    #[test]
    fn abs_diff_eq()
    {
        let a = arr(vec![0., 2., -0.000010001, 100000000.]);
        let b = arr(vec![0., 1., -0.000010002, 100000001.]);
        assert_abs_diff_ne!(a, b);
        b.set_at(&[0, 1], 2.).unwrap();
        assert_abs_diff_eq!(a, b);

        // Check epsilon.
        assert_abs_diff_eq!(NArray::from(vec![0.0f32]), NArray::from(vec![1e-40f32]), epsilon = 1e-40f32);
        assert_abs_diff_ne!(NArray::from(vec![0.0f32]), NArray::from(vec![1e-40f32]), epsilon = 1e-41f32);

        // Make sure we can compare different shapes without failure.
        assert_abs_diff_ne!(a, a.reshape(4).unwrap());
    }

    #[test]
    fn relative_eq()
    {
        let a = arr(vec![1., 2., -0.000010001, 100000000.]);
        let b = arr(vec![1., 1., -0.000010002, 100000001.]);
        assert_relative_ne!(a, b);
        b.set_at(&[0, 1], 2.).unwrap();
        assert_relative_eq!(a, b);
        assert_relative_ne!(a, a.reshape(4).unwrap());
    }

    #[test]
    fn ulps_eq()
    {
        let a = arr(vec![1., 2., -0.000010001, 100000000.]);
        let b = arr(vec![1., 1., -0.000010002, 100000001.]);
        assert_ulps_ne!(a, b);
        b.set_at(&[0, 1], 2.).unwrap();
        assert_ulps_eq!(a, b);
        assert_ulps_ne!(a, a.t());
    }
}
