// Copyright 2024 narray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::error::NArrayError;
use crate::free_functions::binary_op;
use crate::imp_prelude::*;

/// Elements that can be used as direct operands in arithmetic with arrays.
///
/// For example, `f64` is a `ScalarOperand` which means that for an array `a`,
/// arithmetic like `&a + 1.0`, and, `&a * 2.`, and `a += 3.` are allowed.
///
/// ***Left hand side*** scalar operands are not related to this trait
/// (they need one `impl` per concrete scalar type); but they are still
/// implemented for the same types, allowing operations `K @ &A` for
/// primitive numeric types `K`.
pub trait ScalarOperand: 'static + Clone {}
impl ScalarOperand for bool {}
impl ScalarOperand for i8 {}
impl ScalarOperand for u8 {}
impl ScalarOperand for i16 {}
impl ScalarOperand for u16 {}
impl ScalarOperand for i32 {}
impl ScalarOperand for u32 {}
impl ScalarOperand for i64 {}
impl ScalarOperand for u64 {}
impl ScalarOperand for i128 {}
impl ScalarOperand for u128 {}
impl ScalarOperand for isize {}
impl ScalarOperand for usize {}
impl ScalarOperand for f32 {}
impl ScalarOperand for f64 {}

macro_rules! impl_binary_op(
    ($trt:ident, $operator:tt, $mth:ident, $doc:expr) => (
/// Perform elementwise
#[doc=$doc]
/// between reference `self` and reference `rhs`,
/// and return the result as a new array.
///
/// **Panics** if the shapes differ; see [`binary_op`] for the fallible
/// form.
impl<'a, 'b, A, B, K, L> $trt<&'b NArray<B, L>> for &'a NArray<A, K>
where
    A: Clone + $trt<B, Output = A>,
    B: Clone,
    K: Access,
    L: Access,
{
    type Output = NArray<A>;
    fn $mth(self, rhs: &'b NArray<B, L>) -> NArray<A>
    {
        binary_op(self, rhs, |x, y| x $operator y).unwrap_or_else(|e| panic!("{}", e))
    }
}

/// Perform elementwise
#[doc=$doc]
/// between the reference `self` and the scalar `x`,
/// and return the result as a new array.
impl<'a, A, K, S> $trt<S> for &'a NArray<A, K>
where
    A: Clone + $trt<S, Output = A>,
    K: Access,
    S: ScalarOperand,
{
    type Output = NArray<A>;
    fn $mth(self, x: S) -> NArray<A>
    {
        self.convert_with(|elt| elt $operator x.clone())
    }
}
    );
);

// Pick the expression $a for commutative and $b for ordered binop
macro_rules! if_commutative {
    (Commute { $a:expr } or { $b:expr }) => {
        $a
    };
    (Ordered { $a:expr } or { $b:expr }) => {
        $b
    };
}

macro_rules! impl_scalar_lhs_op {
    // $commutative flag. Reuse the self + scalar impl if we can.
    // We can do this safely since these are the primitive numeric types
    ($scalar:ty, $commutative:ident, $operator:tt, $trt:ident, $mth:ident, $doc:expr) => (
// these have no doc -- they are not visible in rustdoc
// Perform elementwise
// between the scalar `self` and array `rhs`,
// and return the result as a new array.
impl<'a, K: Access> $trt<&'a NArray<$scalar, K>> for $scalar
{
    type Output = NArray<$scalar>;
    fn $mth(self, rhs: &'a NArray<$scalar, K>) -> NArray<$scalar>
    {
        if_commutative!($commutative {
            rhs $operator self
        } or {
            rhs.convert_with(|x| self $operator x)
        })
    }
}
    );
}

mod arithmetic_ops
{
    use super::*;
    use std::ops::*;

    impl_binary_op!(Add, +, add, "addition");
    impl_binary_op!(Sub, -, sub, "subtraction");
    impl_binary_op!(Mul, *, mul, "multiplication");
    impl_binary_op!(Div, /, div, "division");
    impl_binary_op!(Rem, %, rem, "remainder");

    macro_rules! all_scalar_ops {
        ($scalar:ty) => (
            impl_scalar_lhs_op!($scalar, Commute, +, Add, add, "addition");
            impl_scalar_lhs_op!($scalar, Ordered, -, Sub, sub, "subtraction");
            impl_scalar_lhs_op!($scalar, Commute, *, Mul, mul, "multiplication");
            impl_scalar_lhs_op!($scalar, Ordered, /, Div, div, "division");
            impl_scalar_lhs_op!($scalar, Ordered, %, Rem, rem, "remainder");
        );
    }
    all_scalar_ops!(i8);
    all_scalar_ops!(u8);
    all_scalar_ops!(i16);
    all_scalar_ops!(u16);
    all_scalar_ops!(i32);
    all_scalar_ops!(u32);
    all_scalar_ops!(i64);
    all_scalar_ops!(u64);
    all_scalar_ops!(isize);
    all_scalar_ops!(usize);
    all_scalar_ops!(i128);
    all_scalar_ops!(u128);
    all_scalar_ops!(f32);
    all_scalar_ops!(f64);

    impl<'a, A, K> Neg for &'a NArray<A, K>
    where
        A: Clone + Neg<Output = A>,
        K: Access,
    {
        type Output = NArray<A>;
        /// Perform an elementwise negation of reference `self` and return the
        /// result as a new array.
        fn neg(self) -> NArray<A>
        {
            self.convert_with(Neg::neg)
        }
    }

    impl<'a, A, K> Not for &'a NArray<A, K>
    where
        A: Clone + Not<Output = A>,
        K: Access,
    {
        type Output = NArray<A>;
        /// Perform an elementwise unary not of reference `self` and return the
        /// result as a new array.
        fn not(self) -> NArray<A>
        {
            self.convert_with(Not::not)
        }
    }
}

mod assign_ops
{
    use super::*;
    use std::ops::*;

    macro_rules! impl_assign_op {
        ($trt:ident, $method:ident, $fallible:ident, $doc:expr) => {
            impl<A, K> NArray<A, K>
            where K: Writable
            {
                #[doc = $doc]
                /// each element of `self` with the element of `rhs` at the
                /// same location, in place.
                ///
                /// Errors with `InvalidArgument` if the shapes differ.
                pub fn $fallible<B, L>(&self, rhs: &NArray<B, L>) -> Result<(), NArrayError>
                where
                    A: Clone + $trt<B>,
                    B: Clone,
                    L: Access,
                {
                    self.zip_mut_with(rhs, |mut x, y| {
                        x.$method(y);
                        x
                    })
                }
            }

            #[doc = $doc]
            /// each element of `self` with the element of `rhs` at the same
            /// location, in place.
            ///
            /// **Panics** if the shapes differ.
            impl<'a, A, B, K, L> $trt<&'a NArray<B, L>> for NArray<A, K>
            where
                A: Clone + $trt<B>,
                B: Clone,
                K: Writable,
                L: Access,
            {
                fn $method(&mut self, rhs: &NArray<B, L>)
                {
                    self.$fallible(rhs).unwrap_or_else(|e| panic!("{}", e))
                }
            }

            #[doc = $doc]
            /// each element of `self` with the scalar `rhs`, in place.
            impl<A, K, S> $trt<S> for NArray<A, K>
            where
                A: Clone + $trt<S>,
                K: Writable,
                S: ScalarOperand,
            {
                fn $method(&mut self, rhs: S)
                {
                    self.map_inplace(move |mut x| {
                        x.$method(rhs.clone());
                        x
                    });
                }
            }
        };
    }

    impl_assign_op!(AddAssign, add_assign, add_assign_array, "Perform `self += rhs` as elementwise addition of");
    impl_assign_op!(SubAssign, sub_assign, sub_assign_array, "Perform `self -= rhs` as elementwise subtraction of");
    impl_assign_op!(MulAssign, mul_assign, mul_assign_array, "Perform `self *= rhs` as elementwise multiplication of");
    impl_assign_op!(DivAssign, div_assign, div_assign_array, "Perform `self /= rhs` as elementwise division of");
}
