#![allow(clippy::float_cmp)]

use itertools::assert_equal;
use narray::prelude::*;

fn arr<A: Clone>(shape: (usize, usize), v: &[A]) -> NArray<A>
{
    NArray::from_shape_vec(shape, v.to_vec()).unwrap()
}

#[test]
fn elementwise_arrays()
{
    let a = arr((2, 2), &[1, 2, 3, 4]);
    let b = arr((2, 2), &[10, 20, 30, 40]);
    assert_equal((&a + &b).iter(), [11, 22, 33, 44]);
    assert_equal((&b - &a).iter(), [9, 18, 27, 36]);
    assert_equal((&a * &b).iter(), [10, 40, 90, 160]);
    assert_equal((&b / &a).iter(), [10, 10, 10, 10]);
    assert_equal((&b % &arr((2, 2), &[3, 7, 4, 9])).iter(), [1, 6, 2, 4]);

    // operands in different layouts combine location by location
    assert_equal((&a + &b.t()).iter(), [11, 32, 23, 44]);
    let sum = &a.flip(0).unwrap() + &a;
    assert_equal(sum.iter(), [4, 6, 4, 6]);
    assert!(sum.is_unique() && sum.is_aligned());
}

#[test]
fn mixed_element_types()
{
    use std::time::Duration;
    let t = NArray::from_elem(2, Duration::from_secs(1)).unwrap();
    let n = NArray::from_shape_vec(2, vec![2u32, 5]).unwrap();
    let scaled = &t * &n;
    assert_equal(scaled.iter(), [Duration::from_secs(2), Duration::from_secs(5)]);
}

#[test]
fn scalars()
{
    let a = arr((2, 3), &[1., 2., 3., 4., 5., 6.]);
    assert_equal((&a + 1.).iter(), [2., 3., 4., 5., 6., 7.]);
    assert_equal((&a / 2.).iter(), [0.5, 1., 1.5, 2., 2.5, 3.]);
    assert_equal((12f64 / &a).iter(), [12., 6., 4., 3., 2.4, 2.]);
    assert_equal((1f64 - &a).iter(), [0., -1., -2., -3., -4., -5.]);
    assert_equal((2f64 * &a.t()).iter(), [2., 8., 4., 10., 6., 12.]);
    assert_equal((7u8 % &arr((1, 3), &[2u8, 3, 4])).iter(), [1, 1, 3]);
}

#[test]
fn unary()
{
    let a = arr((1, 3), &[1, -2, 3]);
    assert_equal((-&a).iter(), [-1, 2, -3]);
    let m = arr((2, 1), &[true, false]);
    assert_equal((!&m).iter(), [false, true]);
}

#[test]
#[should_panic]
fn mismatched_operands_panic()
{
    let a = arr((2, 2), &[1, 2, 3, 4]);
    let _ = &a + &a.reshape(4).unwrap();
}

#[test]
fn compound_assignment()
{
    let mut a = arr((2, 2), &[1, 2, 3, 4]);
    let b = arr((2, 2), &[1, 1, 2, 2]);
    a += &b;
    assert_equal(a.iter(), [2, 3, 5, 6]);
    a *= 10;
    assert_equal(a.iter(), [20, 30, 50, 60]);
    a -= &b.t();
    assert_equal(a.iter(), [19, 28, 49, 58]);
    a /= 2;
    assert_equal(a.iter(), [9, 14, 24, 29]);

    // a view writes through to its source
    let mut col = a.slice(1, 0).unwrap();
    col *= -1;
    assert_equal(a.iter(), [-9, 14, -24, 29]);
}

#[test]
#[should_panic]
fn compound_assignment_mismatch_panics()
{
    let mut a = arr((2, 3), &[0; 6]);
    let t = a.t();
    a += &t;
}

#[test]
fn fallible_compound_assignment()
{
    let a = arr((2, 2), &[1., 2., 3., 4.]);
    let b = arr((1, 4), &[1., 1., 1., 1.]);
    assert_eq!(a.mul_assign_array(&b).unwrap_err().kind(), ErrorKind::InvalidArgument);
    let flipped = a.to_owned().flip(0).unwrap();
    assert_eq!(a.div_assign_array(&flipped), Ok(()));
    assert_equal(a.iter(), [1. / 3., 2. / 4., 3., 2.]);
}

#[test]
fn read_only_operands()
{
    let a = arr((1, 2), &[1, 2]);
    let c: ConstNArray<i32> = a.to_owned().into();
    let r = &c + &a;
    assert_equal(r.iter(), [2, 4]);
    r.set_at(&[0, 0], 0).unwrap();
    let mut w = a.clone();
    w += &c;
    assert_equal(a.iter(), [2, 4]);
}
