#![allow(clippy::many_single_char_names, clippy::float_cmp)]

use defmac::defmac;
use itertools::assert_equal;
use narray::prelude::*;

fn range_array<Sh: IntoDims>(shape: Sh) -> NArray<i32>
{
    let mut i = 0;
    NArray::from_shape_gen(shape, || {
        i += 1;
        i - 1
    })
    .unwrap()
}

#[test]
fn construct_default_and_sized()
{
    let a = NArray::<f64>::new();
    assert!(a.is_empty());
    assert_eq!(a.ndim(), 0);
    assert_eq!(a.size(), 0);
    assert!(!a.is_unique() && !a.is_shared());
    assert!(!a.is_contiguous() && !a.is_aligned() && !a.is_subarray());

    let b = NArray::<f64>::from_shape((3, 4, 5)).unwrap();
    assert_eq!(b.sizes(), &[3, 4, 5]);
    assert_eq!(b.steps(), &[20, 5, 1]);
    assert_eq!(b.size(), 60);
    assert!(b.is_unique());
    assert!(b.is_contiguous() && b.is_aligned());
    assert!(!b.is_subarray());
    assert!(b.iter().all(|x| x == 0.));
}

#[test]
fn zero_extent_is_invalid()
{
    defmac!(fails shape => {
        let e = NArray::<u8>::from_shape(shape).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);
    });
    fails!([0usize]);
    fails!([0usize, 1]);
    fails!([2usize, 0]);
    fails!([1usize, 2, 0]);
    assert!(NArray::from_elem((3, 0), 1.).is_err());
    assert!(NArray::from_shape_vec(0, Vec::<i32>::new()).is_err());
}

#[test]
fn generator_runs_in_row_major_order()
{
    let a = range_array((2, 3, 4));
    assert_equal(a.iter(), 0..24);
    assert_eq!(a.at(&[1, 2, 3]), Ok(23));
    assert_eq!(a.at(&[1, 0, 2]), Ok(14));
}

#[test]
fn from_list_mismatch_gives_empty()
{
    let a = NArray::from_list((2, 3), &[1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(a.at(&[1, 1]), Ok(5));
    let b = NArray::from_list((2, 3), &[1, 2, 3, 4, 5]).unwrap();
    assert!(b.is_empty());
    assert_eq!(b.ndim(), 2);
    assert_eq!(b.sizes(), &[0, 0]);
    assert_eq!(b.at(&[0, 0]).unwrap_err().kind(), ErrorKind::Empty);
}

#[test]
fn acquisition_modes()
{
    let owned = NArray::from_shape_vec((2, 2), vec![1, 2, 3, 4]).unwrap();
    assert_eq!(owned.at(&[1, 0]), Ok(3));

    let source = vec![String::from("a"), String::from("b")];
    let copied = NArray::from_shape_copy(2, &source).unwrap();
    copied.set_at(&[0], String::from("z")).unwrap();
    assert_eq!(source[0], "a");
    assert_eq!(copied.at(&[0]).unwrap(), "z");

    let mut external = [1u8, 2, 3, 4, 5, 6];
    {
        let view = unsafe { NArray::from_shape_ptr((3, 2), external.as_mut_ptr()).unwrap() };
        view.t().set_at(&[1, 2], 0).unwrap();
    }
    assert_eq!(external, [1, 2, 3, 4, 5, 0]);
    let null = unsafe { NArray::<u8>::from_shape_ptr(3, std::ptr::null_mut()) };
    assert_eq!(null.unwrap_err().kind(), ErrorKind::InvalidArgument);
}

#[test]
fn from_iterators()
{
    let a = NArray::from_shape_iter((2, 3), (1..).map(|i| i * 10)).unwrap();
    assert_equal(a.iter(), [10, 20, 30, 40, 50, 60]);
    let short = NArray::from_shape_iter((2, 2), "ab".chars()).unwrap();
    assert_equal(short.iter(), ['a', 'b', '\0', '\0']);
    let mut it = 0..10;
    let b = NArray::from_shape_iter(3, it.by_ref()).unwrap();
    assert_equal(b.iter(), 0..3);
    assert_eq!(it.next(), Some(3));
    assert_eq!(
        NArray::from_shape_iter((2, 0), 0..).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
}

#[test]
fn named_extents()
{
    let a = NArray::<u8>::from_shape((4, 5)).unwrap();
    assert_eq!(a.width(), Ok(4));
    assert_eq!(a.height(), Ok(5));
    assert_eq!(a.depth().unwrap_err().kind(), ErrorKind::OutOfRange);
    assert_eq!(a.len_of(1), Ok(5));
    assert!(a.len_of(2).is_err());
    assert_eq!(a.step_of(0), Ok(5));
    assert_eq!(a.flip(1).unwrap().step_of(1), Ok(-1));
    assert_eq!(a.step_of(2).unwrap_err().kind(), ErrorKind::OutOfRange);
}

#[test]
fn at_checks_bounds()
{
    let a = range_array((3, 4));
    assert_eq!(a.at(&[2, 3]), Ok(11));
    for loc in [&[3, 0][..], &[0, 4], &[0], &[0, 0, 0]] {
        assert_eq!(a.at(loc).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert!(a.set_at(loc, 0).is_err());
    }
    assert_eq!(unsafe { a.at_unchecked(&[1, 1]) }, 5);
    unsafe { a.set_at_unchecked(&[1, 1], 50) };
    assert_eq!(a.at(&[1, 1]), Ok(50));
}

#[test]
fn clone_is_shallow()
{
    let a = range_array(4);
    assert!(a.is_unique());
    let b = a.clone();
    assert!(a.is_shared() && b.is_shared());
    b.set_at(&[2], 100).unwrap();
    assert_eq!(a.at(&[2]), Ok(100));
    drop(b);
    assert!(a.is_unique());

    let deep = a.to_owned();
    deep.fill(0);
    assert_eq!(a.at(&[2]), Ok(100));
}

#[test]
fn take_and_clear()
{
    let mut a = range_array((2, 2));
    let b = std::mem::take(&mut a);
    assert!(a.is_empty());
    assert_eq!(b.size(), 4);

    let mut c = b.clone();
    c.clear();
    assert!(c.is_empty());
    assert_eq!(c.ndim(), 2);
    assert_eq!(c.sizes(), &[0, 0]);
    assert!(b.is_unique());
}

#[test]
fn read_only_arrays()
{
    let a = range_array((2, 3));
    let c: ConstNArray<i32> = a.clone().into();
    let view = c.flip(1).unwrap();
    assert_eq!(view.at(&[0, 0]), Ok(2));
    a.set_at(&[0, 2], -1).unwrap();
    assert_eq!(view.at(&[0, 0]), Ok(-1));
    assert_eq!(a.as_const(), c);
    assert_eq!(view.to_owned().steps(), &[3, 1]);
}

#[test]
fn zero_dim_value()
{
    let a = range_array(3);
    let e = a.slice(0, 2).unwrap();
    assert_eq!(e.ndim(), 0);
    assert_eq!(e.size(), 1);
    assert_eq!(e.value(), Ok(2));
    e.set_value(20).unwrap();
    assert_eq!(a.at(&[2]), Ok(20));
    assert_eq!(e.at(&[]), Ok(20));
    assert_eq!(a.value().unwrap_err().kind(), ErrorKind::DomainError);
    assert_eq!(NArray::<i32>::new().value().unwrap_err().kind(), ErrorKind::Empty);
}

#[test]
fn subarray_flag()
{
    let a = range_array((3, 3));
    assert!(!a.is_subarray());
    assert!(a.range(0, 0, 2).unwrap().is_subarray());
    assert!(!a.t().is_subarray());
    // the broadcast view addresses fewer distinct elements but more locations
    assert!(!a.repeat(2).unwrap().is_subarray());
}

#[test]
fn convert()
{
    let a = NArray::from_shape_vec((2, 2), vec![1u8, 2, 3, 250]).unwrap();
    let b: NArray<u32> = a.convert_to();
    assert_equal(b.iter(), [1, 2, 3, 250]);
    let c = a.convert_with(|x| x as i8);
    assert_eq!(c.at(&[1, 1]), Ok(-6));
    let d = a.t().convert_with(|x| f64::from(x) / 2.);
    assert_equal(d.iter(), [0.5, 1.5, 1., 125.]);
}

#[test]
fn compress_trailing_dimensions()
{
    let a = range_array((2, 3, 4));
    let s = a.compress(2, |sub| sum(&sub)).unwrap();
    assert_eq!(s.sizes(), &[2, 3]);
    assert_equal(s.iter(), [6, 22, 38, 54, 70, 86]);

    let total = a.compress(0, |sub| sum(&sub)).unwrap();
    assert_eq!(total.ndim(), 0);
    assert_eq!(total.value(), Ok(276));

    let same = a.compress(3, |sub| sub.value().unwrap() * 2).unwrap();
    assert_equal(same.iter(), (0..24).map(|x| x * 2));

    let mut calls = Vec::new();
    a.compress(1, |sub| calls.push(sub.at(&[0, 0]).unwrap())).unwrap();
    assert_eq!(calls, [0, 12]);

    assert_eq!(a.compress(4, |_| 0).unwrap_err().kind(), ErrorKind::OutOfRange);
    assert_eq!(NArray::<i32>::new().compress(0, |_| 0).unwrap_err().kind(), ErrorKind::Empty);
}

#[test]
fn all_and_any()
{
    let a = range_array((3, 3));
    assert!(a.all_of(|x| x < 9));
    assert!(!a.all_of(|x| x < 8));
    assert!(a.any_of(|x| x == 4));
    assert!(!a.any_of(|x| x > 8));
    let e = NArray::<i32>::new();
    assert!(e.all_of(|_| false));
    assert!(!e.any_of(|_| true));

    let mut seen = 0;
    a.any_of(|x| {
        seen += 1;
        x == 2
    });
    assert_eq!(seen, 3);
}

#[test]
fn for_each_visits_row_major()
{
    let a = range_array((2, 3));
    let mut v = Vec::new();
    a.t().for_each(|x| v.push(x));
    assert_eq!(v, [0, 3, 1, 4, 2, 5]);
}

#[test]
fn from_vec_is_one_dimensional()
{
    let a = NArray::from(vec![1, 2, 3]);
    assert_eq!(a.sizes(), &[3]);
    assert!(a.is_unique());
    let e = NArray::from(Vec::<u8>::new());
    assert!(e.is_empty());
    assert_eq!(e.ndim(), 1);
}

#[test]
fn elements_dropped_once()
{
    use std::rc::Rc;
    let token = Rc::new(());
    let a = NArray::from_elem((2, 3), token.clone()).unwrap();
    assert_eq!(Rc::strong_count(&token), 7);
    let v = a.range(1, 0, 2).unwrap();
    drop(a);
    assert_eq!(Rc::strong_count(&token), 7);
    v.set_at(&[0, 0], Rc::new(())).unwrap();
    assert_eq!(Rc::strong_count(&token), 6);
    drop(v);
    assert_eq!(Rc::strong_count(&token), 1);
}
