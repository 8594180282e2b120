#![allow(clippy::float_cmp)]

use approx::assert_abs_diff_eq;
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
fn sums()
{
    let a = range_array((3, 4));
    assert_eq!(sum(&a), 66);
    assert_eq!(sum(&a.range(1, 1, 2).unwrap()), 1 + 2 + 5 + 6 + 9 + 10);
    assert_eq!(sum(&a.slice(0, 2).unwrap()), 38);
    // a broadcast view counts every location
    assert_eq!(sum(&a.slice(0, 0).unwrap().repeat(3).unwrap()), 18);
}

#[test]
fn extremes()
{
    let a = NArray::from_shape_vec((2, 3), vec![3., -1., 7., 7., 0., -1.]).unwrap();
    assert_eq!(min(&a), Ok(-1.));
    assert_eq!(max(&a), Ok(7.));
    let (v, loc) = min_at(&a).unwrap();
    assert_eq!((v, &loc[..]), (-1., &[0, 1][..]));
    let (v, loc) = max_at(&a).unwrap();
    assert_eq!((v, &loc[..]), (7., &[0, 2][..]));

    // locations are reported in the view's coordinates
    let t = a.t();
    assert_eq!(min_at(&t).unwrap().1, [1, 0]);
    assert_eq!(max_at(&t).unwrap().1, [0, 1]);
    let f = a.flip(1).unwrap();
    assert_eq!(max_at(&f).unwrap().1, [0, 0]);
    assert_eq!(min_at(&f).unwrap().1, [0, 1]);

    let e = a.slice(0, 1).unwrap().slice(0, 2).unwrap();
    assert_eq!(min_at(&e).unwrap(), (-1., Sizes::new()));
}

#[test]
fn means()
{
    let a = range_array((2, 5)).convert_with(f64::from);
    assert_eq!(mean(&a), Ok(4.5));
    assert_eq!(mean(&a.range(1, 3, 2).unwrap()), Ok(6.));
    let thirds = NArray::from_elem((3, 3), 1. / 3.).unwrap();
    assert_abs_diff_eq!(mean(&thirds).unwrap(), 1. / 3., epsilon = 1e-12);
    assert_eq!(mean(&range_array(4)), Ok(1));
}

#[test]
fn medians()
{
    let odd = NArray::from_shape_vec(5, vec![9, 1, 8, 2, 7]).unwrap();
    assert_eq!(median(&odd), Ok(7));
    let even = NArray::from_shape_vec((2, 2), vec![4., 1., 3., 2.]).unwrap();
    assert_eq!(median(&even), Ok(3.));
    assert_eq!(median(&even.slice(0, 1).unwrap().slice(0, 0).unwrap()), Ok(3.));
    // the source is not reordered
    assert_eq!(odd.iter().collect::<Vec<_>>(), [9, 1, 8, 2, 7]);
}

#[test]
fn counts()
{
    let a = range_array((3, 3));
    assert_eq!(count(&a), 8);
    assert_eq!(count(&a.range(0, 1, 2).unwrap()), 6);
    let flags = a.convert_with(|x| x % 3 == 0);
    assert_eq!(count(&flags), 3);
    assert_eq!(count(&NArray::<bool>::new()), 0);
}

#[test]
fn empty_is_an_error()
{
    let e = NArray::<i32>::from_list((2, 2), &[1]).unwrap();
    assert!(e.is_empty());
    assert_eq!(sum(&e), 0);
    assert_eq!(min(&e).unwrap_err().kind(), ErrorKind::Empty);
    assert_eq!(max_at(&e).unwrap_err().kind(), ErrorKind::Empty);
    assert_eq!(mean(&e).unwrap_err().kind(), ErrorKind::Empty);
    assert_eq!(median(&e).unwrap_err().kind(), ErrorKind::Empty);
}

#[test]
fn mean_of_large_count_in_small_type()
{
    let a = NArray::from_elem(300, 1u8).unwrap();
    assert_eq!(mean(&a).unwrap_err().kind(), ErrorKind::DomainError);
}
