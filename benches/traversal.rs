#![feature(test)]

extern crate test;
use test::black_box;
use test::Bencher;

use narray::prelude::*;

const N: usize = 64;

#[bench]
fn add_2d_regular(bench: &mut Bencher)
{
    let a = NArray::<f64>::from_shape((N, N)).unwrap();
    let b = NArray::<f64>::from_elem((N, N), 1.).unwrap();
    bench.iter(|| {
        a.add_assign_array(&b).unwrap();
    });
}

#[bench]
fn add_2d_transposed(bench: &mut Bencher)
{
    let a = NArray::<f64>::from_shape((N, N)).unwrap();
    let b = NArray::<f64>::from_elem((N, N), 1.).unwrap();
    let bt = b.t();
    bench.iter(|| {
        a.add_assign_array(&bt).unwrap();
    });
}

#[bench]
fn add_2d_broadcast(bench: &mut Bencher)
{
    let a = NArray::<f64>::from_shape((N, N)).unwrap();
    let row = NArray::<f64>::from_elem(N, 1.).unwrap().repeat(N).unwrap().t();
    bench.iter(|| {
        a.add_assign_array(&row).unwrap();
    });
}

#[bench]
fn binary_op_alloc(bench: &mut Bencher)
{
    let a = NArray::<f32>::from_elem((N, N), 2.).unwrap();
    let b = NArray::<f32>::from_elem((N, N), 3.).unwrap();
    bench.iter(|| binary_op(&a, &b, |x, y| x * y).unwrap());
}

#[bench]
fn set_to_masked_checkerboard(bench: &mut Bencher)
{
    let a = NArray::<u8>::from_shape((N, N)).unwrap();
    let mut flag = false;
    let mask = NArray::from_shape_gen((N, N + 1), || {
        flag = !flag;
        flag
    })
    .unwrap()
    .range(1, 0, N)
    .unwrap();
    bench.iter(|| a.set_to_masked(1, &mask).unwrap());
}

#[bench]
fn set_to_array_3d_permuted(bench: &mut Bencher)
{
    let a = NArray::<i32>::from_shape((16, 16, 16)).unwrap();
    let b = NArray::<i32>::from_elem((16, 16, 16), 7).unwrap();
    let b = b.transpose(0, 2).unwrap();
    bench.iter(|| a.set_to_array(&b).unwrap());
}

#[bench]
fn median_4k(bench: &mut Bencher)
{
    let mut x = 7u32;
    let a = NArray::from_shape_gen((N, N), || {
        x = x.wrapping_mul(1_103_515_245).wrapping_add(12345);
        x
    })
    .unwrap();
    bench.iter(|| median(black_box(&a)).unwrap());
}
