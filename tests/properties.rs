use quickcheck::quickcheck;

use narray::prelude::*;

/// Up to four extents in `1..=4`, taken from arbitrary bytes.
fn shape_of(dims: &[u8]) -> Vec<usize>
{
    dims.iter().take(4).map(|&d| d as usize % 4 + 1).collect()
}

fn range_array(shape: &[usize]) -> NArray<u32>
{
    let mut i = 0;
    NArray::from_shape_gen(shape, || {
        i += 1;
        i - 1
    })
    .unwrap()
}

/// Apply a short sequence of flips, transposes, ranges and skips chosen by
/// `ops` to `a`; operations that do not apply are left out.
fn derive_view(a: &NArray<u32>, ops: &[u8]) -> NArray<u32>
{
    let mut v = a.clone();
    for pair in ops.chunks(2).take(6) {
        let n = v.ndim();
        if n == 0 {
            break;
        }
        let arg = pair.get(1).copied().unwrap_or(0) as usize;
        let d = arg % n;
        let len = v.sizes()[d];
        let next = match pair[0] % 4 {
            0 => v.flip(d),
            1 => v.transpose(d, (arg / n) % n),
            2 => {
                let start = (arg / n) % len;
                v.range(d, start, len - start)
            }
            _ => v.skip(d, arg % 3 + 1, 0),
        };
        if let Ok(w) = next {
            v = w;
        }
    }
    v
}

quickcheck! {
    fn fresh_arrays_are_contiguous_and_aligned(dims: Vec<u8>) -> bool {
        let shape = shape_of(&dims);
        let a = NArray::<u8>::from_shape(&shape[..]).unwrap();
        a.size() == shape.iter().product::<usize>()
            && a.is_contiguous()
            && a.is_aligned()
            && a.is_unique()
            && !a.is_subarray()
    }

    fn flip_is_an_involution(dims: Vec<u8>, ops: Vec<u8>, d: usize) -> bool {
        let a = range_array(&shape_of(&dims));
        let v = derive_view(&a, &ops);
        if v.ndim() == 0 {
            return true;
        }
        let d = d % v.ndim();
        let ff = v.flip(d).unwrap().flip(d).unwrap();
        ff.as_ptr() == v.as_ptr() && ff.steps() == v.steps() && ff == v
    }

    fn transpose_is_an_involution(dims: Vec<u8>, ops: Vec<u8>, i: usize, j: usize) -> bool {
        let a = range_array(&shape_of(&dims));
        let v = derive_view(&a, &ops);
        if v.ndim() == 0 {
            return true;
        }
        let (i, j) = (i % v.ndim(), j % v.ndim());
        let tt = v.transpose(i, j).unwrap().transpose(i, j).unwrap();
        tt.sizes() == v.sizes() && tt.steps() == v.steps() && tt == v
    }

    fn copies_are_independent(dims: Vec<u8>, ops: Vec<u8>) -> bool {
        let a = range_array(&shape_of(&dims));
        let v = derive_view(&a, &ops);
        let before: Vec<u32> = v.iter().collect();
        let c = v.to_owned();
        let equal = c == v && c.is_unique() && c.is_contiguous() && c.is_aligned();
        c.map_inplace(|x| x + 1);
        let source_kept = v.iter().eq(before.iter().copied());
        a.fill(0);
        let copy_kept = c.iter().eq(before.iter().map(|x| x + 1));
        equal && source_kept && copy_kept
    }

    fn contiguous_iff_condenses_to_one_run(dims: Vec<u8>, ops: Vec<u8>) -> bool {
        let a = range_array(&shape_of(&dims));
        let v = derive_view(&a, &ops);
        let c = v.as_aligned().as_condensed();
        let one_run = c.ndim() == 0 || (c.ndim() == 1 && (c.size() == 1 || c.steps()[0] == 1));
        v.is_contiguous() == one_run && c.size() == v.size()
    }

    fn aligning_keeps_the_element_set(dims: Vec<u8>, ops: Vec<u8>) -> bool {
        let a = range_array(&shape_of(&dims));
        let v = derive_view(&a, &ops);
        let al = v.as_aligned();
        let mut x: Vec<u32> = v.iter().collect();
        let y: Vec<u32> = al.iter().collect();
        x.sort_unstable();
        al.is_aligned() && x == y
    }

    fn identity_reshape(dims: Vec<u8>, ops: Vec<u8>) -> bool {
        let a = range_array(&shape_of(&dims));
        let v = derive_view(&a, &ops);
        match v.reshape(v.sizes()) {
            Ok(r) => r.sizes() == v.sizes() && r == v,
            Err(_) => false,
        }
    }

    fn reshape_of_an_aligned_copy_always_succeeds(dims: Vec<u8>, ops: Vec<u8>) -> bool {
        let a = range_array(&shape_of(&dims));
        let c = derive_view(&a, &ops).to_owned();
        let flat = c.reshape(c.size()).unwrap();
        flat.iter().eq(c.iter()) && flat.steps() == [1]
    }
}
