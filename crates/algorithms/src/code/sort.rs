//! Oblivious sorting networks
//!
//! djbsort: the sequence of compare-exchange positions depends only on the
//! slice length, and each compare-exchange is branch-free.

/// Compare-exchange two `i32` values so that `a <= b`
#[inline(always)]
fn minmax_i32(a: &mut i32, b: &mut i32) {
    let ab = *b ^ *a;
    let mut c = b.wrapping_sub(*a);
    c ^= ab & (c ^ *b);
    c >>= 31;
    c &= ab;
    *a ^= c;
    *b ^= c;
}

/// Compare-exchange two `u64` values so that `a <= b`
#[inline(always)]
fn minmax_u64(a: &mut u64, b: &mut u64) {
    let z = b.wrapping_sub(*a);
    // top bit of `gt` is set iff a > b
    let gt = z ^ ((*a ^ *b) & (*a ^ z));
    let c = 0u64.wrapping_sub(gt >> 63) & (*a ^ *b);
    *a ^= c;
    *b ^= c;
}

/// The djbsort network, generic over the compare-exchange
#[inline(always)]
fn sort_network<T: Copy>(x: &mut [T], minmax: impl Fn(&mut T, &mut T)) {
    let n = x.len();
    if n < 2 {
        return;
    }

    let mut top = 1usize;
    while top < n - top {
        top += top;
    }

    let mut p = top;
    while p > 0 {
        for i in 0..n - p {
            if i & p == 0 {
                let (lo, hi) = x.split_at_mut(i + p);
                minmax(&mut lo[i], &mut hi[0]);
            }
        }

        let mut i = 0usize;
        let mut q = top;
        while q > p {
            while i < n - q {
                if i & p == 0 {
                    let mut a = x[i + p];
                    let mut r = q;
                    while r > p {
                        minmax(&mut a, &mut x[i + r]);
                        r >>= 1;
                    }
                    x[i + p] = a;
                }
                i += 1;
            }
            q >>= 1;
        }

        p >>= 1;
    }
}

/// Sort `i32` values in ascending order in constant time
pub fn int32_sort(x: &mut [i32]) {
    sort_network(x, minmax_i32);
}

/// Sort `u64` values in ascending order in constant time
pub fn uint64_sort(x: &mut [u64]) {
    sort_network(x, minmax_u64);
}
