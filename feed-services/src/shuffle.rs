//! Unbiased in-place shuffle

use rand::Rng;

/// Fisher–Yates shuffle, walking from the end of the slice
///
/// Every permutation is equally likely given a uniform `rng`. Slices of
/// length 0 or 1 are left untouched.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
