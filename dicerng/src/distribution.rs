//! Distribution helpers built on raw draws
//!
//! Everything here is generic over [`RandomSource`] and consumes draws only through
//! `next_int`/`next_long`, so results are reproducible for any reproducible source.

use crate::rng::{RandomSource, RngError};

/// One die roll in `[1, sides]`
pub fn uniform_int<R: RandomSource + ?Sized>(rng: &mut R, sides: i32) -> Result<i32, RngError> {
    Ok(1 + rng.next_int(sides)?)
}

/// Uniform integer in `[lo, hi_exclusive)`
///
/// Callers wanting an inclusive upper bound pass `hi + 1` (or use [`between_inclusive`]).
///
/// # Errors
/// [`RngError::InvalidBound`] if the range is empty.
pub fn between<R: RandomSource + ?Sized>(
    rng: &mut R,
    lo: i32,
    hi_exclusive: i32,
) -> Result<i32, RngError> {
    let width = i64::from(hi_exclusive) - i64::from(lo);
    // lo + offset < hi_exclusive, so it fits back in i32
    Ok((i64::from(lo) + rng.next_long(width)?) as i32)
}

/// Uniform integer in `[lo, hi]`
///
/// Same draws as `between(lo, hi + 1)`, but defined for `hi == i32::MAX`.
pub fn between_inclusive<R: RandomSource + ?Sized>(
    rng: &mut R,
    lo: i32,
    hi: i32,
) -> Result<i32, RngError> {
    let width = i64::from(hi) - i64::from(lo) + 1;
    Ok((i64::from(lo) + rng.next_long(width)?) as i32)
}

/// Sum of `n` dice with `sides` sides; `n <= 0` sums nothing
pub fn sum_of_dice<R: RandomSource + ?Sized>(
    rng: &mut R,
    n: i32,
    sides: i32,
) -> Result<i32, RngError> {
    let mut total: i32 = 0;
    for _ in 0..n.max(0) {
        total = total
            .checked_add(uniform_int(rng, sides)?)
            .ok_or(RngError::Overflow)?;
    }
    Ok(total)
}

/// `n` independent die results in draw order
pub fn independent_rolls<R: RandomSource + ?Sized>(
    rng: &mut R,
    n: i32,
    sides: i32,
) -> Result<Vec<i32>, RngError> {
    (0..n.max(0)).map(|_| uniform_int(rng, sides)).collect()
}

/// Sum of the `n` largest values in `pool`
///
/// The pool is sorted ascending in place. Asking for more values than the pool holds sums the
/// whole pool.
///
/// # Errors
/// - [`RngError::EmptyPool`] if `n > 0` and the pool is empty
/// - [`RngError::Overflow`] if the selected values do not sum in `i32`
pub fn best_of_pool(n: i32, pool: &mut [i32]) -> Result<i32, RngError> {
    if n <= 0 {
        return Ok(0);
    }
    if pool.is_empty() {
        return Err(RngError::EmptyPool { requested: n });
    }

    pool.sort_unstable();
    pool.iter()
        .rev()
        .take(n as usize)
        .try_fold(0i32, |acc, &value| acc.checked_add(value))
        .ok_or(RngError::Overflow)
}

/// Fisher-Yates shuffle in place
pub fn shuffle<R: RandomSource + ?Sized, T>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = index_below(rng, i + 1);
        items.swap(i, j);
    }
}

/// Uniformly chosen element, `None` for an empty slice
pub fn pick<'a, R: RandomSource + ?Sized, T>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(index_below(rng, items.len()))
}

/// Uniform index in `[0, len)`; `len` must be non-zero
fn index_below<R: RandomSource + ?Sized>(rng: &mut R, len: usize) -> usize {
    match rng.next_long(len as i64) {
        Ok(index) => index as usize,
        Err(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::XorShift128Plus;

    #[test]
    fn test_best_of_pool_takes_largest() {
        let mut pool = vec![1, 5, 2, 9, 4];
        assert_eq!(best_of_pool(3, &mut pool), Ok(18));
        assert_eq!(pool, vec![1, 2, 4, 5, 9], "pool is left sorted");
    }

    #[test]
    fn test_best_of_pool_caps_at_pool_size() {
        let mut pool = vec![3, 4];
        assert_eq!(best_of_pool(5, &mut pool), Ok(7));
    }

    #[test]
    fn test_best_of_pool_empty() {
        assert_eq!(
            best_of_pool(2, &mut []),
            Err(RngError::EmptyPool { requested: 2 })
        );
        assert_eq!(best_of_pool(0, &mut []), Ok(0));
    }

    #[test]
    fn test_best_of_pool_overflow() {
        let mut pool = vec![i32::MAX, 1];
        assert_eq!(best_of_pool(2, &mut pool), Err(RngError::Overflow));
    }

    #[test]
    fn test_sum_of_zero_dice_draws_nothing() {
        let mut rng = XorShift128Plus::new(1);
        let before = rng.state();
        assert_eq!(sum_of_dice(&mut rng, 0, 6), Ok(0));
        assert_eq!(sum_of_dice(&mut rng, -3, 0), Ok(0));
        assert_eq!(rng.state(), before);
    }

    #[test]
    fn test_invalid_sides_rejected() {
        let mut rng = XorShift128Plus::new(1);
        assert_eq!(uniform_int(&mut rng, 0), Err(RngError::InvalidBound(0)));
        assert_eq!(sum_of_dice(&mut rng, 2, -1), Err(RngError::InvalidBound(-1)));
        assert_eq!(between(&mut rng, 5, 5), Err(RngError::InvalidBound(0)));
    }

    #[test]
    fn test_between_inclusive_full_range() {
        let mut rng = XorShift128Plus::new(1);
        for _ in 0..100 {
            let value = between_inclusive(&mut rng, i32::MAX - 1, i32::MAX).unwrap();
            assert!(value >= i32::MAX - 1);
        }
        assert!(between_inclusive(&mut rng, i32::MIN, i32::MAX).is_ok());
    }

    #[test]
    fn test_between_matches_inclusive_draws() {
        let mut a = XorShift128Plus::new(77);
        let mut b = XorShift128Plus::new(77);
        for _ in 0..50 {
            assert_eq!(
                between(&mut a, 10, 21).unwrap(),
                between_inclusive(&mut b, 10, 20).unwrap()
            );
        }
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = XorShift128Plus::new(4);
        let mut items: Vec<u32> = (0..20).collect();
        shuffle(&mut rng, &mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_pick() {
        let mut rng = XorShift128Plus::new(4);
        let empty: [u8; 0] = [];
        assert_eq!(pick(&mut rng, &empty), None);

        let items = ["a", "b", "c"];
        for _ in 0..20 {
            assert!(items.contains(pick(&mut rng, &items).unwrap()));
        }
    }
}
