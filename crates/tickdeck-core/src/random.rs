//! Uniform random draws shared by the chance widgets.
//!
//! Entertainment-grade randomness: uniform distribution is the only
//! statistical requirement. Every helper takes the RNG as an argument, so
//! the CLI passes `thread_rng()` while tests pass a seeded `Pcg64Mcg`.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::ValidationError;

/// Uniform draw over `[0, n)`.
///
/// # Errors
/// `EmptyRange` when `n == 0`.
pub fn draw_uniform<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Result<usize, ValidationError> {
    if n == 0 {
        return Err(ValidationError::EmptyRange);
    }
    Ok(rng.gen_range(0..n))
}

/// Uniform draw over the inclusive range `[min, max]`.
///
/// # Errors
/// `InvalidBounds` unless `min < max`.
pub fn draw_in_range<R: Rng + ?Sized>(
    rng: &mut R,
    min: i64,
    max: i64,
) -> Result<i64, ValidationError> {
    if min >= max {
        return Err(ValidationError::InvalidBounds { min, max });
    }
    Ok(rng.gen_range(min..=max))
}

/// Uniformly random permutation in place (Fisher-Yates).
pub fn shuffle<R: Rng + ?Sized, T>(rng: &mut R, items: &mut [T]) {
    items.shuffle(rng);
}

/// Shuffle `items`, then deal item `i` into bucket `i % group_count`.
///
/// Bucket sizes differ by at most 1 and every item lands in exactly one
/// bucket.
///
/// # Errors
/// `GroupCountOutOfRange` unless `2 <= group_count <= items.len()`.
pub fn partition_round_robin<R: Rng + ?Sized, T>(
    rng: &mut R,
    mut items: Vec<T>,
    group_count: usize,
) -> Result<Vec<Vec<T>>, ValidationError> {
    if group_count < 2 || group_count > items.len() {
        return Err(ValidationError::GroupCountOutOfRange {
            group_count,
            item_count: items.len(),
        });
    }
    items.shuffle(rng);

    let mut buckets: Vec<Vec<T>> = (0..group_count).map(|_| Vec::new()).collect();
    for (i, item) in items.into_iter().enumerate() {
        buckets[i % group_count].push(item);
    }
    Ok(buckets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn rng(seed: u64) -> Pcg64Mcg {
        Pcg64Mcg::seed_from_u64(seed)
    }

    #[test]
    fn draw_uniform_of_one_is_zero() {
        assert_eq!(draw_uniform(&mut rng(1), 1).unwrap(), 0);
    }

    #[test]
    fn draw_uniform_of_zero_is_rejected() {
        assert_eq!(
            draw_uniform(&mut rng(1), 0).unwrap_err(),
            ValidationError::EmptyRange
        );
    }

    #[test]
    fn draw_in_range_is_inclusive() {
        let mut r = rng(7);
        for _ in 0..200 {
            let n = draw_in_range(&mut r, 1, 6).unwrap();
            assert!((1..=6).contains(&n));
        }
    }

    #[test]
    fn draw_in_range_rejects_inverted_bounds() {
        assert!(draw_in_range(&mut rng(1), 5, 5).is_err());
        assert!(draw_in_range(&mut rng(1), 10, 2).is_err());
    }

    #[test]
    fn round_robin_deals_five_names_into_two_buckets() {
        let items = vec!["A", "B", "C", "D", "E"];
        let buckets = partition_round_robin(&mut rng(3), items.clone(), 2).unwrap();
        assert_eq!(buckets.len(), 2);
        assert!(buckets[0].len().abs_diff(buckets[1].len()) <= 1);

        let mut all: Vec<_> = buckets.into_iter().flatten().collect();
        all.sort();
        assert_eq!(all, items);
    }

    #[test]
    fn round_robin_rejects_bad_group_counts() {
        let items = vec![1, 2, 3];
        assert!(partition_round_robin(&mut rng(1), items.clone(), 1).is_err());
        assert!(partition_round_robin(&mut rng(1), items, 4).is_err());
    }

    proptest! {
        #[test]
        fn shuffle_is_a_permutation(seed: u64, mut items: Vec<u32>) {
            let mut sorted_before = items.clone();
            sorted_before.sort_unstable();

            shuffle(&mut rng(seed), &mut items);

            let mut sorted_after = items;
            sorted_after.sort_unstable();
            prop_assert_eq!(sorted_before, sorted_after);
        }

        #[test]
        fn round_robin_buckets_balance_and_cover(
            seed: u64,
            items in proptest::collection::vec(any::<u16>(), 2..40),
            count in 2usize..40,
        ) {
            prop_assume!(count <= items.len());
            let buckets =
                partition_round_robin(&mut rng(seed), items.clone(), count).unwrap();

            prop_assert_eq!(buckets.len(), count);
            let max = buckets.iter().map(Vec::len).max().unwrap();
            let min = buckets.iter().map(Vec::len).min().unwrap();
            prop_assert!(max - min <= 1);

            let mut all: Vec<_> = buckets.into_iter().flatten().collect();
            all.sort_unstable();
            let mut expected = items;
            expected.sort_unstable();
            prop_assert_eq!(all, expected);
        }
    }
}
