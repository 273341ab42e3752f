//! Name picker: one uniform winner from a list.

use rand::Rng;

use crate::error::ValidationError;
use crate::random::draw_uniform;

/// Pick a uniformly random winner.
///
/// # Errors
/// `EmptyCollection` when `names` is empty.
pub fn pick_winner<'a, R: Rng + ?Sized>(
    rng: &mut R,
    names: &'a [String],
) -> Result<&'a str, ValidationError> {
    if names.is_empty() {
        return Err(ValidationError::EmptyCollection("names".into()));
    }
    let idx = draw_uniform(rng, names.len())?;
    Ok(&names[idx])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn single_name_always_wins() {
        let mut rng = Pcg64Mcg::seed_from_u64(1);
        let names = vec!["ADA".to_string()];
        assert_eq!(pick_winner(&mut rng, &names).unwrap(), "ADA");
    }

    #[test]
    fn winner_is_drawn_from_the_list() {
        let mut rng = Pcg64Mcg::seed_from_u64(2);
        let names: Vec<String> = ["ADA", "GRACE", "ALAN"].map(String::from).into();
        for _ in 0..30 {
            let winner = pick_winner(&mut rng, &names).unwrap();
            assert!(names.iter().any(|n| n == winner));
        }
    }

    #[test]
    fn empty_list_is_rejected() {
        let mut rng = Pcg64Mcg::seed_from_u64(3);
        assert!(matches!(
            pick_winner(&mut rng, &[]).unwrap_err(),
            ValidationError::EmptyCollection(_)
        ));
    }
}
