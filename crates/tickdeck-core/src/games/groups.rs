//! Group generator: deal a name list into evenly sized random groups.

use rand::Rng;

use crate::error::ValidationError;
use crate::random::partition_round_robin;

/// Split newline-separated input into trimmed, non-empty names.
pub fn parse_names(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(String::from)
        .collect()
}

/// Shuffle `names` and deal them round-robin into `group_count` groups.
///
/// # Errors
/// `EmptyCollection` with fewer than 2 names; `GroupCountOutOfRange` unless
/// `2 <= group_count <= names.len()`.
pub fn generate_groups<R: Rng + ?Sized>(
    rng: &mut R,
    names: Vec<String>,
    group_count: usize,
) -> Result<Vec<Vec<String>>, ValidationError> {
    if names.len() < 2 {
        return Err(ValidationError::EmptyCollection(
            "at least 2 names are required".into(),
        ));
    }
    partition_round_robin(rng, names, group_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn parse_drops_blank_lines_and_trims() {
        let names = parse_names("  ADA \n\nGRACE\n   \nALAN\n");
        assert_eq!(names, vec!["ADA", "GRACE", "ALAN"]);
    }

    #[test]
    fn groups_cover_everyone_evenly() {
        let mut rng = Pcg64Mcg::seed_from_u64(5);
        let names: Vec<String> = ["A", "B", "C", "D", "E"].map(String::from).into();
        let groups = generate_groups(&mut rng, names.clone(), 2).unwrap();

        assert_eq!(groups.len(), 2);
        assert!(groups[0].len().abs_diff(groups[1].len()) <= 1);
        let mut all: Vec<_> = groups.into_iter().flatten().collect();
        all.sort();
        let mut expected = names;
        expected.sort();
        assert_eq!(all, expected);
    }

    #[test]
    fn too_few_names_is_rejected() {
        let mut rng = Pcg64Mcg::seed_from_u64(6);
        let err = generate_groups(&mut rng, vec!["SOLO".into()], 2).unwrap_err();
        assert!(matches!(err, ValidationError::EmptyCollection(_)));
    }

    #[test]
    fn group_count_must_fit_the_roster() {
        let mut rng = Pcg64Mcg::seed_from_u64(7);
        let names: Vec<String> = ["A", "B", "C"].map(String::from).into();
        assert!(generate_groups(&mut rng, names.clone(), 1).is_err());
        assert!(generate_groups(&mut rng, names, 4).is_err());
    }
}
