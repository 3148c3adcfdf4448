//! Tests for ordering construction, inversion and composition

#[cfg(test)]
mod tests {
    use retile::algorithm::ordering::{
        compose, format_ordering, identity, inverse, reversed, shuffled,
    };
    use retile::algorithm::validation::is_permutation;

    // Tests identity and reversal produce the expected sequences
    // Verified by swapping the two constructors
    #[test]
    fn test_identity_and_reversed() {
        assert_eq!(identity(4), vec![0, 1, 2, 3]);
        assert_eq!(reversed(4), vec![3, 2, 1, 0]);
        assert!(identity(0).is_empty());
    }

    // Tests inversion maps each destination back to its source
    // Verified by returning the input unchanged
    #[test]
    fn test_inverse() {
        assert_eq!(inverse(&[2, 0, 1]), Some(vec![1, 2, 0]));
        assert_eq!(inverse(&[3, 2, 1, 0]), Some(vec![3, 2, 1, 0]));
    }

    // Tests non-permutations have no inverse
    // Verified by skipping the permutation check
    #[test]
    fn test_inverse_rejects_non_permutations() {
        assert_eq!(inverse(&[0, 0, 1]), None);
        assert_eq!(inverse(&[0, 3]), None);
    }

    // Tests composing with the inverse yields the identity
    // Verified by reversing the composition order in compose
    #[test]
    fn test_compose_with_inverse_is_identity() {
        let ordering = vec![4, 1, 5, 0, 3, 2];
        let Some(undo) = inverse(&ordering) else {
            unreachable!("ordering is a permutation");
        };

        assert_eq!(compose(&ordering, &undo), Some(identity(6)));
        assert_eq!(compose(&undo, &ordering), Some(identity(6)));
    }

    // Tests composition order: first applied, then second
    // Verified by swapping the arguments inside compose
    #[test]
    fn test_compose_order() {
        // Rotate left by one, then swap the first two cells
        let first = vec![1, 2, 0];
        let second = vec![1, 0, 2];
        assert_eq!(compose(&first, &second), Some(vec![2, 1, 0]));
    }

    // Tests composition of mismatched lengths or out-of-range entries fails
    // Verified by removing the length guard
    #[test]
    fn test_compose_rejects_mismatches() {
        assert_eq!(compose(&[0, 1], &[0]), None);
        assert_eq!(compose(&[0, 1], &[0, 2]), None);
    }

    // Tests shuffles are seeded permutations
    // Verified by seeding from entropy
    #[test]
    fn test_shuffled_is_reproducible_permutation() {
        let first = shuffled(64, 7);
        let second = shuffled(64, 7);

        assert_eq!(first, second);
        assert!(is_permutation(&first, 64));
        assert_ne!(first, identity(64));
    }

    // Tests formatting matches the CLI's comma separated input
    // Verified by changing the separator
    #[test]
    fn test_format_ordering() {
        assert_eq!(format_ordering(&[3, 2, 1, 0]), "3,2,1,0");
        assert_eq!(format_ordering(&[]), "");
    }
}
