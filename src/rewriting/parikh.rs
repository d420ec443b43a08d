//! Letter-count (Parikh) analysis of string rewriting systems.
//!
//! Abelianizing a system forgets letter order and keeps only counts: a
//! string maps to its Parikh vector, and a rule to the fixed delta it adds
//! to that vector on every application. The Parikh vector of any reachable
//! string is the root's vector plus a non-negative integer combination of
//! the rule columns of [`rule_delta_matrix`] — a cheap necessary condition
//! for reachability.

use nalgebra::{DMatrix, DVector};

use crate::rewriting::rule::RuleSet;

/// Every letter appearing in the rules or the root, sorted and deduplicated.
///
/// # Arguments
///
/// * `rules` - The rule set contributing find and replace letters
/// * `root` - The root string of the exploration
///
/// # Returns
///
/// Returns the alphabet the system's strings are drawn from
pub fn alphabet(rules: &RuleSet, root: &str) -> Vec<char> {
    let mut letters: Vec<char> = rules
        .iter()
        .flat_map(|rule| rule.find().chars().chain(rule.replace().chars()))
        .chain(root.chars())
        .collect();
    letters.sort_unstable();
    letters.dedup();
    letters
}

/// The Parikh vector of `s`: entry `i` counts occurrences of `alphabet[i]`.
///
/// Letters outside the alphabet do not contribute.
pub fn parikh_vector(s: &str, alphabet: &[char]) -> DVector<i32> {
    let mut counts = vec![0i32; alphabet.len()];
    for c in s.chars() {
        if let Some(at) = alphabet.iter().position(|&letter| letter == c) {
            counts[at] += 1;
        }
    }
    DVector::from_vec(counts)
}

/// The abelianized rule matrix: column `j` is
/// `parikh(replace_j) - parikh(find_j)`.
pub fn rule_delta_matrix(rules: &RuleSet, alphabet: &[char]) -> DMatrix<i32> {
    if rules.is_empty() {
        return DMatrix::zeros(alphabet.len(), 0);
    }

    let columns: Vec<DVector<i32>> = rules
        .iter()
        .map(|rule| parikh_vector(rule.replace(), alphabet) - parikh_vector(rule.find(), alphabet))
        .collect();

    DMatrix::from_columns(&columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewriting::explorer::{ExploreConfig, explore};

    #[test]
    fn alphabet_is_sorted_and_deduplicated() {
        let rules = RuleSet::parse_specs(["ba->ab", "c->a"]).unwrap();
        assert_eq!(alphabet(&rules, "cab"), vec!['a', 'b', 'c']);
    }

    #[test]
    fn parikh_vector_counts_letters() {
        let letters = ['0', '1'];
        let vector = parikh_vector("0110", &letters);
        assert_eq!(vector[0], 2);
        assert_eq!(vector[1], 2);
    }

    #[test]
    fn letters_outside_the_alphabet_are_ignored() {
        let vector = parikh_vector("0x1x", &['0', '1']);
        assert_eq!(vector[0], 1);
        assert_eq!(vector[1], 1);
    }

    #[test]
    fn delta_matrix_single_rule() {
        // 0 -> 1 trades one 0 for one 1
        let rules = RuleSet::parse_specs(["0->1"]).unwrap();
        let matrix = rule_delta_matrix(&rules, &['0', '1']);

        assert_eq!(matrix.nrows(), 2);
        assert_eq!(matrix.ncols(), 1);
        assert_eq!(matrix[(0, 0)], -1);
        assert_eq!(matrix[(1, 0)], 1);
    }

    #[test]
    fn swap_rules_have_a_zero_column() {
        let rules = RuleSet::parse_specs(["01->10"]).unwrap();
        let matrix = rule_delta_matrix(&rules, &['0', '1']);

        assert_eq!(matrix[(0, 0)], 0);
        assert_eq!(matrix[(1, 0)], 0);
    }

    #[test]
    fn delta_matrix_multiple_rules() {
        let rules = RuleSet::parse_specs(["0->1", "1->2"]).unwrap();
        let matrix = rule_delta_matrix(&rules, &['0', '1', '2']);

        assert_eq!(matrix.nrows(), 3);
        assert_eq!(matrix.ncols(), 2);
        assert_eq!(matrix[(0, 0)], -1);
        assert_eq!(matrix[(1, 0)], 1);
        assert_eq!(matrix[(2, 0)], 0);
        assert_eq!(matrix[(0, 1)], 0);
        assert_eq!(matrix[(1, 1)], -1);
        assert_eq!(matrix[(2, 1)], 1);
    }

    #[test]
    fn empty_rule_set_yields_an_empty_matrix() {
        let matrix = rule_delta_matrix(&RuleSet::default(), &['0', '1']);
        assert_eq!(matrix.nrows(), 2);
        assert_eq!(matrix.ncols(), 0);
    }

    #[test]
    fn count_preserving_rules_preserve_parikh_vectors() {
        // every reachable string of a swap-only system keeps the root's counts
        let rules = RuleSet::parse_specs(["01->10"]).unwrap();
        let letters = alphabet(&rules, "0011");
        let root_vector = parikh_vector("0011", &letters);

        let outcome = explore("0011", &rules, &ExploreConfig::default());
        for (_, state) in outcome.graph.states() {
            assert_eq!(parikh_vector(state.string(), &letters), root_vector);
        }
    }
}
