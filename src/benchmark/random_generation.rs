use rand::Rng;

use crate::rewriting::rule::{Rule, RuleSet};

/// Shape of randomly generated rewriting systems.
#[derive(Clone, Debug)]
pub struct RandomSystemConfig {
    /// Letters words are drawn from; must not be empty
    pub alphabet: Vec<char>,
    /// Rules to attempt; duplicates collapse, so the set may end up smaller
    pub rule_count: usize,
    /// Longest find or replace side
    pub max_side_len: usize,
    /// Length of generated root strings
    pub root_len: usize,
}

impl Default for RandomSystemConfig {
    fn default() -> Self {
        Self {
            alphabet: vec!['0', '1'],
            rule_count: 3,
            max_side_len: 2,
            root_len: 6,
        }
    }
}

fn random_word(config: &RandomSystemConfig, len: usize, rng: &mut impl Rng) -> String {
    debug_assert!(!config.alphabet.is_empty());
    (0..len)
        .map(|_| config.alphabet[rng.gen_range(0..config.alphabet.len())])
        .collect()
}

/// Generates a random rule set. Find sides are always at least one letter;
/// replace sides may be empty (erasing rules).
pub fn generate_random_system(config: &RandomSystemConfig, rng: &mut impl Rng) -> RuleSet {
    let mut rules = RuleSet::default();
    for _ in 0..config.rule_count {
        let find_len = rng.gen_range(1..=config.max_side_len);
        let replace_len = rng.gen_range(0..=config.max_side_len);
        rules.push(Rule::new(
            random_word(config, find_len, rng),
            random_word(config, replace_len, rng),
        ));
    }
    rules
}

/// Generates a random root string of the configured length.
pub fn generate_random_root(config: &RandomSystemConfig, rng: &mut impl Rng) -> String {
    random_word(config, config.root_len, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generated_finds_are_never_empty() {
        let config = RandomSystemConfig::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let rules = generate_random_system(&config, &mut rng);
            for rule in &rules {
                assert!(!rule.find().is_empty());
                assert!(rule.find().len() <= config.max_side_len);
            }
        }
    }

    #[test]
    fn generated_words_stay_in_the_alphabet() {
        let config = RandomSystemConfig {
            alphabet: vec!['a', 'b', 'c'],
            root_len: 32,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(11);

        let root = generate_random_root(&config, &mut rng);
        assert_eq!(root.len(), 32);
        assert!(root.chars().all(|c| config.alphabet.contains(&c)));
    }
}
