//! Terminal strings of a rewriting system.

use crate::rewriting::graph::RewriteGraph;
use crate::rewriting::pattern::occurrence_count;
use crate::rewriting::rule::RuleSet;

/// `true` if no rule's find pattern occurs anywhere in `s`.
///
/// Recomputed from the string itself, so it also holds for states a stopped
/// run registered but never expanded.
pub fn is_normal_form(s: &str, rules: &RuleSet) -> bool {
    rules.iter().all(|rule| occurrence_count(s, rule.find()) == 0)
}

/// All normal forms in `graph`, in discovery order.
pub fn collect_normal_forms<'g>(graph: &'g RewriteGraph, rules: &RuleSet) -> Vec<&'g str> {
    graph
        .states()
        .map(|(_, state)| state.string())
        .filter(|string| is_normal_form(string, rules))
        .collect()
}
