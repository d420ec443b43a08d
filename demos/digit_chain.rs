//! Worked example: the digit chain 0 -> 1 -> 2 -> 3, explored from "000".
//!
//! Prints the rule set, every discovered string, the normal forms, and the
//! system's Parikh delta matrix.

use filum::rewriting::explorer::{ExploreConfig, explore_with_progress};
use filum::rewriting::normal_form::collect_normal_forms;
use filum::rewriting::parikh::{alphabet, parikh_vector, rule_delta_matrix};
use filum::rules;

fn main() {
    let rules = rules!["0" => "1", "1" => "2", "2" => "3"];
    let root = "000";

    println!("{rules}");

    let outcome = explore_with_progress(root, &rules, &ExploreConfig::default(), |string, count| {
        println!("str: {string}, count: {count}");
    });

    for (index, normal_form) in collect_normal_forms(&outcome.graph, &rules).iter().enumerate() {
        println!("Normal form {}: {}", index + 1, normal_form);
    }

    let letters = alphabet(&rules, root);
    println!("\nAlphabet: {letters:?}");
    println!("Root Parikh vector: {}", parikh_vector(root, &letters));
    println!("Rule delta matrix: {}", rule_delta_matrix(&rules, &letters));
}
