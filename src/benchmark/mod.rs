//! Benchmarking exploration runs over one or more root strings.

use std::time::Duration;

use tabled::Tabled;

use crate::rewriting::explorer::{ExploreConfig, ExploreStopReason, explore};
use crate::rewriting::normal_form::collect_normal_forms;
use crate::rewriting::rule::RuleSet;

use self::formatter::format_duration;

pub mod csv_output;
pub mod formatter;
pub mod pretty_printing;
pub mod random_generation;

/// Number of timed runs (after warm-up) used for averaging.
pub const RUN_COUNT: usize = 10;

fn format_stop_reason(reason: &ExploreStopReason) -> String {
    format!("{reason:?}")
}

/// One benchmarked exploration: the root, what was found, and how long a
/// run took on average.
#[derive(Clone, Debug, Tabled)]
pub struct Outcome {
    #[tabled(rename = "Root")]
    pub root: String,
    #[tabled(rename = "States")]
    pub states: usize,
    #[tabled(rename = "Normal Forms")]
    pub normal_forms: usize,
    #[tabled(rename = "Stop Reason", display_with = "format_stop_reason")]
    pub stop_reason: ExploreStopReason,
    #[tabled(rename = "Time", display_with = "format_duration")]
    pub time: Duration,
}

#[derive(Clone, Debug, Default)]
pub struct BenchmarkConfig {
    pub explore_config: ExploreConfig,
}

fn run_single(rules: &RuleSet, root: &str, config: &BenchmarkConfig) -> Outcome {
    let outcome = explore(root, rules, &config.explore_config);
    Outcome {
        root: root.to_owned(),
        states: outcome.graph.len(),
        normal_forms: collect_normal_forms(&outcome.graph, rules).len(),
        stop_reason: outcome.reason,
        time: outcome.duration,
    }
}

/// Benchmarks exploration of every root: per root, one warm-up run followed
/// by [`RUN_COUNT`] timed runs whose durations are averaged.
pub fn benchmark(rules: &RuleSet, roots: &[String], config: &BenchmarkConfig) -> Vec<Outcome> {
    roots
        .iter()
        .map(|root| {
            let _ = run_single(rules, root, config);

            let mut total = Duration::ZERO;
            let mut outcome = run_single(rules, root, config);
            total += outcome.time;
            for _ in 1..RUN_COUNT {
                outcome = run_single(rules, root, config);
                total += outcome.time;
            }
            outcome.time = total / RUN_COUNT as u32;
            outcome
        })
        .collect()
}
