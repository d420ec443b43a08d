//! Memoized depth-first exploration of a rewrite closure.
//!
//! Starting from a root string, [`explore`] applies every rule at every
//! occurrence, registering each distinct result exactly once in a
//! [`RewriteGraph`] and expanding it exactly once. Expansion is depth-first:
//! rules in ascending index order, occurrences left to right, and a newly
//! discovered child is fully expanded before its parent's next occurrence is
//! tried. The traversal runs on an explicit frame stack, so deep rewrite
//! chains cannot exhaust the native call stack and resource limits can be
//! checked between steps.
//!
//! Termination is not guaranteed: a system whose closure is infinite runs
//! until a configured limit stops it.

use std::time::{Duration, Instant};

use crate::rewriting::graph::{Discovery, RewriteGraph, StateId};
use crate::rewriting::pattern::{apply_at, occurrence_count};
use crate::rewriting::rule::RuleSet;

/// Resource limits for one exploration run.
///
/// With no limits set, exploration runs until the closure is exhausted —
/// forever, for systems with an infinite closure.
#[derive(Clone, Debug, Default)]
pub struct ExploreConfig {
    /// Maximum number of distinct strings to register
    pub max_states: Option<usize>,
    /// Maximum wall-clock time to spend exploring
    pub time_limit: Option<Duration>,
}

/// Why exploration stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExploreStopReason {
    /// Every reachable string was registered and expanded
    Exhausted,
    /// Hit the maximum state count limit
    MaxStates,
    /// Hit the time limit
    Timeout,
}

/// Result of one exploration run. Carries the full registry for inspection.
#[derive(Clone, Debug)]
pub struct ExploreOutcome {
    pub graph: RewriteGraph,
    pub root: StateId,
    pub reason: ExploreStopReason,
    pub duration: Duration,
}

/// Checks whether a configured limit has been exceeded.
pub fn check_limits(
    graph: &RewriteGraph,
    start: Instant,
    cfg: &ExploreConfig,
) -> Option<ExploreStopReason> {
    if let Some(limit) = cfg.time_limit
        && start.elapsed() >= limit
    {
        return Some(ExploreStopReason::Timeout);
    }

    if let Some(limit) = cfg.max_states
        && graph.len() >= limit
    {
        return Some(ExploreStopReason::MaxStates);
    }

    None
}

/// One open expansion: a state together with the next (rule, occurrence)
/// pair to try. The string is copied out of the registry so the frame stays
/// usable while the registry grows.
struct Frame {
    state: StateId,
    string: String,
    rule: usize,
    occurrence: usize,
}

/// Explores the closure of `root` under `rules`.
pub fn explore(root: &str, rules: &RuleSet, config: &ExploreConfig) -> ExploreOutcome {
    explore_with_progress(root, rules, config, |_, _| {})
}

/// Explores the closure of `root` under `rules`, reporting each state as it
/// is first discovered.
///
/// # Arguments
///
/// * `root` - The string exploration starts from
/// * `rules` - The rule set, applied in ascending index order
/// * `config` - Resource limits checked between expansion steps
/// * `progress` - Called once per state with its string and a counter that
///   starts at 0 for the root and increases by 1 per discovery
pub fn explore_with_progress(
    root: &str,
    rules: &RuleSet,
    config: &ExploreConfig,
    mut progress: impl FnMut(&str, usize),
) -> ExploreOutcome {
    let start = Instant::now();
    let mut graph = RewriteGraph::new();
    let mut counter = 0;

    let root_id = graph.intern(root.to_owned()).id();
    let mut stack = vec![open_frame(&mut graph, rules, root_id, &mut progress, &mut counter)];

    let reason = loop {
        let Some(frame) = stack.last_mut() else {
            break ExploreStopReason::Exhausted;
        };

        if let Some(limit) = check_limits(&graph, start, config) {
            break limit;
        }

        match next_rewrite(&graph, frame) {
            None => {
                let state = graph.get(frame.state);
                assert_eq!(
                    state.children().len(),
                    state.total_occurrences(),
                    "state {:?} produced {} children for {} occurrences",
                    state.string(),
                    state.children().len(),
                    state.total_occurrences(),
                );
                stack.pop();
            }
            Some((rule, occurrence)) => {
                frame.rule = rule;
                frame.occurrence = occurrence + 1;
                let applied = &rules[rule];
                let next = apply_at(&frame.string, applied.find(), applied.replace(), occurrence);
                let parent = frame.state;
                match graph.intern(next) {
                    Discovery::Revisited(id) => graph.get_mut(parent).add_child(id),
                    Discovery::New(id) => {
                        // The child is registered before its own expansion
                        // starts, so a rule that cycles back to this string
                        // finds it in the registry and stops.
                        graph.get_mut(parent).add_child(id);
                        let child = open_frame(&mut graph, rules, id, &mut progress, &mut counter);
                        stack.push(child);
                    }
                }
            }
        }
    };

    ExploreOutcome {
        graph,
        root: root_id,
        reason,
        duration: start.elapsed(),
    }
}

/// Next pending (rule, occurrence) pair on `frame`: ascending rule index,
/// then ascending occurrence index.
fn next_rewrite(graph: &RewriteGraph, frame: &Frame) -> Option<(usize, usize)> {
    let occurrences = graph.get(frame.state).rule_occurrences();
    let mut rule = frame.rule;
    let mut occurrence = frame.occurrence;
    while rule < occurrences.len() {
        if occurrence < occurrences[rule] {
            return Some((rule, occurrence));
        }
        rule += 1;
        occurrence = 0;
    }
    None
}

/// Tallies the state's per-rule occurrence counts, reports the discovery,
/// and opens its expansion frame.
fn open_frame(
    graph: &mut RewriteGraph,
    rules: &RuleSet,
    id: StateId,
    progress: &mut impl FnMut(&str, usize),
    counter: &mut usize,
) -> Frame {
    let counts: Vec<usize> = rules
        .iter()
        .map(|rule| occurrence_count(graph.get(id).string(), rule.find()))
        .collect();
    graph.get_mut(id).set_occurrences(counts);

    let state = graph.get(id);
    progress(state.string(), *counter);
    *counter += 1;

    Frame {
        state: id,
        string: state.string().to_owned(),
        rule: 0,
        occurrence: 0,
    }
}
