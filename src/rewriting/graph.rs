//! Content-interned registry of explored strings.
//!
//! Every distinct string discovered during exploration becomes a [`State`]
//! stored once in a [`RewriteGraph`]. Child links are plain [`StateId`]s into
//! the same registry, never owning references, so a state reached from many
//! parents — or a rule that cycles back toward an ancestor — needs no
//! reference counting or cycle breaking. Arena order is discovery order.

use std::collections::HashMap;

/// Dense index of a [`State`] inside its [`RewriteGraph`].
pub type StateId = usize;

/// The registry's record for one distinct string: its per-rule occurrence
/// statistics and the states produced by rewriting it.
#[derive(Clone, Debug)]
pub struct State {
    string: String,
    rule_occurrences: Vec<usize>,
    total_occurrences: usize,
    children: Vec<StateId>,
}

impl State {
    fn new(string: String) -> Self {
        Self {
            string,
            rule_occurrences: Vec::new(),
            total_occurrences: 0,
            children: Vec::new(),
        }
    }

    pub fn string(&self) -> &str {
        &self.string
    }

    /// Occurrence count per rule, index-aligned with the rule set the state
    /// was expanded under. Empty until the state is expanded.
    pub fn rule_occurrences(&self) -> &[usize] {
        &self.rule_occurrences
    }

    pub fn total_occurrences(&self) -> usize {
        self.total_occurrences
    }

    /// One child per expanded (rule, occurrence) pair, in expansion order.
    pub fn children(&self) -> &[StateId] {
        &self.children
    }

    pub(crate) fn set_occurrences(&mut self, counts: Vec<usize>) {
        self.total_occurrences = counts.iter().sum();
        self.rule_occurrences = counts;
    }

    pub(crate) fn add_child(&mut self, child: StateId) {
        self.children.push(child);
    }
}

/// Whether [`RewriteGraph::intern`] registered a new state or found the
/// string already present.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Discovery {
    New(StateId),
    Revisited(StateId),
}

impl Discovery {
    pub fn id(self) -> StateId {
        match self {
            Self::New(id) | Self::Revisited(id) => id,
        }
    }

    pub fn is_new(self) -> bool {
        matches!(self, Self::New(_))
    }
}

/// Arena of [`State`]s keyed by string content.
#[derive(Clone, Debug, Default)]
pub struct RewriteGraph {
    states: Vec<State>,
    index: HashMap<String, StateId>,
}

impl RewriteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state for `string`, registering it first if unseen.
    pub fn intern(&mut self, string: String) -> Discovery {
        if let Some(&id) = self.index.get(&string) {
            return Discovery::Revisited(id);
        }
        let id = self.states.len();
        self.index.insert(string.clone(), id);
        self.states.push(State::new(string));
        Discovery::New(id)
    }

    pub fn lookup(&self, string: &str) -> Option<StateId> {
        self.index.get(string).copied()
    }

    pub fn get(&self, id: StateId) -> &State {
        &self.states[id]
    }

    pub(crate) fn get_mut(&mut self, id: StateId) -> &mut State {
        &mut self.states[id]
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// All states, in discovery order.
    pub fn states(&self) -> impl Iterator<Item = (StateId, &State)> {
        self.states.iter().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_registers_each_string_once() {
        let mut graph = RewriteGraph::new();
        let a = graph.intern("aa".to_owned());
        assert_eq!(a, Discovery::New(0));
        let b = graph.intern("ab".to_owned());
        assert_eq!(b, Discovery::New(1));
        assert_eq!(graph.intern("aa".to_owned()), Discovery::Revisited(0));
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn lookup_finds_interned_strings() {
        let mut graph = RewriteGraph::new();
        let id = graph.intern("xyz".to_owned()).id();
        assert_eq!(graph.lookup("xyz"), Some(id));
        assert_eq!(graph.lookup("zyx"), None);
        assert_eq!(graph.get(id).string(), "xyz");
    }

    #[test]
    fn states_iterate_in_discovery_order() {
        let mut graph = RewriteGraph::new();
        for s in ["c", "a", "b"] {
            graph.intern(s.to_owned());
        }
        let order: Vec<&str> = graph.states().map(|(_, state)| state.string()).collect();
        assert_eq!(order, ["c", "a", "b"]);
    }

    #[test]
    fn occurrences_sum_into_the_total() {
        let mut graph = RewriteGraph::new();
        let id = graph.intern("0101".to_owned()).id();
        graph.get_mut(id).set_occurrences(vec![2, 0, 1]);
        assert_eq!(graph.get(id).rule_occurrences(), &[2, 0, 1]);
        assert_eq!(graph.get(id).total_occurrences(), 3);
    }

    #[test]
    fn a_state_may_be_the_child_of_many_parents() {
        let mut graph = RewriteGraph::new();
        let parent_a = graph.intern("10".to_owned()).id();
        let parent_b = graph.intern("01".to_owned()).id();
        let shared = graph.intern("11".to_owned()).id();
        graph.get_mut(parent_a).add_child(shared);
        graph.get_mut(parent_b).add_child(shared);
        assert_eq!(graph.get(parent_a).children(), &[shared]);
        assert_eq!(graph.get(parent_b).children(), &[shared]);
    }
}
