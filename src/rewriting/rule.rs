use std::fmt;

use serde::{Deserialize, Serialize};

/// A single directed rewrite rule: occurrences of `find` may be replaced by
/// `replace`. Two rules are the same rule iff both fields are equal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    find: String,
    replace: String,
}

impl Rule {
    pub fn new(find: impl Into<String>, replace: impl Into<String>) -> Self {
        let find = find.into();
        debug_assert!(!find.is_empty(), "a rule's find side must not be empty");
        Self {
            find,
            replace: replace.into(),
        }
    }

    pub fn find(&self) -> &str {
        &self.find
    }

    pub fn replace(&self) -> &str {
        &self.replace
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{\"{}\"->\"{}\"}}", self.find, self.replace)
    }
}

/// A malformed rule specification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Neither `->` nor `<->` is present
    MissingArrow { spec: String },
    /// More than one `->`
    ExtraArrow { spec: String },
    /// More than one `<->`
    ExtraEquivalenceArrow { spec: String },
    /// A `<->` together with a stray `->`
    MixedArrows { spec: String },
    /// A find side that would be empty
    EmptyFind { spec: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArrow { spec } => {
                write!(f, "cannot parse {spec:?}: rules must contain an arrow \"->\" or \"<->\"")
            }
            Self::ExtraArrow { spec } => {
                write!(f, "cannot parse {spec:?}: rewrite rules must have only one \"->\"")
            }
            Self::ExtraEquivalenceArrow { spec } => {
                write!(f, "cannot parse {spec:?}: equivalence rules must have only one \"<->\"")
            }
            Self::MixedArrows { spec } => {
                write!(f, "cannot parse {spec:?}: rules can contain either \"<->\" or \"->\", not both")
            }
            Self::EmptyFind { spec } => {
                write!(f, "cannot parse {spec:?}: the find side of a rule must not be empty")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses one rule specification.
///
/// `find->replace` yields one rule. `find<->replace` yields two, left-to-right
/// first. The find side of every produced rule must be non-empty; for a
/// bidirectional spec that means both sides.
pub fn parse_spec(spec: &str) -> Result<Vec<Rule>, ParseError> {
    match spec.find("<->") {
        Some(at) => parse_equivalence(spec, at),
        None => parse_directed(spec),
    }
}

fn parse_directed(spec: &str) -> Result<Vec<Rule>, ParseError> {
    let Some(at) = spec.find("->") else {
        return Err(ParseError::MissingArrow { spec: spec.into() });
    };
    if spec[at + 1..].contains("->") {
        return Err(ParseError::ExtraArrow { spec: spec.into() });
    }
    let (find, replace) = (&spec[..at], &spec[at + 2..]);
    if find.is_empty() {
        return Err(ParseError::EmptyFind { spec: spec.into() });
    }
    Ok(vec![Rule::new(find, replace)])
}

fn parse_equivalence(spec: &str, at: usize) -> Result<Vec<Rule>, ParseError> {
    if spec[at + 1..].contains("<->") {
        return Err(ParseError::ExtraEquivalenceArrow { spec: spec.into() });
    }
    // The only "->" an equivalence spec may contain is the one embedded in
    // its "<->".
    if spec.find("->") != Some(at + 1) || spec[at + 3..].contains("->") {
        return Err(ParseError::MixedArrows { spec: spec.into() });
    }
    let (left, right) = (&spec[..at], &spec[at + 3..]);
    if left.is_empty() || right.is_empty() {
        return Err(ParseError::EmptyFind { spec: spec.into() });
    }
    Ok(vec![Rule::new(left, right), Rule::new(right, left)])
}

/// An ordered set of unique rules. A rule's index is its insertion order;
/// appending a rule content-equal to an existing one is a no-op.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Builds a rule set from raw specifications, in spec order then pair
    /// order within a bidirectional spec. Fails on the first malformed spec.
    pub fn parse_specs<S: AsRef<str>>(
        specs: impl IntoIterator<Item = S>,
    ) -> Result<Self, ParseError> {
        let mut set = Self::default();
        for spec in specs {
            for rule in parse_spec(spec.as_ref())? {
                set.push(rule);
            }
        }
        Ok(set)
    }

    pub fn push(&mut self, rule: Rule) {
        if !self.rules.contains(&rule) {
            self.rules.push(rule);
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

impl std::ops::Index<usize> for RuleSet {
    type Output = Rule;

    fn index(&self, index: usize) -> &Rule {
        &self.rules[index]
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----------------------------------")?;
        for (index, rule) in self.rules.iter().enumerate() {
            writeln!(f, "rule[{index}] = {rule}")?;
        }
        write!(f, "----------------------------------")
    }
}
