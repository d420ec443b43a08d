//! A rule set bundled as a named system, with JSON persistence.

use std::error::Error;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::rewriting::explorer::{ExploreConfig, ExploreOutcome, explore};
use crate::rewriting::normal_form::collect_normal_forms;
use crate::rewriting::rule::RuleSet;

// On-disk shape: rules kept in their textual spec form.
#[derive(Serialize, Deserialize)]
struct SystemFile {
    rules: Vec<String>,
}

/// A string rewriting system: a rule set plus convenience entry points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringRewritingSystem {
    rules: RuleSet,
}

impl StringRewritingSystem {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Loads a system from a JSON file of the form
    /// `{"rules": ["find->replace", ...]}`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let contents = fs::read_to_string(path)?;
        let file: SystemFile = serde_json::from_str(&contents)?;
        let rules = RuleSet::parse_specs(&file.rules)?;
        Ok(Self::new(rules))
    }

    /// Saves the system in the format [`Self::from_file`] reads. Each rule is
    /// written in its directed form, so bidirectional specs come back as two
    /// entries.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn Error>> {
        let file = SystemFile {
            rules: self
                .rules
                .iter()
                .map(|rule| format!("{}->{}", rule.find(), rule.replace()))
                .collect(),
        };
        fs::write(path, serde_json::to_string_pretty(&file)?)?;
        Ok(())
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn explore(&self, root: &str, config: &ExploreConfig) -> ExploreOutcome {
        explore(root, &self.rules, config)
    }

    pub fn normal_forms<'g>(&self, outcome: &'g ExploreOutcome) -> Vec<&'g str> {
        collect_normal_forms(&outcome.graph, &self.rules)
    }
}
