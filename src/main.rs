//! Command-line front end for the rewriting explorer.
//!
//! `filum <rule>... <input-string>` prints the parsed rule set, one progress
//! line per distinct string discovered, and the enumerated normal forms.

use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;

use filum::rewriting::explorer::{ExploreConfig, ExploreStopReason, explore_with_progress};
use filum::rewriting::normal_form::collect_normal_forms;
use filum::rewriting::rule::RuleSet;

const EXAMPLES: &str = "\
Examples:
  filum \"AA->B\" \"BA->CA\" \"AC->B\" \"CB->AB\" ACABBACABCB
  filum \"0->1\" \"1->2\" \"2->3\" 000
  filum \"01->10\" \"11->00\" 10101011
  filum \"101<->010\" \"111->0\" 101010101000010
  filum \"0->1\" \"1->2\" \"2->3\" \"3->4\" \"4->5\" \"5->6\" \"6->7\" \"7->8\" \"8->9\" \"9->0\" 00";

/// CLI arguments for the rewriting explorer
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Explore every string reachable in a semi-Thue rewriting system",
    after_help = EXAMPLES
)]
struct Args {
    /// Rewrite rules, written "find->replace" or "find<->replace"
    #[arg(required = true, num_args = 1..)]
    rules: Vec<String>,

    /// The string rewriting starts from
    input: String,

    /// Stop once this many distinct strings have been discovered
    #[arg(long)]
    max_states: Option<usize>,

    /// Stop after this many milliseconds of exploration
    #[arg(long)]
    time_limit_ms: Option<u64>,
}

fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let _ = err.print();
            eprintln!("\n{EXAMPLES}");
            process::exit(2);
        }
    }
}

fn main() -> Result<()> {
    let args = parse_args();

    let rules = RuleSet::parse_specs(&args.rules)
        .context("rules must be written \"find->replace\" or \"find<->replace\"")?;

    println!("{rules}");

    let config = ExploreConfig {
        max_states: args.max_states,
        time_limit: args.time_limit_ms.map(Duration::from_millis),
    };
    let outcome = explore_with_progress(&args.input, &rules, &config, |string, count| {
        println!("str: {string}, count: {count}");
    });

    if outcome.reason != ExploreStopReason::Exhausted {
        eprintln!(
            "exploration stopped early after {} states: {:?}",
            outcome.graph.len(),
            outcome.reason
        );
    }

    for (index, normal_form) in collect_normal_forms(&outcome.graph, &rules).iter().enumerate() {
        println!("Normal form {}: {}", index + 1, normal_form);
    }

    Ok(())
}
