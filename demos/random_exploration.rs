//! Random rewriting systems explored under a state budget, reported as a
//! table and as CSV.

use filum::benchmark::csv_output::{CsvFormatter, OutcomeFormatter};
use filum::benchmark::pretty_printing::print_table;
use filum::benchmark::random_generation::{
    RandomSystemConfig, generate_random_root, generate_random_system,
};
use filum::benchmark::{BenchmarkConfig, benchmark};
use filum::rewriting::explorer::ExploreConfig;

fn main() {
    let mut rng = rand::thread_rng();
    let system_config = RandomSystemConfig::default();
    let rules = generate_random_system(&system_config, &mut rng);
    let roots: Vec<String> = (0..4)
        .map(|_| generate_random_root(&system_config, &mut rng))
        .collect();

    println!("{rules}");

    // random systems are frequently non-terminating, hence the state budget
    let config = BenchmarkConfig {
        explore_config: ExploreConfig {
            max_states: Some(10_000),
            ..Default::default()
        },
    };
    let outcomes = benchmark(&rules, &roots, &config);

    print_table(&outcomes);

    let csv_formatter = CsvFormatter;
    let csv_output = csv_formatter.format_outcomes(&outcomes);
    println!("\nCSV Output:\n{csv_output}");
}
