use crate::benchmark::Outcome;
use crate::benchmark::formatter::format_duration_csv;

/// Renders benchmark outcomes for some output medium.
pub trait OutcomeFormatter {
    fn format_outcomes(&self, outcomes: &[Outcome]) -> String;
}

pub struct CsvFormatter;

impl OutcomeFormatter for CsvFormatter {
    fn format_outcomes(&self, outcomes: &[Outcome]) -> String {
        // roots are arbitrary strings, so quoting is left to the csv writer
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(["Root", "States", "Normal Forms", "Stop Reason", "Time (ns)"])
            .expect("writing csv header to memory cannot fail");
        for outcome in outcomes {
            writer
                .write_record([
                    outcome.root.clone(),
                    outcome.states.to_string(),
                    outcome.normal_forms.to_string(),
                    format!("{:?}", outcome.stop_reason),
                    format_duration_csv(&outcome.time),
                ])
                .expect("writing csv row to memory cannot fail");
        }
        let bytes = writer
            .into_inner()
            .expect("flushing csv to memory cannot fail");
        String::from_utf8(bytes).expect("csv output is valid utf-8")
    }
}
